//! StepDice Engine library.
//!
//! This crate contains the executable-side pieces of the stepped-dice mechanic:
//!
//! - `infrastructure/` - RNG port and adapters
//! - `use_cases/` - Roll and step orchestration over domain dice

pub mod infrastructure;
pub mod use_cases;

pub use use_cases::RollDie;
