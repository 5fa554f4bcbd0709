//! External dependency implementations (ports + adapters).

pub mod ports;
pub mod random_adapter;

pub use ports::{FixedRolls, RandomPort};
pub use random_adapter::ThreadRngAdapter;
