//! Use cases orchestrating domain dice.

mod roll_die;

pub use roll_die::RollDie;
