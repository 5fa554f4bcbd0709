//! Value objects - Immutable objects defined by their attributes

mod die;
mod face_ladder;

pub use die::{Die, InvalidFaceCount, StepError};
pub use face_ladder::{FaceLadder, LadderError, STANDARD_FACES};
