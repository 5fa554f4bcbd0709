pub mod error;
pub mod value_objects;

pub use error::DomainError;

// Re-export value objects (explicit list in value_objects/mod.rs)
pub use value_objects::{
    Die, FaceLadder, InvalidFaceCount, LadderError, StepError, STANDARD_FACES,
};
