//! Stepped die value object.
//!
//! A single die whose face count moves along a ladder of allowed values
//! (d4 up to d20 on the standard ladder). Rolling stores the result on the
//! die; a result of 1 is a hitch. Also supports manual result entry for
//! physical dice rolls.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use super::FaceLadder;

/// Error when asking for a face count that is not on the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{0} is not an allowed face count")]
pub struct InvalidFaceCount(pub u8);

/// Error when a step would move off the end of the ladder
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepError {
    /// The die is already the largest on the ladder
    #[error("cannot step up: d{0} is already the largest die")]
    CannotStepUp(u8),
    /// The die is already the smallest on the ladder
    #[error("cannot step down: d{0} is already the smallest die")]
    CannotStepDown(u8),
}

/// A single stepped die.
///
/// `faces` is always a rung of the ladder it was created against; `result`
/// holds the most recent roll, with 0 meaning the die has never been rolled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Die {
    faces: u8,
    result: u8,
}

impl Die {
    /// Create a die on the lowest rung of the ladder.
    pub fn new(ladder: &FaceLadder) -> Self {
        Self {
            faces: ladder.lowest(),
            result: 0,
        }
    }

    /// Create a die with a specific face count, validated against the ladder.
    pub fn with_faces(faces: u8, ladder: &FaceLadder) -> Result<Self, InvalidFaceCount> {
        if !ladder.contains(faces) {
            return Err(InvalidFaceCount(faces));
        }
        Ok(Self { faces, result: 0 })
    }

    /// Number of faces; the roll range is `[1, faces]`.
    pub fn faces(&self) -> u8 {
        self.faces
    }

    /// The most recent roll, or 0 if the die has never been rolled.
    pub fn result(&self) -> u8 {
        self.result
    }

    /// True once the die has been rolled.
    pub fn has_rolled(&self) -> bool {
        self.result != 0
    }

    /// A roll of exactly 1 is a hitch.
    pub fn is_hitch(&self) -> bool {
        self.result == 1
    }

    /// Roll the die using the supplied random source.
    ///
    /// The source receives the face count and must return a value in
    /// `[1, faces]`. The value is stored on the die and returned.
    pub fn roll<R>(&mut self, rng: R) -> u8
    where
        R: FnOnce(u8) -> u8,
    {
        self.result = rng(self.faces);
        self.result
    }

    /// Record a result produced away from the engine (physical dice at the table).
    pub fn set_result(&mut self, result: u8) {
        self.result = result;
    }

    /// Replace `faces` with the next larger rung. The stored result is kept.
    pub fn step_up(&mut self, ladder: &FaceLadder) -> Result<(), StepError> {
        match ladder.next_up(self.faces) {
            Some(next) => {
                self.faces = next;
                Ok(())
            }
            None => Err(StepError::CannotStepUp(self.faces)),
        }
    }

    /// Replace `faces` with the next smaller rung. The stored result is kept.
    pub fn step_down(&mut self, ladder: &FaceLadder) -> Result<(), StepError> {
        match ladder.next_down(self.faces) {
            Some(next) => {
                self.faces = next;
                Ok(())
            }
            None => Err(StepError::CannotStepDown(self.faces)),
        }
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "d{}", self.faces)
    }
}
