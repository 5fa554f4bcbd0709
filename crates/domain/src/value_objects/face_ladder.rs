//! Allowed face counts for stepped dice.
//!
//! The ladder is process-wide configuration, not per-die state: operations that
//! need it take it by reference, and tests substitute their own ladder without
//! touching any global.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The canonical ladder: d4 through d12, then d20.
pub const STANDARD_FACES: [u8; 6] = [4, 6, 8, 10, 12, 20];

/// Error when constructing or parsing a ladder
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LadderError {
    /// The ladder has no rungs
    #[error("Ladder must have at least one rung")]
    Empty,
    /// A die needs at least two faces to roll
    #[error("Face count {0} is below the minimum of 2")]
    FaceTooSmall(u8),
    /// Rungs must be strictly ascending
    #[error("Ladder rungs must be strictly ascending")]
    NotAscending,
    /// A rung in a parsed ladder was not a number
    #[error("Invalid face count: '{0}'")]
    InvalidFace(String),
}

/// Ordered ladder of allowed face counts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceLadder {
    faces: Vec<u8>,
}

impl FaceLadder {
    /// Create a ladder from strictly ascending face counts, each at least 2.
    pub fn new(faces: Vec<u8>) -> Result<Self, LadderError> {
        if faces.is_empty() {
            return Err(LadderError::Empty);
        }
        if let Some(&small) = faces.iter().find(|&&f| f < 2) {
            return Err(LadderError::FaceTooSmall(small));
        }
        if !faces.windows(2).all(|pair| pair[0] < pair[1]) {
            return Err(LadderError::NotAscending);
        }
        Ok(Self { faces })
    }

    /// The canonical d4-to-d20 ladder.
    pub fn standard() -> Self {
        Self {
            faces: STANDARD_FACES.to_vec(),
        }
    }

    /// Whether `faces` is a rung on this ladder.
    pub fn contains(&self, faces: u8) -> bool {
        self.faces.contains(&faces)
    }

    /// The smallest die on the ladder.
    pub fn lowest(&self) -> u8 {
        self.faces[0]
    }

    /// The largest die on the ladder.
    pub fn highest(&self) -> u8 {
        self.faces[self.faces.len() - 1]
    }

    /// The rung above `faces`, if there is one.
    pub fn next_up(&self, faces: u8) -> Option<u8> {
        let idx = self.faces.iter().position(|&f| f == faces)?;
        self.faces.get(idx + 1).copied()
    }

    /// The rung below `faces`, if there is one.
    pub fn next_down(&self, faces: u8) -> Option<u8> {
        let idx = self.faces.iter().position(|&f| f == faces)?;
        idx.checked_sub(1).map(|below| self.faces[below])
    }

    /// All rungs, ascending.
    pub fn as_slice(&self) -> &[u8] {
        &self.faces
    }
}

impl Default for FaceLadder {
    fn default() -> Self {
        Self::standard()
    }
}

impl fmt::Display for FaceLadder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rungs: Vec<String> = self.faces.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", rungs.join(","))
    }
}

impl FromStr for FaceLadder {
    type Err = LadderError;

    /// Parse a comma-separated ladder like "4,6,8,10,12,20".
    ///
    /// Empty segments are skipped, so a trailing comma is tolerated.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut faces = Vec::new();
        for part in s.split(',') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let value: u8 = part
                .parse()
                .map_err(|_| LadderError::InvalidFace(part.to_string()))?;
            faces.push(value);
        }
        Self::new(faces)
    }
}
