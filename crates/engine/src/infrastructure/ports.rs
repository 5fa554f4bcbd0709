//! Randomness seam for the roll services.
//!
//! `RollDie` draws roll values through this port instead of calling `rand`
//! directly, so tests can script exact die results and the domain crate stays
//! free of RNG dependencies.

use std::sync::atomic::{AtomicUsize, Ordering};

/// Source of roll values for engine-side services.
///
/// Production code uses `ThreadRngAdapter`. Tests either script results with
/// `FixedRolls` or assert on the arguments with the mockall-generated
/// `MockRandomPort`.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
pub trait RandomPort: Send + Sync {
    /// Draw a value in `[min, max]`, both ends inclusive.
    fn random_range(&self, min: i32, max: i32) -> i32;
}

/// Test double that deals out a scripted sequence of roll values.
///
/// Draws consume the script in order; once it runs out, the final value keeps
/// coming up, so a one-element script acts as a constant source. Scripted
/// values outside the requested range are pulled back to the nearest bound.
#[derive(Debug)]
pub struct FixedRolls {
    rolls: Vec<i32>,
    cursor: AtomicUsize,
}

impl FixedRolls {
    /// Script a sequence of roll values.
    pub fn new(rolls: Vec<i32>) -> Self {
        Self {
            rolls,
            cursor: AtomicUsize::new(0),
        }
    }

    /// Script a single roll value that comes up on every draw.
    pub fn always(roll: i32) -> Self {
        Self::new(vec![roll])
    }
}

impl RandomPort for FixedRolls {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        let dealt = self.cursor.fetch_add(1, Ordering::SeqCst);
        let last = self.rolls.len().saturating_sub(1);
        self.rolls
            .get(dealt.min(last))
            .copied()
            .unwrap_or(min)
            .clamp(min, max)
    }
}
