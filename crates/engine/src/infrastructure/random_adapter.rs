//! Production randomness for die rolls.
//!
//! Bridges `RandomPort` to the `rand` crate; the domain crate never sees
//! either.

use rand::Rng;

use crate::infrastructure::ports::RandomPort;

/// `RandomPort` backed by the thread-local generator from `rand`.
///
/// Stateless; each draw goes to `rand::thread_rng()`, so a single adapter can
/// be shared across every roll service in the process.
#[derive(Debug, Clone, Default)]
pub struct ThreadRngAdapter;

impl ThreadRngAdapter {
    pub fn new() -> Self {
        Self
    }
}

impl RandomPort for ThreadRngAdapter {
    fn random_range(&self, min: i32, max: i32) -> i32 {
        rand::thread_rng().gen_range(min..=max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draws_stay_inside_the_die_range() {
        let rng = ThreadRngAdapter::new();
        for _ in 0..200 {
            let roll = rng.random_range(1, 20);
            assert!((1..=20).contains(&roll), "rolled {} on a d20", roll);
        }
    }

    #[test]
    fn test_every_face_of_a_small_die_comes_up() {
        let rng = ThreadRngAdapter::new();
        let mut seen = [false; 4];
        for _ in 0..200 {
            let roll = rng.random_range(1, 4);
            seen[(roll - 1) as usize] = true;
        }
        assert_eq!(seen, [true; 4]);
    }
}
