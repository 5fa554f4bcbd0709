//! Die roll and step orchestration.
//!
//! Holds the process-wide face ladder and the RNG port, and applies roll and
//! step operations to dice. What a roll means for the surrounding game is the
//! caller's concern; this service only produces and records the numbers.

use std::sync::Arc;

use tracing::debug;

use stepdice_domain::{Die, DomainError, FaceLadder};

use crate::infrastructure::ports::RandomPort;

/// Rolls and steps dice against a fixed ladder.
pub struct RollDie {
    random: Arc<dyn RandomPort>,
    ladder: FaceLadder,
}

impl RollDie {
    pub fn new(random: Arc<dyn RandomPort>, ladder: FaceLadder) -> Self {
        Self { random, ladder }
    }

    /// The ladder this service validates dice against.
    pub fn ladder(&self) -> &FaceLadder {
        &self.ladder
    }

    /// Create a die, on the lowest rung when no face count is given.
    pub fn create(&self, faces: Option<u8>) -> Result<Die, DomainError> {
        let die = match faces {
            Some(faces) => Die::with_faces(faces, &self.ladder)?,
            None => Die::new(&self.ladder),
        };
        Ok(die)
    }

    /// Roll a die through the RNG port and store the result on it.
    pub fn roll(&self, die: &mut Die) -> u8 {
        let result = die.roll(|faces| self.random.random_range(1, i32::from(faces)) as u8);
        debug!(die = %die, result, hitch = die.is_hitch(), "rolled die");
        result
    }

    /// Step a die up one rung.
    pub fn step_up(&self, die: &mut Die) -> Result<(), DomainError> {
        die.step_up(&self.ladder)?;
        debug!(die = %die, "stepped die up");
        Ok(())
    }

    /// Step a die down one rung.
    pub fn step_down(&self, die: &mut Die) -> Result<(), DomainError> {
        die.step_down(&self.ladder)?;
        debug!(die = %die, "stepped die down");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use mockall::predicate::eq;

    use crate::infrastructure::ports::{FixedRolls, MockRandomPort};

    fn standard_service(random: Arc<dyn RandomPort>) -> RollDie {
        RollDie::new(random, FaceLadder::standard())
    }

    #[test]
    fn test_create_defaults_to_lowest_rung() {
        let service = standard_service(Arc::new(FixedRolls::always(1)));
        let die = service.create(None).unwrap();
        assert_eq!(die.faces(), 4);
        assert_eq!(die.result(), 0);
    }

    #[test]
    fn test_create_rejects_faces_off_the_ladder() {
        let service = standard_service(Arc::new(FixedRolls::always(1)));
        let err = service.create(Some(7)).unwrap_err();
        assert!(matches!(err, DomainError::Validation(_)));
    }

    #[test]
    fn test_roll_requests_the_full_face_range() {
        let mut random = MockRandomPort::new();
        random
            .expect_random_range()
            .with(eq(1), eq(6))
            .times(1)
            .return_const(3);
        let service = RollDie::new(Arc::new(random), FaceLadder::standard());
        let mut die = service.create(Some(6)).unwrap();
        assert_eq!(service.roll(&mut die), 3);
        assert_eq!(die.result(), 3);
    }

    #[test]
    fn test_roll_of_one_is_a_hitch() {
        let service = standard_service(Arc::new(FixedRolls::always(1)));
        let mut die = service.create(Some(8)).unwrap();
        service.roll(&mut die);
        assert!(die.is_hitch());
    }

    #[test]
    fn test_rolls_follow_the_port_sequence() {
        let service = standard_service(Arc::new(FixedRolls::new(vec![2, 4])));
        let mut die = service.create(Some(6)).unwrap();
        assert_eq!(service.roll(&mut die), 2);
        assert_eq!(service.roll(&mut die), 4);
        assert_eq!(die.result(), 4);
    }

    #[test]
    fn test_step_up_and_down_use_the_service_ladder() {
        let service = standard_service(Arc::new(FixedRolls::always(1)));
        let mut die = service.create(Some(8)).unwrap();
        service.step_down(&mut die).unwrap();
        assert_eq!(die.faces(), 6);
        service.step_up(&mut die).unwrap();
        assert_eq!(die.faces(), 8);
    }

    #[test]
    fn test_step_errors_surface_as_state_transition_failures() {
        let service = standard_service(Arc::new(FixedRolls::always(1)));

        let mut top = service.create(Some(20)).unwrap();
        let err = service.step_up(&mut top).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert_eq!(top.faces(), 20);

        let mut bottom = service.create(None).unwrap();
        let err = service.step_down(&mut bottom).unwrap_err();
        assert!(matches!(err, DomainError::InvalidStateTransition(_)));
        assert_eq!(bottom.faces(), 4);
    }

    #[test]
    fn test_substitute_ladder_changes_the_default_die() {
        let ladder = FaceLadder::new(vec![6, 10]).unwrap();
        let service = RollDie::new(Arc::new(FixedRolls::always(1)), ladder);
        let die = service.create(None).unwrap();
        assert_eq!(die.faces(), 6);
        assert!(matches!(
            service.create(Some(4)),
            Err(DomainError::Validation(_))
        ));
    }
}
