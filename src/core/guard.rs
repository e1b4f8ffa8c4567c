//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions that decide whether an operation may
//! run from the current state. Every client operation carries one as its
//! precondition.

use super::state::State;

/// Pure predicate that determines if a transition can execute.
///
/// # Example
///
/// ```rust
/// use guesswork::core::{GameState, Guard};
///
/// let only_while_guessing = Guard::in_state(GameState::Guessing);
///
/// assert!(only_while_guessing.check(&GameState::Guessing));
/// assert!(!only_while_guessing.check(&GameState::Question));
/// ```
pub struct Guard<S: State> {
    predicate: Box<dyn Fn(&S) -> bool + Send + Sync>,
}

impl<S: State + 'static> Guard<S> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and free of side effects.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Guard that passes only in the given state.
    pub fn in_state(required: S) -> Self {
        Self::new(move |state| *state == required)
    }

    /// Guard that passes in every state.
    pub fn always() -> Self {
        Self::new(|_| true)
    }

    /// Check if the guard allows the transition from this state.
    pub fn check(&self, state: &S) -> bool {
        (self.predicate)(state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    #[test]
    fn in_state_allows_only_that_state() {
        let guard = Guard::in_state(GameState::Learning);

        for state in GameState::ALL {
            assert_eq!(guard.check(&state), state == GameState::Learning);
        }
    }

    #[test]
    fn always_passes_everywhere() {
        let guard: Guard<GameState> = Guard::always();

        assert!(GameState::ALL.iter().all(|s| guard.check(s)));
    }

    #[test]
    fn guard_can_use_complex_predicates() {
        let guard = Guard::new(|s: &GameState| !s.is_final());

        assert!(guard.check(&GameState::Question));
        assert!(guard.check(&GameState::Learning));
        assert!(!guard.check(&GameState::Result));
    }

    #[test]
    fn guard_is_deterministic() {
        let guard = Guard::in_state(GameState::Question);
        let state = GameState::Question;

        assert_eq!(guard.check(&state), guard.check(&state));
    }
}
