//! State transition history tracking.
//!
//! Every applied transition of a session is recorded here for diagnostics.
//! History is immutable: recording returns a new history.

use super::state::State;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Record of a single state transition.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateTransition<S: State> {
    /// The state being transitioned from
    pub from: S,
    /// The state being transitioned to
    pub to: S,
    /// Name of the operation that caused the transition
    pub trigger: String,
    /// When the transition was applied
    pub timestamp: DateTime<Utc>,
}

impl<S: State> StateTransition<S> {
    /// Record a transition happening now.
    pub fn now(from: S, to: S, trigger: impl Into<String>) -> Self {
        Self {
            from,
            to,
            trigger: trigger.into(),
            timestamp: Utc::now(),
        }
    }
}

/// Ordered history of state transitions.
///
/// A bounded history keeps only the most recent `limit` transitions.
///
/// # Example
///
/// ```rust
/// use guesswork::core::{GameState, StateHistory, StateTransition};
///
/// let history = StateHistory::new()
///     .record(StateTransition::now(GameState::Question, GameState::Guessing, "submit_answer"))
///     .record(StateTransition::now(GameState::Guessing, GameState::Result, "confirm_guess_correct"));
///
/// let path = history.get_path();
/// assert_eq!(path, vec![&GameState::Question, &GameState::Guessing, &GameState::Result]);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct StateHistory<S: State> {
    transitions: Vec<StateTransition<S>>,
    #[serde(default)]
    limit: Option<usize>,
}

impl<S: State> Default for StateHistory<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: State> StateHistory<S> {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
            limit: None,
        }
    }

    /// Create an empty history that retains at most `limit` transitions.
    pub fn bounded(limit: usize) -> Self {
        Self {
            transitions: Vec::new(),
            limit: Some(limit.max(1)),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// The existing history is left untouched. Past the limit, the oldest
    /// transitions are dropped.
    pub fn record(&self, transition: StateTransition<S>) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        if let Some(limit) = self.limit {
            let excess = transitions.len().saturating_sub(limit);
            transitions.drain(..excess);
        }
        Self {
            transitions,
            limit: self.limit,
        }
    }

    /// Get the path of states traversed.
    ///
    /// Returns the initial state followed by the `to` state of each transition.
    pub fn get_path(&self) -> Vec<&S> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(&first.from);
        }
        for transition in &self.transitions {
            path.push(&transition.to);
        }
        path
    }

    /// Number of rounds finished within the retained transitions, i.e.
    /// entries into a final state.
    pub fn rounds_completed(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.to.is_final() && !t.from.is_final())
            .count()
    }

    /// The most recent transition, if any.
    pub fn last(&self) -> Option<&StateTransition<S>> {
        self.transitions.last()
    }

    /// Get all transitions in order.
    pub fn transitions(&self) -> &[StateTransition<S>] {
        &self.transitions
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;

    fn transition(from: GameState, to: GameState) -> StateTransition<GameState> {
        StateTransition::now(from, to, "test")
    }

    #[test]
    fn new_history_is_empty() {
        let history: StateHistory<GameState> = StateHistory::new();
        assert!(history.transitions().is_empty());
        assert!(history.get_path().is_empty());
        assert!(history.last().is_none());
    }

    #[test]
    fn record_is_immutable() {
        let history = StateHistory::new();
        let new_history = history.record(transition(GameState::Question, GameState::Guessing));

        assert_eq!(history.transitions().len(), 0);
        assert_eq!(new_history.transitions().len(), 1);
    }

    #[test]
    fn get_path_returns_state_sequence() {
        let history = StateHistory::new()
            .record(transition(GameState::Question, GameState::Guessing))
            .record(transition(GameState::Guessing, GameState::Learning))
            .record(transition(GameState::Learning, GameState::Result));

        let path = history.get_path();
        assert_eq!(
            path,
            vec![
                &GameState::Question,
                &GameState::Guessing,
                &GameState::Learning,
                &GameState::Result
            ]
        );
    }

    #[test]
    fn rounds_completed_counts_entries_into_result() {
        let history = StateHistory::new()
            .record(transition(GameState::Question, GameState::Guessing))
            .record(transition(GameState::Guessing, GameState::Result))
            .record(transition(GameState::Result, GameState::Question))
            .record(transition(GameState::Question, GameState::Guessing))
            .record(transition(GameState::Guessing, GameState::Learning))
            .record(transition(GameState::Learning, GameState::Result));

        assert_eq!(history.rounds_completed(), 2);
    }

    #[test]
    fn bounded_history_keeps_most_recent_transitions() {
        let mut history = StateHistory::bounded(2);
        for _ in 0..5 {
            history = history.record(transition(GameState::Question, GameState::Guessing));
        }
        let history = history.record(transition(GameState::Guessing, GameState::Result));

        assert_eq!(history.transitions().len(), 2);
        assert_eq!(history.last().map(|t| t.to), Some(GameState::Result));
        assert_eq!(
            history.get_path(),
            vec![&GameState::Question, &GameState::Guessing, &GameState::Result]
        );
    }

    #[test]
    fn history_serializes_correctly() {
        let history = StateHistory::new().record(transition(GameState::Learning, GameState::Result));

        let json = serde_json::to_string(&history).unwrap();
        let deserialized: StateHistory<GameState> = serde_json::from_str(&json).unwrap();

        assert_eq!(deserialized.transitions().len(), 1);
        assert_eq!(deserialized.transitions()[0].to, GameState::Result);
        assert_eq!(deserialized.transitions()[0].trigger, "test");
    }
}
