//! Interaction states of the guessing game.
//!
//! All states implement the [`State`] trait, which provides pure methods for
//! inspecting a state without side effects. [`GameState`] is the only
//! implementor shipped by this crate, but history and guards are written
//! against the trait.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug};

/// Trait for state machine states.
///
/// # Required Traits
///
/// - `Clone`: states are copied into transition records
/// - `PartialEq`: guards compare states
/// - `Debug`: states show up in diagnostics
/// - `Serialize` + `Deserialize`: history can be dumped for inspection
pub trait State:
    Clone + PartialEq + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Get the state's name for display/logging.
    fn name(&self) -> &str;

    /// Check if this is a final state.
    ///
    /// Final states are left only through an explicit reset.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// The four interaction states of a game session.
///
/// Exactly one is active at a time, and each maps to exactly one visible
/// panel (see [`crate::core::Panel::for_state`]).
///
/// # Example
///
/// ```rust
/// use guesswork::core::{GameState, State};
///
/// let state = GameState::default();
/// assert_eq!(state, GameState::Question);
/// assert_eq!(state.name(), "Question");
/// assert!(GameState::Result.is_final());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
pub enum GameState {
    /// The guesser is asking a yes/no question.
    #[default]
    Question,
    /// The guesser has committed to a guess and waits for confirmation.
    Guessing,
    /// The guess was wrong; the user is teaching a new fact.
    Learning,
    /// The round is over, either guessed or learned.
    Result,
}

impl GameState {
    /// Every state, in panel order.
    pub const ALL: [GameState; 4] = [
        GameState::Question,
        GameState::Guessing,
        GameState::Learning,
        GameState::Result,
    ];
}

impl State for GameState {
    fn name(&self) -> &str {
        match self {
            Self::Question => "Question",
            Self::Guessing => "Guessing",
            Self::Learning => "Learning",
            Self::Result => "Result",
        }
    }

    fn is_final(&self) -> bool {
        matches!(self, Self::Result)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
