//! Core game types and logic.
//!
//! This module contains the pure core of the game client:
//! - Interaction states via the `State` trait and `GameState`
//! - Guard predicates used as operation preconditions
//! - The `Session` value and its event-driven transitions
//! - Panel visibility and mood projections
//! - Immutable history tracking
//!
//! Nothing in here performs I/O.

mod guard;
mod history;
mod mood;
mod panel;
mod session;
mod state;

pub use guard::Guard;
pub use history::{StateHistory, StateTransition};
pub use mood::{Mood, MoodImages, MoodIndicator};
pub use panel::{Panel, PanelController};
pub use session::{Event, InvalidTransition, LearnForm, Operation, RoundOutcome, Session};
pub use state::{GameState, State};
