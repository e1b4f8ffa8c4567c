//! Guesswork: client for a decision-tree guessing game
//!
//! A remote guesser asks yes/no questions until it commits to a guess. The
//! user confirms or rejects the guess and, after a wrong guess, teaches the
//! guesser a new distinguishing question.
//!
//! Guesswork follows Stillwater's "pure core, imperative shell" philosophy.
//! The interaction state machine in [`core`] is made of pure values and
//! functions, while backend calls are isolated in Stillwater effects and run
//! by the [`effects::GameClient`] shell.
//!
//! # Core Concepts
//!
//! - **State**: the four interaction states via `GameState`
//! - **Session**: per-session display data, advanced by applying events
//! - **Panels and moods**: pure projections of the session state
//! - **History**: Immutable tracking of state transitions over time
//!
//! # Example
//!
//! ```rust
//! use guesswork::core::{Event, GameState, Mood, Session};
//!
//! let session = Session::new("Is it alive?");
//! let session = session.apply(Event::GuessMade("A cat".into())).unwrap();
//! assert_eq!(session.state(), GameState::Guessing);
//! assert_eq!(session.mood(), Mood::Surprised);
//!
//! let session = session.apply(Event::GuessRejected).unwrap();
//! assert_eq!(session.state(), GameState::Learning);
//! assert_eq!(session.guessed_answer(), Some("A cat"));
//! ```

pub mod builder;
pub mod config;
pub mod core;
pub mod effects;
pub mod terminal;
pub mod validation;
pub mod wire;

// Re-export commonly used types
pub use builder::ClientBuilder;
pub use core::{GameState, Mood, Panel, Session, State};
pub use effects::{ClientError, GameClient, HttpGuesser};
