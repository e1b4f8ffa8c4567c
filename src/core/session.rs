//! The pure session core.
//!
//! A [`Session`] holds everything one game session displays: the current
//! state, the question text, the pending guess, the learn form and the mood.
//! [`Session::apply`] turns an [`Event`] into the next session value without
//! touching the network or the screen; the game client in
//! [`crate::effects`] is the shell that produces events and shows results.

use super::guard::Guard;
use super::mood::Mood;
use super::state::{GameState, State};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// User-facing operations of the game client.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum Operation {
    SubmitAnswer,
    ConfirmGuessCorrect,
    ConfirmGuessWrong,
    SubmitLearning,
    Restart,
}

impl Operation {
    pub fn name(self) -> &'static str {
        match self {
            Self::SubmitAnswer => "submit_answer",
            Self::ConfirmGuessCorrect => "confirm_guess_correct",
            Self::ConfirmGuessWrong => "confirm_guess_wrong",
            Self::SubmitLearning => "submit_learning",
            Self::Restart => "restart",
        }
    }

    /// State precondition of the operation.
    ///
    /// Restart is allowed from anywhere even though front ends only offer
    /// it on the result panel.
    pub fn precondition(self) -> Guard<GameState> {
        match self {
            Self::SubmitAnswer => Guard::in_state(GameState::Question),
            Self::ConfirmGuessCorrect | Self::ConfirmGuessWrong => {
                Guard::in_state(GameState::Guessing)
            }
            Self::SubmitLearning => Guard::in_state(GameState::Learning),
            Self::Restart => Guard::always(),
        }
    }

    pub fn is_allowed_in(self, state: GameState) -> bool {
        self.precondition().check(&state)
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Something that happened to the session: a user action or an
/// interpreted server response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// The guesser asked another question.
    QuestionAsked(String),
    /// The guesser committed to a guess.
    GuessMade(String),
    /// The user confirmed the guess.
    GuessConfirmed,
    /// The user rejected the guess.
    GuessRejected,
    /// The guesser accepted the learning submission.
    Learned,
    /// The guesser answered the learning submission with `success: false`.
    LearningDeclined,
    /// A fresh server session started with this first question.
    Restarted(String),
}

impl Event {
    /// The operation this event belongs to.
    pub fn operation(&self) -> Operation {
        match self {
            Self::QuestionAsked(_) | Self::GuessMade(_) => Operation::SubmitAnswer,
            Self::GuessConfirmed => Operation::ConfirmGuessCorrect,
            Self::GuessRejected => Operation::ConfirmGuessWrong,
            Self::Learned | Self::LearningDeclined => Operation::SubmitLearning,
            Self::Restarted(_) => Operation::Restart,
        }
    }
}

/// How a round ended.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum RoundOutcome {
    GuessedRight,
    Learned,
}

impl RoundOutcome {
    pub fn title(self) -> &'static str {
        match self {
            Self::GuessedRight => "I got it right!",
            Self::Learned => "Learning complete",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            Self::GuessedRight => "Yay! I guessed correctly!",
            Self::Learned => "I learned something new. Thank you!",
        }
    }
}

/// The two free-text fields of the learn panel.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnForm {
    pub correct_answer: String,
    pub distinguishing_question: String,
}

impl LearnForm {
    pub fn is_blank(&self) -> bool {
        self.correct_answer.is_empty() && self.distinguishing_question.is_empty()
    }
}

/// An event arrived in a state that does not accept it.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("{operation} is not allowed while in state '{state}'")]
pub struct InvalidTransition {
    pub operation: Operation,
    pub state: GameState,
}

/// Display data of one game session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    state: GameState,
    question: String,
    pending_guess: Option<String>,
    guessed_answer: Option<String>,
    form: LearnForm,
    outcome: Option<RoundOutcome>,
    mood: Mood,
}

impl Default for Session {
    fn default() -> Self {
        Self::new("")
    }
}

impl Session {
    /// A session on the question panel showing `question`.
    pub fn new(question: impl Into<String>) -> Self {
        Self {
            state: GameState::Question,
            question: question.into(),
            pending_guess: None,
            guessed_answer: None,
            form: LearnForm::default(),
            outcome: None,
            mood: Mood::Normal,
        }
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    /// The guess shown on the guess panel.
    pub fn pending_guess(&self) -> Option<&str> {
        self.pending_guess.as_deref()
    }

    /// The read-only "you thought of something else than ..." reference
    /// shown on the learn panel.
    pub fn guessed_answer(&self) -> Option<&str> {
        self.guessed_answer.as_deref()
    }

    pub fn form(&self) -> &LearnForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut LearnForm {
        &mut self.form
    }

    pub fn outcome(&self) -> Option<RoundOutcome> {
        self.outcome
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    /// Apply `event`, returning the next session.
    ///
    /// Fails without side effects if the event's operation is not allowed
    /// in the current state.
    pub fn apply(&self, event: Event) -> Result<Session, InvalidTransition> {
        let operation = event.operation();
        if !operation.is_allowed_in(self.state) {
            return Err(InvalidTransition {
                operation,
                state: self.state,
            });
        }

        let mut next = self.clone();
        match event {
            Event::QuestionAsked(question) => {
                next.question = question;
                next.mood = Mood::Normal;
            }
            Event::GuessMade(guess) => {
                next.state = GameState::Guessing;
                next.pending_guess = Some(guess);
                next.mood = Mood::Surprised;
            }
            Event::GuessConfirmed => {
                next.state = GameState::Result;
                next.outcome = Some(RoundOutcome::GuessedRight);
                next.mood = Mood::Happy;
            }
            Event::GuessRejected => {
                next.state = GameState::Learning;
                next.guessed_answer = next.pending_guess.clone();
                next.mood = Mood::Thinking;
            }
            Event::Learned => {
                next.state = GameState::Result;
                next.outcome = Some(RoundOutcome::Learned);
                next.mood = Mood::Happy;
            }
            Event::LearningDeclined => {}
            Event::Restarted(question) => next = Session::new(question),
        }

        debug_assert!(!next.state.is_final() || next.outcome.is_some());
        Ok(next)
    }
}
