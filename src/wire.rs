//! Request and response bodies of the guesser backend.
//!
//! All three endpoints take and return JSON. Response types tolerate the
//! extra fields the reference server sends and fail to decode when a
//! required field is missing.

use crate::core::Event;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A yes/no answer, sent as `"yes"` or `"no"`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Answer {
    Yes,
    No,
}

impl Answer {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl fmt::Display for Answer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Body of `POST /answer`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct AnswerRequest {
    pub answer: Answer,
}

/// Reply to `POST /answer`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct AnswerResponse {
    /// `true`: `content` is the next question. `false`: it is a guess.
    pub is_question: bool,
    pub content: String,
}

impl AnswerResponse {
    pub fn into_event(self) -> Event {
        if self.is_question {
            Event::QuestionAsked(self.content)
        } else {
            Event::GuessMade(self.content)
        }
    }
}

/// Body of `POST /learn`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LearnRequest {
    pub correct_answer: String,
    pub distinguishing_question: String,
    pub answer_for_correct: Answer,
}

/// Reply to `POST /learn`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct LearnResponse {
    pub success: bool,
}

impl LearnResponse {
    pub fn into_event(self) -> Event {
        if self.success {
            Event::Learned
        } else {
            Event::LearningDeclined
        }
    }
}

/// Body of `POST /restart`; serializes to `{}`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct RestartRequest {}

/// Reply to `POST /restart`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct RestartResponse {
    /// First question of the new server session.
    pub content: String,
}

impl RestartResponse {
    pub fn into_event(self) -> Event {
        Event::Restarted(self.content)
    }
}
