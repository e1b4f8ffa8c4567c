//! Errors raised by the game client.

use crate::core::{GameState, InvalidTransition, Operation};
use crate::validation::ValidationError;
use std::fmt;
use thiserror::Error;

/// Backend endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    Answer,
    Learn,
    Restart,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Self::Answer => "answer",
            Self::Learn => "learn",
            Self::Restart => "restart",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "/{}", self.path())
    }
}

/// Failure talking to the guesser. The session is never modified when one
/// of these is returned.
#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request to {endpoint} timed out")]
    Timeout { endpoint: Endpoint },

    #[error("could not reach the guesser at {endpoint}: {source}")]
    Network {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("guesser answered {endpoint} with HTTP {status}")]
    Status { endpoint: Endpoint, status: u16 },

    #[error("guesser sent a malformed {endpoint} response: {source}")]
    Malformed {
        endpoint: Endpoint,
        #[source]
        source: serde_json::Error,
    },
}

impl TransportError {
    pub(crate) fn from_reqwest(endpoint: Endpoint, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            Self::Timeout { endpoint }
        } else {
            Self::Network { endpoint, source }
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        match self {
            Self::Timeout { endpoint }
            | Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Malformed { endpoint, .. } => *endpoint,
        }
    }
}

/// Errors returned by game client operations.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error(transparent)]
    NotAllowed(#[from] InvalidTransition),

    #[error("learning submission rejected: {0}")]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Transport(#[from] TransportError),
}

impl ClientError {
    pub(crate) fn not_allowed(operation: Operation, state: GameState) -> Self {
        Self::NotAllowed(InvalidTransition { operation, state })
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
