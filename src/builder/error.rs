//! Build errors for the game client builder.

use thiserror::Error;

/// Errors that can occur when building a game client.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Guesser base URL not specified. Call .base_url(url) before .build()")]
    MissingBaseUrl,

    #[error("Invalid guesser base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to create HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
