//! Builder API for game client construction.
//!
//! # Example
//!
//! ```
//! use guesswork::builder::ClientBuilder;
//! use guesswork::core::GameState;
//! use std::time::Duration;
//!
//! let client = ClientBuilder::new()
//!     .base_url("http://127.0.0.1:5000")
//!     .timeout(Duration::from_secs(10))
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(client.state(), GameState::Question);
//! ```

pub mod client;
pub mod error;

pub use client::ClientBuilder;
pub use error::BuildError;
