//! The imperative shell around the pure session core.
//!
//! Backend calls are Stillwater 0.11 effects, run by the [`GameClient`]
//! against an environment that provides an [`HttpGuesser`]. The client turns
//! each reply into a session event, applies it, and drives the panel and mood
//! projections.
//!
//! # Key Concepts
//!
//! - **Effects**: functions return `impl Effect` and do nothing until run
//! - **Environment**: any `Env: AsRef<HttpGuesser> + Clone + Send + Sync`
//! - **Failure**: transport errors never modify the session

mod backend;
mod client;
mod error;
pub mod requests;

pub use backend::HttpGuesser;
pub use client::{GameClient, Notice, SessionObserver, HISTORY_LIMIT, TRANSPORT_NOTICE};
pub use error::{ClientError, Endpoint, TransportError};
