//! Builder for constructing game clients.

use crate::builder::error::BuildError;
use crate::config::ClientConfig;
use crate::core::MoodImages;
use crate::effects::{GameClient, HttpGuesser, SessionObserver};
use reqwest::Url;
use std::time::Duration;

/// Builder for constructing game clients with a fluent API.
#[derive(Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    timeout: Option<Duration>,
    mood_images: MoodImages,
    observer: Option<Box<dyn SessionObserver>>,
}

impl ClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from a loaded configuration.
    pub fn from_config(config: &ClientConfig) -> Self {
        let mut builder = Self::new()
            .base_url(config.base_url.clone())
            .mood_images(config.mood_images.clone());
        builder.timeout = config.request_timeout();
        builder
    }

    /// Set the guesser base URL (required).
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Fail requests that take longer than `timeout`.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn mood_images(mut self, images: MoodImages) -> Self {
        self.mood_images = images;
        self
    }

    pub fn observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    /// Build the client.
    /// Returns an error if the base URL is missing or unusable.
    pub fn build(self) -> Result<GameClient, BuildError> {
        let url = self.base_url.ok_or(BuildError::MissingBaseUrl)?;
        validate_base_url(&url)?;

        let guesser = HttpGuesser::new(&url, self.timeout)?;

        let client = GameClient::new(guesser, self.mood_images);
        Ok(match self.observer {
            Some(observer) => client.with_observer(observer),
            None => client,
        })
    }
}

fn validate_base_url(url: &str) -> Result<(), BuildError> {
    let invalid = |reason: String| BuildError::InvalidBaseUrl {
        url: url.to_string(),
        reason,
    };

    let parsed = Url::parse(url).map_err(|e| invalid(e.to_string()))?;
    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(invalid(format!("unsupported scheme '{other}'"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{GameState, Mood};

    #[test]
    fn builder_requires_base_url() {
        let result = ClientBuilder::new().build();

        assert!(matches!(result, Err(BuildError::MissingBaseUrl)));
    }

    #[test]
    fn builder_rejects_unparseable_url() {
        let result = ClientBuilder::new().base_url("not a url").build();

        assert!(matches!(result, Err(BuildError::InvalidBaseUrl { .. })));
    }

    #[test]
    fn builder_rejects_non_http_scheme() {
        let result = ClientBuilder::new().base_url("ftp://guesser.local").build();

        match result {
            Err(BuildError::InvalidBaseUrl { url, reason }) => {
                assert_eq!(url, "ftp://guesser.local");
                assert!(reason.contains("ftp"));
            }
            _ => panic!("Expected InvalidBaseUrl"),
        }
    }

    #[test]
    fn fluent_api_builds_client() {
        let images = MoodImages {
            happy: "happy.gif".into(),
            ..MoodImages::default()
        };

        let client = ClientBuilder::new()
            .base_url("http://127.0.0.1:5000/")
            .timeout(Duration::from_secs(5))
            .mood_images(images)
            .build()
            .unwrap();

        assert_eq!(client.state(), GameState::Question);
        assert_eq!(client.env().base_url(), "http://127.0.0.1:5000");
        assert_eq!(client.mood().resolve(Mood::Happy.tag()), "happy.gif");
    }

    #[test]
    fn from_config_uses_config_values() {
        let config = ClientConfig {
            base_url: "http://guesser.local:8080".into(),
            request_timeout_ms: Some(1000),
            mood_images: MoodImages::default(),
        };

        let client = ClientBuilder::from_config(&config).build().unwrap();

        assert_eq!(client.env().base_url(), "http://guesser.local:8080");
    }
}
