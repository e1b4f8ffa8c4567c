//! HTTP client for the guesser backend.

use crate::effects::error::{Endpoint, TransportError};
use crate::wire::{
    AnswerRequest, AnswerResponse, LearnRequest, LearnResponse, RestartRequest, RestartResponse,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::debug;

/// Handle to a guesser reachable over HTTP.
///
/// Cheap to clone: the underlying `reqwest::Client` is reference counted.
/// It is also the default effect environment (see [`crate::effects::requests`]).
#[derive(Clone, Debug)]
pub struct HttpGuesser {
    client: reqwest::Client,
    base_url: String,
}

impl HttpGuesser {
    /// Create a guesser handle with an optional per-request timeout.
    pub fn new(base_url: &str, timeout: Option<Duration>) -> Result<Self, reqwest::Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        Ok(Self::with_client(builder.build()?, base_url))
    }

    /// Use an existing `reqwest::Client`.
    pub fn with_client(client: reqwest::Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, endpoint: Endpoint) -> String {
        format!("{}/{}", self.base_url, endpoint.path())
    }

    pub async fn answer(&self, request: &AnswerRequest) -> Result<AnswerResponse, TransportError> {
        self.post(Endpoint::Answer, request).await
    }

    pub async fn learn(&self, request: &LearnRequest) -> Result<LearnResponse, TransportError> {
        self.post(Endpoint::Learn, request).await
    }

    pub async fn restart(&self) -> Result<RestartResponse, TransportError> {
        self.post(Endpoint::Restart, &RestartRequest {}).await
    }

    /// POST `body` as JSON and decode the JSON reply.
    ///
    /// Non-2xx statuses and bodies that do not decode into `Resp` are
    /// transport errors.
    async fn post<Req, Resp>(&self, endpoint: Endpoint, body: &Req) -> Result<Resp, TransportError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = self.url(endpoint);
        debug!(%url, "posting to guesser");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| TransportError::from_reqwest(endpoint, e))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status {
                endpoint,
                status: status.as_u16(),
            });
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| TransportError::from_reqwest(endpoint, e))?;
        debug!(%url, status = status.as_u16(), len = bytes.len(), "guesser replied");

        serde_json::from_slice(&bytes).map_err(|source| TransportError::Malformed { endpoint, source })
    }
}

impl AsRef<HttpGuesser> for HttpGuesser {
    fn as_ref(&self) -> &HttpGuesser {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wire::Answer;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn base_url_trailing_slash_is_dropped() {
        let guesser = HttpGuesser::with_client(reqwest::Client::new(), "http://localhost:5000/");
        assert_eq!(guesser.base_url(), "http://localhost:5000");
        assert_eq!(
            guesser.url(Endpoint::Answer),
            "http://localhost:5000/answer"
        );
    }

    #[tokio::test]
    async fn answer_posts_json_and_decodes_reply() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/answer"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({"answer": "no"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"is_question": false, "content": "A cat"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let guesser = HttpGuesser::new(&server.uri(), None).unwrap();
        let reply = guesser
            .answer(&AnswerRequest { answer: Answer::No })
            .await
            .unwrap();

        assert!(!reply.is_question);
        assert_eq!(reply.content, "A cat");
    }

    #[tokio::test]
    async fn restart_sends_empty_object() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/restart"))
            .and(body_json(json!({})))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "Is it alive?"})))
            .expect(1)
            .mount(&server)
            .await;

        let guesser = HttpGuesser::new(&server.uri(), None).unwrap();
        let reply = guesser.restart().await.unwrap();

        assert_eq!(reply.content, "Is it alive?");
    }

    #[tokio::test]
    async fn non_success_status_is_transport_error() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/learn"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let guesser = HttpGuesser::new(&server.uri(), None).unwrap();
        let err = guesser
            .learn(&LearnRequest {
                correct_answer: "A dog".into(),
                distinguishing_question: "Does it bark?".into(),
                answer_for_correct: Answer::Yes,
            })
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            TransportError::Status {
                endpoint: Endpoint::Learn,
                status: 500
            }
        ));
    }

    #[tokio::test]
    async fn missing_field_is_malformed() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/answer"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"content": "A cat"})))
            .mount(&server)
            .await;

        let guesser = HttpGuesser::new(&server.uri(), None).unwrap();
        let err = guesser
            .answer(&AnswerRequest { answer: Answer::Yes })
            .await
            .unwrap_err();

        assert!(matches!(err, TransportError::Malformed { .. }));
    }

    #[tokio::test]
    async fn slow_reply_times_out() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/restart"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"content": "late"}))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let guesser = HttpGuesser::new(&server.uri(), Some(Duration::from_millis(50))).unwrap();
        let err = guesser.restart().await.unwrap_err();

        assert!(matches!(
            err,
            TransportError::Timeout {
                endpoint: Endpoint::Restart
            }
        ));
    }
}
