//! Backend calls as Stillwater effects.
//!
//! Each constructor describes one request and how its reply becomes a
//! session [`Event`]. Nothing runs until the effect is `run` against an
//! environment that can hand out an [`HttpGuesser`].

use crate::core::Event;
use crate::effects::backend::HttpGuesser;
use crate::effects::error::TransportError;
use crate::validation::LearningSubmission;
use crate::wire::{Answer, AnswerRequest, AnswerResponse, LearnResponse, RestartResponse};
use stillwater::{from_async, Effect, EffectExt};

/// `POST /answer`, yielding [`Event::QuestionAsked`] or [`Event::GuessMade`].
pub fn answer_effect<Env>(
    answer: Answer,
) -> impl Effect<Output = Event, Error = TransportError, Env = Env>
where
    Env: AsRef<HttpGuesser> + Clone + Send + Sync,
{
    from_async(move |env: &Env| {
        let guesser = env.as_ref().clone();
        async move { guesser.answer(&AnswerRequest { answer }).await }
    })
    .map(AnswerResponse::into_event)
}

/// `POST /learn`, yielding [`Event::Learned`] or [`Event::LearningDeclined`].
pub fn learn_effect<Env>(
    submission: LearningSubmission,
) -> impl Effect<Output = Event, Error = TransportError, Env = Env>
where
    Env: AsRef<HttpGuesser> + Clone + Send + Sync,
{
    let request = submission.into_request();
    from_async(move |env: &Env| {
        let guesser = env.as_ref().clone();
        async move { guesser.learn(&request).await }
    })
    .map(LearnResponse::into_event)
}

/// `POST /restart`, yielding [`Event::Restarted`].
pub fn restart_effect<Env>() -> impl Effect<Output = Event, Error = TransportError, Env = Env>
where
    Env: AsRef<HttpGuesser> + Clone + Send + Sync,
{
    from_async(|env: &Env| {
        let guesser = env.as_ref().clone();
        async move { guesser.restart().await }
    })
    .map(RestartResponse::into_event)
}
