//! The game client: imperative shell around [`Session`].

use crate::core::{
    Event, GameState, Mood, MoodImages, MoodIndicator, Operation, Panel, PanelController, Session,
    State, StateHistory, StateTransition,
};
use crate::effects::backend::HttpGuesser;
use crate::effects::error::{ClientError, TransportError};
use crate::effects::requests::{answer_effect, learn_effect, restart_effect};
use crate::validation::{validate_submission, ValidationError};
use crate::wire::Answer;
use std::fmt;
use stillwater::{Effect, Validation};
use tracing::{debug, info, warn};
use uuid::Uuid;

/// Transitions kept in a client's history.
pub const HISTORY_LIMIT: usize = 256;

/// Text of every transport notice.
pub const TRANSPORT_NOTICE: &str = "Something went wrong. Please try again.";

/// A user-visible message raised by a failed operation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// The learn form was incomplete.
    Validation(String),
    /// A backend call failed; the user should retry.
    Transport(String),
}

impl Notice {
    pub fn text(&self) -> &str {
        match self {
            Self::Validation(text) | Self::Transport(text) => text,
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// Receives presentation updates from a [`GameClient`].
///
/// Front ends implement this to redraw. Every method has an empty default.
pub trait SessionObserver: Send {
    fn panel_changed(&mut self, _panel: Panel) {}
    fn mood_changed(&mut self, _mood: Mood, _image: &str) {}
    fn notice(&mut self, _notice: &Notice) {}
}

/// One game session against a guesser.
///
/// Operations take `&mut self`, so a second action cannot start until the
/// first has resolved. Each successful operation applies exactly one event.
pub struct GameClient<Env = HttpGuesser> {
    id: Uuid,
    env: Env,
    session: Session,
    history: StateHistory<GameState>,
    rounds_completed: usize,
    panels: PanelController,
    mood: MoodIndicator,
    observer: Option<Box<dyn SessionObserver>>,
    notice: Option<Notice>,
}

impl<Env> GameClient<Env>
where
    Env: AsRef<HttpGuesser> + Clone + Send + Sync,
{
    /// Create a client on an empty question panel.
    ///
    /// Call [`begin`](Self::begin) to fetch the first question.
    pub fn new(env: Env, images: MoodImages) -> Self {
        Self {
            id: Uuid::new_v4(),
            env,
            session: Session::default(),
            history: StateHistory::bounded(HISTORY_LIMIT),
            rounds_completed: 0,
            panels: PanelController::new(),
            mood: MoodIndicator::new(images),
            observer: None,
            notice: None,
        }
    }

    pub fn with_observer(mut self, observer: Box<dyn SessionObserver>) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn env(&self) -> &Env {
        &self.env
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn state(&self) -> GameState {
        self.session.state()
    }

    /// The most recent transitions, at most [`HISTORY_LIMIT`].
    pub fn history(&self) -> &StateHistory<GameState> {
        &self.history
    }

    /// Rounds finished over the client's whole life.
    pub fn rounds_completed(&self) -> usize {
        self.rounds_completed
    }

    pub fn panels(&self) -> &PanelController {
        &self.panels
    }

    pub fn mood(&self) -> &MoodIndicator {
        &self.mood
    }

    /// The notice raised by the last failed operation, if any.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn take_notice(&mut self) -> Option<Notice> {
        self.notice.take()
    }

    pub fn set_correct_answer(&mut self, text: impl Into<String>) {
        self.session.form_mut().correct_answer = text.into();
    }

    pub fn set_distinguishing_question(&mut self, text: impl Into<String>) {
        self.session.form_mut().distinguishing_question = text.into();
    }

    /// Start a fresh server session and show its first question.
    pub async fn begin(&mut self) -> Result<GameState, ClientError> {
        info!(session = %self.id, base_url = self.env.as_ref().base_url(), "starting game");
        self.restart().await
    }

    /// Answer the current question.
    pub async fn submit_answer(&mut self, answer: Answer) -> Result<GameState, ClientError> {
        self.require(Operation::SubmitAnswer)?;
        self.show_mood(Mood::Thinking);

        let result = answer_effect(answer).run(&self.env).await;
        self.settle(Operation::SubmitAnswer, result)
    }

    /// The guess was right.
    pub fn confirm_guess_correct(&mut self) -> Result<GameState, ClientError> {
        self.require(Operation::ConfirmGuessCorrect)?;
        self.apply(Event::GuessConfirmed)
    }

    /// The guess was wrong; open the learn panel.
    pub fn confirm_guess_wrong(&mut self) -> Result<GameState, ClientError> {
        self.require(Operation::ConfirmGuessWrong)?;
        self.apply(Event::GuessRejected)
    }

    /// Teach the guesser the current learn form.
    ///
    /// An incomplete form is rejected without contacting the guesser.
    pub async fn submit_learning(
        &mut self,
        answer_for_correct: Answer,
    ) -> Result<GameState, ClientError> {
        self.require(Operation::SubmitLearning)?;

        let submission = match validate_submission(self.session.form(), answer_for_correct) {
            Validation::Success(submission) => submission,
            Validation::Failure(violations) => {
                let err = ValidationError::new(violations);
                warn!(session = %self.id, error = %err, "learning submission rejected");
                self.raise(Notice::Validation(err.to_string()));
                return Err(err.into());
            }
        };

        let result = learn_effect(submission).run(&self.env).await;
        self.settle(Operation::SubmitLearning, result)
    }

    /// Start over from a fresh server session. Allowed in every state.
    pub async fn restart(&mut self) -> Result<GameState, ClientError> {
        self.require(Operation::Restart)?;

        let result = restart_effect().run(&self.env).await;
        self.settle(Operation::Restart, result)
    }

    fn require(&self, operation: Operation) -> Result<(), ClientError> {
        let state = self.session.state();
        if operation.is_allowed_in(state) {
            Ok(())
        } else {
            debug!(session = %self.id, %operation, state = state.name(), "operation refused");
            Err(ClientError::not_allowed(operation, state))
        }
    }

    /// Apply the outcome of a backend call, or roll back and raise a notice.
    fn settle(
        &mut self,
        operation: Operation,
        result: Result<Event, TransportError>,
    ) -> Result<GameState, ClientError> {
        match result {
            Ok(Event::LearningDeclined) => {
                warn!(session = %self.id, "guesser declined the learning submission");
                self.apply(Event::LearningDeclined)
            }
            Ok(event) => self.apply(event),
            Err(err) => {
                warn!(
                    session = %self.id,
                    %operation,
                    endpoint = %err.endpoint(),
                    error = %err,
                    "backend call failed"
                );
                self.show_mood(self.session.mood());
                self.raise(Notice::Transport(TRANSPORT_NOTICE.to_string()));
                Err(err.into())
            }
        }
    }

    fn apply(&mut self, event: Event) -> Result<GameState, ClientError> {
        let operation = event.operation();
        let from = self.session.state();
        let next = self.session.apply(event)?;
        let to = next.state();

        self.session = next;
        self.history = self
            .history
            .record(StateTransition::now(from, to, operation.name()));
        self.notice = None;
        if to.is_final() && !from.is_final() {
            self.rounds_completed += 1;
        }

        if self.panels.set_visible_panel(to) {
            let panel = self.panels.visible_panel();
            if let Some(observer) = self.observer.as_mut() {
                observer.panel_changed(panel);
            }
        }
        self.show_mood(self.session.mood());

        info!(
            session = %self.id,
            %operation,
            from = from.name(),
            to = to.name(),
            "transition applied"
        );
        Ok(to)
    }

    fn show_mood(&mut self, mood: Mood) {
        let image = self.mood.show(mood);
        if let Some(observer) = self.observer.as_mut() {
            observer.mood_changed(mood, image);
        }
    }

    fn raise(&mut self, notice: Notice) {
        if let Some(observer) = self.observer.as_mut() {
            observer.notice(&notice);
        }
        self.notice = Some(notice);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    fn offline_client() -> GameClient {
        let guesser = HttpGuesser::with_client(reqwest::Client::new(), "http://127.0.0.1:1");
        GameClient::new(guesser, MoodImages::default())
    }

    #[derive(Clone, Default)]
    struct Recorder {
        panels: Arc<Mutex<Vec<Panel>>>,
        moods: Arc<Mutex<Vec<Mood>>>,
    }

    impl SessionObserver for Recorder {
        fn panel_changed(&mut self, panel: Panel) {
            self.panels.lock().unwrap().push(panel);
        }

        fn mood_changed(&mut self, mood: Mood, _image: &str) {
            self.moods.lock().unwrap().push(mood);
        }
    }

    #[test]
    fn new_client_shows_question_panel() {
        let client = offline_client();

        assert_eq!(client.state(), GameState::Question);
        assert_eq!(client.panels().visible_panel(), Panel::Question);
        assert_eq!(client.mood().current(), Mood::Normal);
        assert!(client.notice().is_none());
    }

    #[test]
    fn guess_confirmation_refused_outside_guessing() {
        let mut client = offline_client();

        let err = client.confirm_guess_correct().unwrap_err();

        assert!(matches!(err, ClientError::NotAllowed(_)));
        assert_eq!(client.state(), GameState::Question);
        assert!(client.history().transitions().is_empty());
    }

    #[test]
    fn local_transitions_notify_observer() {
        let recorder = Recorder::default();
        let mut client = offline_client().with_observer(Box::new(recorder.clone()));
        client.apply(Event::GuessMade("A cat".into())).unwrap();

        client.confirm_guess_wrong().unwrap();

        assert_eq!(
            *recorder.panels.lock().unwrap(),
            vec![Panel::Guess, Panel::Learn]
        );
        assert_eq!(
            *recorder.moods.lock().unwrap(),
            vec![Mood::Surprised, Mood::Thinking]
        );
        assert_eq!(client.session().guessed_answer(), Some("A cat"));
    }

    #[test]
    fn history_is_bounded_but_round_count_is_not() {
        let mut client = offline_client();
        for round in 0..HISTORY_LIMIT {
            client.apply(Event::GuessMade(format!("guess {round}"))).unwrap();
            client.confirm_guess_correct().unwrap();
            client.apply(Event::Restarted("Is it alive?".into())).unwrap();
        }

        assert_eq!(client.history().transitions().len(), HISTORY_LIMIT);
        assert_eq!(client.rounds_completed(), HISTORY_LIMIT);
        assert!(client.history().rounds_completed() < HISTORY_LIMIT);
    }

    #[tokio::test]
    async fn failed_answer_restores_mood_and_raises_notice() {
        let recorder = Recorder::default();
        let mut client = offline_client().with_observer(Box::new(recorder.clone()));

        let err = client.submit_answer(Answer::Yes).await.unwrap_err();

        assert!(err.is_transport());
        assert_eq!(client.state(), GameState::Question);
        assert_eq!(client.mood().current(), Mood::Normal);
        assert_eq!(
            *recorder.moods.lock().unwrap(),
            vec![Mood::Thinking, Mood::Normal]
        );
        assert_eq!(
            client.take_notice(),
            Some(Notice::Transport(TRANSPORT_NOTICE.to_string()))
        );
        assert!(client.notice().is_none());
    }

    #[tokio::test]
    async fn blank_learning_form_never_reaches_network() {
        let mut client = offline_client();
        client.apply(Event::GuessMade("A cat".into())).unwrap();
        client.confirm_guess_wrong().unwrap();
        client.set_distinguishing_question("Does it bark?");

        let err = client.submit_learning(Answer::Yes).await.unwrap_err();

        // The guesser is unreachable, so a request would have been a transport error.
        assert!(err.is_validation());
        assert_eq!(client.state(), GameState::Learning);
        assert!(matches!(client.notice(), Some(Notice::Validation(_))));
    }
}
