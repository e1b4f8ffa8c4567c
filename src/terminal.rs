//! Line-oriented terminal front end.
//!
//! The visible panel is rendered as text and user input is read one command
//! per line. Parsing and rendering are pure; the binary owns the I/O.

use crate::core::{GameState, Mood, Panel, Session};
use crate::effects::{Notice, SessionObserver};
use crate::wire::Answer;
use std::fmt::Write as _;
use std::str::FromStr;
use thiserror::Error;

pub const HELP: &str = "\
Commands:
  y, yes     answer yes (or: the guess is correct)
  n, no      answer no (or: the guess is wrong)
  c          the guess is correct
  w          the guess is wrong
  r          restart the game
  h, ?       show this help
  q          quit (Ctrl-D also quits)
On the learn panel, r, h and q work at every prompt; anything else is form text.";

/// One line of user input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Yes,
    No,
    Correct,
    Wrong,
    Restart,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown command '{0}', type h for help")]
pub struct UnknownCommand(pub String);

impl FromStr for Command {
    type Err = UnknownCommand;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => Ok(Self::Yes),
            "n" | "no" => Ok(Self::No),
            "c" | "correct" => Ok(Self::Correct),
            "w" | "wrong" => Ok(Self::Wrong),
            "r" | "restart" => Ok(Self::Restart),
            "h" | "help" | "?" => Ok(Self::Help),
            "q" | "quit" | "exit" => Ok(Self::Quit),
            other => Err(UnknownCommand(other.to_string())),
        }
    }
}

/// What a command means in the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    Answer(Answer),
    ConfirmCorrect,
    ConfirmWrong,
    Restart,
    Help,
    Quit,
}

/// Interpret `command` for `state`. `None` if it does nothing there.
pub fn resolve(state: GameState, command: Command) -> Option<Action> {
    match (state, command) {
        (_, Command::Quit) => Some(Action::Quit),
        (_, Command::Help) => Some(Action::Help),
        (_, Command::Restart) => Some(Action::Restart),
        (GameState::Question, Command::Yes) => Some(Action::Answer(Answer::Yes)),
        (GameState::Question, Command::No) => Some(Action::Answer(Answer::No)),
        (GameState::Guessing, Command::Yes | Command::Correct) => Some(Action::ConfirmCorrect),
        (GameState::Guessing, Command::No | Command::Wrong) => Some(Action::ConfirmWrong),
        _ => None,
    }
}

/// One line typed on the learn panel.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LearnInput {
    /// Text for the current form prompt, trimmed.
    Text(String),
    /// A command that applies on the learn panel.
    Action(Action),
}

/// Interpret a learn panel line: a command if it means something while
/// learning, otherwise form text.
pub fn learn_input(line: &str) -> LearnInput {
    match line
        .parse::<Command>()
        .ok()
        .and_then(|command| resolve(GameState::Learning, command))
    {
        Some(action) => LearnInput::Action(action),
        None => LearnInput::Text(line.trim().to_string()),
    }
}

/// Render the visible panel.
pub fn render(session: &Session, panel: Panel, mood_image: &str) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "[{}]", mood_image);

    match panel {
        Panel::Question => {
            let _ = writeln!(out, "{}", session.question());
            out.push_str("(y)es / (n)o");
        }
        Panel::Guess => {
            let guess = session.pending_guess().unwrap_or_default();
            let _ = writeln!(out, "Is it {}?", guess);
            out.push_str("(c)orrect / (w)rong");
        }
        Panel::Learn => {
            let guessed = session.guessed_answer().unwrap_or_default();
            let _ = writeln!(out, "You thought of something other than {}.", guessed);
            out.push_str("Teach me the difference.");
        }
        Panel::Result => {
            if let Some(outcome) = session.outcome() {
                let _ = writeln!(out, "{}", outcome.title());
                let _ = writeln!(out, "{}", outcome.message());
            }
            out.push_str("(r)estart / (q)uit");
        }
    }

    out
}

/// Prints mood changes and notices as they happen.
#[derive(Debug, Default)]
pub struct TerminalObserver {
    verbose: bool,
}

impl TerminalObserver {
    pub fn new(verbose: bool) -> Self {
        Self { verbose }
    }
}

impl SessionObserver for TerminalObserver {
    fn mood_changed(&mut self, mood: Mood, image: &str) {
        if self.verbose {
            println!("(mood: {mood} -> {image})");
        }
    }

    fn notice(&mut self, notice: &Notice) {
        println!("! {notice}");
    }
}
