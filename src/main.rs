//! Terminal front end for the guessing game.
//!
//! # Usage
//!
//! ```bash
//! # Play against a guesser on the default address
//! guesswork
//!
//! # Custom guesser and timeout
//! guesswork --base-url http://guesser.local:8080 --timeout-ms 5000
//!
//! # With config file
//! guesswork --config ~/.config/guesswork.toml
//!
//! # Verbose logging (written to stderr)
//! RUST_LOG=guesswork=debug guesswork
//! ```

use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use guesswork::builder::ClientBuilder;
use guesswork::config::ClientConfig;
use guesswork::core::GameState;
use guesswork::effects::{ClientError, GameClient};
use guesswork::terminal::{
    learn_input, render, resolve, Action, Command, LearnInput, TerminalObserver, HELP,
};
use guesswork::wire::Answer;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type Input = Lines<BufReader<Stdin>>;

/// Guessing game client for a decision-tree guesser
#[derive(Parser, Debug)]
#[command(name = "guesswork")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Configuration file path
    #[arg(short = 'c', long, env = "GUESSWORK_CONFIG", value_name = "FILE")]
    config: Option<PathBuf>,

    /// Base URL of the guesser
    #[arg(short = 'u', long, env = "GUESSWORK_BASE_URL", value_name = "URL")]
    base_url: Option<String>,

    /// Per-request timeout in milliseconds
    #[arg(short = 't', long, env = "GUESSWORK_TIMEOUT_MS", value_name = "MS")]
    timeout_ms: Option<u64>,

    /// Print every mood change
    #[arg(short = 'm', long)]
    show_mood: bool,

    /// Log level when RUST_LOG is unset (trace, debug, info, warn, error)
    #[arg(short = 'l', long, env = "GUESSWORK_LOG_LEVEL", default_value = "warn")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("guesswork={}", args.log_level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(&args)?;
    info!(base_url = %config.base_url, timeout_ms = ?config.request_timeout_ms, "configuration loaded");

    let mut client = ClientBuilder::from_config(&config)
        .observer(Box::new(TerminalObserver::new(args.show_mood)))
        .build()
        .context("Failed to create game client")?;

    println!("Think of something and I will try to guess it.");
    println!("{HELP}\n");

    let mut input = BufReader::new(tokio::io::stdin()).lines();
    // A failed start leaves an empty question panel; `r` retries.
    report(client.begin().await);
    play(&mut client, &mut input).await?;

    info!(
        session = %client.id(),
        rounds = client.rounds_completed(),
        "goodbye"
    );
    Ok(())
}

/// CLI flags and environment override the config file.
fn load_config(args: &Args) -> Result<ClientConfig> {
    let mut config = match &args.config {
        Some(path) => ClientConfig::load(path)
            .with_context(|| format!("Failed to load config: {path:?}"))?,
        None => ClientConfig::default(),
    };

    if let Some(url) = &args.base_url {
        config.base_url = url.clone();
    }
    if let Some(ms) = args.timeout_ms {
        config.request_timeout_ms = Some(ms);
    }
    Ok(config)
}

async fn play(client: &mut GameClient, input: &mut Input) -> Result<()> {
    loop {
        if client.state() == GameState::Learning {
            if !teach(client, input).await? {
                return Ok(());
            }
            continue;
        }

        show(client);
        if client.session().question().is_empty() && client.state() == GameState::Question {
            println!("(no question yet, press r to retry)");
        }

        let Some(line) = prompt(input, "> ").await? else {
            return Ok(());
        };
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        let Some(action) = resolve(client.state(), command) else {
            println!("That does nothing here.");
            continue;
        };

        let result = match action {
            Action::Answer(answer) => client.submit_answer(answer).await,
            Action::ConfirmCorrect => client.confirm_guess_correct(),
            Action::ConfirmWrong => client.confirm_guess_wrong(),
            Action::Restart => client.restart().await,
            Action::Help => {
                println!("{HELP}");
                continue;
            }
            Action::Quit => return Ok(()),
        };
        report(result);
    }
}

/// Run the learn panel once. Returns `false` when the user quits.
async fn teach(client: &mut GameClient, input: &mut Input) -> Result<bool> {
    show(client);

    let correct = match read_field(input, "What were you thinking of? ").await? {
        LearnInput::Text(text) => text,
        LearnInput::Action(action) => return leave_learning(client, action).await,
    };
    client.set_correct_answer(correct.as_str());

    let question = match read_field(input, "A yes/no question that tells them apart: ").await? {
        LearnInput::Text(text) => text,
        LearnInput::Action(action) => return leave_learning(client, action).await,
    };
    client.set_distinguishing_question(question);

    let label = format!("And for {correct}, the answer is (y/n)? ");
    let answer = loop {
        let Some(line) = prompt(input, &label).await? else {
            return Ok(false);
        };
        match line.parse::<Command>() {
            Ok(Command::Yes) => break Answer::Yes,
            Ok(Command::No) => break Answer::No,
            _ => match learn_input(&line) {
                LearnInput::Action(Action::Help) => println!("{HELP}"),
                LearnInput::Action(action) => return leave_learning(client, action).await,
                LearnInput::Text(_) => println!("Please answer y or n."),
            },
        }
    };

    match client.submit_learning(answer).await {
        Ok(GameState::Learning) => println!("The guesser did not take that. Try again."),
        result => report(result),
    }
    Ok(true)
}

/// Read one learn form field. Help is answered in place; end of input quits.
async fn read_field(input: &mut Input, label: &str) -> Result<LearnInput> {
    loop {
        let Some(line) = prompt(input, label).await? else {
            return Ok(LearnInput::Action(Action::Quit));
        };
        match learn_input(&line) {
            LearnInput::Action(Action::Help) => println!("{HELP}"),
            other => return Ok(other),
        }
    }
}

/// Handle a command typed on the learn panel. Returns `false` to quit.
async fn leave_learning(client: &mut GameClient, action: Action) -> Result<bool> {
    match action {
        Action::Quit => Ok(false),
        Action::Restart => {
            report(client.restart().await);
            Ok(true)
        }
        _ => Ok(true),
    }
}

fn show(client: &GameClient) {
    let panel = client.panels().visible_panel();
    println!("\n{}", render(client.session(), panel, client.mood().image()));
}

/// Notices are printed by the observer; only refusals need reporting here.
fn report(result: Result<GameState, ClientError>) {
    match result {
        Ok(state) => debug!(state = %state, "action complete"),
        Err(ClientError::NotAllowed(e)) => println!("{e}"),
        Err(e) => debug!(error = %e, "action failed"),
    }
}

async fn prompt(input: &mut Input, label: &str) -> Result<Option<String>> {
    print!("{label}");
    std::io::stdout().flush()?;
    Ok(input.next_line().await?)
}
