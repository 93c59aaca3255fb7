use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use calcpad::calculator::Accumulator;
use calcpad::config::Config;
use calcpad::input::run_script;
use calcpad::session::{Outcome, Session, render_text};
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "calcpad")]
#[command(version)]
#[command(about = "A keyboard-driven four-function calculator")]
struct Cli {
    /// Path to a config file (defaults to <config dir>/calcpad/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Apply a key script to a fresh calculator and print the display
    Keys {
        /// Keys to press, e.g. "3 + 4 × 2 {Enter}"
        script: String,
        /// Print the display as JSON
        #[arg(long)]
        json: bool,
    },
    /// Read key scripts from stdin, one per line
    Repl,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;

    match cli.command.unwrap_or(Command::Repl) {
        Command::Keys { script, json } => run_keys(&config, &script, json),
        Command::Repl => run_repl(config),
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose { "calcpad=debug" } else { "calcpad=info" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run_keys(config: &Config, script: &str, json: bool) -> Result<()> {
    let mut acc = Accumulator::new();
    run_script(&mut acc, script).context("Invalid key script")?;

    let display = acc.display(config.display.glyphs);
    if json {
        println!("{}", serde_json::to_string(&display)?);
    } else {
        println!("{}", render_text(&display));
    }

    Ok(())
}

fn run_repl(config: Config) -> Result<()> {
    let mut session = Session::new(config);
    tracing::info!("calculator ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read input")?;

        match session.handle_line(&line) {
            Ok(Outcome::Render { display, .. }) => writeln!(stdout, "{}", render_text(&display))?,
            Ok(Outcome::Copied(text)) => writeln!(stdout, "copied {}", text)?,
            Ok(Outcome::Quit) => break,
            Err(err) => eprintln!("Error: {}", err),
        }
        stdout.flush()?;
    }

    Ok(())
}
