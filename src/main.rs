use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::filter::EnvFilter;

use odyssey::cli::Args;
use odyssey::io::TerminalIO;
use odyssey::models::errors::GameError;
use odyssey::services::game::Game;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let mut io = TerminalIO;
    let mut output = TerminalIO;

    // Closing input at any prompt ends the session without an error.
    let mut game = match Game::configure(&args.setup_options(), &mut io, &mut output) {
        Ok(game) => game,
        Err(GameError::InputExhausted) => return Ok(()),
        Err(e) => return Err(e).context("configuring the session"),
    };
    game.run(&mut io, &mut output)
        .context("running the command loop")?;
    Ok(())
}
