use std::{io, path::PathBuf};

use anyhow::{Context, Result};
use backgammon::{backgammon::Game, config::{FirstPlayer, GameConfig}, console::Console};
use clap::Parser;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

/// Two-player backgammon on the terminal.
#[derive(Parser)]
#[command(name = "backgammon-hotseat", about = "Hot-seat backgammon for two players")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "backgammon.toml")]
    config: PathBuf,

    /// Seed for reproducible dice
    #[arg(long)]
    seed: Option<u64>,

    /// Who opens the game
    #[arg(long, value_enum)]
    first: Option<FirstPlayer>,

    /// Default name for player one (White)
    #[arg(long)]
    player_one: Option<String>,

    /// Default name for player two (Black)
    #[arg(long)]
    player_two: Option<String>,
}

fn main() -> Result<()> {
    // Logs go to stderr so they never mix with the board.
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();

    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    if let Some(seed) = cli.seed {
        config.seed = Some(seed);
    }
    if let Some(first) = cli.first {
        config.first_player = first;
    }
    if let Some(name) = cli.player_one {
        config.player_one = name;
    }
    if let Some(name) = cli.player_two {
        config.player_two = name;
    }
    config.validate().context("invalid command line options")?;

    tracing::info!(?config, "starting game");

    let stdin = io::stdin();
    let mut console = Console::new(Game::new(&config), stdin.lock(), io::stdout());
    console.run().context("console session ended")?;
    Ok(())
}
