use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use hive::config::Config;

mod cli;

#[derive(Parser)]
#[command(name = "hive")]
#[command(about = "Play the daily Spelling Bee locally, with scoring, ranks and cloud saves")]
#[command(version)]
struct Cli {
    /// Path to the config file (defaults to ~/.hive/config.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Player name for remote saves (overrides the config file)
    #[arg(short, long, global = true)]
    player: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch today's puzzle and start a new game
    New {
        /// Play the canned puzzle instead of fetching today's
        #[arg(long)]
        debug: bool,
    },

    /// Restore the saved game, reconciling local and remote saves
    Reload {
        /// Take the remote save without asking when local progress is newer
        #[arg(long)]
        yes: bool,
    },

    /// Submit one or more guesses
    Guess {
        /// Words to guess
        #[arg(required = true)]
        words: Vec<String>,
    },

    /// Save the game locally and to the remote bin
    Save,

    /// Show score, rank and found words
    Status {
        /// Also list yesterday's answers
        #[arg(long)]
        yesterday: bool,
    },

    /// Show the rank table for the current puzzle
    Ranks,

    /// Write a config file with defaults
    Init {
        /// Overwrite existing config file
        #[arg(long)]
        force: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match cli.command {
        Commands::Init { force } => return cli::init::init_command(cli.config.as_deref(), force),
        _ => {
            let mut config = Config::load(cli.config.as_deref())?;
            if let Some(player) = cli.player {
                config.player.name = player;
            }
            config
        }
    };

    match cli.command {
        Commands::New { debug } => cli::new::new_command(&config, debug).await?,
        Commands::Reload { yes } => cli::reload::reload_command(&config, yes).await?,
        Commands::Guess { words } => cli::guess::guess_command(&config, &words).await?,
        Commands::Save => cli::save::save_command(&config).await?,
        Commands::Status { yesterday } => cli::status::status_command(&config, yesterday).await?,
        Commands::Ranks => cli::status::ranks_command(&config)?,
        Commands::Init { .. } => {}
    }

    Ok(())
}
