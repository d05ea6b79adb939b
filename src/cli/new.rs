//! New game command implementation

use anyhow::{Context, Result};

use hive::config::Config;
use hive::puzzle::{fallback_game_data, load_catalog};
use hive::PuzzleCatalog;

use super::{print_status, session_for};

/// Load today's puzzle (or the canned one) and start over
pub async fn new_command(config: &Config, debug: bool) -> Result<()> {
    let catalog = if debug {
        PuzzleCatalog::from_game_data(fallback_game_data()?, true)?
    } else {
        load_catalog(&config.puzzle_source()).await?
    };

    if catalog.debug_mode() && !debug {
        eprintln!("Error getting today's puzzle, playing the canned puzzle instead.");
    }

    let session = session_for(config);
    let status = session
        .start_new(catalog)
        .await
        .context("Failed to start a new game")?;

    print_status(&status);
    Ok(())
}
