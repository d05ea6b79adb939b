//! Error types shared across the game core

use thiserror::Error;

/// The scraped puzzle payload could not be turned into a catalog.
///
/// Never fatal: callers fall back to the canned puzzle and switch to debug mode.
#[derive(Debug, Error)]
pub enum PuzzleError {
    #[error("Failed to fetch puzzle page: {0}")]
    Fetch(String),

    #[error("Puzzle page is not an HTML document")]
    NotHtml,

    #[error("No game data script found in puzzle page")]
    MissingGameData,

    #[error("Invalid game data JSON: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Inconsistent puzzle data: {0}")]
    Inconsistent(String),
}

/// Failures of the local or remote store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Local store unavailable: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to (de)serialize saved game: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Remote store request failed: {0}")]
    Remote(String),

    #[error("Background task failed: {0}")]
    Task(String),
}

/// Errors surfaced by the game session.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Neither the local nor the remote store holds a saved game.
    #[error("No saved game found, start a new puzzle")]
    NoSavedState,

    #[error("No puzzle loaded")]
    NoActiveGame,

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error("Game session has shut down")]
    Closed,
}
