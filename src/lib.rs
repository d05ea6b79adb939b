//! Hive - the daily Spelling Bee, played locally
//!
//! Hive loads the day's puzzle (letters and accepted words) from the puzzle
//! page, scores the player's guesses, tracks score and rank, and keeps the
//! game in a local save plus an optional shared remote bin.
//!
//! ## Flow
//!
//! 1. A [`PuzzleCatalog`] is built once per day from the scraped game data,
//!    or from a canned puzzle when the page can't be read.
//! 2. A [`GameSession`] starts empty or is restored from a saved
//!    [`PersistedRecord`], reconciling the local and remote saves.
//! 3. Each guess is scored, applied to the player's progress, and saved locally.
//! 4. An explicit save also writes the player's record into the remote bin.

pub mod config;
pub mod error;
pub mod persistence;
pub mod progress;
pub mod puzzle;
pub mod reconcile;
pub mod scoring;
pub mod session;

pub use error::{PuzzleError, SessionError, StoreError};
pub use persistence::{PersistedRecord, PersistenceGateway, RemoteFetch, RemoteSave};
pub use progress::{GuessResult, ProgressTracker};
pub use puzzle::{PuzzleCatalog, RankThreshold};
pub use reconcile::{reconcile, ActiveRecord, ConfirmOverride, LocalReason};
pub use scoring::{score, GuessOutcome};
pub use session::{GameSession, GameStatus, SessionHandle, YesterdayAnswer};
