//! Shared fixtures for session integration tests

use std::sync::Arc;

use tempfile::TempDir;

use hive::persistence::{FileLocalStore, MemoryRemoteStore, RemoteStore};
use hive::puzzle::{GameData, RawPuzzle, RawYesterday};
use hive::{PersistenceGateway, PuzzleCatalog};

/// Puzzle over T (center) and A C I O N L with one pangram
pub fn catalog() -> PuzzleCatalog {
    catalog_on("October 11, 2026", None)
}

/// The same puzzle published on `date`, optionally with yesterday's answers
pub fn catalog_on(date: &str, yesterday: Option<&[&str]>) -> PuzzleCatalog {
    let data = GameData {
        today: RawPuzzle {
            answers: ["action", "canto", "taco", "location"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            pangrams: vec!["location".to_string()],
            outer_letters: ["a", "c", "i", "o", "n", "l"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            center_letter: "t".to_string(),
            display_weekday: "Sunday".to_string(),
            display_date: date.to_string(),
        },
        yesterday: yesterday.map(|answers| RawYesterday {
            answers: answers.iter().map(|s| s.to_string()).collect(),
        }),
    };
    PuzzleCatalog::from_game_data(data, false).expect("Failed to build test catalog")
}

/// Gateway over a file store in a fresh temp dir and a shared in-memory bin
pub fn device(remote: &Arc<MemoryRemoteStore>) -> (TempDir, PersistenceGateway) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let gateway = PersistenceGateway::new(
        Arc::new(FileLocalStore::new(dir.path())),
        Some(remote.clone() as Arc<dyn RemoteStore>),
    );
    (dir, gateway)
}
