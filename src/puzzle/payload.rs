//! Raw puzzle payload as published in the puzzle page's `window.gameData`

use serde::{Deserialize, Serialize};

/// Top-level `window.gameData` object
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameData {
    pub today: RawPuzzle,

    /// Previous day's puzzle (only its answers are used)
    #[serde(default)]
    pub yesterday: Option<RawYesterday>,
}

/// One day's puzzle, letters and words in whatever case the page used
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPuzzle {
    pub answers: Vec<String>,
    pub pangrams: Vec<String>,
    pub outer_letters: Vec<String>,
    pub center_letter: String,
    pub display_weekday: String,
    pub display_date: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawYesterday {
    pub answers: Vec<String>,
}
