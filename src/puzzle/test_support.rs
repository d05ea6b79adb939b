//! Puzzle fixtures shared by unit tests

use super::{GameData, PuzzleCatalog, RawPuzzle, RawYesterday};

/// Payload over the letters T (center) and A C I O N L
pub(crate) fn raw(answers: &[&str], pangrams: &[&str]) -> GameData {
    GameData {
        today: RawPuzzle {
            answers: answers.iter().map(|s| s.to_string()).collect(),
            pangrams: pangrams.iter().map(|s| s.to_string()).collect(),
            outer_letters: ["a", "c", "i", "o", "n", "l"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
            center_letter: "t".to_string(),
            display_weekday: "Sunday".to_string(),
            display_date: "October 11, 2026".to_string(),
        },
        yesterday: None,
    }
}

pub(crate) fn catalog(answers: &[&str], pangrams: &[&str]) -> PuzzleCatalog {
    PuzzleCatalog::from_game_data(raw(answers, pangrams), false).expect("valid fixture")
}

/// ACTION, CANTO, TACO, plus the pangram LOCATION
pub(crate) fn sample() -> PuzzleCatalog {
    catalog(&["action", "canto", "taco", "location"], &["location"])
}

/// The sample puzzle, with yesterday's answers published
pub(crate) fn with_yesterday(answers: &[&str]) -> PuzzleCatalog {
    let mut data = raw(&["action", "canto", "taco", "location"], &["location"]);
    data.yesterday = Some(RawYesterday {
        answers: answers.iter().map(|s| s.to_string()).collect(),
    });
    PuzzleCatalog::from_game_data(data, false).expect("valid fixture")
}
