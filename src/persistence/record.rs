//! Serializable snapshot of puzzle and progress

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::PuzzleError;
use crate::progress::ProgressTracker;
use crate::puzzle::{parse_display_date, PuzzleCatalog, RankThreshold};

/// One saved game. Field names match the browser game's saved state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersistedRecord {
    #[serde(rename = "gameAnswers")]
    pub answers: Vec<String>,

    #[serde(rename = "gamePangrams")]
    pub pangrams: Vec<String>,

    #[serde(rename = "maxScore")]
    pub max_score: u32,

    #[serde(rename = "gameLevels")]
    pub rank_thresholds: Vec<RankThreshold>,

    #[serde(rename = "outerLetters")]
    pub outer_letters: Vec<char>,

    #[serde(rename = "centerLetter")]
    pub center_letter: char,

    /// Found words in guess order
    #[serde(rename = "answerList")]
    pub guessed: Vec<String>,

    #[serde(rename = "gameScore")]
    pub score: u32,

    #[serde(rename = "gameRank", default)]
    pub rank: String,

    #[serde(rename = "gameWeekday")]
    pub weekday: String,

    #[serde(rename = "gameDate")]
    pub date: String,

    /// Unix milliseconds; absent in saves from older clients
    #[serde(rename = "savedAt", default)]
    pub saved_at: i64,

    #[serde(rename = "yesterdayAnswers", default, skip_serializing_if = "Option::is_none")]
    pub yesterday: Option<Vec<String>>,

    #[serde(rename = "debugMode", default)]
    pub debug_mode: bool,

    /// Words this device found on yesterday's puzzle
    #[serde(rename = "answerListYesterday", default, skip_serializing_if = "Vec::is_empty")]
    pub yesterday_found: Vec<String>,
}

impl PersistedRecord {
    /// Snapshot the current game
    pub fn capture(catalog: &PuzzleCatalog, progress: &ProgressTracker, saved_at: i64) -> Self {
        Self {
            answers: catalog.answers().iter().cloned().collect(),
            pangrams: catalog.pangrams().iter().cloned().collect(),
            max_score: catalog.max_score(),
            rank_thresholds: catalog.rank_thresholds().to_vec(),
            outer_letters: catalog.outer_letters().to_vec(),
            center_letter: catalog.center_letter(),
            guessed: progress.guessed().to_vec(),
            score: progress.score(),
            rank: progress.rank().to_string(),
            weekday: catalog.weekday().to_string(),
            date: catalog.date().to_string(),
            saved_at,
            yesterday: catalog.yesterday().map(<[String]>::to_vec),
            debug_mode: catalog.debug_mode(),
            yesterday_found: Vec::new(),
        }
    }

    /// Rebuild the catalog and progress this record was captured from
    pub fn restore(&self) -> Result<(PuzzleCatalog, ProgressTracker), PuzzleError> {
        let catalog = PuzzleCatalog::from_parts(
            self.answers.iter().map(|w| w.to_uppercase()).collect(),
            self.pangrams.iter().map(|w| w.to_uppercase()).collect(),
            self.outer_letters.clone(),
            self.center_letter,
            self.max_score,
            self.rank_thresholds.clone(),
            self.weekday.clone(),
            self.date.clone(),
            self.yesterday.clone(),
            self.debug_mode,
        );
        catalog.validate()?;

        let progress = ProgressTracker::restore(self.guessed.clone(), self.score, &catalog);
        Ok((catalog, progress))
    }

    /// Calendar date of the puzzle, if the display date parses
    pub fn puzzle_date(&self) -> Option<NaiveDate> {
        parse_display_date(&self.date)
    }
}
