//! Daily puzzle definition
//!
//! The puzzle module provides:
//! - PuzzleCatalog: the immutable word list, letters and rank table for one day
//! - RankThreshold: named score tiers derived from the max score
//! - Game data extraction from the puzzle page, with a canned fallback

mod payload;
mod ranks;
mod source;
#[cfg(test)]
pub(crate) mod test_support;

pub use payload::{GameData, RawPuzzle, RawYesterday};
pub use ranks::{rank_index, rank_name, thresholds_for, RankThreshold, RANK_PERCENTAGES};
pub use source::{
    extract_game_data, fallback_game_data, load_catalog, HttpPuzzleSource, PuzzleSource,
};

use std::collections::BTreeSet;

use chrono::NaiveDate;

use crate::error::PuzzleError;

/// Bonus added to a pangram's word score, and the base of every max score
pub const PANGRAM_BONUS: u32 = 7;

/// Words shorter than this score a single point
pub const LONG_WORD_MIN: usize = 5;

/// Format of the puzzle page's display date, e.g. "October 11, 2026"
const DISPLAY_DATE_FORMAT: &str = "%B %d, %Y";

/// Calendar date of a display date, if it parses
pub fn parse_display_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date.trim(), DISPLAY_DATE_FORMAT).ok()
}

/// Points a valid word is worth before any pangram bonus
pub fn word_points(word: &str) -> u32 {
    let len = word.chars().count();
    if len < LONG_WORD_MIN { 1 } else { len as u32 }
}

/// One day's puzzle. Everything is upper-case.
#[derive(Debug, Clone, PartialEq)]
pub struct PuzzleCatalog {
    answers: BTreeSet<String>,
    pangrams: BTreeSet<String>,
    outer_letters: Vec<char>,
    center_letter: char,
    max_score: u32,
    rank_thresholds: Vec<RankThreshold>,
    weekday: String,
    date: String,
    yesterday: Option<Vec<String>>,
    debug_mode: bool,
}

impl PuzzleCatalog {
    /// Build a catalog from a scraped payload.
    ///
    /// Upper-cases all words and letters, derives the max score and rank
    /// table, and checks that the answers are consistent with the letters.
    pub fn from_game_data(data: GameData, debug_mode: bool) -> Result<Self, PuzzleError> {
        let raw = data.today;

        let outer_letters = raw
            .outer_letters
            .iter()
            .map(|l| single_letter(l))
            .collect::<Result<Vec<_>, _>>()?;
        if outer_letters.len() != 6 {
            return Err(PuzzleError::Inconsistent(format!(
                "expected 6 outer letters, got {}",
                outer_letters.len()
            )));
        }
        let center_letter = single_letter(&raw.center_letter)?;

        let answers: BTreeSet<String> = raw.answers.iter().map(|w| w.to_uppercase()).collect();
        let pangrams: BTreeSet<String> = raw.pangrams.iter().map(|w| w.to_uppercase()).collect();

        let max_score = PANGRAM_BONUS + answers.iter().map(|w| word_points(w)).sum::<u32>();

        let catalog = Self {
            answers,
            pangrams,
            outer_letters,
            center_letter,
            max_score,
            rank_thresholds: thresholds_for(max_score),
            weekday: raw.display_weekday,
            date: raw.display_date,
            yesterday: data
                .yesterday
                .map(|y| y.answers.iter().map(|w| w.to_uppercase()).collect()),
            debug_mode,
        };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Reassemble a catalog from previously saved fields without re-deriving
    /// the max score or rank table.
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn from_parts(
        answers: BTreeSet<String>,
        pangrams: BTreeSet<String>,
        outer_letters: Vec<char>,
        center_letter: char,
        max_score: u32,
        rank_thresholds: Vec<RankThreshold>,
        weekday: String,
        date: String,
        yesterday: Option<Vec<String>>,
        debug_mode: bool,
    ) -> Self {
        Self {
            answers,
            pangrams,
            outer_letters,
            center_letter,
            max_score,
            rank_thresholds,
            weekday,
            date,
            yesterday,
            debug_mode,
        }
    }

    /// Check the letter and word invariants
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if let Some(p) = self.pangrams.iter().find(|p| !self.answers.contains(*p)) {
            return Err(PuzzleError::Inconsistent(format!(
                "pangram {} is not an answer",
                p
            )));
        }

        for word in &self.answers {
            if !word.contains(self.center_letter) {
                return Err(PuzzleError::Inconsistent(format!(
                    "{} is missing the center letter {}",
                    word, self.center_letter
                )));
            }
            if let Some(c) = word.chars().find(|c| !self.is_puzzle_letter(*c)) {
                return Err(PuzzleError::Inconsistent(format!(
                    "{} uses {} which is not a puzzle letter",
                    word, c
                )));
            }
        }

        Ok(())
    }

    pub fn is_puzzle_letter(&self, c: char) -> bool {
        c == self.center_letter || self.outer_letters.contains(&c)
    }

    pub fn is_answer(&self, word: &str) -> bool {
        self.answers.contains(word)
    }

    pub fn is_pangram(&self, word: &str) -> bool {
        self.pangrams.contains(word)
    }

    pub fn answers(&self) -> &BTreeSet<String> {
        &self.answers
    }

    pub fn pangrams(&self) -> &BTreeSet<String> {
        &self.pangrams
    }

    pub fn outer_letters(&self) -> &[char] {
        &self.outer_letters
    }

    pub fn center_letter(&self) -> char {
        self.center_letter
    }

    pub fn max_score(&self) -> u32 {
        self.max_score
    }

    pub fn rank_thresholds(&self) -> &[RankThreshold] {
        &self.rank_thresholds
    }

    pub fn weekday(&self) -> &str {
        &self.weekday
    }

    pub fn date(&self) -> &str {
        &self.date
    }

    pub fn puzzle_date(&self) -> Option<NaiveDate> {
        parse_display_date(&self.date)
    }

    /// Yesterday's answers, when the page published them
    pub fn yesterday(&self) -> Option<&[String]> {
        self.yesterday.as_deref()
    }

    /// Whether this is the canned puzzle rather than today's
    pub fn debug_mode(&self) -> bool {
        self.debug_mode
    }

    /// Header line shown above the board
    pub fn header(&self) -> String {
        if self.debug_mode {
            "DEBUG MODE".to_string()
        } else {
            format!("{}, {}", self.weekday, self.date)
        }
    }

    /// Rank name for a score
    pub fn rank_for(&self, score: u32) -> &str {
        rank_name(score, &self.rank_thresholds)
    }

    /// "Game Levels" listing, one `name (minScore)` line per rank
    pub fn rank_listing(&self) -> String {
        let mut out = String::from("Game Levels\n");
        for t in &self.rank_thresholds {
            out.push_str(&format!("{} ({})\n", t.name, t.min_score));
        }
        out
    }
}

fn single_letter(s: &str) -> Result<char, PuzzleError> {
    let mut chars = s.trim().chars().flat_map(char::to_uppercase);
    match (chars.next(), chars.next()) {
        (Some(c), None) if c.is_alphabetic() => Ok(c),
        _ => Err(PuzzleError::Inconsistent(format!(
            "{:?} is not a single letter",
            s
        ))),
    }
}
