//! Game session state and the task that owns it
//!
//! The session module provides:
//! - GameSession: the current puzzle plus the player's progress, and the
//!   words this device found on yesterday's puzzle
//! - SessionHandle: a queue in front of a single task that owns the session,
//!   so guesses, saves and reloads never interleave

mod actor;

pub use actor::{GuessReport, ReloadReport, RecordSource, SaveReport, SessionHandle};

use crate::error::PuzzleError;
use crate::persistence::PersistedRecord;
use crate::progress::{GuessResult, ProgressTracker};
use crate::puzzle::PuzzleCatalog;

/// One player's game on one day's puzzle
#[derive(Debug, Clone, PartialEq)]
pub struct GameSession {
    catalog: PuzzleCatalog,
    progress: ProgressTracker,
    yesterday_found: Vec<String>,
}

/// One of yesterday's answers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YesterdayAnswer {
    pub word: String,
    /// Found on this device
    pub found: bool,
}

/// What the front end shows between guesses
#[derive(Debug, Clone, PartialEq)]
pub struct GameStatus {
    pub header: String,
    pub center_letter: char,
    pub outer_letters: Vec<char>,
    pub score: u32,
    pub max_score: u32,
    pub rank: String,
    /// Found words, sorted
    pub found: Vec<String>,
    pub total_answers: usize,
    pub completed: bool,
    /// Yesterday's answers, when the page published them
    pub yesterday: Option<Vec<YesterdayAnswer>>,
}

impl GameSession {
    /// Start a fresh game on a newly loaded puzzle
    pub fn new(catalog: PuzzleCatalog) -> Self {
        let progress = ProgressTracker::new(&catalog);
        Self {
            catalog,
            progress,
            yesterday_found: Vec::new(),
        }
    }

    /// Start a fresh game after `previous`, this device's last saved game.
    ///
    /// If `previous` was yesterday's puzzle its found words are kept for
    /// marking yesterday's answers; a restart of the same puzzle keeps the
    /// ones it already carried.
    pub fn following(catalog: PuzzleCatalog, previous: Option<&PersistedRecord>) -> Self {
        let yesterday_found = previous
            .map(|prev| found_yesterday(prev, &catalog))
            .unwrap_or_default();
        Self {
            yesterday_found,
            ..Self::new(catalog)
        }
    }

    pub fn from_record(record: &PersistedRecord) -> Result<Self, PuzzleError> {
        let (catalog, progress) = record.restore()?;
        Ok(Self {
            catalog,
            progress,
            yesterday_found: record.yesterday_found.clone(),
        })
    }

    pub fn guess(&mut self, word: &str) -> GuessResult {
        self.progress.apply_guess(word, &self.catalog)
    }

    pub fn snapshot(&self, saved_at: i64) -> PersistedRecord {
        PersistedRecord {
            yesterday_found: self.yesterday_found.clone(),
            ..PersistedRecord::capture(&self.catalog, &self.progress, saved_at)
        }
    }

    pub fn catalog(&self) -> &PuzzleCatalog {
        &self.catalog
    }

    pub fn progress(&self) -> &ProgressTracker {
        &self.progress
    }

    /// Yesterday's answers, each marked if this device found it
    pub fn yesterday_answers(&self) -> Option<Vec<YesterdayAnswer>> {
        self.catalog.yesterday().map(|words| {
            words
                .iter()
                .map(|word| YesterdayAnswer {
                    word: word.clone(),
                    found: self.yesterday_found.contains(word),
                })
                .collect()
        })
    }

    pub fn status(&self) -> GameStatus {
        GameStatus {
            header: self.catalog.header(),
            center_letter: self.catalog.center_letter(),
            outer_letters: self.catalog.outer_letters().to_vec(),
            score: self.progress.score(),
            max_score: self.catalog.max_score(),
            rank: self.progress.rank().to_string(),
            found: self
                .progress
                .sorted_guessed()
                .into_iter()
                .map(String::from)
                .collect(),
            total_answers: self.catalog.answers().len(),
            completed: self.progress.is_complete(&self.catalog),
            yesterday: self.yesterday_answers(),
        }
    }
}

fn found_yesterday(previous: &PersistedRecord, catalog: &PuzzleCatalog) -> Vec<String> {
    match (previous.puzzle_date(), catalog.puzzle_date()) {
        (Some(prev), Some(today)) if prev.succ_opt() == Some(today) => previous.guessed.clone(),
        (Some(prev), Some(today)) if prev == today => previous.yesterday_found.clone(),
        _ => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::test_support::{sample, with_yesterday};

    fn previous_game(date: &str, words: &[&str]) -> PersistedRecord {
        let mut session = GameSession::new(sample());
        for word in words {
            session.guess(word);
        }
        let mut record = session.snapshot(1);
        record.date = date.to_string();
        record
    }

    #[test]
    fn test_status_after_guesses() {
        let mut session = GameSession::new(sample());
        session.guess("taco");
        session.guess("action");
        session.guess("zzz");

        let status = session.status();
        assert_eq!(status.score, 7);
        assert_eq!(status.found, vec!["ACTION", "TACO"]);
        assert_eq!(status.total_answers, 4);
        assert!(!status.completed);
        assert_eq!(status.center_letter, 'T');
    }

    #[test]
    fn test_snapshot_restores_same_session() {
        let mut session = GameSession::new(sample());
        session.guess("location");

        let restored = GameSession::from_record(&session.snapshot(1)).unwrap();
        assert_eq!(restored, session);
    }

    #[test]
    fn test_following_yesterday_marks_found_words() {
        let previous = previous_game("October 10, 2026", &["taco", "action"]);
        let session = GameSession::following(
            with_yesterday(&["TACO", "ACTION", "CANTO"]),
            Some(&previous),
        );

        let marked: Vec<(String, bool)> = session
            .yesterday_answers()
            .unwrap()
            .into_iter()
            .map(|a| (a.word, a.found))
            .collect();
        assert_eq!(
            marked,
            vec![
                ("TACO".to_string(), true),
                ("ACTION".to_string(), true),
                ("CANTO".to_string(), false),
            ]
        );
        assert_eq!(session.progress().score(), 0);
    }

    #[test]
    fn test_following_older_game_forgets_words() {
        let previous = previous_game("October 8, 2026", &["taco"]);
        let session = GameSession::following(with_yesterday(&["TACO"]), Some(&previous));
        assert_eq!(
            session.yesterday_answers(),
            Some(vec![YesterdayAnswer {
                word: "TACO".to_string(),
                found: false
            }])
        );
    }

    #[test]
    fn test_restarting_same_puzzle_keeps_yesterday() {
        let previous = previous_game("October 10, 2026", &["canto"]);
        let first = GameSession::following(with_yesterday(&["CANTO"]), Some(&previous));

        let restarted =
            GameSession::following(with_yesterday(&["CANTO"]), Some(&first.snapshot(2)));
        assert_eq!(restarted.snapshot(3).yesterday_found, vec!["CANTO"]);
        assert!(restarted.status().yesterday.unwrap()[0].found);
    }

    #[test]
    fn test_no_yesterday_published() {
        let session = GameSession::following(sample(), None);
        assert_eq!(session.status().yesterday, None);
    }
}
