//! Per-player progress through one day's puzzle

use crate::puzzle::{rank_index, PuzzleCatalog};
use crate::scoring::{self, GuessOutcome};

/// Result of applying one guess
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GuessResult {
    pub outcome: GuessOutcome,
    /// Every answer has been found
    pub completed: bool,
}

impl GuessResult {
    /// Messages to show for this guess, in order
    pub fn messages(&self) -> Vec<String> {
        let mut messages = vec![self.outcome.message()];
        if self.completed && self.outcome.is_hit() {
            messages.push("You found them all!".to_string());
        }
        messages
    }
}

/// Score, rank and found words for one player on one puzzle
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProgressTracker {
    /// Found words in the order they were guessed
    guessed: Vec<String>,
    score: u32,
    rank: String,
}

impl ProgressTracker {
    /// Fresh progress for a newly loaded puzzle
    pub fn new(catalog: &PuzzleCatalog) -> Self {
        Self::restore(Vec::new(), 0, catalog)
    }

    /// Rebuild progress from saved words and score. The rank is always
    /// recomputed from the score.
    pub fn restore(guessed: Vec<String>, score: u32, catalog: &PuzzleCatalog) -> Self {
        Self {
            guessed,
            score,
            rank: catalog.rank_for(score).to_string(),
        }
    }

    /// Score a guess and, if it counts, record it.
    pub fn apply_guess(&mut self, word: &str, catalog: &PuzzleCatalog) -> GuessResult {
        let outcome = scoring::score(word, catalog, &self.guessed);

        if let Some(points) = outcome.points() {
            self.guessed.push(word.trim().to_uppercase());
            self.score += points;
            self.rank = catalog.rank_for(self.score).to_string();
            tracing::debug!(
                "Accepted {} for {} points, score {} ({})",
                word,
                points,
                self.score,
                self.rank
            );
        }

        GuessResult {
            outcome,
            completed: self.is_complete(catalog),
        }
    }

    pub fn is_complete(&self, catalog: &PuzzleCatalog) -> bool {
        self.guessed.len() == catalog.answers().len()
    }

    /// Found words in guess order
    pub fn guessed(&self) -> &[String] {
        &self.guessed
    }

    /// Found words sorted for display
    pub fn sorted_guessed(&self) -> Vec<&str> {
        let mut words: Vec<&str> = self.guessed.iter().map(String::as_str).collect();
        words.sort_unstable();
        words
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn rank(&self) -> &str {
        &self.rank
    }

    /// Position of the current rank in the catalog's rank table
    pub fn rank_index(&self, catalog: &PuzzleCatalog) -> usize {
        rank_index(self.score, catalog.rank_thresholds())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::test_support::{catalog, sample};

    #[test]
    fn test_accepts_and_scores() {
        let catalog = catalog(&["ACTION", "CANTO", "TACO"], &[]);
        let mut progress = ProgressTracker::new(&catalog);
        assert_eq!(progress.rank(), "Beginner");

        let result = progress.apply_guess("action", &catalog);
        assert_eq!(result.outcome, GuessOutcome::Accepted(6));
        assert!(!result.completed);
        assert_eq!(progress.score(), 6);
        assert_eq!(progress.guessed(), &["ACTION".to_string()]);
    }

    #[test]
    fn test_rejections_do_not_mutate() {
        let catalog = sample();
        let mut progress = ProgressTracker::new(&catalog);
        progress.apply_guess("TACO", &catalog);
        let before = progress.clone();

        for _ in 0..2 {
            assert_eq!(progress.apply_guess("ZZZZ", &catalog).outcome, GuessOutcome::Rejected);
            assert_eq!(progress.apply_guess("taco", &catalog).outcome, GuessOutcome::Duplicate);
        }
        assert_eq!(progress, before);
    }

    #[test]
    fn test_score_and_rank_are_monotonic() {
        let catalog = sample();
        let mut progress = ProgressTracker::new(&catalog);
        let mut last_score = 0;
        let mut last_rank = progress.rank_index(&catalog);

        for word in ["TACO", "NOPE", "CANTO", "TACO", "LOCATION", "ACTION"] {
            progress.apply_guess(word, &catalog);
            assert!(progress.score() >= last_score);
            assert!(progress.rank_index(&catalog) >= last_rank);
            last_score = progress.score();
            last_rank = progress.rank_index(&catalog);
        }
        assert_eq!(progress.score(), 1 + 5 + 15 + 6);
        assert_eq!(progress.rank(), "Genius");
    }

    #[test]
    fn test_completion_independent_of_order() {
        let catalog = sample();
        let words = ["ACTION", "CANTO", "TACO", "LOCATION"];

        for rotation in 0..words.len() {
            let mut progress = ProgressTracker::new(&catalog);
            let mut order = words.to_vec();
            order.rotate_left(rotation);

            let results: Vec<_> = order
                .iter()
                .map(|w| progress.apply_guess(w, &catalog))
                .collect();

            assert!(results[..3].iter().all(|r| !r.completed));
            assert!(results[3].completed);
            assert_eq!(
                results[3].messages().last().map(String::as_str),
                Some("You found them all!")
            );
        }
    }

    #[test]
    fn test_sorted_display_keeps_guess_order_internally() {
        let catalog = sample();
        let mut progress = ProgressTracker::new(&catalog);
        progress.apply_guess("TACO", &catalog);
        progress.apply_guess("ACTION", &catalog);

        assert_eq!(progress.sorted_guessed(), vec!["ACTION", "TACO"]);
        assert_eq!(progress.guessed(), &["TACO".to_string(), "ACTION".to_string()]);
    }

    #[test]
    fn test_restore_recomputes_rank() {
        let catalog = sample();
        let progress = ProgressTracker::restore(vec!["LOCATION".to_string()], 15, &catalog);
        assert_eq!(progress.rank(), catalog.rank_for(15));
    }
}
