//! Guess scoring

use serde::{Deserialize, Serialize};

use crate::puzzle::{word_points, PuzzleCatalog, PANGRAM_BONUS};

/// What a single guess is worth
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "kind", content = "points")]
pub enum GuessOutcome {
    /// Not in the word list
    Rejected,
    /// Already found
    Duplicate,
    /// Valid word, not a pangram
    Accepted(u32),
    /// Valid pangram; points include the bonus
    Pangram(u32),
}

impl GuessOutcome {
    /// Points gained, if the guess counts
    pub fn points(&self) -> Option<u32> {
        match self {
            GuessOutcome::Accepted(p) | GuessOutcome::Pangram(p) => Some(*p),
            GuessOutcome::Rejected | GuessOutcome::Duplicate => None,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.points().is_some()
    }

    /// Signed-integer encoding: `0` rejected, `-1` duplicate,
    /// `-(points)` pangram, `+points` otherwise.
    pub fn to_signed(&self) -> i32 {
        match self {
            GuessOutcome::Rejected => 0,
            GuessOutcome::Duplicate => -1,
            GuessOutcome::Accepted(p) => *p as i32,
            GuessOutcome::Pangram(p) => -(*p as i32),
        }
    }

    /// Inverse of [`GuessOutcome::to_signed`]
    pub fn from_signed(value: i32) -> Self {
        match value {
            0 => GuessOutcome::Rejected,
            -1 => GuessOutcome::Duplicate,
            v if v < 0 => GuessOutcome::Pangram(v.unsigned_abs()),
            v => GuessOutcome::Accepted(v as u32),
        }
    }

    /// Short message shown after a guess
    pub fn message(&self) -> String {
        match self {
            GuessOutcome::Rejected => "Not in word list".to_string(),
            GuessOutcome::Duplicate => "Already found".to_string(),
            GuessOutcome::Pangram(p) => format!("Pangram! +{}", p),
            GuessOutcome::Accepted(p) if *p >= 7 => format!("Awesome! +{}", p),
            GuessOutcome::Accepted(p) if *p > 1 => format!("Nice! +{}", p),
            GuessOutcome::Accepted(p) => format!("Good! +{}", p),
        }
    }
}

impl std::fmt::Display for GuessOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// Score a guess against the puzzle and the words already found.
///
/// Matching is case-insensitive. The duplicate check runs before anything else.
pub fn score(word: &str, catalog: &PuzzleCatalog, guessed: &[String]) -> GuessOutcome {
    let word = word.trim().to_uppercase();

    if guessed.iter().any(|g| *g == word) {
        return GuessOutcome::Duplicate;
    }
    if !catalog.is_answer(&word) {
        return GuessOutcome::Rejected;
    }

    let points = word_points(&word);
    if catalog.is_pangram(&word) {
        GuessOutcome::Pangram(PANGRAM_BONUS + points)
    } else {
        GuessOutcome::Accepted(points)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::puzzle::test_support::{catalog, sample};

    fn guessed(words: &[&str]) -> Vec<String> {
        words.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_scenario_action_canto_taco() {
        let catalog = catalog(&["ACTION", "CANTO", "TACO"], &[]);

        assert_eq!(score("ACTION", &catalog, &[]).to_signed(), 6);
        assert_eq!(score("ACTION", &catalog, &guessed(&["ACTION"])).to_signed(), -1);
        assert_eq!(score("ZZZZ", &catalog, &[]).to_signed(), 0);
    }

    #[test]
    fn test_short_word_scores_one() {
        let catalog = sample();
        assert_eq!(score("taco", &catalog, &[]), GuessOutcome::Accepted(1));
        assert_eq!(score("canto", &catalog, &[]), GuessOutcome::Accepted(5));
    }

    #[test]
    fn test_pangram_gets_bonus_and_negative_sign() {
        let catalog = sample();
        let outcome = score("Location", &catalog, &[]);
        assert_eq!(outcome, GuessOutcome::Pangram(15));
        assert_eq!(outcome.to_signed(), -15);
    }

    #[test]
    fn test_duplicate_takes_precedence_over_pangram() {
        let catalog = sample();
        let outcome = score("location", &catalog, &guessed(&["LOCATION"]));
        assert_eq!(outcome, GuessOutcome::Duplicate);
    }

    #[test]
    fn test_signed_encoding_round_trip() {
        for outcome in [
            GuessOutcome::Rejected,
            GuessOutcome::Duplicate,
            GuessOutcome::Accepted(1),
            GuessOutcome::Accepted(9),
            GuessOutcome::Pangram(15),
        ] {
            assert_eq!(GuessOutcome::from_signed(outcome.to_signed()), outcome);
        }
    }

    #[test]
    fn test_messages() {
        assert_eq!(GuessOutcome::Pangram(15).message(), "Pangram! +15");
        assert_eq!(GuessOutcome::Accepted(8).message(), "Awesome! +8");
        assert_eq!(GuessOutcome::Accepted(5).message(), "Nice! +5");
        assert_eq!(GuessOutcome::Accepted(1).message(), "Good! +1");
        assert_eq!(GuessOutcome::Rejected.message(), "Not in word list");
        assert_eq!(GuessOutcome::Duplicate.message(), "Already found");
    }
}
