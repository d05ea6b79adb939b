//! Rank tiers and score thresholds

use serde::{Deserialize, Serialize};

/// Rank names and the percentage of the max score each one requires
/// (must be sorted by percentage)
pub static RANK_PERCENTAGES: &[(&str, u32)] = &[
    ("Beginner", 0),
    ("Good Start", 2),
    ("Moving Up", 5),
    ("Good", 8),
    ("Solid", 15),
    ("Nice", 25),
    ("Great", 40),
    ("Amazing", 50),
    ("Genius", 70),
];

/// A named rank and the minimum score (inclusive) that attains it.
///
/// Serialized as a `[name, minScore]` pair to stay readable by older saves.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, u32)", into = "(String, u32)")]
pub struct RankThreshold {
    pub name: String,
    pub min_score: u32,
}

impl RankThreshold {
    pub fn new(name: impl Into<String>, min_score: u32) -> Self {
        Self {
            name: name.into(),
            min_score,
        }
    }
}

impl From<(String, u32)> for RankThreshold {
    fn from((name, min_score): (String, u32)) -> Self {
        Self { name, min_score }
    }
}

impl From<RankThreshold> for (String, u32) {
    fn from(t: RankThreshold) -> Self {
        (t.name, t.min_score)
    }
}

/// Scale the fixed percentages to a puzzle's max score, rounding to the nearest point.
pub fn thresholds_for(max_score: u32) -> Vec<RankThreshold> {
    RANK_PERCENTAGES
        .iter()
        .map(|(name, pct)| {
            let min_score = ((*pct as f64 / 100.0) * max_score as f64).round() as u32;
            RankThreshold::new(*name, min_score)
        })
        .collect()
}

/// Index of the rank attained by `score`.
///
/// Thresholds are inclusive lower bounds, so the highest threshold not above
/// the score wins. A score below every threshold maps to the first rank.
pub fn rank_index(score: u32, thresholds: &[RankThreshold]) -> usize {
    thresholds
        .iter()
        .rposition(|t| score >= t.min_score)
        .unwrap_or(0)
}

/// Name of the rank attained by `score` (empty if there are no thresholds)
pub fn rank_name(score: u32, thresholds: &[RankThreshold]) -> &str {
    thresholds
        .get(rank_index(score, thresholds))
        .map(|t| t.name.as_str())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_table() -> Vec<RankThreshold> {
        vec![
            RankThreshold::new("Beginner", 0),
            RankThreshold::new("Good", 8),
            RankThreshold::new("Genius", 70),
        ]
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let table = small_table();
        assert_eq!(rank_name(8, &table), "Good");
        assert_eq!(rank_name(7, &table), "Beginner");
        assert_eq!(rank_name(100, &table), "Genius");
        assert_eq!(rank_name(70, &table), "Genius");
    }

    #[test]
    fn test_thresholds_for_max_score() {
        let table = thresholds_for(100);
        let scores: Vec<u32> = table.iter().map(|t| t.min_score).collect();
        assert_eq!(scores, vec![0, 2, 5, 8, 15, 25, 40, 50, 70]);

        // 2% of 37 = 0.74 -> 1, 70% of 37 = 25.9 -> 26
        let table = thresholds_for(37);
        assert_eq!(table[1].min_score, 1);
        assert_eq!(table[8].min_score, 26);
    }

    #[test]
    fn test_thresholds_non_decreasing() {
        for max in 0..400 {
            let table = thresholds_for(max);
            assert!(table.windows(2).all(|w| w[0].min_score <= w[1].min_score));
        }
    }

    #[test]
    fn test_equal_thresholds_pick_highest_name() {
        // With a tiny max score several tiers collapse onto the same value
        let table = thresholds_for(10);
        assert_eq!(table[1].min_score, 0);
        assert_eq!(rank_name(0, &table), "Good Start");
    }

    #[test]
    fn test_serializes_as_pair() {
        let json = serde_json::to_string(&RankThreshold::new("Solid", 15)).unwrap();
        assert_eq!(json, r#"["Solid",15]"#);
        let back: RankThreshold = serde_json::from_str(&json).unwrap();
        assert_eq!(back, RankThreshold::new("Solid", 15));
    }
}
