//! Difficulty tiers and the numeric ranges they select.
//!
//! The tier is the *easier* of two signals: a low level or a weak accuracy
//! each keep the player in a gentler tier on their own.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::stats::GameStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DifficultyLabel {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl DifficultyLabel {
    pub fn all() -> [DifficultyLabel; 3] {
        [DifficultyLabel::Easy, DifficultyLabel::Medium, DifficultyLabel::Hard]
    }

    /// Number range used by addition, subtraction and comparison at this tier.
    pub fn range(self) -> DifficultyRange {
        let (min, max) = match self {
            DifficultyLabel::Easy => (10, 30),
            DifficultyLabel::Medium => (20, 60),
            DifficultyLabel::Hard => (30, 100),
        };
        DifficultyRange { min, max, label: self }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            DifficultyLabel::Easy => "easy",
            DifficultyLabel::Medium => "medium",
            DifficultyLabel::Hard => "hard",
        }
    }
}

impl fmt::Display for DifficultyLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Half-open draw range `[min, max)` for range-dependent problem types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DifficultyRange {
    pub min: i32,
    pub max: i32,
    pub label: DifficultyLabel,
}

/// Pick the tier for a snapshot. First matching rule wins.
pub fn resolve_difficulty(stats: &GameStats) -> DifficultyRange {
    let accuracy = stats.accuracy();
    let label = if stats.level <= 2 || accuracy < 0.6 {
        DifficultyLabel::Easy
    } else if stats.level <= 5 || accuracy < 0.8 {
        DifficultyLabel::Medium
    } else {
        DifficultyLabel::Hard
    };
    label.range()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(level: u32, total: u32, correct: u32) -> GameStats {
        GameStats {
            level,
            total_questions: total,
            correct_answers: correct,
            ..GameStats::default()
        }
    }

    #[test]
    fn test_low_level_is_easy_even_with_perfect_accuracy() {
        let r = resolve_difficulty(&stats(2, 50, 50));
        assert_eq!(r.label, DifficultyLabel::Easy);
        assert_eq!((r.min, r.max), (10, 30));
    }

    #[test]
    fn test_no_answers_counts_as_zero_accuracy() {
        assert_eq!(resolve_difficulty(&stats(9, 0, 0)).label, DifficultyLabel::Easy);
    }

    #[test]
    fn test_mid_level_is_medium() {
        assert_eq!(resolve_difficulty(&stats(4, 10, 10)).label, DifficultyLabel::Medium);
        assert_eq!(resolve_difficulty(&stats(5, 10, 6)).label, DifficultyLabel::Medium);
    }

    #[test]
    fn test_high_level_demoted_by_accuracy() {
        // 70% accuracy keeps a level 8 player in medium.
        assert_eq!(resolve_difficulty(&stats(8, 10, 7)).label, DifficultyLabel::Medium);
        // 50% drops all the way back to easy.
        assert_eq!(resolve_difficulty(&stats(8, 10, 5)).label, DifficultyLabel::Easy);
    }

    #[test]
    fn test_accuracy_boundaries_are_inclusive_for_promotion() {
        assert_eq!(resolve_difficulty(&stats(3, 10, 6)).label, DifficultyLabel::Medium);
        assert_eq!(resolve_difficulty(&stats(6, 10, 8)).label, DifficultyLabel::Hard);
    }

    #[test]
    fn test_hard_range() {
        let r = resolve_difficulty(&stats(6, 20, 19));
        assert_eq!(r, DifficultyRange { min: 30, max: 100, label: DifficultyLabel::Hard });
    }

    #[test]
    fn test_only_level_and_totals_matter() {
        let mut a = stats(7, 12, 11);
        let b = a.clone();
        a.stars = 400;
        a.pet_happiness = 3;
        a.current_streak = 9;
        assert_eq!(resolve_difficulty(&a), resolve_difficulty(&b));
    }
}
