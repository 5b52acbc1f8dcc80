//! Persisted statistics snapshot.
//!
//! The JSON shape (camelCase keys, lowercase enum tags) matches what earlier
//! versions of the game wrote to `localStorage`, so existing saves keep loading.
//! Missing keys fall back to the default snapshot values.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::GameError;
use crate::difficulty::DifficultyLabel;
use crate::pet::PetType;

/// Starting pet happiness for a fresh save.
pub const INITIAL_HAPPINESS: u32 = 50;
pub const MAX_HAPPINESS: u32 = 100;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameStats {
    pub pet_type: PetType,
    pub total_questions: u32,
    pub correct_answers: u32,
    pub stars: u32,
    pub level: u32,
    pub achievements: BTreeSet<String>,
    pub pet_happiness: u32,
    pub current_streak: u32,
    pub best_streak: u32,
    pub difficulty: DifficultyLabel,
}

impl Default for GameStats {
    fn default() -> Self {
        Self {
            pet_type: PetType::Cat,
            total_questions: 0,
            correct_answers: 0,
            stars: 0,
            level: 1,
            achievements: BTreeSet::new(),
            pet_happiness: INITIAL_HAPPINESS,
            current_streak: 0,
            best_streak: 0,
            difficulty: DifficultyLabel::Easy,
        }
    }
}

impl GameStats {
    /// Fraction of answered questions that were correct; 0 before the first answer.
    pub fn accuracy(&self) -> f64 {
        if self.total_questions > 0 {
            self.correct_answers as f64 / self.total_questions as f64
        } else {
            0.0
        }
    }

    /// Accuracy rounded to a whole percentage, as shown on the home screen.
    pub fn accuracy_percent(&self) -> u32 {
        (self.accuracy() * 100.0).round() as u32
    }

    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, GameError> {
        Ok(serde_json::to_string(self)?)
    }
}
