//! Virtual pet: selectable species, names and mood tiers.

use serde::{Deserialize, Serialize};

use crate::difficulty::{DifficultyLabel, resolve_difficulty};
use crate::stats::GameStats;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetType {
    #[default]
    Cat,
    Dog,
    Hamster,
    Rabbit,
}

/// Cycle order used by the "change pet" button.
pub const PET_ORDER: [PetType; 4] = [PetType::Cat, PetType::Dog, PetType::Hamster, PetType::Rabbit];

impl PetType {
    pub fn next(self) -> PetType {
        let idx = PET_ORDER.iter().position(|&p| p == self).unwrap_or(0);
        PET_ORDER[(idx + 1) % PET_ORDER.len()]
    }

    pub fn name(self) -> &'static str {
        match self {
            PetType::Cat => "Fluffy",
            PetType::Dog => "Buddy",
            PetType::Hamster => "Nibbles",
            PetType::Rabbit => "Bunny",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PetMood {
    Ecstatic,
    VeryHappy,
    Happy,
    NeedsCare,
}

impl PetMood {
    pub fn from_happiness(happiness: u32) -> PetMood {
        match happiness {
            81.. => PetMood::Ecstatic,
            61..=80 => PetMood::VeryHappy,
            31..=60 => PetMood::Happy,
            _ => PetMood::NeedsCare,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            PetMood::Ecstatic => "Extremely Happy!",
            PetMood::VeryHappy => "Very Happy!",
            PetMood::Happy => "Happy",
            PetMood::NeedsCare => "Needs Care",
        }
    }

    pub fn emoji(self) -> &'static str {
        match self {
            PetMood::Ecstatic => "😻",
            PetMood::VeryHappy => "😸",
            PetMood::Happy => "😺",
            PetMood::NeedsCare => "😿",
        }
    }
}

/// Everything the pet panel displays, derived from a snapshot.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PetStatus {
    pub pet_type: PetType,
    pub name: &'static str,
    pub mood: PetMood,
    pub mood_label: &'static str,
    pub emoji: &'static str,
    pub happiness: u32,
    pub difficulty: DifficultyLabel,
    pub range_min: i32,
    pub range_max: i32,
}

impl PetStatus {
    pub fn from_stats(stats: &GameStats) -> Self {
        let mood = PetMood::from_happiness(stats.pet_happiness);
        let range = resolve_difficulty(stats);
        Self {
            pet_type: stats.pet_type,
            name: stats.pet_type.name(),
            mood,
            mood_label: mood.label(),
            emoji: mood.emoji(),
            happiness: stats.pet_happiness,
            difficulty: range.label,
            range_min: range.min,
            range_max: range.max,
        }
    }
}
