//! Scoring: turns one answered question into the next statistics snapshot.

use log::{debug, info};
use serde::Serialize;

use crate::difficulty::resolve_difficulty;
use crate::question::ProblemKind;
use crate::stats::{GameStats, MAX_HAPPINESS};

/// Stars needed per level: reaching `level * STARS_PER_LEVEL` advances a level.
pub const STARS_PER_LEVEL: u32 = 15;
pub const HAPPINESS_GAIN: u32 = 5;
pub const HAPPINESS_LOSS: u32 = 2;

/// Stars a correct answer of this kind is worth.
pub fn stars_for(kind: ProblemKind) -> u32 {
    match kind {
        ProblemKind::Multiplication | ProblemKind::Division => 2,
        ProblemKind::Addition | ProblemKind::Subtraction | ProblemKind::Comparison => 1,
    }
}

/// Next snapshot after answering a question of `kind`.
///
/// Deterministic: identical inputs always give identical output. Levels go up
/// by at most one per answer, even if the star total would cover more.
pub fn apply_result(prev: &GameStats, kind: ProblemKind, correct: bool) -> GameStats {
    let mut next = prev.clone();
    // Saved snapshots are untrusted, so counters saturate instead of wrapping.
    next.total_questions = next.total_questions.saturating_add(1);
    if correct {
        next.correct_answers = next.correct_answers.saturating_add(1);
        next.current_streak = next.current_streak.saturating_add(1);
        next.stars = next.stars.saturating_add(stars_for(kind));
        next.pet_happiness = next.pet_happiness.min(MAX_HAPPINESS).saturating_add(HAPPINESS_GAIN).min(MAX_HAPPINESS);
    } else {
        next.current_streak = 0;
        next.pet_happiness = next.pet_happiness.min(MAX_HAPPINESS).saturating_sub(HAPPINESS_LOSS);
    }
    next.best_streak = next.best_streak.max(next.current_streak);

    if next.stars >= next.level.saturating_mul(STARS_PER_LEVEL) {
        next.level = next.level.saturating_add(1);
        info!(target: "progress", "level up: {} -> {} ({} stars)", prev.level, next.level, next.stars);
    }

    next.difficulty = resolve_difficulty(&next).label;
    if next.difficulty != prev.difficulty {
        debug!(target: "progress", "difficulty {} -> {}", prev.difficulty, next.difficulty);
    }
    next
}

/// Stars collected toward the next level, as shown on the progress bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct LevelProgress {
    pub stars: u32,
    pub needed: u32,
}

impl LevelProgress {
    pub fn fraction(&self) -> f64 {
        self.stars as f64 / self.needed as f64
    }
}

pub fn level_progress(stats: &GameStats) -> LevelProgress {
    LevelProgress {
        stars: stats.stars % STARS_PER_LEVEL,
        needed: STARS_PER_LEVEL,
    }
}
