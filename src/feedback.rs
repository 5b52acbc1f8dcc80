//! Encouragement text and per-mode titles shown around a round.

use rand::Rng;
use rand::seq::SliceRandom;

use crate::question::ProblemKind;

pub const CORRECT_MESSAGES: &[&str] = &[
    "Outstanding! You're a math superstar! 🌟",
    "Perfect! Amazing calculation! ⭐",
    "Brilliant work! Keep it up! 🎉",
    "Excellent! You've got this! 👏",
    "Fantastic! Math genius in action! 🧠",
    "Incredible! You're unstoppable! 🚀",
    "Wonderful! Math mastery! 💫",
    "Superb! You're on fire! 🔥",
    "Awesome! Keep shining bright! ✨",
];

pub const INCORRECT_MESSAGES: &[&str] = &[
    "Good effort! Every mistake helps you learn! 😊",
    "Nice try! You're getting stronger! 💪",
    "Keep going! Practice makes perfect! 🌈",
    "Great attempt! Learning is a journey! 🚀",
    "Don't give up! You're improving! 📚",
    "Well tried! Next one will be easier! ⭐",
    "Good thinking! Math takes practice! 🎯",
    "Almost there! You're doing great! 🌟",
    "Oops! Mistakes are part of learning! Keep it up! 💖",
];

/// Random encouragement for an answer outcome.
pub fn encouragement<R: Rng + ?Sized>(correct: bool, rng: &mut R) -> &'static str {
    let pool = if correct { CORRECT_MESSAGES } else { INCORRECT_MESSAGES };
    // Pools are non-empty constants.
    pool.choose(rng).copied().unwrap_or_default()
}

pub fn mode_title(kind: ProblemKind) -> &'static str {
    match kind {
        ProblemKind::Addition => "➕ Addition Challenge!",
        ProblemKind::Subtraction => "➖ Subtraction Quest!",
        ProblemKind::Multiplication => "✖️ Multiplication Master!",
        ProblemKind::Division => "➗ Division Detective!",
        ProblemKind::Comparison => "⚖️ Number Comparison!",
    }
}
