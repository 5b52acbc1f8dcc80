//! Math Kingdom core crate.
//!
//! Arithmetic practice rounds for kids: question generation per problem type,
//! difficulty that follows the player's level and accuracy, star/level/streak
//! scoring, and a virtual pet whose mood tracks performance.
//!
//! Everything outside `web` is plain Rust with randomness passed in, so it runs
//! under `cargo test` on the host. `web` wires a session to the page and to
//! localStorage.

use wasm_bindgen::prelude::*;

pub mod config;
pub mod difficulty;
mod error;
pub mod feedback;
pub mod history;
pub mod pet;
pub mod progress;
pub mod question;
pub mod session;
pub mod stats;
pub mod web;

pub use config::GameConfig;
pub use difficulty::{DifficultyLabel, DifficultyRange, resolve_difficulty};
pub use error::GameError;
pub use history::AnswerRecord;
pub use pet::{PetMood, PetStatus, PetType};
pub use progress::{LevelProgress, apply_result, level_progress, stars_for};
pub use question::{ProblemKind, Question, generate};
pub use session::{AnswerOutcome, GameSession, Screen};
pub use stats::GameStats;

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
    wasm_logger::init(wasm_logger::Config::default());
}
