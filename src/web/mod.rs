//! Browser surface: `#[wasm_bindgen]` functions the host page calls.
//!
//! A single session lives in a thread-local (the page's main thread is the only
//! one). Structured values cross the boundary as JSON strings. Every answer
//! persists the snapshot and appends to the answer log in localStorage, then
//! schedules the next question after `GameConfig::next_question_delay_ms`.

mod storage;

use std::cell::RefCell;
use std::fmt;

use log::{debug, warn};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::Serialize;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::window;

use crate::GameError;
use crate::config::GameConfig;
use crate::difficulty::resolve_difficulty;
use crate::feedback;
use crate::pet::PetStatus;
use crate::progress::level_progress as progress_of;
use crate::question::ProblemKind;
use crate::session::{AnswerOutcome, GameSession, Screen};

struct WebState {
    session: GameSession,
    config: GameConfig,
    rng: StdRng,
}

impl WebState {
    fn load(config: GameConfig) -> Self {
        let stats = storage::load_stats(&config.stats_key);
        debug!(target: "web", "loaded snapshot: level {} with {} stars", stats.level, stats.stars);
        Self {
            session: GameSession::new(stats),
            config,
            rng: StdRng::from_entropy(),
        }
    }

    fn persist(&self) -> Result<(), JsValue> {
        storage::save_stats(&self.config.stats_key, self.session.stats())
    }

    /// Score an answer, then run the follow-up steps (save, log, timer).
    /// Once the answer is scored the outcome is always returned; a failed step
    /// is logged so the page can still show the result.
    fn answer<E: fmt::Debug>(
        &mut self,
        answer: i32,
        now: u64,
        followups: impl FnOnce(&Self, &AnswerOutcome) -> Vec<(&'static str, Result<(), E>)>,
    ) -> Result<AnswerOutcome, GameError> {
        let outcome = self.session.submit(answer, now, &mut self.rng)?.clone();
        for (step, result) in followups(self, &outcome) {
            if let Err(e) = result {
                warn!(target: "web", "{} failed after answer #{}: {:?}", step, outcome.question_id, e);
            }
        }
        Ok(outcome)
    }
}

thread_local! {
    static GAME_STATE: RefCell<Option<WebState>> = const { RefCell::new(None) };
}

fn with_state<T>(f: impl FnOnce(&mut WebState) -> Result<T, JsValue>) -> Result<T, JsValue> {
    GAME_STATE.with(|cell| {
        let mut slot = cell.borrow_mut();
        let state = slot.get_or_insert_with(|| WebState::load(GameConfig::default()));
        f(state)
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

// --- Configuration ------------------------------------------------------------

/// Apply host configuration (JSON, camelCase keys). Reloads the snapshot from
/// the configured storage key, so call it before starting a round.
#[wasm_bindgen]
pub fn configure(config_json: &str) -> Result<(), JsValue> {
    let config = GameConfig::from_json(config_json)?;
    GAME_STATE.with(|cell| {
        cell.replace(Some(WebState::load(config)));
    });
    Ok(())
}

// --- Rounds -------------------------------------------------------------------

#[wasm_bindgen]
pub fn start_game(mode: &str) -> Result<String, JsValue> {
    let mode: ProblemKind = mode.parse()?;
    with_state(|state| to_json(state.session.start(mode, &mut state.rng)))
}

/// Score an answer, persist the result and queue the next question.
#[wasm_bindgen]
pub fn submit_answer(answer: i32) -> Result<String, JsValue> {
    let now = js_sys::Date::now() as u64;
    with_state(|state| {
        let outcome = state.answer(answer, now, |state, outcome| {
            vec![
                ("saving stats", state.persist()),
                ("answer log", storage::append_history(&state.config.history_key, &outcome.record)),
                (
                    "next question timer",
                    schedule_next_question(state.config.next_question_delay_ms, outcome.question_id),
                ),
            ]
        })?;
        to_json(&outcome)
    })
}

/// Advance immediately instead of waiting for the timer.
#[wasm_bindgen]
pub fn next_question() -> Result<String, JsValue> {
    with_state(|state| to_json(state.session.advance(&mut state.rng)))
}

#[wasm_bindgen]
pub fn current_question() -> Result<Option<String>, JsValue> {
    with_state(|state| state.session.current().map(to_json).transpose())
}

#[wasm_bindgen]
pub fn current_outcome() -> Result<Option<String>, JsValue> {
    with_state(|state| state.session.outcome().map(to_json).transpose())
}

#[wasm_bindgen]
pub fn go_home() -> Result<(), JsValue> {
    with_state(|state| {
        state.session.go_home();
        Ok(())
    })
}

fn schedule_next_question(delay_ms: u32, answered_id: u64) -> Result<(), JsValue> {
    let win = window().ok_or_else(|| JsValue::from_str("no window"))?;
    let callback = Closure::once_into_js(move || {
        GAME_STATE.with(|cell| {
            if let Some(state) = cell.borrow_mut().as_mut() {
                // Skip if the player left the round or already moved on.
                let still_showing = state.session.outcome().map(|o| o.question_id) == Some(answered_id);
                if still_showing && state.session.screen() == Screen::Game {
                    state.session.advance(&mut state.rng);
                }
            }
        });
    });
    win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        delay_ms.min(i32::MAX as u32) as i32,
    )?;
    Ok(())
}

// --- Home screen & pet --------------------------------------------------------

#[wasm_bindgen]
pub fn toggle_sound() -> Result<bool, JsValue> {
    with_state(|state| Ok(state.session.toggle_sound()))
}

/// Cycle to the next pet and return its name.
#[wasm_bindgen]
pub fn change_pet() -> Result<String, JsValue> {
    with_state(|state| {
        let pet = state.session.change_pet();
        state.persist()?;
        Ok(pet.name().to_string())
    })
}

#[wasm_bindgen]
pub fn current_stats() -> Result<String, JsValue> {
    with_state(|state| Ok(state.session.stats().to_json()?))
}

#[wasm_bindgen]
pub fn difficulty_range() -> Result<String, JsValue> {
    with_state(|state| to_json(&resolve_difficulty(state.session.stats())))
}

#[wasm_bindgen]
pub fn pet_status() -> Result<String, JsValue> {
    with_state(|state| to_json(&PetStatus::from_stats(state.session.stats())))
}

#[wasm_bindgen]
pub fn level_progress() -> Result<String, JsValue> {
    with_state(|state| to_json(&progress_of(state.session.stats())))
}

#[wasm_bindgen]
pub fn mode_title(mode: &str) -> Result<String, JsValue> {
    let mode: ProblemKind = mode.parse()?;
    Ok(feedback::mode_title(mode).to_string())
}
