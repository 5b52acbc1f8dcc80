//! localStorage persistence for the statistics snapshot and answer log.
use log::warn;
use wasm_bindgen::prelude::*;
use web_sys::{Storage, window};

use crate::history::{AnswerRecord, append_record};
use crate::stats::GameStats;

fn local_storage() -> Result<Storage, JsValue> {
    window()
        .ok_or_else(|| JsValue::from_str("no window"))?
        .local_storage()?
        .ok_or_else(|| JsValue::from_str("localStorage unavailable"))
}

/// Saved snapshot under `key`, or a fresh one if nothing usable is stored.
pub(crate) fn load_stats(key: &str) -> GameStats {
    let raw = match local_storage().and_then(|s| s.get_item(key)) {
        Ok(raw) => raw,
        Err(e) => {
            warn!(target: "storage", "cannot read '{}': {:?}", key, e);
            None
        }
    };
    match raw.as_deref().map(GameStats::from_json) {
        Some(Ok(stats)) => stats,
        Some(Err(e)) => {
            warn!(target: "storage", "ignoring unreadable snapshot '{}': {}", key, e);
            GameStats::default()
        }
        None => GameStats::default(),
    }
}

pub(crate) fn save_stats(key: &str, stats: &GameStats) -> Result<(), JsValue> {
    local_storage()?.set_item(key, &stats.to_json()?)
}

pub(crate) fn append_history(key: &str, record: &AnswerRecord) -> Result<(), JsValue> {
    let storage = local_storage()?;
    let existing = storage.get_item(key)?;
    let updated = append_record(existing.as_deref(), record)?;
    storage.set_item(key, &updated)
}
