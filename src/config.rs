//! Runtime tunables for the browser host.

use serde::{Deserialize, Serialize};

use crate::GameError;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GameConfig {
    /// Pause between showing a result and the next question.
    pub next_question_delay_ms: u32,
    /// localStorage key for the statistics snapshot.
    pub stats_key: String,
    /// localStorage key for the answer log.
    pub history_key: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            next_question_delay_ms: 2500,
            stats_key: "stats".to_string(),
            history_key: "answers".to_string(),
        }
    }
}

impl GameConfig {
    pub fn from_json(json: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(json)?)
    }
}
