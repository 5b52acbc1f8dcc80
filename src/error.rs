//! Error type shared by the session, storage and WASM surface.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("no question is currently being asked")]
    NoActiveQuestion,
    #[error("question {0} has already been answered")]
    AlreadyAnswered(u64),
    #[error("unknown problem type '{0}'")]
    UnknownProblemKind(String),
    #[error("malformed game data: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<GameError> for wasm_bindgen::JsValue {
    fn from(e: GameError) -> Self {
        wasm_bindgen::JsValue::from_str(&e.to_string())
    }
}
