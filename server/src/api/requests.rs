//! Request bodies for the `/api` routes.

use serde::Deserialize;

/// Body of `set-mode`. `mode` is parsed by hand so an unknown value yields a
/// structured error instead of a JSON rejection.
#[derive(Debug, Deserialize)]
pub struct SetModeRequest {
    pub game_id: String,
    #[serde(default)]
    pub mode: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct MakeMoveRequest {
    pub game_id: String,
    pub row: i64,
    pub col: i64,
}

/// Body of `game-state` and `reset`.
#[derive(Debug, Deserialize)]
pub struct GameIdRequest {
    pub game_id: String,
}
