use axum::{Json, extract::State, extract::rejection::JsonRejection};
use common::GameId;

use super::ApiError;
use super::requests::{GameIdRequest, MakeMoveRequest, SetModeRequest};
use super::responses::{
    GameStateResponse, HealthResponse, NewGameResponse, SetModeResponse,
};
use crate::web_server::WebServerState;

pub async fn health(State(state): State<WebServerState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        active_games: state.session_manager.session_count().await,
    })
}

/// The request body, if any, is ignored.
pub async fn new_game(State(state): State<WebServerState>) -> Json<NewGameResponse> {
    let game_id = state.session_manager.create_session().await;
    Json(NewGameResponse {
        game_id: game_id.into(),
    })
}

pub async fn set_mode(
    State(state): State<WebServerState>,
    payload: Result<Json<SetModeRequest>, JsonRejection>,
) -> Result<Json<SetModeResponse>, ApiError> {
    let Json(req) = payload?;
    state
        .session_manager
        .set_mode(&GameId::from(req.game_id), req.mode.as_deref())
        .await?;
    Ok(Json(SetModeResponse { ok: true }))
}

pub async fn make_move(
    State(state): State<WebServerState>,
    payload: Result<Json<MakeMoveRequest>, JsonRejection>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let Json(req) = payload?;
    let (snapshot, bot_move) = state
        .session_manager
        .make_move(&GameId::from(req.game_id), req.row, req.col)
        .await?;
    Ok(Json(GameStateResponse::new(&snapshot, bot_move)))
}

pub async fn game_state(
    State(state): State<WebServerState>,
    payload: Result<Json<GameIdRequest>, JsonRejection>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let Json(req) = payload?;
    let snapshot = state
        .session_manager
        .get_state(&GameId::from(req.game_id))
        .await?;
    Ok(Json(GameStateResponse::new(&snapshot, None)))
}

pub async fn reset(
    State(state): State<WebServerState>,
    payload: Result<Json<GameIdRequest>, JsonRejection>,
) -> Result<Json<GameStateResponse>, ApiError> {
    let Json(req) = payload?;
    let snapshot = state
        .session_manager
        .reset(&GameId::from(req.game_id))
        .await?;
    Ok(Json(GameStateResponse::new(&snapshot, None)))
}
