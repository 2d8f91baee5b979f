use std::future::Future;
use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use common::log;
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::api::handlers;
use crate::game_session_manager::GameSessionManager;

#[derive(Clone)]
pub struct WebServerState {
    pub session_manager: GameSessionManager,
}

pub fn create_app(state: WebServerState, static_files_path: Option<&Path>) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let api = Router::new()
        .route("/new-game", post(handlers::new_game))
        .route("/set-mode", post(handlers::set_mode))
        .route("/make-move", post(handlers::make_move))
        .route("/game-state", post(handlers::game_state))
        .route("/reset", post(handlers::reset));

    let mut app = Router::new()
        .route("/health", get(handlers::health))
        .nest("/api", api);

    if let Some(path) = static_files_path {
        app = app.fallback_service(ServeDir::new(path));
    }

    app.layer(cors).with_state(state)
}

pub async fn run_web_server(
    state: WebServerState,
    bind_address: &str,
    static_files_path: Option<&Path>,
    shutdown_signal: impl Future<Output = ()> + Send + 'static,
) -> std::io::Result<()> {
    let app = create_app(state, static_files_path);

    let listener = tokio::net::TcpListener::bind(bind_address).await?;
    log!("Web server listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::responses::{
        ErrorResponse, GameStateResponse, HealthResponse, NewGameResponse, SetModeResponse,
    };
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use common::games::tictactoe::BotType;
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn create_test_app() -> Router {
        let state = WebServerState {
            session_manager: GameSessionManager::new(BotType::Heuristic),
        };
        create_app(state, None)
    }

    async fn post_json(app: &Router, uri: &str, json: &str) -> (StatusCode, String) {
        let response = app
            .clone()
            .oneshot(
                Request::builder()
                    .method("POST")
                    .uri(uri)
                    .header("content-type", "application/json")
                    .body(Body::from(json.to_string()))
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = response.into_body().collect().await.unwrap().to_bytes();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    async fn new_game(app: &Router, mode: &str) -> String {
        let (status, body) = post_json(app, "/api/new-game", "{}").await;
        assert_eq!(status, StatusCode::OK);
        let game_id = serde_json::from_str::<NewGameResponse>(&body).unwrap().game_id;

        let (status, body) = post_json(
            app,
            "/api/set-mode",
            &format!(r#"{{"game_id": "{}", "mode": "{}"}}"#, game_id, mode),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        assert!(serde_json::from_str::<SetModeResponse>(&body).unwrap().ok);

        game_id
    }

    async fn make_move(app: &Router, game_id: &str, row: i64, col: i64) -> (StatusCode, String) {
        post_json(
            app,
            "/api/make-move",
            &format!(r#"{{"game_id": "{}", "row": {}, "col": {}}}"#, game_id, row, col),
        )
        .await
    }

    async fn game_state(app: &Router, game_id: &str) -> GameStateResponse {
        let (status, body) = post_json(
            app,
            "/api/game-state",
            &format!(r#"{{"game_id": "{}"}}"#, game_id),
        )
        .await;
        assert_eq!(status, StatusCode::OK);
        serde_json::from_str(&body).unwrap()
    }

    #[tokio::test]
    async fn test_health_reports_active_games() {
        let app = create_test_app();
        new_game(&app, "friend").await;

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body = response.into_body().collect().await.unwrap().to_bytes();
        let health: HealthResponse = serde_json::from_slice(&body).unwrap();

        assert_eq!(health.status, "ok");
        assert_eq!(health.active_games, 1);
    }

    #[tokio::test]
    async fn test_new_game_state_is_empty() {
        let app = create_test_app();
        let (_, body) = post_json(&app, "/api/new-game", "").await;
        let game_id = serde_json::from_str::<NewGameResponse>(&body).unwrap().game_id;

        let state = game_state(&app, &game_id).await;

        let empty: Vec<Vec<Option<String>>> = vec![vec![None; 3]; 3];
        assert_eq!(state.board, empty);
        assert_eq!(state.current_player, "X");
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.game_mode, None);
        assert_eq!(state.bot_move, None);
    }

    #[tokio::test]
    async fn test_friend_game_reports_winner() {
        let app = create_test_app();
        let game_id = new_game(&app, "friend").await;

        let mut last = String::new();
        for (row, col) in [(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)] {
            let (status, body) = make_move(&app, &game_id, row, col).await;
            assert_eq!(status, StatusCode::OK);
            last = body;
        }

        let state: GameStateResponse = serde_json::from_str(&last).unwrap();
        assert!(state.game_over);
        assert_eq!(state.winner.as_deref(), Some("X"));
        assert_eq!(state.board[0], vec![Some("X".to_string()); 3]);
        assert_eq!(state.winning_line.map(|line| line.len()), Some(3));
    }

    #[tokio::test]
    async fn test_bot_game_includes_bot_move() {
        let app = create_test_app();
        let game_id = new_game(&app, "bot").await;

        let (status, body) = make_move(&app, &game_id, 0, 0).await;

        assert_eq!(status, StatusCode::OK);
        let state: GameStateResponse = serde_json::from_str(&body).unwrap();
        let bot_move = state.bot_move.unwrap();
        assert_eq!((bot_move.row, bot_move.col), (1, 1));
        assert_eq!(state.board[1][1].as_deref(), Some("O"));
        assert_eq!(state.current_player, "X");
        assert_eq!(state.game_mode.as_deref(), Some("bot"));
    }

    #[tokio::test]
    async fn test_unknown_game_is_not_found() {
        let app = create_test_app();

        let (status, body) = make_move(&app, "no-such-game", 0, 0).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(error.error, "Game not found: no-such-game");
    }

    #[tokio::test]
    async fn test_unknown_game_wins_over_bad_request_fields() {
        let app = create_test_app();

        let (status, body) = make_move(&app, "no-such-game", -1, 0).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(error.error, "Game not found: no-such-game");

        for json in [
            r#"{"game_id": "no-such-game"}"#,
            r#"{"game_id": "no-such-game", "mode": "robot"}"#,
        ] {
            let (status, body) = post_json(&app, "/api/set-mode", json).await;
            assert_eq!(status, StatusCode::NOT_FOUND);
            let error: ErrorResponse = serde_json::from_str(&body).unwrap();
            assert_eq!(error.error, "Game not found: no-such-game");
        }
    }

    #[tokio::test]
    async fn test_malformed_bodies_get_json_errors() {
        let app = create_test_app();
        let game_id = new_game(&app, "friend").await;

        let incomplete = format!(r#"{{"game_id": "{}", "row": 1}}"#, game_id);
        let cases = [
            ("/api/make-move", incomplete.as_str()),
            ("/api/make-move", "not json"),
            ("/api/game-state", "{}"),
            ("/api/reset", r#"{"game_id": 7}"#),
        ];
        for (uri, json) in cases {
            let (status, body) = post_json(&app, uri, json).await;
            assert!(status.is_client_error(), "{uri} returned {status}");
            let error: ErrorResponse = serde_json::from_str(&body).unwrap();
            assert!(error.error.starts_with("Invalid request body"), "{}", error.error);
        }

        let state = game_state(&app, &game_id).await;
        assert!(state.board.iter().flatten().all(|cell| cell.is_none()));
    }

    #[tokio::test]
    async fn test_invalid_moves_leave_board_unchanged() {
        let app = create_test_app();
        let game_id = new_game(&app, "friend").await;
        make_move(&app, &game_id, 1, 1).await;

        for (row, col) in [(1, 1), (3, 0), (-1, 2)] {
            let (status, body) = make_move(&app, &game_id, row, col).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            let error: ErrorResponse = serde_json::from_str(&body).unwrap();
            assert!(error.error.starts_with("Invalid move"));
        }

        let state = game_state(&app, &game_id).await;
        assert_eq!(state.board[1][1].as_deref(), Some("X"));
        assert_eq!(state.current_player, "O");
        let marked = state.board.iter().flatten().filter(|cell| cell.is_some()).count();
        assert_eq!(marked, 1);
    }

    #[tokio::test]
    async fn test_move_before_mode_is_rejected() {
        let app = create_test_app();
        let (_, body) = post_json(&app, "/api/new-game", "{}").await;
        let game_id = serde_json::from_str::<NewGameResponse>(&body).unwrap().game_id;

        let (status, body) = make_move(&app, &game_id, 0, 0).await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(error.error, "Game mode has not been selected");
    }

    #[tokio::test]
    async fn test_set_mode_rejects_missing_and_unknown_modes() {
        let app = create_test_app();
        let game_id = new_game(&app, "friend").await;

        let (status, _) = post_json(
            &app,
            "/api/set-mode",
            &format!(r#"{{"game_id": "{}"}}"#, game_id),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, body) = post_json(
            &app,
            "/api/set-mode",
            &format!(r#"{{"game_id": "{}", "mode": "robot"}}"#, game_id),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorResponse = serde_json::from_str(&body).unwrap();
        assert_eq!(error.error, "Unknown game mode: robot");

        assert_eq!(game_state(&app, &game_id).await.game_mode.as_deref(), Some("friend"));
    }

    #[tokio::test]
    async fn test_reset_after_tie_keeps_mode() {
        let app = create_test_app();
        let game_id = new_game(&app, "friend").await;
        let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)];
        let mut last = String::new();
        for (row, col) in moves {
            last = make_move(&app, &game_id, row, col).await.1;
        }
        let tied: GameStateResponse = serde_json::from_str(&last).unwrap();
        assert_eq!(tied.winner.as_deref(), Some("Tie"));

        let (status, body) = post_json(
            &app,
            "/api/reset",
            &format!(r#"{{"game_id": "{}"}}"#, game_id),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        let state: GameStateResponse = serde_json::from_str(&body).unwrap();
        let empty: Vec<Vec<Option<String>>> = vec![vec![None; 3]; 3];
        assert_eq!(state.board, empty);
        assert_eq!(state.current_player, "X");
        assert!(!state.game_over);
        assert_eq!(state.winner, None);
        assert_eq!(state.game_mode.as_deref(), Some("friend"));
    }
}
