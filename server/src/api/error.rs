use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{GameError, log};

use super::responses::ErrorResponse;

/// Every failure leaves the API as `{ "error": ... }` with a matching status code.
#[derive(Debug)]
pub enum ApiError {
    Game(GameError),
    /// Body missing, not JSON, or not the expected shape.
    InvalidBody(JsonRejection),
}

impl From<GameError> for ApiError {
    fn from(err: GameError) -> Self {
        Self::Game(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::InvalidBody(rejection)
    }
}

impl ApiError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Game(GameError::UnknownGameId(_)) => StatusCode::NOT_FOUND,
            Self::Game(
                GameError::InvalidMove(_) | GameError::MissingMode | GameError::UnknownMode(_),
            ) => StatusCode::BAD_REQUEST,
            Self::InvalidBody(rejection) => rejection.status(),
        }
    }

    pub fn message(&self) -> String {
        match self {
            Self::Game(err) => err.to_string(),
            Self::InvalidBody(rejection) => format!("Invalid request body: {}", rejection.body_text()),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let error = self.message();
        log!("Request rejected: {}", error);
        (self.status_code(), Json(ErrorResponse { error })).into_response()
    }
}
