use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::sync::Arc;
use thiserror::Error;

use crate::matches::repository::MatchRepository;
use crate::players::repository::PlayerRepository;
use crate::teams::repository::TeamRepository;

/// Shared application state containing all dependencies
#[derive(Clone)]
pub struct AppState {
    pub match_repository: Arc<dyn MatchRepository + Send + Sync>,
    pub team_repository: Arc<dyn TeamRepository + Send + Sync>,
    pub player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl AppState {
    pub fn new(
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        team_repository: Arc<dyn TeamRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            match_repository,
            team_repository,
            player_repository,
        }
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    /// An unrecognized sport identifier reached the API. This is a caller
    /// bug, never silently mapped to a default ruleset.
    #[error("Unsupported sport: {0}")]
    UnknownSport(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Internal server error")]
    Internal,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match self {
            AppError::UnknownSport(sport) => (
                StatusCode::BAD_REQUEST,
                format!("Unsupported sport: {}", sport),
            ),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, msg),
            AppError::Repository(msg) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                format!("Repository error: {}", msg),
            ),
            AppError::Internal => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Internal server error".to_string(),
            ),
        };

        let body = Json(json!({
            "error": error_message
        }));

        (status, body).into_response()
    }
}
