use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::repository::PlayerRepository as _;
use super::service::PlayerService;
use super::types::{NameUpdateRequest, PlayerCreateRequest, PlayerResponse, StatsUpdateRequest};
use crate::shared::{AppError, AppState};

/// HTTP handler for adding a player to a roster
///
/// POST /players
#[instrument(name = "create_player", skip(state))]
pub async fn create_player(
    State(state): State<AppState>,
    Json(request): Json<PlayerCreateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    info!(name = %request.name, team_id = %request.team_id, "Adding player to roster");

    let service = PlayerService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.team_repository),
    );
    let player = service.create_player(request).await?;

    info!(player_id = %player.id, "Player added successfully");
    Ok(Json(player.into()))
}

/// HTTP handler for listing a team's roster
///
/// GET /teams/{id}/players
#[instrument(name = "list_team_players", skip(state))]
pub async fn list_team_players(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<Vec<PlayerResponse>>, AppError> {
    let roster = state.player_repository.list_by_team(&team_id).await?;

    info!(team_id = %team_id, player_count = roster.len(), "Roster listed successfully");
    Ok(Json(roster.into_iter().map(Into::into).collect()))
}

/// HTTP handler for replacing a player's stat sheet
///
/// PUT /players/{id}/stats
#[instrument(name = "update_player_stats", skip(state, request))]
pub async fn update_player_stats(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(request): Json<StatsUpdateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    info!(player_id = %player_id, "Updating player stats");

    let service = PlayerService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.team_repository),
    );
    let player = service.update_stats(&player_id, request).await?;

    Ok(Json(player.into()))
}

/// HTTP handler for renaming a player
///
/// PUT /players/{id}/name
#[instrument(name = "update_player_name", skip(state))]
pub async fn update_player_name(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
    Json(request): Json<NameUpdateRequest>,
) -> Result<Json<PlayerResponse>, AppError> {
    let service = PlayerService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.team_repository),
    );
    let player = service.update_name(&player_id, request).await?;
    Ok(Json(player.into()))
}

/// HTTP handler for removing a player
///
/// DELETE /players/{id}
#[instrument(name = "delete_player", skip(state))]
pub async fn delete_player(
    State(state): State<AppState>,
    Path(player_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!(player_id = %player_id, "Deleting player");

    let service = PlayerService::new(
        Arc::clone(&state.player_repository),
        Arc::clone(&state.team_repository),
    );
    service.delete_player(&player_id).await?;

    Ok(Json(serde_json::json!({ "deleted": player_id })))
}
