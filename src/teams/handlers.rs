use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::repository::TeamRepository as _;
use super::service::TeamService;
use super::types::{TeamCreateRequest, TeamListQuery, TeamResponse};
use crate::shared::{AppError, AppState};
use crate::sport::Sport;

/// HTTP handler for registering a new team
///
/// POST /teams
#[instrument(name = "create_team", skip(state))]
pub async fn create_team(
    State(state): State<AppState>,
    Json(request): Json<TeamCreateRequest>,
) -> Result<Json<TeamResponse>, AppError> {
    info!(name = %request.name, sport = %request.sport, "Registering new team");

    let service = TeamService::new(
        Arc::clone(&state.team_repository),
        Arc::clone(&state.player_repository),
        Arc::clone(&state.match_repository),
    );
    let team = service.create_team(request).await?;

    info!(team_id = %team.id, "Team registered successfully");
    Ok(Json(team.into()))
}

/// HTTP handler for listing teams, optionally filtered by sport
///
/// GET /teams?sport=football
#[instrument(name = "list_teams", skip(state))]
pub async fn list_teams(
    State(state): State<AppState>,
    Query(query): Query<TeamListQuery>,
) -> Result<Json<Vec<TeamResponse>>, AppError> {
    let teams = match &query.sport {
        Some(raw) => {
            let sport = Sport::try_from(raw.as_str()).map_err(AppError::UnknownSport)?;
            state.team_repository.list_by_sport(sport).await?
        }
        None => state.team_repository.list_teams().await?,
    };

    info!(team_count = teams.len(), "Teams listed successfully");
    Ok(Json(teams.into_iter().map(Into::into).collect()))
}

/// HTTP handler for fetching a single team
///
/// GET /teams/{id}
#[instrument(name = "get_team", skip(state))]
pub async fn get_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<TeamResponse>, AppError> {
    let service = TeamService::new(
        Arc::clone(&state.team_repository),
        Arc::clone(&state.player_repository),
        Arc::clone(&state.match_repository),
    );
    let team = service.get_team(&team_id).await?;
    Ok(Json(team.into()))
}

/// HTTP handler for deleting a team and its roster
///
/// DELETE /teams/{id}
#[instrument(name = "delete_team", skip(state))]
pub async fn delete_team(
    State(state): State<AppState>,
    Path(team_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!(team_id = %team_id, "Deleting team");

    let service = TeamService::new(
        Arc::clone(&state.team_repository),
        Arc::clone(&state.player_repository),
        Arc::clone(&state.match_repository),
    );
    service.delete_team(&team_id).await?;

    Ok(Json(serde_json::json!({ "deleted": team_id })))
}
