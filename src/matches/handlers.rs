use axum::{
    extract::{Path, Query, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::repository::MatchRepository as _;
use super::service::MatchService;
use super::types::{
    MatchCreateRequest, MatchEditRequest, MatchListQuery, MatchResponse, ScoreUpdateRequest,
    StatusUpdateRequest,
};
use crate::shared::{AppError, AppState};
use crate::sport::Sport;

/// HTTP handler for creating a new match
///
/// POST /matches
/// Returns the created match with generated ID
#[instrument(name = "create_match", skip(state, request))]
pub async fn create_match(
    State(state): State<AppState>,
    Json(request): Json<MatchCreateRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    info!(sport = %request.sport, home = %request.home_team, away = %request.away_team, "Creating new match");

    let service = MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.team_repository),
    );
    let fixture = service.create_match(request).await?;

    info!(match_id = %fixture.id, "Match created successfully");
    Ok(Json(fixture.into()))
}

/// HTTP handler for listing matches, optionally filtered by sport and status
///
/// GET /matches?sport=football&status=live
#[instrument(name = "list_matches", skip(state))]
pub async fn list_matches(
    State(state): State<AppState>,
    Query(query): Query<MatchListQuery>,
) -> Result<Json<Vec<MatchResponse>>, AppError> {
    let matches = match &query.sport {
        Some(raw) => {
            let sport = Sport::try_from(raw.as_str()).map_err(AppError::UnknownSport)?;
            state.match_repository.list_by_sport(sport).await?
        }
        None => state.match_repository.list_matches().await?,
    };

    let matches: Vec<MatchResponse> = matches
        .into_iter()
        .filter(|m| query.status.map_or(true, |s| m.status == s))
        .map(Into::into)
        .collect();

    info!(match_count = matches.len(), "Matches listed successfully");
    Ok(Json(matches))
}

/// HTTP handler for fetching a single match
///
/// GET /matches/{id}
#[instrument(name = "get_match", skip(state))]
pub async fn get_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchResponse>, AppError> {
    let service = MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.team_repository),
    );
    let fixture = service.get_match(&match_id).await?;
    Ok(Json(fixture.into()))
}

/// HTTP handler for editing match details
///
/// PUT /matches/{id}
#[instrument(name = "edit_match", skip(state))]
pub async fn edit_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<MatchEditRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    info!(match_id = %match_id, "Editing match details");

    let service = MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.team_repository),
    );
    let fixture = service.edit_match(&match_id, request).await?;

    Ok(Json(fixture.into()))
}

/// HTTP handler for recording or correcting a scoreline
///
/// PUT /matches/{id}/score
#[instrument(name = "update_score", skip(state, request))]
pub async fn update_score(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<ScoreUpdateRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    info!(match_id = %match_id, home = request.home, away = request.away, "Updating match score");

    let service = MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.team_repository),
    );
    let fixture = service.update_score(&match_id, request).await?;

    Ok(Json(fixture.into()))
}

/// HTTP handler for moving a match between statuses
///
/// PUT /matches/{id}/status
#[instrument(name = "update_status", skip(state))]
pub async fn update_status(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
    Json(request): Json<StatusUpdateRequest>,
) -> Result<Json<MatchResponse>, AppError> {
    info!(match_id = %match_id, status = %request.status, "Updating match status");

    let service = MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.team_repository),
    );
    let fixture = service.update_status(&match_id, request).await?;

    Ok(Json(fixture.into()))
}

/// HTTP handler for deleting a match
///
/// DELETE /matches/{id}
#[instrument(name = "delete_match", skip(state))]
pub async fn delete_match(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<serde_json::Value>, AppError> {
    info!(match_id = %match_id, "Deleting match");

    let service = MatchService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.team_repository),
    );
    service.delete_match(&match_id).await?;

    Ok(Json(serde_json::json!({ "deleted": match_id })))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_utils::AppStateBuilder;
    use crate::teams::models::TeamModel;
    use crate::teams::repository::TeamRepository as _;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        routing::{get, post},
        Router,
    };
    use tower::ServiceExt; // for `oneshot`

    async fn app_with_two_football_teams() -> (Router, String, String) {
        let app_state = AppStateBuilder::new().build();

        let home = TeamModel::new("Engineering".to_string(), Sport::Football);
        let away = TeamModel::new("Science".to_string(), Sport::Football);
        app_state.team_repository.create_team(&home).await.unwrap();
        app_state.team_repository.create_team(&away).await.unwrap();

        let app = Router::new()
            .route("/matches", post(create_match).get(list_matches))
            .with_state(app_state);

        (app, home.id, away.id)
    }

    #[tokio::test]
    async fn test_create_match_handler() {
        let (app, home, away) = app_with_two_football_teams().await;

        let request_body = format!(
            r#"{{"sport": "football", "home_team": "{home}", "away_team": "{away}", "start_time": "2025-03-10T17:00:00Z"}}"#
        );
        let request = Request::builder()
            .method("POST")
            .uri("/matches")
            .header("content-type", "application/json")
            .body(Body::from(request_body))
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let match_response: MatchResponse = serde_json::from_slice(&body).unwrap();

        assert!(!match_response.id.is_empty());
        assert_eq!(match_response.sport, Sport::Football);
        assert_eq!(match_response.home_team, home);
    }

    #[tokio::test]
    async fn test_list_matches_rejects_unknown_sport() {
        let (app, _, _) = app_with_two_football_teams().await;

        let request = Request::builder()
            .method("GET")
            .uri("/matches?sport=quidditch")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_get_match_not_found() {
        let app_state = AppStateBuilder::new().build();
        let app = Router::new()
            .route("/matches/:id", get(get_match))
            .with_state(app_state);

        let request = Request::builder()
            .method("GET")
            .uri("/matches/missing-id")
            .body(Body::empty())
            .unwrap();

        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
