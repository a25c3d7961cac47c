use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::{info, instrument};

use super::service::ScoringService;
use crate::matches::types::MatchResponse;
use crate::shared::{AppError, AppState};

/// HTTP handler for re-deriving a match's score from its underlying records
///
/// POST /matches/{id}/recalculate-score
#[instrument(name = "recalculate_score", skip(state))]
pub async fn recalculate_score(
    State(state): State<AppState>,
    Path(match_id): Path<String>,
) -> Result<Json<MatchResponse>, AppError> {
    info!(match_id = %match_id, "Recalculating match score");

    let service = ScoringService::new(
        Arc::clone(&state.match_repository),
        Arc::clone(&state.player_repository),
    );
    let fixture = service.recalculate_match_score(&match_id).await?;

    Ok(Json(fixture.into()))
}
