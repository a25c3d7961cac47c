use axum::{
    extract::{Path, State},
    Json,
};
use tracing::{info, instrument};

use super::engine::compute_standings;
use super::models::TeamStanding;
use crate::matches::repository::MatchRepository as _;
use crate::shared::{AppError, AppState};
use crate::sport::Sport;

/// HTTP handler for the points table of one sport
///
/// GET /standings/{sport}
/// The table is recomputed from the current match snapshot on every request.
#[instrument(name = "get_standings", skip(state))]
pub async fn get_standings(
    State(state): State<AppState>,
    Path(sport): Path<String>,
) -> Result<Json<Vec<TeamStanding>>, AppError> {
    let sport = Sport::try_from(sport.as_str()).map_err(AppError::UnknownSport)?;

    let matches = state.match_repository.list_by_sport(sport).await?;
    let table = compute_standings(&matches, sport);

    info!(sport = %sport, team_count = table.len(), "Standings computed");
    Ok(Json(table))
}
