use axum::{
    routing::{delete, get, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::shared::AppState;
use crate::{matches, players, scoring, sport, standings, teams};

/// Build the full application router. Shared between `main` and the
/// integration tests.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(|| async { "SportsHub tournament API" }))
        .route("/sports", get(sport::list_sports))
        .route("/standings/:sport", get(standings::get_standings))
        .route(
            "/matches",
            post(matches::create_match).get(matches::list_matches),
        )
        .route(
            "/matches/:id",
            get(matches::get_match)
                .put(matches::edit_match)
                .delete(matches::delete_match),
        )
        .route("/matches/:id/score", put(matches::update_score))
        .route("/matches/:id/status", put(matches::update_status))
        .route(
            "/matches/:id/recalculate-score",
            post(scoring::recalculate_score),
        )
        .route("/teams", post(teams::create_team).get(teams::list_teams))
        .route(
            "/teams/:id",
            get(teams::get_team).delete(teams::delete_team),
        )
        .route("/teams/:id/players", get(players::list_team_players))
        .route("/players", post(players::create_player))
        .route("/players/:id", delete(players::delete_player))
        .route("/players/:id/stats", put(players::update_player_stats))
        .route("/players/:id/name", put(players::update_player_name))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
