use axum::Json;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::instrument;

use super::{Sport, SportRules};

/// One sport with its league rules, as served by `GET /sports`.
#[derive(Debug, Serialize)]
pub struct SportInfo {
    pub sport: Sport,
    pub rules: SportRules,
}

/// HTTP handler listing every sport and its rule configuration
///
/// GET /sports
#[instrument(name = "list_sports")]
pub async fn list_sports() -> Json<Vec<SportInfo>> {
    Json(
        Sport::iter()
            .map(|sport| SportInfo {
                sport,
                rules: sport.rules(),
            })
            .collect(),
    )
}
