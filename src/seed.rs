//! Demo fixtures for running the server without a real data source.
//! Fixed teams and matches across a few sports, no randomness.

use chrono::{TimeZone, Utc};
use tracing::info;

use crate::matches::models::{MatchModel, MatchScore, MatchStatus};
use crate::matches::repository::MatchRepository as _;
use crate::shared::{AppError, AppState};
use crate::sport::Sport;
use crate::teams::models::TeamModel;
use crate::teams::repository::TeamRepository as _;

/// Populate the repositories with a small festival fixture set.
pub async fn seed_demo_data(state: &AppState) -> Result<(), AppError> {
    let football = [
        TeamModel::new("Engineering".to_string(), Sport::Football),
        TeamModel::new("Science".to_string(), Sport::Football),
        TeamModel::new("Arts".to_string(), Sport::Football),
        TeamModel::new("Commerce".to_string(), Sport::Football),
    ];
    let basketball = [
        TeamModel::new("Engineering".to_string(), Sport::Basketball),
        TeamModel::new("Science".to_string(), Sport::Basketball),
    ];

    for team in football.iter().chain(basketball.iter()) {
        state.team_repository.create_team(team).await?;
    }

    let day = |d, h| Utc.with_ymd_and_hms(2025, 3, d, h, 0, 0).unwrap();

    let mut opener = MatchModel::new(
        Sport::Football,
        football[0].id.clone(),
        football[1].id.clone(),
        day(10, 16),
        Some("Main Ground".to_string()),
    );
    opener.score = MatchScore::Played { home: 2, away: 1 };
    opener.status = MatchStatus::Completed;

    let mut second = MatchModel::new(
        Sport::Football,
        football[2].id.clone(),
        football[3].id.clone(),
        day(10, 18),
        Some("Main Ground".to_string()),
    );
    second.score = MatchScore::Played { home: 1, away: 1 };
    second.status = MatchStatus::Completed;

    let mut running = MatchModel::new(
        Sport::Football,
        football[0].id.clone(),
        football[2].id.clone(),
        day(11, 16),
        Some("Main Ground".to_string()),
    );
    running.score = MatchScore::Played { home: 0, away: 0 };
    running.status = MatchStatus::Live;

    let scheduled = MatchModel::new(
        Sport::Football,
        football[1].id.clone(),
        football[3].id.clone(),
        day(12, 16),
        Some("Main Ground".to_string()),
    );

    let hoops = MatchModel::new(
        Sport::Basketball,
        basketball[0].id.clone(),
        basketball[1].id.clone(),
        day(11, 10),
        Some("Indoor Court".to_string()),
    );

    for fixture in [&opener, &second, &running, &scheduled, &hoops] {
        state.match_repository.create_match(fixture).await?;
    }

    info!("Seeded demo teams and matches");
    Ok(())
}
