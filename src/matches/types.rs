use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::models::{MatchModel, MatchScore, MatchStatus, ScoreDetails};
use crate::sport::Sport;

/// Request payload for creating a new match
#[derive(Debug, Deserialize)]
pub struct MatchCreateRequest {
    pub sport: Sport,
    pub home_team: String,
    pub away_team: String,
    pub start_time: DateTime<Utc>,
    pub venue: Option<String>,
}

/// Request payload for editing match details (reschedule, move venue).
/// Absent fields are left untouched.
#[derive(Debug, Deserialize)]
pub struct MatchEditRequest {
    pub start_time: Option<DateTime<Utc>>,
    pub venue: Option<String>,
}

/// Request payload for recording or correcting a scoreline
#[derive(Debug, Deserialize)]
pub struct ScoreUpdateRequest {
    pub home: u32,
    pub away: u32,
    pub score_details: Option<ScoreDetails>,
}

/// Request payload for moving a match between statuses
#[derive(Debug, Deserialize)]
pub struct StatusUpdateRequest {
    pub status: MatchStatus,
}

/// Query parameters accepted by the match listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct MatchListQuery {
    pub sport: Option<String>,
    pub status: Option<MatchStatus>,
}

/// Response for match creation and match information
#[derive(Debug, Serialize, Deserialize)]
pub struct MatchResponse {
    pub id: String,
    pub sport: Sport,
    pub home_team: String,
    pub away_team: String,
    pub score: MatchScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_details: Option<ScoreDetails>,
    pub status: MatchStatus,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl From<MatchModel> for MatchResponse {
    fn from(m: MatchModel) -> Self {
        Self {
            id: m.id,
            sport: m.sport,
            home_team: m.home_team,
            away_team: m.away_team,
            score: m.score,
            score_details: m.score_details,
            status: m.status,
            start_time: m.start_time,
            venue: m.venue,
        }
    }
}
