use serde::{Deserialize, Serialize};

use super::models::TeamModel;
use crate::sport::Sport;

/// Request payload for registering a new team
#[derive(Debug, Deserialize)]
pub struct TeamCreateRequest {
    pub name: String,
    pub sport: Sport,
}

/// Query parameters accepted by the team listing endpoint
#[derive(Debug, Default, Deserialize)]
pub struct TeamListQuery {
    pub sport: Option<String>,
}

/// Response for team creation and team information
#[derive(Debug, Serialize, Deserialize)]
pub struct TeamResponse {
    pub id: String,
    pub name: String,
    pub sport: Sport,
}

impl From<TeamModel> for TeamResponse {
    fn from(team: TeamModel) -> Self {
        Self {
            id: team.id,
            name: team.name,
            sport: team.sport,
        }
    }
}
