use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::models::PlayerModel;
use crate::sport::Sport;

/// Request payload for adding a player to a roster
#[derive(Debug, Deserialize)]
pub struct PlayerCreateRequest {
    pub name: String,
    pub team_id: String,
}

/// Request payload for replacing a player's stat sheet
#[derive(Debug, Deserialize)]
pub struct StatsUpdateRequest {
    pub stats: HashMap<String, i64>,
}

/// Request payload for renaming a player
#[derive(Debug, Deserialize)]
pub struct NameUpdateRequest {
    pub name: String,
}

/// Response for player creation and player information
#[derive(Debug, Serialize, Deserialize)]
pub struct PlayerResponse {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub sport: Sport,
    pub stats: HashMap<String, i64>,
}

impl From<PlayerModel> for PlayerResponse {
    fn from(player: PlayerModel) -> Self {
        Self {
            id: player.id,
            name: player.name,
            team_id: player.team_id,
            sport: player.sport,
            stats: player.stats,
        }
    }
}
