use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::sport::Sport;

/// A rostered player and their stat sheet.
///
/// Stat-sheet keys are sport-specific display names ("Goals", "Raid Points",
/// "Balls Bowled"); the scoring module knows which keys matter per sport.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerModel {
    pub id: String,
    pub name: String,
    pub team_id: String,
    pub sport: Sport,
    pub stats: HashMap<String, i64>,
}

impl PlayerModel {
    /// Creates a new player with a generated ID and an empty stat sheet.
    pub fn new(name: String, team_id: String, sport: Sport) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            team_id,
            sport,
            stats: HashMap::new(),
        }
    }

    pub fn stat(&self, key: &str) -> i64 {
        self.stats.get(key).copied().unwrap_or(0)
    }
}
