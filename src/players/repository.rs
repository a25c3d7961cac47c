use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::PlayerModel;
use crate::shared::AppError;

/// Trait for player repository operations
#[async_trait]
pub trait PlayerRepository {
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError>;
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError>;
    /// Roster of one team, ordered by name then id.
    async fn list_by_team(&self, team_id: &str) -> Result<Vec<PlayerModel>, AppError>;
    async fn update_player(&self, player: &PlayerModel) -> Result<(), AppError>;
    /// Returns true if a player was removed.
    async fn delete_player(&self, player_id: &str) -> Result<bool, AppError>;
    /// Removes a whole roster; returns how many players were removed.
    async fn delete_by_team(&self, team_id: &str) -> Result<u64, AppError>;
}

/// In-memory implementation of PlayerRepository for development and testing
pub struct InMemoryPlayerRepository {
    players: Mutex<HashMap<String, PlayerModel>>,
}

impl Default for InMemoryPlayerRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryPlayerRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            players: Mutex::new(HashMap::new()),
        }
    }
}

#[async_trait]
impl PlayerRepository for InMemoryPlayerRepository {
    #[instrument(skip(self, player))]
    async fn create_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        debug!(player_id = %player.id, name = %player.name, "Creating player in memory");

        let mut players = self.players.lock().unwrap();
        if players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Player already exists in memory");
            return Err(AppError::Repository("Player already exists".to_string()));
        }
        players.insert(player.id.clone(), player.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_player(&self, player_id: &str) -> Result<Option<PlayerModel>, AppError> {
        let players = self.players.lock().unwrap();
        Ok(players.get(player_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_by_team(&self, team_id: &str) -> Result<Vec<PlayerModel>, AppError> {
        let players = self.players.lock().unwrap();
        let mut roster: Vec<PlayerModel> = players
            .values()
            .filter(|p| p.team_id == team_id)
            .cloned()
            .collect();
        roster.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(roster)
    }

    #[instrument(skip(self, player))]
    async fn update_player(&self, player: &PlayerModel) -> Result<(), AppError> {
        let mut players = self.players.lock().unwrap();
        if !players.contains_key(&player.id) {
            warn!(player_id = %player.id, "Cannot update missing player");
            return Err(AppError::NotFound(format!(
                "Player not found: {}",
                player.id
            )));
        }
        players.insert(player.id.clone(), player.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_player(&self, player_id: &str) -> Result<bool, AppError> {
        let mut players = self.players.lock().unwrap();
        Ok(players.remove(player_id).is_some())
    }

    #[instrument(skip(self))]
    async fn delete_by_team(&self, team_id: &str) -> Result<u64, AppError> {
        let mut players = self.players.lock().unwrap();
        let before = players.len();
        players.retain(|_, p| p.team_id != team_id);
        let removed = (before - players.len()) as u64;
        debug!(team_id = %team_id, removed, "Deleted roster from memory");
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sport::Sport;

    #[tokio::test]
    async fn test_roster_listing_is_sorted_and_scoped_to_team() {
        let repo = InMemoryPlayerRepository::new();
        let zoya = PlayerModel::new("Zoya".to_string(), "team-1".to_string(), Sport::Kabaddi);
        let arun = PlayerModel::new("Arun".to_string(), "team-1".to_string(), Sport::Kabaddi);
        let other = PlayerModel::new("Ben".to_string(), "team-2".to_string(), Sport::Kabaddi);

        repo.create_player(&zoya).await.unwrap();
        repo.create_player(&arun).await.unwrap();
        repo.create_player(&other).await.unwrap();

        let roster = repo.list_by_team("team-1").await.unwrap();
        assert_eq!(roster.len(), 2);
        assert_eq!(roster[0].name, "Arun");
        assert_eq!(roster[1].name, "Zoya");
    }

    #[tokio::test]
    async fn test_delete_by_team_removes_whole_roster() {
        let repo = InMemoryPlayerRepository::new();
        for name in ["A", "B", "C"] {
            let p = PlayerModel::new(name.to_string(), "team-1".to_string(), Sport::Cricket);
            repo.create_player(&p).await.unwrap();
        }

        assert_eq!(repo.delete_by_team("team-1").await.unwrap(), 3);
        assert!(repo.list_by_team("team-1").await.unwrap().is_empty());
    }
}
