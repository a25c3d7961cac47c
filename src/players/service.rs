use std::sync::Arc;

use super::models::PlayerModel;
use super::repository::PlayerRepository;
use super::types::{NameUpdateRequest, PlayerCreateRequest, StatsUpdateRequest};
use crate::shared::AppError;
use crate::teams::repository::TeamRepository;

pub struct PlayerService {
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    team_repository: Arc<dyn TeamRepository + Send + Sync>,
}

impl PlayerService {
    pub fn new(
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        team_repository: Arc<dyn TeamRepository + Send + Sync>,
    ) -> Self {
        Self {
            player_repository,
            team_repository,
        }
    }

    /// Add a player to a team's roster. The player's sport is inherited from
    /// the team.
    pub async fn create_player(
        &self,
        request: PlayerCreateRequest,
    ) -> Result<PlayerModel, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Player name cannot be empty".to_string(),
            ));
        }

        let team = self
            .team_repository
            .get_team(&request.team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team not found: {}", request.team_id)))?;

        let player = PlayerModel::new(name.to_string(), team.id, team.sport);
        self.player_repository.create_player(&player).await?;
        Ok(player)
    }

    /// Replace a player's stat sheet. Negative tallies are rejected.
    pub async fn update_stats(
        &self,
        player_id: &str,
        request: StatsUpdateRequest,
    ) -> Result<PlayerModel, AppError> {
        if let Some((key, value)) = request.stats.iter().find(|(_, v)| **v < 0) {
            return Err(AppError::BadRequest(format!(
                "Stat {} cannot be negative (got {})",
                key, value
            )));
        }

        let mut player = self.require_player(player_id).await?;
        player.stats = request.stats;
        self.player_repository.update_player(&player).await?;
        Ok(player)
    }

    pub async fn update_name(
        &self,
        player_id: &str,
        request: NameUpdateRequest,
    ) -> Result<PlayerModel, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest(
                "Player name cannot be empty".to_string(),
            ));
        }

        let mut player = self.require_player(player_id).await?;
        player.name = name.to_string();
        self.player_repository.update_player(&player).await?;
        Ok(player)
    }

    pub async fn delete_player(&self, player_id: &str) -> Result<(), AppError> {
        if !self.player_repository.delete_player(player_id).await? {
            return Err(AppError::NotFound(format!(
                "Player not found: {}",
                player_id
            )));
        }
        Ok(())
    }

    async fn require_player(&self, player_id: &str) -> Result<PlayerModel, AppError> {
        self.player_repository
            .get_player(player_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Player not found: {}", player_id)))
    }
}
