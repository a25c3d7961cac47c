use std::sync::Arc;

use super::models::TeamModel;
use super::repository::TeamRepository;
use super::types::TeamCreateRequest;
use crate::matches::repository::MatchRepository;
use crate::players::repository::PlayerRepository;
use crate::shared::AppError;

pub struct TeamService {
    team_repository: Arc<dyn TeamRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
}

impl TeamService {
    pub fn new(
        team_repository: Arc<dyn TeamRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
    ) -> Self {
        Self {
            team_repository,
            player_repository,
            match_repository,
        }
    }

    pub async fn create_team(&self, request: TeamCreateRequest) -> Result<TeamModel, AppError> {
        let name = request.name.trim();
        if name.is_empty() {
            return Err(AppError::BadRequest("Team name cannot be empty".to_string()));
        }

        let taken = self
            .team_repository
            .list_by_sport(request.sport)
            .await?
            .iter()
            .any(|t| t.name == name);
        if taken {
            return Err(AppError::BadRequest(format!(
                "Team name already taken for {}: {}",
                request.sport, name
            )));
        }

        let team = TeamModel::new(name.to_string(), request.sport);
        self.team_repository.create_team(&team).await?;
        Ok(team)
    }

    pub async fn get_team(&self, team_id: &str) -> Result<TeamModel, AppError> {
        self.team_repository
            .get_team(team_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Team not found: {}", team_id)))
    }

    /// Delete a team along with its roster and every match it appears in.
    /// Without the match sweep a deleted team would keep its standings row.
    pub async fn delete_team(&self, team_id: &str) -> Result<(), AppError> {
        if !self.team_repository.delete_team(team_id).await? {
            return Err(AppError::NotFound(format!("Team not found: {}", team_id)));
        }
        self.player_repository.delete_by_team(team_id).await?;
        self.match_repository.delete_by_team(team_id).await?;
        Ok(())
    }
}
