use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::TeamModel;
use crate::shared::AppError;
use crate::sport::Sport;

/// Trait for team repository operations
#[async_trait]
pub trait TeamRepository {
    async fn create_team(&self, team: &TeamModel) -> Result<(), AppError>;
    async fn get_team(&self, team_id: &str) -> Result<Option<TeamModel>, AppError>;
    /// All teams, ordered by name then id for a deterministic listing.
    async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError>;
    async fn list_by_sport(&self, sport: Sport) -> Result<Vec<TeamModel>, AppError>;
    /// Returns true if a team was removed.
    async fn delete_team(&self, team_id: &str) -> Result<bool, AppError>;
}

/// In-memory implementation of TeamRepository for development and testing
pub struct InMemoryTeamRepository {
    teams: Mutex<HashMap<String, TeamModel>>,
}

impl Default for InMemoryTeamRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryTeamRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            teams: Mutex::new(HashMap::new()),
        }
    }

    fn sorted(mut teams: Vec<TeamModel>) -> Vec<TeamModel> {
        teams.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        teams
    }
}

#[async_trait]
impl TeamRepository for InMemoryTeamRepository {
    #[instrument(skip(self, team))]
    async fn create_team(&self, team: &TeamModel) -> Result<(), AppError> {
        debug!(team_id = %team.id, name = %team.name, "Creating team in memory");

        let mut teams = self.teams.lock().unwrap();
        if teams.contains_key(&team.id) {
            warn!(team_id = %team.id, "Team already exists in memory");
            return Err(AppError::Repository("Team already exists".to_string()));
        }
        teams.insert(team.id.clone(), team.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_team(&self, team_id: &str) -> Result<Option<TeamModel>, AppError> {
        let teams = self.teams.lock().unwrap();
        Ok(teams.get(team_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_teams(&self) -> Result<Vec<TeamModel>, AppError> {
        let teams = self.teams.lock().unwrap();
        Ok(Self::sorted(teams.values().cloned().collect()))
    }

    #[instrument(skip(self))]
    async fn list_by_sport(&self, sport: Sport) -> Result<Vec<TeamModel>, AppError> {
        let teams = self.teams.lock().unwrap();
        Ok(Self::sorted(
            teams.values().filter(|t| t.sport == sport).cloned().collect(),
        ))
    }

    #[instrument(skip(self))]
    async fn delete_team(&self, team_id: &str) -> Result<bool, AppError> {
        let mut teams = self.teams.lock().unwrap();
        let removed = teams.remove(team_id).is_some();
        debug!(team_id = %team_id, removed, "Deleted team from memory");
        Ok(removed)
    }
}
