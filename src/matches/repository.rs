use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::{debug, instrument, warn};

use super::models::MatchModel;
use crate::shared::AppError;
use crate::sport::Sport;

/// Trait for match repository operations.
///
/// Consumers only ever receive snapshots: mutations go through `create`/
/// `update`/`delete` and reads return owned copies, so nothing downstream
/// (the standings engine in particular) can be coupled to the storage.
#[async_trait]
pub trait MatchRepository {
    async fn create_match(&self, fixture: &MatchModel) -> Result<(), AppError>;
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError>;
    /// All matches, in deterministic order (start time, then id).
    async fn list_matches(&self) -> Result<Vec<MatchModel>, AppError>;
    /// Matches of one sport, same ordering as `list_matches`.
    async fn list_by_sport(&self, sport: Sport) -> Result<Vec<MatchModel>, AppError>;
    async fn update_match(&self, fixture: &MatchModel) -> Result<(), AppError>;
    /// Returns true if a match was removed.
    async fn delete_match(&self, match_id: &str) -> Result<bool, AppError>;
    /// Remove every match the team appears in, home or away. Returns the
    /// number of matches removed.
    async fn delete_by_team(&self, team_id: &str) -> Result<u64, AppError>;
}

/// In-memory implementation of MatchRepository for development and testing
pub struct InMemoryMatchRepository {
    matches: Mutex<HashMap<String, MatchModel>>,
}

impl Default for InMemoryMatchRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryMatchRepository {
    /// Creates a new empty in-memory repository
    pub fn new() -> Self {
        Self {
            matches: Mutex::new(HashMap::new()),
        }
    }

    fn sorted(mut matches: Vec<MatchModel>) -> Vec<MatchModel> {
        matches.sort_by(|a, b| a.start_time.cmp(&b.start_time).then_with(|| a.id.cmp(&b.id)));
        matches
    }
}

#[async_trait]
impl MatchRepository for InMemoryMatchRepository {
    #[instrument(skip(self, fixture))]
    async fn create_match(&self, fixture: &MatchModel) -> Result<(), AppError> {
        debug!(match_id = %fixture.id, sport = %fixture.sport, "Creating match in memory");

        let mut matches = self.matches.lock().unwrap();
        if matches.contains_key(&fixture.id) {
            warn!(match_id = %fixture.id, "Match already exists in memory");
            return Err(AppError::Repository("Match already exists".to_string()));
        }
        matches.insert(fixture.id.clone(), fixture.clone());

        debug!(match_id = %fixture.id, "Match created successfully in memory");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn get_match(&self, match_id: &str) -> Result<Option<MatchModel>, AppError> {
        let matches = self.matches.lock().unwrap();
        Ok(matches.get(match_id).cloned())
    }

    #[instrument(skip(self))]
    async fn list_matches(&self) -> Result<Vec<MatchModel>, AppError> {
        let matches = self.matches.lock().unwrap();
        Ok(Self::sorted(matches.values().cloned().collect()))
    }

    #[instrument(skip(self))]
    async fn list_by_sport(&self, sport: Sport) -> Result<Vec<MatchModel>, AppError> {
        let matches = self.matches.lock().unwrap();
        Ok(Self::sorted(
            matches
                .values()
                .filter(|m| m.sport == sport)
                .cloned()
                .collect(),
        ))
    }

    #[instrument(skip(self, fixture))]
    async fn update_match(&self, fixture: &MatchModel) -> Result<(), AppError> {
        let mut matches = self.matches.lock().unwrap();
        if !matches.contains_key(&fixture.id) {
            warn!(match_id = %fixture.id, "Cannot update missing match");
            return Err(AppError::NotFound(format!(
                "Match not found: {}",
                fixture.id
            )));
        }
        matches.insert(fixture.id.clone(), fixture.clone());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn delete_match(&self, match_id: &str) -> Result<bool, AppError> {
        let mut matches = self.matches.lock().unwrap();
        let removed = matches.remove(match_id).is_some();
        debug!(match_id = %match_id, removed, "Deleted match from memory");
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn delete_by_team(&self, team_id: &str) -> Result<u64, AppError> {
        let mut matches = self.matches.lock().unwrap();
        let before = matches.len();
        matches.retain(|_, m| m.home_team != team_id && m.away_team != team_id);
        let removed = (before - matches.len()) as u64;
        debug!(team_id = %team_id, removed, "Deleted team's matches from memory");
        Ok(removed)
    }
}
