use std::sync::Arc;

use super::models::{MatchModel, MatchScore, MatchStatus, ScoreDetails};
use super::repository::MatchRepository;
use super::types::{MatchCreateRequest, MatchEditRequest, ScoreUpdateRequest, StatusUpdateRequest};
use crate::shared::AppError;
use crate::teams::repository::TeamRepository;

pub struct MatchService {
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
    team_repository: Arc<dyn TeamRepository + Send + Sync>,
}

impl MatchService {
    pub fn new(
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        team_repository: Arc<dyn TeamRepository + Send + Sync>,
    ) -> Self {
        Self {
            match_repository,
            team_repository,
        }
    }

    /// Create a new upcoming match between two registered teams of the sport
    pub async fn create_match(&self, request: MatchCreateRequest) -> Result<MatchModel, AppError> {
        if request.home_team.trim().is_empty() || request.away_team.trim().is_empty() {
            return Err(AppError::BadRequest(
                "Team identifiers cannot be empty".to_string(),
            ));
        }

        if request.home_team == request.away_team {
            return Err(AppError::BadRequest(
                "A team cannot play against itself".to_string(),
            ));
        }

        for team_id in [&request.home_team, &request.away_team] {
            let team = self
                .team_repository
                .get_team(team_id)
                .await?
                .ok_or_else(|| AppError::NotFound(format!("Team not found: {}", team_id)))?;

            if team.sport != request.sport {
                return Err(AppError::BadRequest(format!(
                    "Team {} is registered for {}, not {}",
                    team.name, team.sport, request.sport
                )));
            }
        }

        let fixture = MatchModel::new(
            request.sport,
            request.home_team,
            request.away_team,
            request.start_time,
            request.venue,
        );

        self.match_repository.create_match(&fixture).await?;
        Ok(fixture)
    }

    /// Edit match details. A finished match stays where it was played.
    pub async fn edit_match(
        &self,
        match_id: &str,
        request: MatchEditRequest,
    ) -> Result<MatchModel, AppError> {
        let mut fixture = self.require_match(match_id).await?;

        if fixture.status == MatchStatus::Completed && request.start_time.is_some() {
            return Err(AppError::BadRequest(
                "Cannot reschedule a completed match".to_string(),
            ));
        }

        if let Some(start_time) = request.start_time {
            fixture.start_time = start_time;
        }
        if let Some(venue) = request.venue {
            fixture.venue = Some(venue);
        }

        self.match_repository.update_match(&fixture).await?;
        Ok(fixture)
    }

    /// Record or correct the scoreline for a match.
    ///
    /// Recording a score for an upcoming match promotes it to live; the admin
    /// marks it completed separately once the result stands.
    pub async fn update_score(
        &self,
        match_id: &str,
        request: ScoreUpdateRequest,
    ) -> Result<MatchModel, AppError> {
        let mut fixture = self.require_match(match_id).await?;

        if let Some(details) = &request.score_details {
            validate_details(&fixture, details)?;
        }

        fixture.score = MatchScore::Played {
            home: request.home,
            away: request.away,
        };
        if request.score_details.is_some() {
            fixture.score_details = request.score_details;
        }
        if fixture.status == MatchStatus::Upcoming {
            fixture.status = MatchStatus::Live;
        }

        self.match_repository.update_match(&fixture).await?;
        Ok(fixture)
    }

    /// Move a match between statuses. Completing requires a recorded score.
    pub async fn update_status(
        &self,
        match_id: &str,
        request: StatusUpdateRequest,
    ) -> Result<MatchModel, AppError> {
        let mut fixture = self.require_match(match_id).await?;

        if request.status == MatchStatus::Completed
            && fixture.score.as_played().is_none()
        {
            return Err(AppError::BadRequest(
                "Cannot complete a match without a recorded score".to_string(),
            ));
        }

        fixture.status = request.status;
        self.match_repository.update_match(&fixture).await?;
        Ok(fixture)
    }

    pub async fn delete_match(&self, match_id: &str) -> Result<(), AppError> {
        if !self.match_repository.delete_match(match_id).await? {
            return Err(AppError::NotFound(format!("Match not found: {}", match_id)));
        }
        Ok(())
    }

    pub async fn get_match(&self, match_id: &str) -> Result<MatchModel, AppError> {
        self.require_match(match_id).await
    }

    async fn require_match(&self, match_id: &str) -> Result<MatchModel, AppError> {
        self.match_repository
            .get_match(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match not found: {}", match_id)))
    }
}

fn validate_details(fixture: &MatchModel, details: &ScoreDetails) -> Result<(), AppError> {
    let ok = match details {
        ScoreDetails::Sets { .. } => fixture.sport.is_set_based(),
        ScoreDetails::Cricket { .. } => fixture.sport == crate::sport::Sport::Cricket,
    };
    if ok {
        Ok(())
    } else {
        Err(AppError::BadRequest(format!(
            "Score details do not fit a {} match",
            fixture.sport
        )))
    }
}
