use std::sync::Arc;
use tracing::{debug, info};

use super::derive::{
    cricket_innings, kabaddi_player_total, sum_score_stat, TOTAL_POINTS,
};
use crate::matches::models::{MatchModel, MatchScore, MatchStatus, ScoreDetails};
use crate::matches::repository::MatchRepository;
use crate::players::models::PlayerModel;
use crate::players::repository::PlayerRepository;
use crate::shared::AppError;
use crate::sport::Sport;

pub struct ScoringService {
    match_repository: Arc<dyn MatchRepository + Send + Sync>,
    player_repository: Arc<dyn PlayerRepository + Send + Sync>,
}

impl ScoringService {
    pub fn new(
        match_repository: Arc<dyn MatchRepository + Send + Sync>,
        player_repository: Arc<dyn PlayerRepository + Send + Sync>,
    ) -> Self {
        Self {
            match_repository,
            player_repository,
        }
    }

    /// Recompute a match's headline score from its underlying records and
    /// store the result.
    ///
    /// Tally sports sum the rosters' score stat, kabaddi sums derived player
    /// totals (writing "Total Points" back to sheets that drifted), cricket
    /// rebuilds the innings summaries, and set-based sports count sets won
    /// from the recorded set scores.
    pub async fn recalculate_match_score(&self, match_id: &str) -> Result<MatchModel, AppError> {
        let mut fixture = self
            .match_repository
            .get_match(match_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Match not found: {}", match_id)))?;

        let home_roster = self
            .player_repository
            .list_by_team(&fixture.home_team)
            .await?;
        let away_roster = self
            .player_repository
            .list_by_team(&fixture.away_team)
            .await?;

        let (home, away) = match fixture.sport {
            Sport::Kabaddi => {
                let home = self.settle_kabaddi_totals(&home_roster).await?;
                let away = self.settle_kabaddi_totals(&away_roster).await?;
                (home, away)
            }
            Sport::Cricket => {
                let home_innings = cricket_innings(&home_roster, &away_roster);
                let away_innings = cricket_innings(&away_roster, &home_roster);
                fixture.score_details = Some(ScoreDetails::Cricket {
                    innings: home_innings,
                });
                (home_innings.runs, away_innings.runs)
            }
            sport if sport.is_set_based() => match &fixture.score_details {
                Some(ScoreDetails::Sets { sets }) => super::derive::sets_won(sets),
                _ => {
                    return Err(AppError::BadRequest(format!(
                        "No set scores recorded for match {}",
                        fixture.id
                    )))
                }
            },
            sport => {
                let stat = sport.score_stat().ok_or_else(|| {
                    AppError::BadRequest(format!("{} scores cannot be derived", sport))
                })?;
                (
                    sum_score_stat(&home_roster, stat),
                    sum_score_stat(&away_roster, stat),
                )
            }
        };

        fixture.score = MatchScore::Played { home, away };
        if fixture.status == MatchStatus::Upcoming {
            fixture.status = MatchStatus::Live;
        }

        self.match_repository.update_match(&fixture).await?;
        info!(match_id = %fixture.id, home, away, "Match score recalculated");
        Ok(fixture)
    }

    /// Bring each sheet's "Total Points" in line with raids plus tackles and
    /// return the team tally.
    async fn settle_kabaddi_totals(&self, roster: &[PlayerModel]) -> Result<u32, AppError> {
        let mut team_total: i64 = 0;
        for player in roster {
            let total = kabaddi_player_total(player);
            team_total += total.max(0);

            if player.stat(TOTAL_POINTS) != total {
                debug!(player_id = %player.id, total, "Settling kabaddi total on sheet");
                let mut updated = player.clone();
                updated.stats.insert(TOTAL_POINTS.to_string(), total);
                self.player_repository.update_player(&updated).await?;
            }
        }
        Ok(team_total as u32)
    }
}
