use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::sport::Sport;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchStatus {
    Upcoming,
    Live,
    Completed,
}

impl fmt::Display for MatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}",
            match self {
                MatchStatus::Upcoming => "upcoming",
                MatchStatus::Live => "live",
                MatchStatus::Completed => "completed",
            }
        )
    }
}

/// Scoreline for a match.
///
/// A match that has not produced both numbers yet carries `NotYetPlayed`, so
/// downstream aggregation never sees half a score. This replaces a pair of
/// nullable fields: "skip if incomplete" becomes a type-level guarantee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum MatchScore {
    NotYetPlayed,
    Played { home: u32, away: u32 },
}

impl MatchScore {
    pub fn as_played(&self) -> Option<(u32, u32)> {
        match self {
            MatchScore::NotYetPlayed => None,
            MatchScore::Played { home, away } => Some((*home, *away)),
        }
    }
}

/// One set of a set-based sport (volleyball, badminton, table tennis,
/// throwball), home/away points within that set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetScore {
    pub set: u32,
    pub home: u32,
    pub away: u32,
}

/// Innings summary for cricket. Overs use the cricket convention of
/// whole overs plus balls as the decimal digit (e.g. 19.4).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CricketScore {
    pub runs: u32,
    pub wickets: u32,
    pub overs: f64,
}

/// Sport-specific score breakdown attached to a match on top of the headline
/// scoreline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ScoreDetails {
    Sets { sets: Vec<SetScore> },
    Cricket { innings: CricketScore },
}

/// A scheduled, running, or finished fixture between two registered teams.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchModel {
    pub id: String,
    pub sport: Sport,
    pub home_team: String,
    pub away_team: String,
    pub score: MatchScore,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score_details: Option<ScoreDetails>,
    pub status: MatchStatus,
    pub start_time: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub venue: Option<String>,
}

impl MatchModel {
    /// Creates a new upcoming match with a generated ID and no score.
    pub fn new(
        sport: Sport,
        home_team: String,
        away_team: String,
        start_time: DateTime<Utc>,
        venue: Option<String>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sport,
            home_team,
            away_team,
            score: MatchScore::NotYetPlayed,
            score_details: None,
            status: MatchStatus::Upcoming,
            start_time,
            venue,
        }
    }
}
