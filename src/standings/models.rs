use serde::{Deserialize, Serialize};

use crate::sport::SportRules;

/// One row of a league table.
///
/// `drawn` is present only for draw-capable sports, and the aggregate columns
/// only for sports that track a for/against tally. The row set and values are
/// derived in full on every computation; nothing here is ever persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub team: String,
    /// 1-based position after sorting, always contiguous across the table.
    pub rank: u32,
    pub played: u32,
    pub won: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub drawn: Option<u32>,
    pub lost: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_for: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aggregate_against: Option<u32>,
    pub points: u32,
}

impl TeamStanding {
    /// A zeroed row shaped by the sport's rules: draw and aggregate columns
    /// exist only where the sport uses them.
    pub fn zeroed(team: &str, rules: &SportRules) -> Self {
        Self {
            team: team.to_string(),
            rank: 0,
            played: 0,
            won: 0,
            drawn: rules.supports_draw.then_some(0),
            lost: 0,
            aggregate_for: rules.score_tracking.map(|_| 0),
            aggregate_against: rules.score_tracking.map(|_| 0),
            points: 0,
        }
    }

    /// Goal or point differential; zero when the sport tracks no aggregate.
    pub fn differential(&self) -> i64 {
        i64::from(self.aggregate_for.unwrap_or(0)) - i64::from(self.aggregate_against.unwrap_or(0))
    }
}
