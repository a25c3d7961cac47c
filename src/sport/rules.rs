use super::Sport;

/// What the aggregate for/against columns mean for a sport, when the sport
/// tracks them at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScoreLabel {
    Goals,
    Points,
}

/// Static league rules for one sport.
///
/// Adding a sport is a data change: a new `Sport` variant plus a row in
/// `Sport::rules`. The standings engine never branches on the sport itself,
/// only on these fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SportRules {
    pub points_for_win: u32,
    /// Only meaningful when `supports_draw` is true.
    pub points_for_draw: u32,
    /// Whether a tied score is a legitimate terminal outcome. When false, a
    /// tied score that does occur credits neither side.
    pub supports_draw: bool,
    /// `None` means no for/against aggregate is kept and tie-breaking falls
    /// back to wins.
    pub score_tracking: Option<ScoreLabel>,
}

impl Sport {
    pub fn rules(&self) -> SportRules {
        match self {
            Sport::Football => SportRules {
                points_for_win: 3,
                points_for_draw: 1,
                supports_draw: true,
                score_tracking: Some(ScoreLabel::Goals),
            },
            Sport::Volleyball => SportRules {
                points_for_win: 3,
                points_for_draw: 1,
                supports_draw: true,
                score_tracking: Some(ScoreLabel::Points),
            },
            Sport::Basketball | Sport::Throwball | Sport::Badminton | Sport::Kabaddi => {
                SportRules {
                    points_for_win: 2,
                    points_for_draw: 0,
                    supports_draw: false,
                    score_tracking: Some(ScoreLabel::Points),
                }
            }
            // Scoring always produces a winner and no running tally is kept,
            // so these two carry neither draws nor aggregates.
            Sport::TableTennis | Sport::Cricket => SportRules {
                points_for_win: 2,
                points_for_draw: 0,
                supports_draw: false,
                score_tracking: None,
            },
        }
    }

    /// Stat-sheet key carrying a player's scoring contribution, for sports
    /// where the team score is summed from the roster's sheets.
    pub fn score_stat(&self) -> Option<&'static str> {
        match self {
            Sport::Football => Some("Goals"),
            Sport::Basketball => Some("Points"),
            Sport::Cricket => Some("Runs"),
            _ => None,
        }
    }

    /// Sports whose match score is sets won rather than a raw tally.
    pub fn is_set_based(&self) -> bool {
        matches!(
            self,
            Sport::Volleyball | Sport::Badminton | Sport::TableTennis | Sport::Throwball
        )
    }
}
