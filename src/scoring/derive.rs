use crate::matches::models::{CricketScore, SetScore};
use crate::players::models::PlayerModel;

/// Stat-sheet keys with fixed meaning across rosters.
pub const RAID_POINTS: &str = "Raid Points";
pub const TACKLE_POINTS: &str = "Tackle Points";
pub const TOTAL_POINTS: &str = "Total Points";
pub const RUNS: &str = "Runs";
pub const WICKETS: &str = "Wickets";
pub const BALLS_BOWLED: &str = "Balls Bowled";

/// Sum one stat across a roster, e.g. "Goals" for football.
pub fn sum_score_stat(players: &[PlayerModel], stat: &str) -> u32 {
    players.iter().map(|p| p.stat(stat).max(0)).sum::<i64>() as u32
}

/// A kabaddi player's total is raids plus tackles; the sheet's "Total Points"
/// is derived, never entered by hand.
pub fn kabaddi_player_total(player: &PlayerModel) -> i64 {
    player.stat(RAID_POINTS) + player.stat(TACKLE_POINTS)
}

/// Sets won by (home, away) over the recorded set scores. A set that is
/// level counts for neither side.
pub fn sets_won(sets: &[SetScore]) -> (u32, u32) {
    let mut home = 0;
    let mut away = 0;
    for set in sets {
        if set.home > set.away {
            home += 1;
        } else if set.away > set.home {
            away += 1;
        }
    }
    (home, away)
}

/// Cricket convention: whole overs plus remaining balls as the decimal digit,
/// so 118 balls is 19.4 overs.
pub fn overs_from_balls(balls: u32) -> f64 {
    f64::from(balls / 6) + f64::from(balls % 6) / 10.0
}

/// Innings summary for the batting side: their runs, with wickets and overs
/// taken from the opposing side's bowling figures.
pub fn cricket_innings(batting: &[PlayerModel], bowling: &[PlayerModel]) -> CricketScore {
    let runs = sum_score_stat(batting, RUNS);
    let wickets = sum_score_stat(bowling, WICKETS);
    let balls = sum_score_stat(bowling, BALLS_BOWLED);
    CricketScore {
        runs,
        wickets,
        overs: overs_from_balls(balls),
    }
}
