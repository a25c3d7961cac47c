// Deriving a match's headline score from the underlying records: player
// stat sheets for tally sports, set scores for set-based sports, and the
// innings arithmetic for cricket.

pub use derive::{cricket_innings, kabaddi_player_total, overs_from_balls, sets_won, sum_score_stat};
pub use handlers::recalculate_score;
pub use service::ScoringService;

pub mod derive;
mod handlers;
pub mod service;
