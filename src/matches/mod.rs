// Public API - what other modules can use
pub use handlers::{
    create_match, delete_match, edit_match, get_match, list_matches, update_score, update_status,
};
pub use models::{CricketScore, MatchModel, MatchScore, MatchStatus, ScoreDetails, SetScore};
pub use repository::{InMemoryMatchRepository, MatchRepository};
pub use service::MatchService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
