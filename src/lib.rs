// Library crate for the SportsHub tournament server
// This file exposes the public API for integration tests

pub mod matches;
pub mod players;
pub mod routes;
pub mod scoring;
pub mod seed;
pub mod shared;
pub mod sport;
pub mod standings;
pub mod teams;

// Re-export commonly used types for easier access in tests
pub use matches::{InMemoryMatchRepository, MatchModel, MatchRepository, MatchScore, MatchStatus};
pub use players::{InMemoryPlayerRepository, PlayerModel, PlayerRepository};
pub use routes::build_router;
pub use shared::{AppError, AppState};
pub use sport::{ScoreLabel, Sport, SportRules};
pub use standings::{compute_standings, TeamStanding};
pub use teams::{InMemoryTeamRepository, TeamModel, TeamRepository};
