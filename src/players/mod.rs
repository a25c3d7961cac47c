// Public API - what other modules can use
pub use handlers::{
    create_player, delete_player, list_team_players, update_player_name, update_player_stats,
};
pub use models::PlayerModel;
pub use repository::{InMemoryPlayerRepository, PlayerRepository};
pub use service::PlayerService;

// Internal modules
mod handlers;
pub mod models;
pub mod repository;
pub mod service;
pub mod types;
