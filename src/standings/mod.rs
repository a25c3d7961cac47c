// The standings engine: a pure function from a match snapshot to a ranked
// league table, driven entirely by the per-sport rule configuration.

pub use engine::compute_standings;
pub use handlers::get_standings;
pub use models::TeamStanding;

pub mod engine;
mod handlers;
pub mod models;
