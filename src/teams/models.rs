use serde::{Deserialize, Serialize};

use crate::sport::Sport;

/// A team registered for one sport of the festival.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamModel {
    pub id: String,
    pub name: String,
    pub sport: Sport,
}

impl TeamModel {
    /// Creates a new team model with generated ID
    pub fn new(name: String, sport: Sport) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            name,
            sport,
        }
    }
}
