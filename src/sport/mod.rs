// Sport identifiers and the per-sport league rule table.
// The enumeration is closed: every sport the festival runs is a variant here,
// and the rule table in `rules.rs` is total over it.

pub mod handlers;
mod rules;

pub use handlers::list_sports;
pub use rules::{ScoreLabel, SportRules};

use std::fmt;
use strum_macros::EnumIter;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize, EnumIter,
)]
#[serde(rename_all = "kebab-case")]
pub enum Sport {
    Football,
    Basketball,
    Volleyball,
    Cricket,
    Throwball,
    Badminton,
    TableTennis,
    Kabaddi,
}

impl Sport {
    /// Wire/display form, matching the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Sport::Football => "football",
            Sport::Basketball => "basketball",
            Sport::Volleyball => "volleyball",
            Sport::Cricket => "cricket",
            Sport::Throwball => "throwball",
            Sport::Badminton => "badminton",
            Sport::TableTennis => "table-tennis",
            Sport::Kabaddi => "kabaddi",
        }
    }
}

impl fmt::Display for Sport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl TryFrom<&str> for Sport {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s {
            "football" => Ok(Sport::Football),
            "basketball" => Ok(Sport::Basketball),
            "volleyball" => Ok(Sport::Volleyball),
            "cricket" => Ok(Sport::Cricket),
            "throwball" => Ok(Sport::Throwball),
            "badminton" => Ok(Sport::Badminton),
            "table-tennis" => Ok(Sport::TableTennis),
            "kabaddi" => Ok(Sport::Kabaddi),
            _ => Err(s.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_sport_round_trips_through_its_wire_form() {
        for sport in Sport::iter() {
            assert_eq!(Sport::try_from(sport.as_str()), Ok(sport));
        }
    }

    #[test]
    fn test_unknown_sport_string_is_rejected() {
        assert_eq!(Sport::try_from("chess"), Err("chess".to_string()));
        assert_eq!(Sport::try_from(""), Err("".to_string()));
    }

    #[test]
    fn test_serde_uses_kebab_case() {
        assert_eq!(
            serde_json::to_string(&Sport::TableTennis).unwrap(),
            "\"table-tennis\""
        );
        let parsed: Sport = serde_json::from_str("\"kabaddi\"").unwrap();
        assert_eq!(parsed, Sport::Kabaddi);
    }
}
