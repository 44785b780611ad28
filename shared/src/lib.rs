use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_PORT: u16 = 8080;
pub const NAME_COLUMN_WIDTH: usize = 20;

pub const COUNT_PATH: &str = "/count";
pub const LEADERBOARD_PATH: &str = "/";

pub type Score = i64;

/// A single player's latest score within a team
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq, Hash)]
pub struct PlayerScore {
    pub name: String,
    pub score: Score,
}

impl PlayerScore {
    pub fn new(name: impl Into<String>, score: Score) -> Self {
        Self {
            name: name.into(),
            score,
        }
    }
}

/// One leaderboard row: the name padded to `NAME_COLUMN_WIDTH`, then the score.
/// Names at or past the column width are written out in full with no separator.
impl fmt::Display for PlayerScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<width$}{}", self.name, self.score, width = NAME_COLUMN_WIDTH)
    }
}

pub fn render_leaderboard(entries: &[PlayerScore]) -> String {
    entries
        .iter()
        .map(|entry| format!("{}\n", entry))
        .collect()
}

pub fn render_update(name: &str, previous: Score, current: Score) -> String {
    format!("updated count for {} from {} to {}\n", name, previous, current)
}

/// Query string of `GET /count`.
///
/// Every field is optional on the wire so the server can tell a missing
/// parameter apart from a malformed one. `count` stays a string for the same
/// reason.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct CountQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<String>,
}

impl CountQuery {
    pub fn new(team: &str, name: &str, count: Score) -> Self {
        Self {
            team: Some(team.to_string()),
            name: Some(name.to_string()),
            count: Some(count.to_string()),
        }
    }

    /// Builds the query from decoded key/value pairs. A repeated key keeps
    /// its first value; unknown keys are ignored.
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            team: first_value(pairs, "team"),
            name: first_value(pairs, "name"),
            count: first_value(pairs, "count"),
        }
    }
}

/// Query string of `GET /`
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
pub struct LeaderboardQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub team: Option<String>,
}

impl LeaderboardQuery {
    pub fn new(team: &str) -> Self {
        Self {
            team: Some(team.to_string()),
        }
    }

    /// Builds the query from decoded key/value pairs, first value wins
    pub fn from_pairs(pairs: &[(String, String)]) -> Self {
        Self {
            team: first_value(pairs, "team"),
        }
    }
}

fn first_value(pairs: &[(String, String)], key: &str) -> Option<String> {
    pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone())
}
