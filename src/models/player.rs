//! Player and Position data structures.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a player (used in rosters and every event log).
pub type PlayerId = String;

/// Highest jersey number a player may wear.
pub const MAX_JERSEY_NUMBER: u8 = 99;

/// Where a player lines up.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Position {
    #[default]
    Forward,
    Defense,
    Goalie,
}

impl Position {
    pub fn is_goalie(self) -> bool {
        self == Position::Goalie
    }
}

/// A player on the team roster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    /// 0-99, unique among the roster.
    pub jersey_number: u8,
    pub position: Position,
}

impl Player {
    /// Create a new player with a fresh id.
    pub fn new(name: impl Into<String>, jersey_number: u8, position: Position) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            jersey_number,
            position,
        }
    }

    pub fn is_goalie(&self) -> bool {
        self.position.is_goalie()
    }
}

/// Look up a player by id.
pub fn find_player<'a>(players: &'a [Player], id: &str) -> Option<&'a Player> {
    players.iter().find(|p| p.id == id)
}
