//! Saved opponents offered for quick selection when a match is set up.

use crate::models::game::now_millis;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub type OpponentId = String;

/// A team name kept for reuse. Matches store the name itself, not this id.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Opponent {
    pub id: OpponentId,
    pub name: String,
    /// Epoch milliseconds.
    pub created_at: i64,
}

impl Opponent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            created_at: now_millis(),
        }
    }
}
