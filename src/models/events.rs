//! Match event records: goals, shots, penalties, possessions and faceoffs.
//!
//! Every record belongs to exactly one match and is never mutated after it is appended.

use crate::models::player::PlayerId;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a single event.
pub type EventId = String;

/// Period number, starting at 1.
pub type Period = u32;

pub(crate) fn new_event_id() -> EventId {
    Uuid::new_v4().to_string()
}

/// A goal for or against us.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub id: EventId,
    /// Empty for opponent goals.
    pub scorer_id: PlayerId,
    /// Zero to two assisting players.
    #[serde(default)]
    pub assists: Vec<PlayerId>,
    /// Our players on the ice for our goal (only when `is_our_team`).
    #[serde(default)]
    pub plus_players: Vec<PlayerId>,
    /// Our players on the ice for an opponent goal (only when `!is_our_team`).
    #[serde(default)]
    pub minus_players: Vec<PlayerId>,
    pub timestamp: i64,
    pub is_our_team: bool,
    /// Goalie in net when an opponent scored. Absent on legacy matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goalie_id: Option<PlayerId>,
    #[serde(default = "first_period")]
    pub period: Period,
}

/// Where on the net a shot arrived, both coordinates in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShotLocation {
    pub x: f64,
    pub y: f64,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShotResult {
    Goal,
    Save,
    Miss,
    Blocked,
}

/// A shot attempt for or against us.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shot {
    pub id: EventId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<ShotLocation>,
    pub is_our_team: bool,
    pub on_goal: bool,
    pub result: ShotResult,
    /// Goalie facing an opponent shot. Absent on legacy matches.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goalie_id: Option<PlayerId>,
    #[serde(default = "first_period")]
    pub period: Period,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PenaltyEvent {
    pub id: EventId,
    pub player_id: PlayerId,
    pub minutes: u32,
    pub timestamp: i64,
    /// Free-form label, e.g. "Tripping".
    pub infraction: String,
    #[serde(default = "first_period")]
    pub period: Period,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PossessionType {
    Gain,
    Loss,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PossessionEvent {
    pub id: EventId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub player_id: Option<PlayerId>,
    pub timestamp: i64,
    #[serde(rename = "type")]
    pub kind: PossessionType,
    #[serde(default = "first_period")]
    pub period: Period,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FaceoffEvent {
    pub id: EventId,
    pub winner_id: PlayerId,
    pub loser_id: PlayerId,
    pub timestamp: i64,
    #[serde(default = "first_period")]
    pub period: Period,
}

fn first_period() -> Period {
    1
}

/// Anything in a match log that happened during a given period.
pub trait PeriodEvent {
    fn period(&self) -> Period;
}

impl PeriodEvent for Goal {
    fn period(&self) -> Period {
        self.period
    }
}

impl PeriodEvent for Shot {
    fn period(&self) -> Period {
        self.period
    }
}

impl PeriodEvent for PenaltyEvent {
    fn period(&self) -> Period {
        self.period
    }
}

impl PeriodEvent for PossessionEvent {
    fn period(&self) -> Period {
        self.period
    }
}

impl PeriodEvent for FaceoffEvent {
    fn period(&self) -> Period {
        self.period
    }
}
