//! GameMatch (one hockey match and its event log), roster entries and scoped event views.

use crate::models::events::{
    FaceoffEvent, Goal, PenaltyEvent, Period, PeriodEvent, PossessionEvent, Shot,
};
use crate::models::player::PlayerId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// Unique identifier for a match.
pub type MatchId = String;

/// Current time as epoch milliseconds, the unit every stored timestamp uses.
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// A player dressed for a match.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchPlayer {
    pub player_id: PlayerId,
    pub is_playing: bool,
}

/// Result of a match from our side.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    Win,
    Loss,
    Draw,
}

/// A single match: roster, running score and the append-only event log.
///
/// `our_score`/`opponent_score` always equal the number of goals for each side.
/// `our_shots`/`opponent_shots` are bumped by every recorded shot and every recorded goal.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameMatch {
    pub id: MatchId,
    /// Start time, epoch milliseconds.
    pub date: i64,
    pub our_score: u32,
    pub opponent_score: u32,
    pub our_shots: u32,
    pub opponent_shots: u32,
    pub roster: Vec<MatchPlayer>,
    #[serde(default)]
    pub goals: Vec<Goal>,
    #[serde(default)]
    pub shots: Vec<Shot>,
    #[serde(default)]
    pub penalties: Vec<PenaltyEvent>,
    #[serde(default)]
    pub possessions: Vec<PossessionEvent>,
    #[serde(default)]
    pub faceoffs: Vec<FaceoffEvent>,
    /// False once the match has been ended. Only completed matches feed history.
    pub is_active: bool,
    pub opponent_name: String,
    /// Goalie currently in net. May be empty on very old matches.
    #[serde(default)]
    pub active_goalie_id: PlayerId,
    #[serde(default = "first_period")]
    pub current_period: Period,
    #[serde(default)]
    pub centers: Vec<PlayerId>,
}

fn first_period() -> Period {
    1
}

impl GameMatch {
    /// Create a new active match in period 1 with an empty log.
    pub fn new(
        roster: Vec<PlayerId>,
        opponent_name: impl Into<String>,
        active_goalie_id: impl Into<PlayerId>,
        centers: Vec<PlayerId>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            date: now_millis(),
            our_score: 0,
            opponent_score: 0,
            our_shots: 0,
            opponent_shots: 0,
            roster: roster
                .into_iter()
                .map(|player_id| MatchPlayer {
                    player_id,
                    is_playing: true,
                })
                .collect(),
            goals: Vec::new(),
            shots: Vec::new(),
            penalties: Vec::new(),
            possessions: Vec::new(),
            faceoffs: Vec::new(),
            is_active: true,
            opponent_name: opponent_name.into(),
            active_goalie_id: active_goalie_id.into(),
            current_period: 1,
            centers,
        }
    }

    pub fn is_on_roster(&self, player_id: &str) -> bool {
        self.roster.iter().any(|r| r.player_id == player_id)
    }

    pub fn is_center(&self, player_id: &str) -> bool {
        self.centers.iter().any(|c| c == player_id)
    }

    /// Start time as a UTC datetime (None if the stored value is out of range).
    pub fn date_time(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.date)
    }

    pub fn outcome(&self) -> MatchOutcome {
        match self.our_score.cmp(&self.opponent_score) {
            Ordering::Greater => MatchOutcome::Win,
            Ordering::Less => MatchOutcome::Loss,
            Ordering::Equal => MatchOutcome::Draw,
        }
    }

    /// Whether any event carries per-shot goalie tagging. Matches recorded before
    /// tagging existed need the roster fallback instead.
    pub fn has_goalie_tagging(&self) -> bool {
        self.shots.iter().any(|s| s.goalie_id.is_some())
            || self.goals.iter().any(|g| g.goalie_id.is_some())
    }

    /// The whole event log.
    pub fn events(&self) -> EventLog<'_> {
        EventLog {
            goals: self.goals.iter().collect(),
            shots: self.shots.iter().collect(),
            penalties: self.penalties.iter().collect(),
            possessions: self.possessions.iter().collect(),
            faceoffs: self.faceoffs.iter().collect(),
        }
    }

    /// Only the events recorded during `period`.
    pub fn events_in_period(&self, period: Period) -> EventLog<'_> {
        EventLog {
            goals: in_period(&self.goals, period),
            shots: in_period(&self.shots, period),
            penalties: in_period(&self.penalties, period),
            possessions: in_period(&self.possessions, period),
            faceoffs: in_period(&self.faceoffs, period),
        }
    }
}

fn in_period<T: PeriodEvent>(events: &[T], period: Period) -> Vec<&T> {
    events.iter().filter(|e| e.period() == period).collect()
}

/// A borrowed view over some or all of a match's events.
#[derive(Clone, Debug, Default)]
pub struct EventLog<'a> {
    pub goals: Vec<&'a Goal>,
    pub shots: Vec<&'a Shot>,
    pub penalties: Vec<&'a PenaltyEvent>,
    pub possessions: Vec<&'a PossessionEvent>,
    pub faceoffs: Vec<&'a FaceoffEvent>,
}
