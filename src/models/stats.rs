//! Derived statistics. None of these are persisted; they are recomputed from the match log on demand.

use crate::models::events::Period;
use crate::models::game::{MatchId, MatchOutcome};
use crate::models::player::{PlayerId, Position};
use serde::{Deserialize, Serialize};
use std::ops::AddAssign;

/// `part / whole * 100`, or 0 when `whole` is 0.
pub fn percentage(part: u32, whole: u32) -> f64 {
    if whole > 0 {
        f64::from(part) / f64::from(whole) * 100.0
    } else {
        0.0
    }
}

/// Counting stats for one skater over some scope (a period, a match, a career).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterLine {
    pub goals: u32,
    pub assists: u32,
    pub plus_minus: i32,
    /// Our-team shots attributed to the player, read from the shot log only.
    pub shots: u32,
    pub penalty_minutes: u32,
    pub possession_gains: u32,
    pub possession_losses: u32,
    pub faceoff_wins: u32,
    pub faceoff_losses: u32,
}

impl SkaterLine {
    pub fn points(&self) -> u32 {
        self.goals.saturating_add(self.assists)
    }

    pub fn shot_percentage(&self) -> f64 {
        percentage(self.goals, self.shots)
    }

    pub fn faceoff_total(&self) -> u32 {
        self.faceoff_wins.saturating_add(self.faceoff_losses)
    }

    pub fn faceoff_percentage(&self) -> f64 {
        percentage(self.faceoff_wins, self.faceoff_total())
    }

    pub fn possession_total(&self) -> u32 {
        self.possession_gains.saturating_add(self.possession_losses)
    }
}

impl AddAssign for SkaterLine {
    fn add_assign(&mut self, rhs: Self) {
        self.goals += rhs.goals;
        self.assists += rhs.assists;
        self.plus_minus += rhs.plus_minus;
        self.shots += rhs.shots;
        self.penalty_minutes += rhs.penalty_minutes;
        self.possession_gains += rhs.possession_gains;
        self.possession_losses += rhs.possession_losses;
        self.faceoff_wins += rhs.faceoff_wins;
        self.faceoff_losses += rhs.faceoff_losses;
    }
}

/// Counting stats for one goalie over some scope.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieLine {
    pub shots_against: u32,
    pub saves: u32,
    pub goals_against: u32,
}

impl GoalieLine {
    pub fn save_percentage(&self) -> f64 {
        percentage(self.saves, self.shots_against)
    }
}

impl AddAssign for GoalieLine {
    fn add_assign(&mut self, rhs: Self) {
        self.shots_against += rhs.shots_against;
        self.saves += rhs.saves;
        self.goals_against += rhs.goals_against;
    }
}

/// Career totals for a skater (profile and stats screens).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerStats {
    pub player_id: PlayerId,
    /// Every match the player was dressed for, the active one included.
    pub games_played: u32,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub plus_minus: i32,
    pub shots: u32,
    pub shot_percentage: f64,
    pub possession_gains: u32,
    pub possession_losses: u32,
    pub penalty_minutes: u32,
    pub faceoff_wins: u32,
    pub faceoff_losses: u32,
    pub faceoff_percentage: f64,
    pub rating: f64,
}

/// Career totals for a goalie.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GoalieStats {
    pub player_id: PlayerId,
    pub games_played: u32,
    pub shots_against: u32,
    pub saves: u32,
    pub goals_against: u32,
    pub save_percentage: f64,
    pub rating: f64,
}

/// One completed match from a single player's point of view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerMatchHistory {
    pub match_id: MatchId,
    pub date: i64,
    pub opponent_name: String,
    pub goals: u32,
    pub assists: u32,
    pub plus_minus: i32,
    pub penalty_minutes: u32,
    pub shots: u32,
    pub possession_gains: u32,
    pub possession_losses: u32,
    pub faceoff_wins: u32,
    pub faceoff_losses: u32,
    pub rating: f64,
    pub our_score: u32,
    pub opponent_score: u32,
}

/// Head-to-head record against one opponent.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpponentStats {
    pub opponent_name: String,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub draws: u32,
    pub goals_for: u32,
    pub goals_against: u32,
    pub win_percentage: f64,
}

/// A skater row in the live (in-progress) match table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveSkaterRow {
    pub player_id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    pub position: Position,
    pub is_center: bool,
    pub line: SkaterLine,
    pub points: u32,
    pub rating: f64,
}

/// A goalie row in the live match table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveGoalieRow {
    pub player_id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    pub line: GoalieLine,
    pub save_percentage: f64,
    pub rating: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveMatchStats {
    pub match_id: MatchId,
    pub current_period: Period,
    pub our_score: u32,
    pub opponent_score: u32,
    /// Sorted by points, highest first.
    pub skaters: Vec<LiveSkaterRow>,
    pub goalies: Vec<LiveGoalieRow>,
}

/// A player row in the completed-match detail table.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetailRow {
    pub player_id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    pub position: Position,
    pub goals: u32,
    pub assists: u32,
    pub points: u32,
    pub plus_minus: i32,
    pub shots: u32,
    pub penalty_minutes: u32,
    pub rating: f64,
}

/// Team-level totals for a single match.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMatchStats {
    pub goals: u32,
    pub shots: u32,
    pub penalties: u32,
    pub penalty_minutes: u32,
    pub faceoff_wins: u32,
    pub faceoff_total: u32,
    pub faceoff_percentage: f64,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchDetail {
    pub match_id: MatchId,
    pub date: i64,
    pub opponent_name: String,
    pub our_score: u32,
    pub opponent_score: u32,
    pub outcome: MatchOutcome,
    /// Sorted by points, highest first.
    pub players: Vec<MatchDetailRow>,
    pub team: TeamMatchStats,
}

/// Which slice of a match a period summary covers.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "period")]
pub enum SummaryScope {
    Period(Period),
    FullMatch,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTopPlayer {
    pub player_id: PlayerId,
    pub name: String,
    pub jersey_number: u8,
    pub position: Position,
    pub rating: f64,
    pub goals: u32,
    pub assists: u32,
    pub plus_minus: i32,
}

/// End-of-period recap shown between periods.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodSummary {
    pub scope: SummaryScope,
    pub our_goals: u32,
    pub opponent_goals: u32,
    pub our_shots: u32,
    pub opponent_shots: u32,
    pub our_faceoff_win_rate: f64,
    pub opponent_faceoff_win_rate: f64,
    pub our_penalty_minutes: u32,
    /// At most three skaters, best rating first.
    pub top_players: Vec<PeriodTopPlayer>,
}
