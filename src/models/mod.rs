//! Data structures for the scorekeeper: players, matches, event logs, derived stats and app state.

mod events;
mod game;
mod opponent;
mod player;
mod state;
mod stats;

pub use events::{
    EventId, FaceoffEvent, Goal, PenaltyEvent, Period, PeriodEvent, PossessionEvent,
    PossessionType, Shot, ShotLocation, ShotResult,
};
pub use game::{now_millis, EventLog, GameMatch, MatchId, MatchOutcome, MatchPlayer};
pub use opponent::{Opponent, OpponentId};
pub use player::{find_player, Player, PlayerId, Position, MAX_JERSEY_NUMBER};
pub use state::{
    HockeyError, HockeyState, NewGoal, NewShot, PeriodOutcome, MAX_ASSISTS, MAX_GOALIES,
    MAX_ON_ICE, MAX_SKATERS, MIN_GOALIES, MIN_SKATERS, REGULATION_PERIODS,
};
pub use stats::{
    percentage, GoalieLine, GoalieStats, LiveGoalieRow, LiveMatchStats, LiveSkaterRow,
    MatchDetail, MatchDetailRow, OpponentStats, PeriodSummary, PeriodTopPlayer,
    PlayerMatchHistory, PlayerStats, SkaterLine, SummaryScope, TeamMatchStats,
};
