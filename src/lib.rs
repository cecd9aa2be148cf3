//! Hockey scorekeeper: match event logs, player/goalie/opponent statistics and ratings.

pub mod logic;
pub mod models;
pub mod store;

pub use logic::{
    completed_matches, goalie_leaderboard, goalie_stats, head_to_head, live_match_stats,
    match_detail, opponent_stats, period_summary, player_match_history, player_stats,
    resolve_goalie_attribution, skater_leaderboard, skater_match_line, team_match_stats,
    GoalieAttribution, HeadToHead, RatingBand,
};
pub use models::{
    GameMatch, GoalieLine, GoalieStats, HockeyError, HockeyState, MatchId, NewGoal, NewShot,
    Opponent, OpponentId, OpponentStats, PeriodOutcome, Player, PlayerId, PlayerMatchHistory,
    PlayerStats, Position, PossessionType, ShotResult, SkaterLine,
};
pub use store::{BlobStore, StoreError};
