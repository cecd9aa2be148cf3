//! Statistics engine: pure functions from players and matches to aggregates and ratings.

mod career;
mod goalie;
mod history;
mod live;
mod match_stats;
mod opponents;
mod period;
pub mod rating;

pub use career::{goalie_leaderboard, goalie_stats, player_stats, skater_leaderboard};
pub use goalie::{resolve_goalie_attribution, GoalieAttribution};
pub use history::{completed_matches, player_match_history};
pub use live::{live_match_stats, match_detail, team_match_stats};
pub use match_stats::{
    goalie_line_with, goalie_match_line, skater_line, skater_match_line, tagged_goalie_line,
};
pub use opponents::{head_to_head, opponent_stats, HeadToHead};
pub use period::{period_summary, summary_scope, TOP_PLAYERS};
pub use rating::{
    career_goalie_rating, live_goalie_rating, live_rating, match_detail_rating, period_rating,
    season_rating, RatingBand, RatingComponents,
};
