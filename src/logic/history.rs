//! Completed-match listings: per player, and for the whole team.

use crate::logic::match_stats::skater_match_line;
use crate::logic::rating::season_rating;
use crate::models::{GameMatch, PlayerMatchHistory};

/// Completed matches, newest first.
pub fn completed_matches(matches: &[GameMatch]) -> Vec<&GameMatch> {
    let mut done: Vec<&GameMatch> = matches.iter().filter(|m| !m.is_active).collect();
    done.sort_by(|a, b| b.date.cmp(&a.date));
    done
}

/// One entry per completed match the player was dressed for, newest first.
/// The active match is left out.
pub fn player_match_history(matches: &[GameMatch], player_id: &str) -> Vec<PlayerMatchHistory> {
    completed_matches(matches)
        .into_iter()
        .filter(|m| m.is_on_roster(player_id))
        .map(|game| {
            let line = skater_match_line(game, player_id);
            PlayerMatchHistory {
                match_id: game.id.clone(),
                date: game.date,
                opponent_name: game.opponent_name.clone(),
                goals: line.goals,
                assists: line.assists,
                plus_minus: line.plus_minus,
                penalty_minutes: line.penalty_minutes,
                shots: line.shots,
                possession_gains: line.possession_gains,
                possession_losses: line.possession_losses,
                faceoff_wins: line.faceoff_wins,
                faceoff_losses: line.faceoff_losses,
                rating: season_rating(&line),
                our_score: game.our_score,
                opponent_score: game.opponent_score,
            }
        })
        .collect()
}
