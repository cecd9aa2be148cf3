//! Career totals: every match a player was dressed for, summed and rated.

use crate::logic::match_stats::{goalie_match_line, skater_match_line};
use crate::logic::rating::{career_goalie_rating, season_rating};
use crate::models::{GameMatch, GoalieLine, GoalieStats, Player, PlayerStats, SkaterLine};
use std::cmp::Ordering;

/// Matches whose roster includes `player_id`, the active one included.
fn dressed_for<'a>(
    matches: &'a [GameMatch],
    player_id: &'a str,
) -> impl Iterator<Item = &'a GameMatch> + 'a {
    matches.iter().filter(move |m| m.is_on_roster(player_id))
}

/// Career skater stats with the season rating.
pub fn player_stats(matches: &[GameMatch], player_id: &str) -> PlayerStats {
    let mut games_played = 0;
    let mut total = SkaterLine::default();
    for game in dressed_for(matches, player_id) {
        games_played += 1;
        total += skater_match_line(game, player_id);
    }

    PlayerStats {
        player_id: player_id.to_string(),
        games_played,
        goals: total.goals,
        assists: total.assists,
        points: total.points(),
        plus_minus: total.plus_minus,
        shots: total.shots,
        shot_percentage: total.shot_percentage(),
        possession_gains: total.possession_gains,
        possession_losses: total.possession_losses,
        penalty_minutes: total.penalty_minutes,
        faceoff_wins: total.faceoff_wins,
        faceoff_losses: total.faceoff_losses,
        faceoff_percentage: total.faceoff_percentage(),
        rating: season_rating(&total),
    }
}

/// Career goalie stats. `players` is needed to resolve legacy matches without goalie tagging.
pub fn goalie_stats(players: &[Player], matches: &[GameMatch], goalie_id: &str) -> GoalieStats {
    let mut games_played = 0;
    let mut total = GoalieLine::default();
    for game in dressed_for(matches, goalie_id) {
        games_played += 1;
        total += goalie_match_line(game, players, goalie_id);
    }

    GoalieStats {
        player_id: goalie_id.to_string(),
        games_played,
        shots_against: total.shots_against,
        saves: total.saves,
        goals_against: total.goals_against,
        save_percentage: total.save_percentage(),
        rating: career_goalie_rating(&total),
    }
}

/// Skaters who have played at least once, most points first.
pub fn skater_leaderboard(players: &[Player], matches: &[GameMatch]) -> Vec<(Player, PlayerStats)> {
    let mut rows: Vec<(Player, PlayerStats)> = players
        .iter()
        .filter(|p| !p.is_goalie())
        .map(|p| (p.clone(), player_stats(matches, &p.id)))
        .filter(|(_, s)| s.games_played > 0)
        .collect();
    rows.sort_by(|a, b| b.1.points.cmp(&a.1.points));
    rows
}

/// Goalies who have played at least once, best save percentage first.
pub fn goalie_leaderboard(players: &[Player], matches: &[GameMatch]) -> Vec<(Player, GoalieStats)> {
    let mut rows: Vec<(Player, GoalieStats)> = players
        .iter()
        .filter(|p| p.is_goalie())
        .map(|p| (p.clone(), goalie_stats(players, matches, &p.id)))
        .filter(|(_, s)| s.games_played > 0)
        .collect();
    rows.sort_by(|a, b| {
        b.1.save_percentage
            .partial_cmp(&a.1.save_percentage)
            .unwrap_or(Ordering::Equal)
    });
    rows
}
