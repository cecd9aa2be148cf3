//! Per-match tables: the live table for the match in progress and the detail table for a finished one.

use crate::logic::goalie::resolve_goalie_attribution;
use crate::logic::match_stats::{goalie_line_with, skater_match_line};
use crate::logic::rating::{live_goalie_rating, live_rating, match_detail_rating};
use crate::models::{
    find_player, percentage, GameMatch, LiveGoalieRow, LiveMatchStats, LiveSkaterRow,
    MatchDetail, MatchDetailRow, Player, TeamMatchStats,
};

/// Skater and goalie rows for a match, rated with the live formulas.
///
/// Rows follow the order of `players`, keeping those dressed for `game`. Skaters are then
/// sorted by points, stable on ties.
pub fn live_match_stats(players: &[Player], game: &GameMatch) -> LiveMatchStats {
    let dressed = players.iter().filter(|p| game.is_on_roster(&p.id));

    let mut skaters: Vec<LiveSkaterRow> = dressed
        .clone()
        .filter(|p| !p.is_goalie())
        .map(|p| {
            let line = skater_match_line(game, &p.id);
            LiveSkaterRow {
                player_id: p.id.clone(),
                name: p.name.clone(),
                jersey_number: p.jersey_number,
                position: p.position,
                is_center: game.is_center(&p.id),
                line,
                points: line.points(),
                rating: live_rating(&line),
            }
        })
        .collect();
    skaters.sort_by(|a, b| b.points.cmp(&a.points));

    let attribution = resolve_goalie_attribution(game, players);
    let goalies = dressed
        .filter(|p| p.is_goalie())
        .map(|p| {
            let line = goalie_line_with(game, &attribution, &p.id);
            LiveGoalieRow {
                player_id: p.id.clone(),
                name: p.name.clone(),
                jersey_number: p.jersey_number,
                line,
                save_percentage: line.save_percentage(),
                rating: live_goalie_rating(&line),
            }
        })
        .collect();

    LiveMatchStats {
        match_id: game.id.clone(),
        current_period: game.current_period,
        our_score: game.our_score,
        opponent_score: game.opponent_score,
        skaters,
        goalies,
    }
}

/// Team totals for one match. A faceoff counts as ours when its winner was dressed.
pub fn team_match_stats(game: &GameMatch) -> TeamMatchStats {
    let faceoff_wins = game
        .faceoffs
        .iter()
        .filter(|f| game.is_on_roster(&f.winner_id))
        .count() as u32;
    let faceoff_total = game.faceoffs.len() as u32;

    TeamMatchStats {
        goals: game.goals.iter().filter(|g| g.is_our_team).count() as u32,
        shots: game.our_shots,
        penalties: game.penalties.len() as u32,
        penalty_minutes: game.penalties.iter().map(|p| p.minutes).sum(),
        faceoff_wins,
        faceoff_total,
        faceoff_percentage: percentage(faceoff_wins, faceoff_total),
    }
}

/// The finished-match screen: every dressed player still on the roster, most points first.
pub fn match_detail(players: &[Player], game: &GameMatch) -> MatchDetail {
    let mut rows: Vec<MatchDetailRow> = game
        .roster
        .iter()
        .filter_map(|r| find_player(players, &r.player_id))
        .map(|p| {
            let line = skater_match_line(game, &p.id);
            MatchDetailRow {
                player_id: p.id.clone(),
                name: p.name.clone(),
                jersey_number: p.jersey_number,
                position: p.position,
                goals: line.goals,
                assists: line.assists,
                points: line.points(),
                plus_minus: line.plus_minus,
                shots: line.shots,
                penalty_minutes: line.penalty_minutes,
                rating: match_detail_rating(&line, p.position),
            }
        })
        .collect();
    rows.sort_by(|a, b| b.points.cmp(&a.points));

    MatchDetail {
        match_id: game.id.clone(),
        date: game.date,
        opponent_name: game.opponent_name.clone(),
        our_score: game.our_score,
        opponent_score: game.opponent_score,
        outcome: game.outcome(),
        players: rows,
        team: team_match_stats(game),
    }
}
