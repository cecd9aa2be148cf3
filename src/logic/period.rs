//! End-of-period recap: team totals for one period (or the full match) and its top skaters.

use crate::logic::match_stats::skater_line;
use crate::logic::rating::period_rating;
use crate::models::{
    find_player, percentage, EventLog, GameMatch, PeriodSummary, PeriodTopPlayer, Player,
    SummaryScope, REGULATION_PERIODS,
};
use std::cmp::Ordering;

/// How many skaters the recap highlights.
pub const TOP_PLAYERS: usize = 3;

/// Scope the recap covers. The full match is only available once regulation is reached.
pub fn summary_scope(game: &GameMatch, full_match: bool) -> SummaryScope {
    if full_match && game.current_period >= REGULATION_PERIODS {
        SummaryScope::FullMatch
    } else {
        SummaryScope::Period(game.current_period)
    }
}

/// Recap for the current period, or for the whole match when `full_match` is requested after regulation.
pub fn period_summary(players: &[Player], game: &GameMatch, full_match: bool) -> PeriodSummary {
    let scope = summary_scope(game, full_match);
    let events = match scope {
        SummaryScope::FullMatch => game.events(),
        SummaryScope::Period(period) => game.events_in_period(period),
    };

    let mut our_faceoff_wins = 0;
    let mut our_faceoff_losses = 0;
    for faceoff in &events.faceoffs {
        if game.is_on_roster(&faceoff.winner_id) {
            our_faceoff_wins += 1;
        } else if game.is_on_roster(&faceoff.loser_id) {
            our_faceoff_losses += 1;
        }
    }
    let faceoffs = our_faceoff_wins + our_faceoff_losses;

    PeriodSummary {
        scope,
        our_goals: events.goals.iter().filter(|g| g.is_our_team).count() as u32,
        opponent_goals: events.goals.iter().filter(|g| !g.is_our_team).count() as u32,
        our_shots: events.shots.iter().filter(|s| s.is_our_team).count() as u32,
        opponent_shots: events.shots.iter().filter(|s| !s.is_our_team).count() as u32,
        our_faceoff_win_rate: percentage(our_faceoff_wins, faceoffs),
        opponent_faceoff_win_rate: percentage(our_faceoff_losses, faceoffs),
        our_penalty_minutes: events
            .penalties
            .iter()
            .filter(|p| game.is_on_roster(&p.player_id))
            .map(|p| p.minutes)
            .sum(),
        top_players: top_players(players, game, &events),
    }
}

fn top_players(players: &[Player], game: &GameMatch, events: &EventLog<'_>) -> Vec<PeriodTopPlayer> {
    let mut rated: Vec<PeriodTopPlayer> = game
        .roster
        .iter()
        .filter_map(|r| find_player(players, &r.player_id))
        .filter(|p| !p.is_goalie())
        .map(|p| {
            let line = skater_line(events, &p.id);
            PeriodTopPlayer {
                player_id: p.id.clone(),
                name: p.name.clone(),
                jersey_number: p.jersey_number,
                position: p.position,
                rating: period_rating(&line),
                goals: line.goals,
                assists: line.assists,
                plus_minus: line.plus_minus,
            }
        })
        .collect();
    rated.sort_by(|a, b| b.rating.partial_cmp(&a.rating).unwrap_or(Ordering::Equal));
    rated.truncate(TOP_PLAYERS);
    rated
}
