//! Integration tests for the per-match views: live table, team totals, period recap and match detail.

mod common;

use assert_float_eq::*;
use common::{our_goal, our_shot, team, their_goal, their_shot, Team};
use rink_stats::models::{MatchOutcome, SummaryScope};
use rink_stats::{
    live_match_stats, match_detail, period_summary, team_match_stats, PossessionType, ShotResult,
};

const EPS: f64 = 1e-9;

/// Active match against the Sharks, now in period 2 at 1-1.
///
/// * Period 1: S0 scores from S1 (both on the ice) and wins two draws, S1 loses one,
///   S3 takes a minor, goalie 0 makes a save.
/// * Period 2: conceded with S2 on the ice against goalie 0, then goalie 1 comes in
///   and makes two saves. S2 wins a puck battle.
fn two_periods() -> Team {
    let mut t = team(2);
    let s: Vec<String> = t.skaters.clone();
    t.start("Sharks");

    t.state.record_goal(our_goal(&s[0], &[&s[1]], &[&s[0], &s[1]])).unwrap();
    t.state.record_shot(our_shot(&s[0], ShotResult::Goal)).unwrap();
    t.state.record_faceoff(&s[0], "opp-7").unwrap();
    t.state.record_faceoff(&s[0], "opp-7").unwrap();
    t.state.record_faceoff("opp-9", &s[1]).unwrap();
    t.state.record_penalty(&s[3], 2, "Slashing").unwrap();
    t.state.record_shot(their_shot(ShotResult::Save)).unwrap();
    t.state.finish_period().unwrap();

    t.state.record_goal(their_goal(&[&s[2]])).unwrap();
    t.state.swap_goalie(None).unwrap();
    t.state.record_shot(their_shot(ShotResult::Save)).unwrap();
    t.state.record_shot(their_shot(ShotResult::Save)).unwrap();
    t.state.record_possession(Some(&s[2]), PossessionType::Gain).unwrap();
    t
}

#[test]
fn live_table_rates_skaters_and_goalies() {
    let t = two_periods();
    let game = t.state.active_match().unwrap();
    let live = live_match_stats(&t.state.players, game);

    assert_eq!(live.current_period, 2);
    assert_eq!((live.our_score, live.opponent_score), (1, 1));
    assert_eq!(live.skaters.len(), 10);
    assert_eq!(live.skaters[0].player_id, t.skaters[0]);
    assert_eq!(live.skaters[1].player_id, t.skaters[1]);
    assert!(live.skaters[0].is_center);
    assert!(!live.skaters[2].is_center);

    let scorer = &live.skaters[0];
    assert_eq!(scorer.points, 1);
    assert_eq!(scorer.line.faceoff_wins, 2);
    // blend 6.8 rescaled into 6-10
    assert_float_absolute_eq!(6.0 + 0.68 * 4.0, scorer.rating, EPS);

    assert_eq!(live.goalies.len(), 2);
    let starter = &live.goalies[0];
    assert_eq!(starter.line.shots_against, 2);
    assert_eq!(starter.line.goals_against, 1);
    assert_float_absolute_eq!(50.0, starter.save_percentage, EPS);
    assert_float_absolute_eq!(8.0, starter.rating, EPS);
    let backup = &live.goalies[1];
    assert_eq!(backup.line.saves, 2);
    assert_float_absolute_eq!(10.0, backup.rating, EPS);
}

#[test]
fn team_totals_count_draws_won_by_dressed_players() {
    let t = two_periods();
    let totals = team_match_stats(t.state.active_match().unwrap());
    assert_eq!(totals.goals, 1);
    assert_eq!(totals.shots, 2);
    assert_eq!(totals.penalties, 1);
    assert_eq!(totals.penalty_minutes, 2);
    assert_eq!((totals.faceoff_wins, totals.faceoff_total), (2, 3));
    assert_float_absolute_eq!(200.0 / 3.0, totals.faceoff_percentage, EPS);
}

#[test]
fn period_summary_covers_only_the_current_period() {
    let t = two_periods();
    let game = t.state.active_match().unwrap();

    // Full match is not offered before regulation is reached.
    let summary = period_summary(&t.state.players, game, true);
    assert_eq!(summary.scope, SummaryScope::Period(2));
    assert_eq!((summary.our_goals, summary.opponent_goals), (0, 1));
    assert_eq!((summary.our_shots, summary.opponent_shots), (0, 2));
    assert_float_absolute_eq!(0.0, summary.our_faceoff_win_rate, EPS);
    assert_eq!(summary.our_penalty_minutes, 0);

    assert_eq!(summary.top_players.len(), 3);
    let best = &summary.top_players[0];
    assert_eq!(best.player_id, t.skaters[2]);
    assert_eq!(best.plus_minus, -1);
    assert_float_absolute_eq!(3.4, best.rating, EPS);
    assert_float_absolute_eq!(3.0, summary.top_players[1].rating, EPS);
}

#[test]
fn full_match_summary_after_regulation() {
    let mut t = two_periods();
    t.state.finish_period().unwrap();
    let game = t.state.active_match().unwrap();
    assert_eq!(game.current_period, 3);

    let summary = period_summary(&t.state.players, game, true);
    assert_eq!(summary.scope, SummaryScope::FullMatch);
    assert_eq!((summary.our_goals, summary.opponent_goals), (1, 1));
    assert_eq!((summary.our_shots, summary.opponent_shots), (1, 3));
    assert_float_absolute_eq!(200.0 / 3.0, summary.our_faceoff_win_rate, EPS);
    assert_float_absolute_eq!(100.0 / 3.0, summary.opponent_faceoff_win_rate, EPS);
    assert_eq!(summary.our_penalty_minutes, 2);

    let top: Vec<&str> = summary.top_players.iter().map(|p| p.player_id.as_str()).collect();
    assert_eq!(top, vec![t.skater(0), t.skater(1), t.skater(2)]);
    assert_float_absolute_eq!(6.8, summary.top_players[0].rating, EPS);
    assert_float_absolute_eq!(3.5, summary.top_players[1].rating, EPS);
    assert!(summary.top_players.iter().all(|p| p.position != rink_stats::Position::Goalie));
}

#[test]
fn finished_match_detail() {
    let mut t = two_periods();
    let (s0, s1) = (t.skater(0).to_string(), t.skater(1).to_string());
    t.state.finish_period().unwrap();
    t.state.record_goal(our_goal(&s1, &[&s0], &[&s0, &s1])).unwrap();
    let id = t.state.end_match().unwrap();

    let game = t.state.match_by_id(&id).unwrap();
    let detail = match_detail(&t.state.players, game);
    assert_eq!(detail.opponent_name, "Sharks");
    assert_eq!(detail.outcome, MatchOutcome::Win);
    assert_eq!((detail.our_score, detail.opponent_score), (2, 1));
    assert_eq!(detail.players.len(), 12);
    assert_eq!(detail.players[0].points, 2);
    assert_eq!(detail.players[1].points, 2);
    assert_eq!(detail.team.goals, 2);

    for row in detail.players.iter().filter(|r| r.position == rink_stats::Position::Goalie) {
        assert_float_absolute_eq!(6.0, row.rating, EPS);
    }
}
