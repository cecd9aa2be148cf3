//! Folding one match's event log into a single player's or goalie's counting stats.

use crate::logic::goalie::{resolve_goalie_attribution, GoalieAttribution};
use crate::models::{
    EventLog, GameMatch, GoalieLine, Player, PossessionType, ShotResult, SkaterLine,
};

/// Counting stats for `player_id` over the given events.
///
/// Shots come from the shot log only; goals are logged there too, so they are never
/// derived a second time from the goal log.
pub fn skater_line(events: &EventLog<'_>, player_id: &str) -> SkaterLine {
    let mut line = SkaterLine::default();

    for goal in &events.goals {
        if goal.scorer_id == player_id {
            line.goals += 1;
        }
        if goal.assists.iter().any(|a| a == player_id) {
            line.assists += 1;
        }
        if goal.is_our_team && goal.plus_players.iter().any(|p| p == player_id) {
            line.plus_minus += 1;
        }
        if !goal.is_our_team && goal.minus_players.iter().any(|p| p == player_id) {
            line.plus_minus -= 1;
        }
    }

    line.shots = events
        .shots
        .iter()
        .filter(|s| s.is_our_team && s.player_id.as_deref() == Some(player_id))
        .count() as u32;

    line.penalty_minutes = events
        .penalties
        .iter()
        .filter(|p| p.player_id == player_id)
        .map(|p| p.minutes)
        .sum();

    for poss in events
        .possessions
        .iter()
        .filter(|p| p.player_id.as_deref() == Some(player_id))
    {
        match poss.kind {
            PossessionType::Gain => line.possession_gains += 1,
            PossessionType::Loss => line.possession_losses += 1,
        }
    }

    for faceoff in &events.faceoffs {
        if faceoff.winner_id == player_id {
            line.faceoff_wins += 1;
        }
        if faceoff.loser_id == player_id {
            line.faceoff_losses += 1;
        }
    }

    line
}

/// Counting stats for `player_id` over a whole match.
pub fn skater_match_line(game: &GameMatch, player_id: &str) -> SkaterLine {
    skater_line(&game.events(), player_id)
}

/// Goalie stats from tagged events: goals against plus saved shots.
pub fn tagged_goalie_line(events: &EventLog<'_>, goalie_id: &str) -> GoalieLine {
    let goals_against = events
        .goals
        .iter()
        .filter(|g| !g.is_our_team && g.goalie_id.as_deref() == Some(goalie_id))
        .count() as u32;
    let saves = events
        .shots
        .iter()
        .filter(|s| {
            !s.is_our_team
                && s.goalie_id.as_deref() == Some(goalie_id)
                && s.result == ShotResult::Save
        })
        .count() as u32;
    GoalieLine {
        shots_against: goals_against + saves,
        saves,
        goals_against,
    }
}

/// Goalie stats for a whole match, resolving attribution once.
pub fn goalie_match_line(game: &GameMatch, players: &[Player], goalie_id: &str) -> GoalieLine {
    let attribution = resolve_goalie_attribution(game, players);
    goalie_line_with(game, &attribution, goalie_id)
}

/// Goalie stats for a whole match given an already resolved attribution.
///
/// Legacy matches credit the match's running counters: every opponent shot is a shot
/// against and every opponent goal a goal against.
pub fn goalie_line_with(
    game: &GameMatch,
    attribution: &GoalieAttribution,
    goalie_id: &str,
) -> GoalieLine {
    match attribution {
        GoalieAttribution::Tagged => tagged_goalie_line(&game.events(), goalie_id),
        fallback if fallback.credits_whole_match(goalie_id) => GoalieLine {
            shots_against: game.opponent_shots,
            saves: game.opponent_shots.saturating_sub(game.opponent_score),
            goals_against: game.opponent_score,
        },
        GoalieAttribution::Fallback(_) => GoalieLine::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        FaceoffEvent, Goal, PenaltyEvent, Position, PossessionEvent, Shot,
    };

    fn goal(scorer: &str, assists: &[&str], on_ice: &[&str], ours: bool, goalie: Option<&str>) -> Goal {
        let ids = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Goal {
            id: format!("goal-{scorer}"),
            scorer_id: scorer.to_string(),
            assists: ids(assists),
            plus_players: if ours { ids(on_ice) } else { vec![] },
            minus_players: if ours { vec![] } else { ids(on_ice) },
            timestamp: 0,
            is_our_team: ours,
            goalie_id: goalie.map(str::to_string),
            period: 1,
        }
    }

    fn shot(player: Option<&str>, ours: bool, result: ShotResult, goalie: Option<&str>) -> Shot {
        Shot {
            id: "shot".into(),
            player_id: player.map(str::to_string),
            timestamp: 0,
            location: None,
            is_our_team: ours,
            on_goal: true,
            result,
            goalie_id: goalie.map(str::to_string),
            period: 1,
        }
    }

    fn base_match() -> GameMatch {
        GameMatch::new(
            vec!["a".into(), "b".into(), "g".into()],
            "Sharks",
            "g",
            vec!["a".into()],
        )
    }

    #[test]
    fn counts_every_skater_category() {
        let mut m = base_match();
        m.goals.push(goal("a", &["b"], &["a", "b"], true, None));
        m.goals.push(goal("b", &["a"], &["a"], true, None));
        m.goals.push(goal("", &[], &["a"], false, Some("g")));
        m.shots.push(shot(Some("a"), true, ShotResult::Goal, None));
        m.shots.push(shot(Some("a"), true, ShotResult::Miss, None));
        m.shots.push(shot(Some("a"), false, ShotResult::Save, Some("g")));
        m.shots.push(shot(None, true, ShotResult::Save, None));
        m.penalties.push(PenaltyEvent {
            id: "p1".into(),
            player_id: "a".into(),
            minutes: 2,
            timestamp: 0,
            infraction: "Tripping".into(),
            period: 1,
        });
        m.penalties.push(PenaltyEvent {
            id: "p2".into(),
            player_id: "a".into(),
            minutes: 5,
            timestamp: 0,
            infraction: "Fighting".into(),
            period: 2,
        });
        for kind in [PossessionType::Gain, PossessionType::Gain, PossessionType::Loss] {
            m.possessions.push(PossessionEvent {
                id: "poss".into(),
                player_id: Some("a".into()),
                timestamp: 0,
                kind,
                period: 1,
            });
        }
        m.possessions.push(PossessionEvent {
            id: "poss-anon".into(),
            player_id: None,
            timestamp: 0,
            kind: PossessionType::Gain,
            period: 1,
        });
        m.faceoffs.push(FaceoffEvent {
            id: "f1".into(),
            winner_id: "a".into(),
            loser_id: "opp".into(),
            timestamp: 0,
            period: 1,
        });
        m.faceoffs.push(FaceoffEvent {
            id: "f2".into(),
            winner_id: "opp".into(),
            loser_id: "a".into(),
            timestamp: 0,
            period: 1,
        });

        let line = skater_match_line(&m, "a");
        assert_eq!(
            line,
            SkaterLine {
                goals: 1,
                assists: 1,
                plus_minus: 1,
                shots: 2,
                penalty_minutes: 7,
                possession_gains: 2,
                possession_losses: 1,
                faceoff_wins: 1,
                faceoff_losses: 1,
            }
        );
        assert_eq!(line.shot_percentage(), 50.0);
        assert_eq!(line.faceoff_percentage(), 50.0);
    }

    #[test]
    fn zero_shots_give_zero_percentages() {
        let m = base_match();
        let line = skater_match_line(&m, "a");
        assert_eq!(line, SkaterLine::default());
        assert_eq!(line.shot_percentage(), 0.0);
        assert_eq!(line.faceoff_percentage(), 0.0);
    }

    #[test]
    fn unknown_player_counts_nothing() {
        let mut m = base_match();
        m.goals.push(goal("a", &[], &["a"], true, None));
        assert_eq!(skater_match_line(&m, "ghost"), SkaterLine::default());
    }

    #[test]
    fn tagged_goalie_counts_saves_and_goals() {
        let mut m = base_match();
        m.goals.push(goal("", &[], &["a"], false, Some("g")));
        m.shots.push(shot(None, false, ShotResult::Save, Some("g")));
        m.shots.push(shot(None, false, ShotResult::Save, Some("g")));
        m.shots.push(shot(None, false, ShotResult::Miss, Some("g")));
        m.shots.push(shot(None, false, ShotResult::Save, Some("other")));
        let players = vec![Player {
            id: "g".into(),
            name: "G".into(),
            jersey_number: 1,
            position: Position::Goalie,
        }];
        let line = goalie_match_line(&m, &players, "g");
        assert_eq!(
            line,
            GoalieLine {
                shots_against: 3,
                saves: 2,
                goals_against: 1,
            }
        );
    }

    #[test]
    fn legacy_goalie_takes_match_counters() {
        let mut m = base_match();
        m.opponent_shots = 25;
        m.opponent_score = 3;
        let players = vec![Player {
            id: "g".into(),
            name: "G".into(),
            jersey_number: 1,
            position: Position::Goalie,
        }];
        let line = goalie_match_line(&m, &players, "g");
        assert_eq!(
            line,
            GoalieLine {
                shots_against: 25,
                saves: 22,
                goals_against: 3,
            }
        );
        assert_eq!(goalie_match_line(&m, &players, "a"), GoalieLine::default());
    }
}
