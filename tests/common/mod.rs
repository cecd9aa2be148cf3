//! Shared fixtures: a dressed team and shorthand for bench entries.
#![allow(dead_code)]

use rink_stats::{HockeyState, MatchId, NewGoal, NewShot, PlayerId, Position, ShotResult};

pub struct Team {
    pub state: HockeyState,
    pub skaters: Vec<PlayerId>,
    pub goalies: Vec<PlayerId>,
}

/// Ten skaters (jerseys 1-10, #1 and #2 play center) and `goalies` goalies (jerseys 30+).
pub fn team(goalies: usize) -> Team {
    let mut state = HockeyState::default();
    let skaters = (1..=10u8)
        .map(|n| {
            let position = if n <= 6 { Position::Forward } else { Position::Defense };
            state.add_player(&format!("Skater {n}"), n, position).unwrap()
        })
        .collect();
    let goalies = (0..goalies as u8)
        .map(|i| state.add_player(&format!("Goalie {i}"), 30 + i, Position::Goalie).unwrap())
        .collect();
    Team {
        state,
        skaters,
        goalies,
    }
}

impl Team {
    /// Start a match dressing everyone, first goalie in net.
    pub fn start(&mut self, opponent: &str) -> MatchId {
        let mut selected = self.skaters.clone();
        selected.extend(self.goalies.iter().cloned());
        let centers = self.skaters[..2].to_vec();
        self.state
            .start_match(&selected, opponent, &self.goalies[0], &centers)
            .unwrap()
    }

    pub fn skater(&self, i: usize) -> &str {
        &self.skaters[i]
    }

    pub fn goalie(&self, i: usize) -> &str {
        &self.goalies[i]
    }
}

pub fn ids(xs: &[&str]) -> Vec<PlayerId> {
    xs.iter().map(|s| s.to_string()).collect()
}

pub fn our_goal(scorer: &str, assists: &[&str], on_ice: &[&str]) -> NewGoal {
    NewGoal {
        scorer_id: scorer.to_string(),
        assists: ids(assists),
        plus_players: ids(on_ice),
        minus_players: vec![],
        is_our_team: true,
    }
}

pub fn their_goal(on_ice: &[&str]) -> NewGoal {
    NewGoal {
        minus_players: ids(on_ice),
        is_our_team: false,
        ..NewGoal::default()
    }
}

pub fn our_shot(shooter: &str, result: ShotResult) -> NewShot {
    NewShot {
        player_id: Some(shooter.to_string()),
        location: None,
        is_our_team: true,
        on_goal: result != ShotResult::Miss,
        result,
    }
}

pub fn their_shot(result: ShotResult) -> NewShot {
    NewShot {
        player_id: None,
        location: None,
        is_our_team: false,
        on_goal: result != ShotResult::Miss,
        result,
    }
}
