//! Head-to-head records, grouped by opponent name.

use crate::logic::history::completed_matches;
use crate::models::{percentage, GameMatch, MatchOutcome, OpponentStats};
use serde::Serialize;
use std::collections::HashMap;

impl OpponentStats {
    fn new(opponent_name: &str) -> Self {
        Self {
            opponent_name: opponent_name.to_string(),
            ..Self::default()
        }
    }

    fn record(&mut self, game: &GameMatch) {
        self.games_played += 1;
        self.goals_for += game.our_score;
        self.goals_against += game.opponent_score;
        match game.outcome() {
            MatchOutcome::Win => self.wins += 1,
            MatchOutcome::Loss => self.losses += 1,
            MatchOutcome::Draw => self.draws += 1,
        }
        self.win_percentage = percentage(self.wins, self.games_played);
    }
}

/// Records against every opponent met in a completed match, most games played first.
///
/// Names are grouped exactly as typed (case-sensitive, untrimmed). Ties keep the order
/// in which opponents were first met.
pub fn opponent_stats(matches: &[GameMatch]) -> Vec<OpponentStats> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<OpponentStats> = Vec::new();

    for game in matches.iter().filter(|m| !m.is_active) {
        let slot = *index.entry(game.opponent_name.as_str()).or_insert_with(|| {
            groups.push(OpponentStats::new(&game.opponent_name));
            groups.len() - 1
        });
        groups[slot].record(game);
    }

    groups.sort_by(|a, b| b.games_played.cmp(&a.games_played));
    groups
}

/// One opponent's record and the completed matches behind it.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadToHead<'a> {
    pub stats: OpponentStats,
    /// Newest first.
    pub matches: Vec<&'a GameMatch>,
}

pub fn head_to_head<'a>(matches: &'a [GameMatch], opponent_name: &str) -> HeadToHead<'a> {
    let games: Vec<&GameMatch> = completed_matches(matches)
        .into_iter()
        .filter(|m| m.opponent_name == opponent_name)
        .collect();
    let mut stats = OpponentStats::new(opponent_name);
    for game in &games {
        stats.record(game);
    }
    HeadToHead {
        stats,
        matches: games,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    fn finished(opponent: &str, ours: u32, theirs: u32, date: i64) -> GameMatch {
        let mut m = GameMatch::new(vec![], opponent, "g", vec![]);
        m.our_score = ours;
        m.opponent_score = theirs;
        m.date = date;
        m.is_active = false;
        m
    }

    #[test]
    fn sharks_series() {
        let matches = vec![
            finished("Sharks", 3, 2, 1),
            finished("Sharks", 1, 4, 2),
            finished("Sharks", 2, 2, 3),
        ];
        let stats = opponent_stats(&matches);
        assert_eq!(stats.len(), 1);
        let sharks = &stats[0];
        assert_eq!(sharks.games_played, 3);
        assert_eq!((sharks.wins, sharks.losses, sharks.draws), (1, 1, 1));
        assert_eq!((sharks.goals_for, sharks.goals_against), (6, 8));
        assert_float_absolute_eq!(100.0 / 3.0, sharks.win_percentage);
    }

    #[test]
    fn names_are_case_sensitive_and_sorted_by_games() {
        let mut active = finished("Bears", 9, 0, 10);
        active.is_active = true;
        let matches = vec![
            finished("sharks", 1, 0, 1),
            finished("Bears", 1, 0, 2),
            finished("Bears", 0, 1, 3),
            finished("Sharks", 5, 5, 4),
            active,
        ];
        let names: Vec<(String, u32)> = opponent_stats(&matches)
            .into_iter()
            .map(|s| (s.opponent_name, s.games_played))
            .collect();
        assert_eq!(
            names,
            vec![
                ("Bears".to_string(), 2),
                ("sharks".to_string(), 1),
                ("Sharks".to_string(), 1),
            ]
        );
    }

    #[test]
    fn head_to_head_lists_newest_first() {
        let matches = vec![
            finished("Sharks", 3, 2, 100),
            finished("Bears", 1, 4, 200),
            finished("Sharks", 2, 2, 300),
        ];
        let h2h = head_to_head(&matches, "Sharks");
        assert_eq!(h2h.stats.games_played, 2);
        let dates: Vec<i64> = h2h.matches.iter().map(|m| m.date).collect();
        assert_eq!(dates, vec![300, 100]);
    }

    #[test]
    fn unknown_opponent_has_zero_win_percentage() {
        let h2h = head_to_head(&[], "Nobody");
        assert_eq!(h2h.stats.games_played, 0);
        assert_eq!(h2h.stats.win_percentage, 0.0);
    }
}
