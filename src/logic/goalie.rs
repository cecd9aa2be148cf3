//! Goalie attribution for a match: per-event tags when present, roster heuristics for legacy matches.

use crate::models::{find_player, GameMatch, Player, PlayerId};

/// How opponent shots and goals in one match map to our goalies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum GoalieAttribution {
    /// Shots and goals carry `goalie_id`; read them event by event.
    Tagged,
    /// Legacy match without tags: everything against us goes to this goalie, or to nobody.
    Fallback(Option<PlayerId>),
}

impl GoalieAttribution {
    /// Whether the fallback credits the whole match to `goalie_id`.
    pub fn credits_whole_match(&self, goalie_id: &str) -> bool {
        matches!(self, GoalieAttribution::Fallback(Some(id)) if id == goalie_id)
    }
}

/// Resolve attribution once per match.
///
/// Legacy matches: a lone goalie on the roster takes everything; with two or more
/// (or none identifiable) the match's `active_goalie_id` does, even though it may not
/// have been in net for every event.
pub fn resolve_goalie_attribution(game: &GameMatch, players: &[Player]) -> GoalieAttribution {
    if game.has_goalie_tagging() {
        return GoalieAttribution::Tagged;
    }

    let roster_goalies: Vec<&PlayerId> = game
        .roster
        .iter()
        .filter(|r| find_player(players, &r.player_id).is_some_and(Player::is_goalie))
        .map(|r| &r.player_id)
        .collect();

    let resolved = match roster_goalies.as_slice() {
        [only] => Some((*only).clone()),
        _ if !game.active_goalie_id.is_empty() => Some(game.active_goalie_id.clone()),
        _ => None,
    };
    log::debug!(
        "Match {} has no goalie tagging; {} roster goalie(s), crediting {:?}",
        game.id,
        roster_goalies.len(),
        resolved
    );
    GoalieAttribution::Fallback(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Goal, Position};

    fn goalie(id: &str) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_uppercase(),
            jersey_number: 30,
            position: Position::Goalie,
        }
    }

    fn skater(id: &str) -> Player {
        Player {
            id: id.to_string(),
            name: id.to_uppercase(),
            jersey_number: 9,
            position: Position::Forward,
        }
    }

    fn legacy_match(roster: &[&str], active_goalie: &str) -> GameMatch {
        let mut m = GameMatch::new(
            roster.iter().map(|s| s.to_string()).collect(),
            "Sharks",
            active_goalie,
            Vec::new(),
        );
        m.is_active = false;
        m
    }

    #[test]
    fn tagged_match_reads_events() {
        let mut m = legacy_match(&["g1", "s1"], "g1");
        m.goals.push(Goal {
            id: "e1".into(),
            scorer_id: String::new(),
            assists: vec![],
            plus_players: vec![],
            minus_players: vec!["s1".into()],
            timestamp: 0,
            is_our_team: false,
            goalie_id: Some("g1".into()),
            period: 1,
        });
        let players = vec![goalie("g1"), skater("s1")];
        assert_eq!(resolve_goalie_attribution(&m, &players), GoalieAttribution::Tagged);
    }

    #[test]
    fn single_roster_goalie_takes_everything() {
        let m = legacy_match(&["g1", "s1"], "someone-else");
        let players = vec![goalie("g1"), skater("s1")];
        let resolved = resolve_goalie_attribution(&m, &players);
        assert_eq!(resolved, GoalieAttribution::Fallback(Some("g1".into())));
        assert!(resolved.credits_whole_match("g1"));
        assert!(!resolved.credits_whole_match("someone-else"));
    }

    #[test]
    fn two_goalies_fall_back_to_active_goalie() {
        let m = legacy_match(&["g1", "g2", "s1"], "g2");
        let players = vec![goalie("g1"), goalie("g2"), skater("s1")];
        assert_eq!(
            resolve_goalie_attribution(&m, &players),
            GoalieAttribution::Fallback(Some("g2".into()))
        );
    }

    #[test]
    fn no_goalie_and_no_active_id_credits_nobody() {
        let m = legacy_match(&["s1"], "");
        let players = vec![skater("s1")];
        assert_eq!(
            resolve_goalie_attribution(&m, &players),
            GoalieAttribution::Fallback(None)
        );
    }
}
