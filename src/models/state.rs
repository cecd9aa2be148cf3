//! HockeyState: the roster and every recorded match, plus the mutations that keep them consistent.

use crate::models::events::{
    new_event_id, FaceoffEvent, Goal, PenaltyEvent, PossessionEvent, PossessionType, Shot,
    ShotLocation, ShotResult,
};
use crate::models::game::{now_millis, GameMatch, MatchId};
use crate::models::opponent::{Opponent, OpponentId};
use crate::models::player::{Player, PlayerId, Position, MAX_JERSEY_NUMBER};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Skaters a match roster must dress.
pub const MIN_SKATERS: usize = 10;
pub const MAX_SKATERS: usize = 20;
/// Goalies a match roster must dress.
pub const MIN_GOALIES: usize = 1;
pub const MAX_GOALIES: usize = 2;
pub const MAX_ASSISTS: usize = 2;
/// Skaters that can be on the ice for a goal.
pub const MAX_ON_ICE: usize = 6;
/// Period after which a non-tied match is over.
pub const REGULATION_PERIODS: u32 = 3;

/// Errors that can occur while editing the roster or recording a match.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum HockeyError {
    /// Player name is empty after trimming.
    EmptyName,
    /// Jersey number above 99.
    JerseyOutOfRange(u8),
    /// Another player already wears this number.
    DuplicateJersey(u8),
    PlayerNotFound(PlayerId),
    MatchNotFound(MatchId),
    OpponentNotFound(OpponentId),
    /// Only one match may be in progress.
    MatchAlreadyActive,
    NoActiveMatch,
    EmptyOpponentName,
    /// The same player was picked more than once.
    DuplicateSelection(PlayerId),
    WrongSkaterCount { selected: usize },
    WrongGoalieCount { selected: usize },
    /// Starting goalie must be one of the selected goalies.
    InvalidStartingGoalie(PlayerId),
    /// Centers must be selected skaters.
    InvalidCenter(PlayerId),
    /// Our goals need a scorer.
    MissingScorer,
    /// Opponent goals need at least one of our players on the ice.
    MissingMinusPlayers,
    TooManyAssists(usize),
    TooManyOnIce(usize),
    /// Swapping needs a second goalie on the roster.
    NotEnoughGoalies,
    /// More than one goalie could come in; the caller must pick.
    GoalieChoiceRequired,
    /// Target is not a goalie on this match's roster.
    NotARosterGoalie(PlayerId),
    /// Target is already the goalie in net.
    GoalieAlreadyInNet(PlayerId),
}

impl std::fmt::Display for HockeyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HockeyError::EmptyName => write!(f, "Player name must not be empty"),
            HockeyError::JerseyOutOfRange(n) => {
                write!(f, "Jersey number {} must be between 0 and {}", n, MAX_JERSEY_NUMBER)
            }
            HockeyError::DuplicateJersey(n) => write!(f, "Jersey number {} already exists", n),
            HockeyError::PlayerNotFound(_) => write!(f, "Player not found"),
            HockeyError::MatchNotFound(_) => write!(f, "Match not found"),
            HockeyError::OpponentNotFound(_) => write!(f, "Opponent not found"),
            HockeyError::MatchAlreadyActive => write!(f, "A match is already active"),
            HockeyError::NoActiveMatch => write!(f, "No active match"),
            HockeyError::EmptyOpponentName => write!(f, "Please enter opponent name"),
            HockeyError::DuplicateSelection(_) => write!(f, "A player was selected twice"),
            HockeyError::WrongSkaterCount { selected } => write!(
                f,
                "Please select {}-{} skaters (selected {})",
                MIN_SKATERS, MAX_SKATERS, selected
            ),
            HockeyError::WrongGoalieCount { selected } => write!(
                f,
                "Please select {}-{} goalies (selected {})",
                MIN_GOALIES, MAX_GOALIES, selected
            ),
            HockeyError::InvalidStartingGoalie(_) => {
                write!(f, "Starting goalie must be one of the selected goalies")
            }
            HockeyError::InvalidCenter(_) => write!(f, "Centers must be selected skaters"),
            HockeyError::MissingScorer => write!(f, "Please select the goal scorer"),
            HockeyError::MissingMinusPlayers => {
                write!(f, "Please select the players who get minus (-)")
            }
            HockeyError::TooManyAssists(n) => {
                write!(f, "At most {} assists per goal (got {})", MAX_ASSISTS, n)
            }
            HockeyError::TooManyOnIce(n) => {
                write!(f, "At most {} players on the ice (got {})", MAX_ON_ICE, n)
            }
            HockeyError::NotEnoughGoalies => write!(f, "You need at least 2 goalies to swap"),
            HockeyError::GoalieChoiceRequired => write!(f, "Choose which goalie to swap in"),
            HockeyError::NotARosterGoalie(_) => write!(f, "Player is not a goalie on this roster"),
            HockeyError::GoalieAlreadyInNet(_) => write!(f, "That goalie is already in net"),
        }
    }
}

impl std::error::Error for HockeyError {}

/// A goal as entered at the bench, before id, time, period and goalie are filled in.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewGoal {
    #[serde(default)]
    pub scorer_id: PlayerId,
    #[serde(default)]
    pub assists: Vec<PlayerId>,
    #[serde(default)]
    pub plus_players: Vec<PlayerId>,
    #[serde(default)]
    pub minus_players: Vec<PlayerId>,
    pub is_our_team: bool,
}

/// A shot as entered at the bench.
#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewShot {
    #[serde(default)]
    pub player_id: Option<PlayerId>,
    #[serde(default)]
    pub location: Option<ShotLocation>,
    pub is_our_team: bool,
    #[serde(default = "on_goal_default")]
    pub on_goal: bool,
    pub result: ShotResult,
}

fn on_goal_default() -> bool {
    true
}

/// What `finish_period` did.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "period")]
pub enum PeriodOutcome {
    /// The match moved on to this period.
    Advanced(u32),
    /// Regulation is over and the score is not tied; the match was ended.
    MatchEnded,
}

/// Full application state: the team roster, all matches (at most one active) and saved opponents.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HockeyState {
    pub players: Vec<Player>,
    pub matches: Vec<GameMatch>,
    #[serde(default)]
    pub opponents: Vec<Opponent>,
}

impl HockeyState {
    pub fn new(players: Vec<Player>, matches: Vec<GameMatch>, opponents: Vec<Opponent>) -> Self {
        Self {
            players,
            matches,
            opponents,
        }
    }

    pub fn player(&self, id: &str) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    pub fn match_by_id(&self, id: &str) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.id == id)
    }

    /// The match in progress, if any.
    pub fn active_match(&self) -> Option<&GameMatch> {
        self.matches.iter().find(|m| m.is_active)
    }

    fn active_match_mut(&mut self) -> Result<&mut GameMatch, HockeyError> {
        self.matches
            .iter_mut()
            .find(|m| m.is_active)
            .ok_or(HockeyError::NoActiveMatch)
    }

    fn validate_player(
        &self,
        name: &str,
        jersey_number: u8,
        editing: Option<&str>,
    ) -> Result<(), HockeyError> {
        if name.is_empty() {
            return Err(HockeyError::EmptyName);
        }
        if jersey_number > MAX_JERSEY_NUMBER {
            return Err(HockeyError::JerseyOutOfRange(jersey_number));
        }
        let taken = self
            .players
            .iter()
            .any(|p| p.jersey_number == jersey_number && Some(p.id.as_str()) != editing);
        if taken {
            return Err(HockeyError::DuplicateJersey(jersey_number));
        }
        Ok(())
    }

    /// Add a player to the roster. Returns the new player's id.
    pub fn add_player(
        &mut self,
        name: &str,
        jersey_number: u8,
        position: Position,
    ) -> Result<PlayerId, HockeyError> {
        let name = name.trim();
        self.validate_player(name, jersey_number, None)?;
        let player = Player::new(name, jersey_number, position);
        let id = player.id.clone();
        self.players.push(player);
        Ok(id)
    }

    /// Edit name, number and position. The id never changes.
    pub fn update_player(
        &mut self,
        id: &str,
        name: &str,
        jersey_number: u8,
        position: Position,
    ) -> Result<(), HockeyError> {
        let name = name.trim();
        if self.player(id).is_none() {
            return Err(HockeyError::PlayerNotFound(id.to_string()));
        }
        self.validate_player(name, jersey_number, Some(id))?;
        if let Some(p) = self.players.iter_mut().find(|p| p.id == id) {
            p.name = name.to_string();
            p.jersey_number = jersey_number;
            p.position = position;
        }
        Ok(())
    }

    /// Remove a player from the roster. Their events stay in past match logs.
    pub fn delete_player(&mut self, id: &str) -> Result<(), HockeyError> {
        let idx = self
            .players
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| HockeyError::PlayerNotFound(id.to_string()))?;
        self.players.remove(idx);
        Ok(())
    }

    /// Start a new match with the selected players. Returns the new match id.
    pub fn start_match(
        &mut self,
        selected: &[PlayerId],
        opponent_name: &str,
        starting_goalie: &str,
        centers: &[PlayerId],
    ) -> Result<MatchId, HockeyError> {
        if self.active_match().is_some() {
            return Err(HockeyError::MatchAlreadyActive);
        }
        let opponent_name = opponent_name.trim();
        if opponent_name.is_empty() {
            return Err(HockeyError::EmptyOpponentName);
        }

        let mut seen = HashSet::new();
        let mut goalies = Vec::new();
        let mut skaters = Vec::new();
        for id in selected {
            if !seen.insert(id.as_str()) {
                return Err(HockeyError::DuplicateSelection(id.clone()));
            }
            let player = self
                .player(id)
                .ok_or_else(|| HockeyError::PlayerNotFound(id.clone()))?;
            if player.is_goalie() {
                goalies.push(id);
            } else {
                skaters.push(id);
            }
        }
        if !(MIN_SKATERS..=MAX_SKATERS).contains(&skaters.len()) {
            return Err(HockeyError::WrongSkaterCount {
                selected: skaters.len(),
            });
        }
        if !(MIN_GOALIES..=MAX_GOALIES).contains(&goalies.len()) {
            return Err(HockeyError::WrongGoalieCount {
                selected: goalies.len(),
            });
        }
        if !goalies.iter().any(|g| *g == starting_goalie) {
            return Err(HockeyError::InvalidStartingGoalie(starting_goalie.to_string()));
        }
        if let Some(bad) = centers.iter().find(|c| !skaters.contains(c)) {
            return Err(HockeyError::InvalidCenter(bad.clone()));
        }

        let game = GameMatch::new(
            selected.to_vec(),
            opponent_name,
            starting_goalie,
            centers.to_vec(),
        );
        let id = game.id.clone();
        log::info!("Match {} against {} started", id, opponent_name);
        self.matches.push(game);
        Ok(id)
    }

    /// Record a goal in the active match and bump score and shot counters.
    pub fn record_goal(&mut self, goal: NewGoal) -> Result<(), HockeyError> {
        if goal.assists.len() > MAX_ASSISTS {
            return Err(HockeyError::TooManyAssists(goal.assists.len()));
        }
        if goal.is_our_team {
            if goal.scorer_id.is_empty() {
                return Err(HockeyError::MissingScorer);
            }
            if goal.plus_players.len() > MAX_ON_ICE {
                return Err(HockeyError::TooManyOnIce(goal.plus_players.len()));
            }
        } else {
            if goal.minus_players.is_empty() {
                return Err(HockeyError::MissingMinusPlayers);
            }
            if goal.minus_players.len() > MAX_ON_ICE {
                return Err(HockeyError::TooManyOnIce(goal.minus_players.len()));
            }
        }

        let game = self.active_match_mut()?;
        let NewGoal {
            scorer_id,
            assists,
            plus_players,
            minus_players,
            is_our_team,
        } = goal;
        game.goals.push(Goal {
            id: new_event_id(),
            scorer_id,
            assists,
            plus_players: if is_our_team { plus_players } else { Vec::new() },
            minus_players: if is_our_team { Vec::new() } else { minus_players },
            timestamp: now_millis(),
            is_our_team,
            goalie_id: (!is_our_team).then(|| game.active_goalie_id.clone()),
            period: game.current_period,
        });
        if is_our_team {
            game.our_score += 1;
            game.our_shots += 1;
        } else {
            game.opponent_score += 1;
            game.opponent_shots += 1;
        }
        Ok(())
    }

    /// Record a shot in the active match and bump the shot counter.
    pub fn record_shot(&mut self, shot: NewShot) -> Result<(), HockeyError> {
        let game = self.active_match_mut()?;
        game.shots.push(Shot {
            id: new_event_id(),
            player_id: shot.player_id,
            timestamp: now_millis(),
            location: shot.location,
            is_our_team: shot.is_our_team,
            on_goal: shot.on_goal,
            result: shot.result,
            goalie_id: (!shot.is_our_team).then(|| game.active_goalie_id.clone()),
            period: game.current_period,
        });
        if shot.is_our_team {
            game.our_shots += 1;
        } else {
            game.opponent_shots += 1;
        }
        Ok(())
    }

    pub fn record_penalty(
        &mut self,
        player_id: &str,
        minutes: u32,
        infraction: &str,
    ) -> Result<(), HockeyError> {
        let game = self.active_match_mut()?;
        game.penalties.push(PenaltyEvent {
            id: new_event_id(),
            player_id: player_id.to_string(),
            minutes,
            timestamp: now_millis(),
            infraction: infraction.to_string(),
            period: game.current_period,
        });
        Ok(())
    }

    pub fn record_possession(
        &mut self,
        player_id: Option<&str>,
        kind: PossessionType,
    ) -> Result<(), HockeyError> {
        let game = self.active_match_mut()?;
        game.possessions.push(PossessionEvent {
            id: new_event_id(),
            player_id: player_id.map(str::to_string),
            timestamp: now_millis(),
            kind,
            period: game.current_period,
        });
        Ok(())
    }

    pub fn record_faceoff(&mut self, winner_id: &str, loser_id: &str) -> Result<(), HockeyError> {
        let game = self.active_match_mut()?;
        game.faceoffs.push(FaceoffEvent {
            id: new_event_id(),
            winner_id: winner_id.to_string(),
            loser_id: loser_id.to_string(),
            timestamp: now_millis(),
            period: game.current_period,
        });
        Ok(())
    }

    /// Put another roster goalie in net. `target` may be omitted when exactly one other goalie is dressed.
    /// Returns the id of the goalie now in net.
    pub fn swap_goalie(&mut self, target: Option<&str>) -> Result<PlayerId, HockeyError> {
        let players = &self.players;
        let game = self
            .matches
            .iter_mut()
            .find(|m| m.is_active)
            .ok_or(HockeyError::NoActiveMatch)?;
        let goalies: Vec<&Player> = players
            .iter()
            .filter(|p| p.is_goalie() && game.is_on_roster(&p.id))
            .collect();
        if goalies.len() < 2 {
            return Err(HockeyError::NotEnoughGoalies);
        }
        if target == Some(game.active_goalie_id.as_str()) {
            return Err(HockeyError::GoalieAlreadyInNet(game.active_goalie_id.clone()));
        }
        let others: Vec<&Player> = goalies
            .into_iter()
            .filter(|g| g.id != game.active_goalie_id)
            .collect();
        let next = match target {
            Some(id) => others
                .iter()
                .find(|g| g.id == id)
                .ok_or_else(|| HockeyError::NotARosterGoalie(id.to_string()))?,
            None if others.len() == 1 => &others[0],
            None => return Err(HockeyError::GoalieChoiceRequired),
        };
        game.active_goalie_id = next.id.clone();
        Ok(next.id.clone())
    }

    /// Close out the current period: end the match after regulation unless tied, otherwise advance.
    pub fn finish_period(&mut self) -> Result<PeriodOutcome, HockeyError> {
        let game = self.active_match_mut()?;
        let tied = game.our_score == game.opponent_score;
        if game.current_period < REGULATION_PERIODS || tied {
            game.current_period += 1;
            return Ok(PeriodOutcome::Advanced(game.current_period));
        }
        self.end_match()?;
        Ok(PeriodOutcome::MatchEnded)
    }

    /// Mark the active match completed. Returns its id.
    pub fn end_match(&mut self) -> Result<MatchId, HockeyError> {
        let game = self.active_match_mut()?;
        game.is_active = false;
        let started = game
            .date_time()
            .map(|d| d.format("%Y-%m-%d %H:%M UTC").to_string())
            .unwrap_or_default();
        log::info!(
            "Match {} against {} (started {}) ended {}-{}",
            game.id,
            game.opponent_name,
            started,
            game.our_score,
            game.opponent_score
        );
        Ok(game.id.clone())
    }

    /// Delete a match and all of its events.
    pub fn delete_match(&mut self, id: &str) -> Result<(), HockeyError> {
        let idx = self
            .matches
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| HockeyError::MatchNotFound(id.to_string()))?;
        self.matches.remove(idx);
        Ok(())
    }

    /// Save an opponent name for quick selection. Returns the new opponent's id.
    pub fn add_opponent(&mut self, name: &str) -> Result<OpponentId, HockeyError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(HockeyError::EmptyOpponentName);
        }
        let opponent = Opponent::new(name);
        let id = opponent.id.clone();
        self.opponents.push(opponent);
        Ok(id)
    }

    /// Forget a saved opponent. Matches already played against it are untouched.
    pub fn delete_opponent(&mut self, id: &str) -> Result<(), HockeyError> {
        let idx = self
            .opponents
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| HockeyError::OpponentNotFound(id.to_string()))?;
        self.opponents.remove(idx);
        Ok(())
    }
}
