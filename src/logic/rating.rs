//! Player ratings on a 0-10 scale.
//!
//! Several formulas coexist, one per screen, and they intentionally disagree for the
//! same input:
//!
//! * [`season_rating`]: additive step table from a 6.0 base (profile, history, match detail).
//! * [`match_detail_rating`]: the step table, but goalies are shown a flat 6.0.
//! * [`live_rating`] / [`live_goalie_rating`]: weighted component blend rescaled into 6-10,
//!   used while a match is in progress.
//! * [`period_rating`]: the component blend without rescaling, used to rank a period's top skaters.
//! * [`career_goalie_rating`]: saves and goals against on top of a 6.0 base.
//!
//! Every result is clamped to `[0, 10]`.

use crate::models::{GoalieLine, Position, SkaterLine};
use serde::{Deserialize, Serialize};

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 10.0;
pub const BASE_RATING: f64 = 6.0;

fn clamp_rating(rating: f64) -> f64 {
    rating.clamp(MIN_RATING, MAX_RATING)
}

fn points_adjustment(points: u32) -> f64 {
    match points {
        4.. => 2.5,
        3 => 2.0,
        2 => 1.5,
        1 => 0.8,
        0 => -0.3,
    }
}

fn plus_minus_adjustment(plus_minus: i32) -> f64 {
    match plus_minus {
        3.. => 1.5,
        2 => 1.0,
        1 => 0.5,
        0 => 0.0,
        -1 => -0.5,
        -2 => -1.2,
        ..=-3 => -2.0,
    }
}

fn shooting_adjustment(shots: u32, shot_percentage: f64) -> f64 {
    if shots == 0 {
        return 0.0;
    }
    if shot_percentage >= 30.0 {
        0.8
    } else if shot_percentage >= 20.0 {
        0.5
    } else if shot_percentage >= 10.0 {
        0.2
    } else if shots >= 5 {
        -0.3
    } else {
        0.0
    }
}

fn possession_adjustment(gains: u32, losses: u32) -> f64 {
    let total = f64::from(gains) + f64::from(losses);
    if total == 0.0 {
        return 0.0;
    }
    let ratio = f64::from(gains) / total;
    if ratio >= 0.7 {
        0.5
    } else if ratio >= 0.6 {
        0.3
    } else if ratio < 0.4 {
        -0.3
    } else {
        0.0
    }
}

fn penalty_adjustment(penalty_minutes: u32) -> f64 {
    match penalty_minutes {
        10.. => -2.5,
        6..=9 => -1.8,
        4..=5 => -1.2,
        2..=3 => -0.7,
        _ => 0.0,
    }
}

/// Faceoffs only count once a player has taken at least this many.
pub const MIN_FACEOFFS_FOR_RATING: u32 = 5;

fn faceoff_adjustment(wins: u32, losses: u32) -> f64 {
    let total = wins.saturating_add(losses);
    if total < MIN_FACEOFFS_FOR_RATING {
        return 0.0;
    }
    let pct = f64::from(wins) / f64::from(total) * 100.0;
    if pct >= 60.0 {
        0.6
    } else if pct >= 55.0 {
        0.3
    } else if pct < 40.0 {
        -0.4
    } else {
        0.0
    }
}

/// Season/career and match-history rating: 6.0 plus a step adjustment per category.
pub fn season_rating(line: &SkaterLine) -> f64 {
    let rating = BASE_RATING
        + points_adjustment(line.points())
        + plus_minus_adjustment(line.plus_minus)
        + shooting_adjustment(line.shots, line.shot_percentage())
        + possession_adjustment(line.possession_gains, line.possession_losses)
        + penalty_adjustment(line.penalty_minutes)
        + faceoff_adjustment(line.faceoff_wins, line.faceoff_losses);
    clamp_rating(rating)
}

/// Completed-match table rating. Goalies are not rated there and always show 6.0.
pub fn match_detail_rating(line: &SkaterLine, position: Position) -> f64 {
    if position.is_goalie() {
        return BASE_RATING;
    }
    season_rating(line)
}

/// Sub-ratings (each roughly 0-10) blended by the live and period formulas.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RatingComponents {
    pub offensive: f64,
    pub efficiency: f64,
    pub plus_minus: f64,
    pub possession: f64,
    pub discipline: f64,
    pub faceoff: f64,
}

impl RatingComponents {
    fn from_line(line: &SkaterLine, possession: f64) -> Self {
        let goals = f64::from(line.goals);
        let assists = f64::from(line.assists);
        let faceoff_total = line.faceoff_total();
        Self {
            offensive: (goals * 2.0 + assists * 1.5) / (goals + assists).max(1.0) * 2.0,
            efficiency: line.shot_percentage() / 10.0,
            plus_minus: (5.0 + f64::from(line.plus_minus) * 0.5).clamp(0.0, 10.0),
            possession,
            discipline: (10.0 - f64::from(line.penalty_minutes) * 0.5).max(0.0),
            faceoff: if faceoff_total > 0 {
                f64::from(line.faceoff_wins) / f64::from(faceoff_total) * 10.0
            } else {
                5.0
            },
        }
    }

    /// Components as the live match table computes them: possession is neutral (5)
    /// until the player has at least one gain.
    pub fn live(line: &SkaterLine) -> Self {
        let possession = if line.possession_gains > 0 {
            (f64::from(line.possession_gains) / f64::from(line.possession_total()) * 10.0)
                .min(10.0)
        } else {
            5.0
        };
        Self::from_line(line, possession)
    }

    /// Components as the period summary computes them: possession is neutral (5)
    /// only when the player has no possession events at all.
    pub fn period(line: &SkaterLine) -> Self {
        let total = line.possession_total();
        let possession = if total > 0 {
            f64::from(line.possession_gains) / f64::from(total) * 10.0
        } else {
            5.0
        };
        Self::from_line(line, possession)
    }

    /// 30% offense, 20% efficiency, 20% plus/minus, 10% each for possession, discipline and faceoffs.
    pub fn blend(&self) -> f64 {
        self.offensive * 0.3
            + self.efficiency * 0.2
            + self.plus_minus * 0.2
            + self.possession * 0.1
            + self.discipline * 0.1
            + self.faceoff * 0.1
    }
}

/// Map a 0-10 blend into the 6-10 band used by the live table.
fn rescale_live(base: f64) -> f64 {
    clamp_rating(BASE_RATING + (base / 10.0) * 4.0)
}

/// In-progress match rating for a skater.
pub fn live_rating(line: &SkaterLine) -> f64 {
    rescale_live(RatingComponents::live(line).blend())
}

/// In-progress match rating for a goalie, from save percentage alone.
pub fn live_goalie_rating(line: &GoalieLine) -> f64 {
    rescale_live(line.save_percentage() / 10.0)
}

/// Period summary rating: the component blend, clamped but not rescaled.
pub fn period_rating(line: &SkaterLine) -> f64 {
    clamp_rating(RatingComponents::period(line).blend())
}

/// Career goalie rating. Goalies who have not faced a shot stay at 6.0.
pub fn career_goalie_rating(line: &GoalieLine) -> f64 {
    if line.shots_against == 0 {
        return BASE_RATING;
    }
    clamp_rating(
        BASE_RATING + f64::from(line.saves) * 0.02 - f64::from(line.goals_against) * 0.16,
    )
}

/// Colour band a rating is displayed in.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingBand {
    Poor,
    BelowAverage,
    Good,
    Excellent,
}

impl RatingBand {
    pub fn of(rating: f64) -> Self {
        if rating < 4.5 {
            RatingBand::Poor
        } else if rating < 6.0 {
            RatingBand::BelowAverage
        } else if rating < 7.8 {
            RatingBand::Good
        } else {
            RatingBand::Excellent
        }
    }
}
