//! What-if probability adjustment.
//!
//! Every recomputation starts from the immutable base triple and the full
//! toggle set; nothing is applied incrementally, so repeated toggling can
//! never accumulate rounding drift. The settle tail clamps the visible
//! home/away figures first and lets draw absorb whatever is left, which
//! keeps home and away inside their band even when draw takes a correction.

use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;
use crate::factors::{Factor, FactorSide};
use crate::state::ProbabilityTriple;

pub const HOME_AWAY_MIN: f64 = 5.0;
pub const HOME_AWAY_MAX: f64 = 80.0;
pub const DRAW_MIN: f64 = 5.0;
pub const DRAW_MAX: f64 = 60.0;

/// Draw bonus applied under rain, split off the two win probabilities.
const RAIN_DRAW_BONUS: f64 = 8.0;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdjustmentToggles {
    pub rain: bool,
    pub home_fatigue: bool,
    pub home_injury: bool,
    pub away_fatigue: bool,
    pub away_injury: bool,
}

impl AdjustmentToggles {
    pub fn any_active(&self) -> bool {
        self.rain || self.home_fatigue || self.home_injury || self.away_fatigue || self.away_injury
    }
}

/// Recomputes the adjusted triple from the base and the active toggles.
/// Deltas of every active toggle are summed onto the base before the single
/// settle pass; output components are integers summing to exactly 100.
pub fn apply_toggles(
    base: &ProbabilityTriple,
    toggles: &AdjustmentToggles,
) -> Result<ProbabilityTriple, AnalysisError> {
    base.validate()?;

    let mut home = base.home;
    let mut draw = base.draw;
    let mut away = base.away;

    if toggles.rain {
        // floor(8/2) off home, remainder off away. Asymmetric by
        // construction; kept verbatim from the validated rule set.
        let home_cut = (RAIN_DRAW_BONUS / 2.0).floor();
        let away_cut = RAIN_DRAW_BONUS - home_cut;
        home -= home_cut;
        away -= away_cut;
        draw += RAIN_DRAW_BONUS;
    }
    if toggles.home_fatigue {
        home -= 10.0;
        draw += 5.0;
        away += 5.0;
    }
    if toggles.home_injury {
        home -= 15.0;
        draw += 7.0;
        away += 8.0;
    }
    if toggles.away_fatigue {
        away -= 10.0;
        draw += 5.0;
        home += 5.0;
    }
    if toggles.away_injury {
        away -= 15.0;
        draw += 7.0;
        home += 8.0;
    }

    Ok(settle(home, draw, away))
}

/// Applies detected factors to the base triple: a side factor moves its own
/// side by the full impact and splits the counterweight over the other two
/// components; a match-level (weather) factor feeds the draw with the rain
/// split. Ends in the same settle pass as the toggle path.
pub fn apply_factors(
    base: &ProbabilityTriple,
    factors: &[Factor],
) -> Result<ProbabilityTriple, AnalysisError> {
    base.validate()?;

    let mut home = base.home;
    let mut draw = base.draw;
    let mut away = base.away;

    for factor in factors {
        let magnitude = factor.impact.unsigned_abs() as f64;
        let gain = factor.impact >= 0;
        match factor.side {
            FactorSide::Home => {
                if gain {
                    home += magnitude;
                    away -= magnitude / 2.0;
                    draw -= magnitude / 2.0;
                } else {
                    home -= magnitude;
                    away += magnitude / 2.0;
                    draw += magnitude / 2.0;
                }
            }
            FactorSide::Away => {
                if gain {
                    away += magnitude;
                    home -= magnitude / 2.0;
                    draw -= magnitude / 2.0;
                } else {
                    away -= magnitude;
                    home += magnitude / 2.0;
                    draw += magnitude / 2.0;
                }
            }
            FactorSide::Match => {
                let home_cut = (magnitude / 2.0).floor();
                home -= home_cut;
                away -= magnitude - home_cut;
                draw += magnitude;
            }
        }
    }

    Ok(settle(home, draw, away))
}

/// Clamp order is load-bearing: home and away first, then draw is recomputed
/// as the remainder and clamped, then the full residual folds back into draw
/// so the sum lands on exactly 100. Rounding happens once, at the end.
/// The accumulated draw value is superseded here — once home and away are
/// clamped, draw can only be the remainder.
fn settle(home: f64, _draw_accumulated: f64, away: f64) -> ProbabilityTriple {
    let home = home.clamp(HOME_AWAY_MIN, HOME_AWAY_MAX);
    let away = away.clamp(HOME_AWAY_MIN, HOME_AWAY_MAX);

    let mut draw = (100.0 - home - away).clamp(DRAW_MIN, DRAW_MAX);
    let total = home + draw + away;
    if total != 100.0 {
        draw += 100.0 - total;
    }

    ProbabilityTriple::new(home.round(), draw.round(), away.round())
}
