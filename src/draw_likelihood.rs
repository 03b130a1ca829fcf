//! Parity score for draw-prone fixtures.
//!
//! A weighted sum of four closeness signals: recent form, expected goals,
//! scoring rate, and head-to-head draw share. Each signal falls back to a
//! neutral constant when its snapshot fields are missing, so a sparse
//! feature store never poisons the score.

use serde::Serialize;

use crate::state::FeatureSnapshot;

const FORM_DEFAULT: f64 = 1.0;
const XG_DEFAULT_HOME: f64 = 1.2;
const XG_DEFAULT_AWAY: f64 = 1.0;
const GOALS_DEFAULT_HOME: f64 = 1.2;
const GOALS_DEFAULT_AWAY: f64 = 1.0;
const H2H_DRAW_PCT_DEFAULT: f64 = 20.0;

/// Likelihood for a fixture with no snapshot at all. Distinct from the value
/// computed from per-field defaults: "no data" is not "data showing parity".
const NO_SNAPSHOT_LIKELIHOOD: f64 = 0.5;

pub const CLOSE_MATCH_THRESHOLD: f64 = 0.7;
pub const EVEN_MATCH_THRESHOLD: f64 = 0.6;

/// Draw-closeness score in [0, 1].
pub fn draw_likelihood(snapshot: Option<&FeatureSnapshot>) -> f64 {
    let Some(snap) = snapshot else {
        return NO_SNAPSHOT_LIKELIHOOD;
    };

    let form_diff = (snap.home_form_last5.unwrap_or(FORM_DEFAULT)
        - snap.away_form_last5.unwrap_or(FORM_DEFAULT))
    .abs();
    let xg_diff = (snap.home_xg_avg.unwrap_or(XG_DEFAULT_HOME)
        - snap.away_xg_avg.unwrap_or(XG_DEFAULT_AWAY))
    .abs();
    let goals_diff = (snap.home_goals_for_avg.unwrap_or(GOALS_DEFAULT_HOME)
        - snap.away_goals_for_avg.unwrap_or(GOALS_DEFAULT_AWAY))
    .abs();

    let h2h_total = snap.h2h_total_matches.unwrap_or(0);
    let h2h_draw_pct = if h2h_total > 0 {
        snap.h2h_draws.unwrap_or(0) as f64 / h2h_total as f64 * 100.0
    } else {
        H2H_DRAW_PCT_DEFAULT
    };

    let likelihood = (1.0 - form_diff.min(2.0) / 2.0) * 0.3
        + (1.0 - xg_diff.min(1.0) / 1.0) * 0.3
        + (1.0 - goals_diff.min(1.5) / 1.5) * 0.2
        + (h2h_draw_pct.min(50.0) / 50.0) * 0.2;

    likelihood.clamp(0.0, 1.0)
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DrawWarning {
    pub is_close: bool,
    pub likelihood: f64,
    pub message: &'static str,
}

/// Warning tiers over the likelihood score. None below 0.6.
pub fn draw_warning(likelihood: f64) -> Option<DrawWarning> {
    if likelihood >= CLOSE_MATCH_THRESHOLD {
        Some(DrawWarning {
            is_close: true,
            likelihood,
            message: "Close match - real draw risk",
        })
    } else if likelihood >= EVEN_MATCH_THRESHOLD {
        Some(DrawWarning {
            is_close: true,
            likelihood,
            message: "Evenly matched sides",
        })
    } else {
        None
    }
}
