//! Value-bet detection.
//!
//! Two independent variants. The table variant scans an ordered list of
//! historically backtested edges (walk-forward validation, 2020-2022 train /
//! 2023-2026 test) and returns the first match; overlapping ranges are
//! intentional, with specific league rules listed ahead of the catch-alls.
//! The EV variant flags a pick whose model probability beats the quoted
//! price outright.

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::AnalysisError;
use crate::league::League;
use crate::state::{OddsTriple, Outcome, ProbabilityTriple};

/// One verified edge from the backtest catalogue. Immutable reference data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ValueBetEdge {
    pub name: &'static str,
    pub description: &'static str,
    /// Return on investment observed in the holdout window, in percent.
    pub verified_roi: f64,
    pub sample_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum LeagueFilter {
    Only(League),
    Except(League),
    Any,
}

impl LeagueFilter {
    fn matches(self, league: Option<League>) -> bool {
        match self {
            LeagueFilter::Only(l) => league == Some(l),
            // An unknown league is "not that league" and passes the filter.
            LeagueFilter::Except(l) => league != Some(l),
            LeagueFilter::Any => true,
        }
    }
}

struct EdgeRule {
    filter: LeagueFilter,
    outcome: Outcome,
    /// Probability band in percent, half-open: `low <= p < high`.
    range: (f64, f64),
    edge: ValueBetEdge,
}

impl EdgeRule {
    fn matches(&self, probs: &ProbabilityTriple, league: Option<League>) -> bool {
        let p = probs.get(self.outcome);
        self.filter.matches(league) && p >= self.range.0 && p < self.range.1
    }
}

/// Ordered by priority: first match wins. Later entries deliberately overlap
/// earlier ones (e.g. the any-league home band sits under two La Liga bands).
static EDGE_RULES: Lazy<Vec<EdgeRule>> = Lazy::new(|| {
    vec![
        EdgeRule {
            filter: LeagueFilter::Only(League::LaLiga),
            outcome: Outcome::Home,
            range: (67.0, 72.0),
            edge: ValueBetEdge {
                name: "La Liga home stronghold",
                description: "La Liga fixture with a clearly favoured home side",
                verified_roi: 15.6,
                sample_size: 51,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Only(League::PremierLeague),
            outcome: Outcome::Away,
            range: (60.0, 65.0),
            edge: ValueBetEdge {
                name: "EPL road favourite",
                description: "Premier League fixture with a clearly favoured away side",
                verified_roi: 11.3,
                sample_size: 36,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Only(League::SerieA),
            outcome: Outcome::Draw,
            range: (26.0, 30.0),
            edge: ValueBetEdge {
                name: "Serie A draw zone",
                description: "Serie A fixture with an elevated draw probability",
                verified_roi: 10.9,
                sample_size: 532,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Only(League::SerieA),
            outcome: Outcome::Draw,
            range: (30.0, 32.0),
            edge: ValueBetEdge {
                name: "Serie A draw zone",
                description: "Serie A fixture with an elevated draw probability",
                verified_roi: 9.5,
                sample_size: 708,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Only(League::LaLiga),
            outcome: Outcome::Home,
            range: (65.0, 67.0),
            edge: ValueBetEdge {
                name: "La Liga home edge",
                description: "La Liga fixture with a favoured home side",
                verified_roi: 7.4,
                sample_size: 55,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Only(League::SerieA),
            outcome: Outcome::Draw,
            range: (32.0, 35.0),
            edge: ValueBetEdge {
                name: "Serie A draw watch",
                description: "Serie A fixture with a high draw probability",
                verified_roi: 5.7,
                sample_size: 200,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Except(League::LaLiga),
            outcome: Outcome::Home,
            range: (65.0, 70.0),
            edge: ValueBetEdge {
                name: "Home edge",
                description: "Fixture with a favoured home side",
                verified_roi: 4.4,
                sample_size: 310,
            },
        },
        EdgeRule {
            filter: LeagueFilter::Only(League::SerieA),
            outcome: Outcome::Away,
            range: (55.0, 60.0),
            edge: ValueBetEdge {
                name: "Serie A road edge",
                description: "Serie A fixture with a favoured away side",
                verified_roi: 4.4,
                sample_size: 61,
            },
        },
    ]
});

/// Table variant: first matching rule, or None. `probs` are de-margined
/// percentages; `league` is None for anything outside the catalogue.
pub fn table_value_bet(
    probs: &ProbabilityTriple,
    league: Option<League>,
) -> Option<ValueBetEdge> {
    EDGE_RULES
        .iter()
        .find(|rule| rule.matches(probs, league))
        .map(|rule| rule.edge)
}

/// Minimum model probability before the EV variant will flag anything.
pub const EV_MIN_PROBABILITY_PCT: f64 = 55.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvSignal {
    pub is_value: bool,
    /// Expected value in percent, rounded to one decimal.
    pub ev: f64,
    pub message: Option<String>,
}

impl EvSignal {
    fn none() -> Self {
        Self {
            is_value: false,
            ev: 0.0,
            message: None,
        }
    }
}

/// EV variant: flags the pick iff its probability is at least 55% and the
/// quoted price pays better than fair. Missing odds means no signal; a
/// non-positive quote for the picked outcome is a contract violation.
pub fn ev_value_bet(
    pick: Outcome,
    pick_prob_pct: f64,
    odds: Option<&OddsTriple>,
) -> Result<EvSignal, AnalysisError> {
    let Some(odds) = odds else {
        return Ok(EvSignal::none());
    };
    if pick_prob_pct < EV_MIN_PROBABILITY_PCT {
        return Ok(EvSignal::none());
    }

    let price = odds.get(pick);
    if price <= 0.0 {
        return Err(AnalysisError::InvalidOdds(format!(
            "{} odds {price} must be positive",
            pick.label()
        )));
    }

    let ev = (pick_prob_pct / 100.0 * price - 1.0) * 100.0;
    let rounded = (ev * 10.0).round() / 10.0;
    if ev > 0.0 {
        Ok(EvSignal {
            is_value: true,
            ev: rounded,
            message: Some(format!("ROI+ (expected return +{ev:.1}%)")),
        })
    } else {
        Ok(EvSignal {
            is_value: false,
            ev: rounded,
            message: None,
        })
    }
}
