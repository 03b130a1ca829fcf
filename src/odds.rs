//! Decimal odds to de-margined outcome probabilities.

use crate::error::AnalysisError;
use crate::state::{OddsTriple, ProbabilityTriple};

/// A bookmaker quote converted to fair probabilities, with the margin that
/// was removed along the way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Demargined {
    /// Outcome probabilities in percent, summing to 100.
    pub probs: ProbabilityTriple,
    /// Sum of the raw inverse odds. Anything above 1.0 is bookmaker margin.
    pub overround: f64,
}

/// Converts a decimal-odds triple to implied probabilities with the
/// overround divided out. Pure; errors only on odds <= 0.
pub fn demargin(odds: &OddsTriple) -> Result<Demargined, AnalysisError> {
    for (label, value) in [
        ("home", odds.home),
        ("draw", odds.draw),
        ("away", odds.away),
    ] {
        if value <= 0.0 {
            return Err(AnalysisError::InvalidOdds(format!(
                "{label} odds {value} must be positive"
            )));
        }
    }

    let raw_home = 1.0 / odds.home;
    let raw_draw = 1.0 / odds.draw;
    let raw_away = 1.0 / odds.away;
    let overround = raw_home + raw_draw + raw_away;

    Ok(Demargined {
        probs: ProbabilityTriple::new(
            raw_home / overround * 100.0,
            raw_draw / overround * 100.0,
            raw_away / overround * 100.0,
        ),
        overround,
    })
}

/// Shorthand for callers screening a raw quote without a full odds record.
pub fn implied_probabilities(
    home: f64,
    draw: f64,
    away: f64,
) -> Result<ProbabilityTriple, AnalysisError> {
    Ok(demargin(&OddsTriple::new(home, draw, away))?.probs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn output_sums_to_100() {
        let quotes = [
            (1.80, 3.50, 4.20),
            (1.05, 12.0, 28.0),
            (2.90, 3.10, 2.55),
        ];
        for (h, d, a) in quotes {
            let probs = implied_probabilities(h, d, a).unwrap();
            assert_float_absolute_eq!(probs.sum(), 100.0, 0.001);
        }
    }

    #[test]
    fn each_component_is_inverse_odds_over_raw_sum() {
        let out = demargin(&OddsTriple::new(1.80, 3.50, 4.20)).unwrap();
        let raw_sum = 1.0 / 1.80 + 1.0 / 3.50 + 1.0 / 4.20;
        assert_float_absolute_eq!(out.overround, raw_sum, 1e-12);
        assert_float_absolute_eq!(out.probs.home, (1.0 / 1.80) / raw_sum * 100.0, 1e-9);
        assert_float_absolute_eq!(out.probs.draw, (1.0 / 3.50) / raw_sum * 100.0, 1e-9);
        assert_float_absolute_eq!(out.probs.away, (1.0 / 4.20) / raw_sum * 100.0, 1e-9);
    }

    #[test]
    fn margin_free_quote_has_unit_overround() {
        let out = demargin(&OddsTriple::new(2.0, 4.0, 4.0)).unwrap();
        assert_float_absolute_eq!(out.overround, 1.0, 1e-12);
        assert_float_absolute_eq!(out.probs.home, 50.0, 1e-9);
    }

    #[test]
    fn non_positive_odds_are_rejected() {
        assert!(implied_probabilities(0.0, 3.5, 4.2).is_err());
        assert!(implied_probabilities(1.8, -3.5, 4.2).is_err());
    }
}
