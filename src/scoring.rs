//! Pick selection and confidence grading.
//!
//! Both the market-led and the model-led reports select a pick and grade it;
//! they differ only in tie-break order and tier table, so a single pipeline
//! runs with a `ScoringPolicy` carrying the differences as data.

use serde::Serialize;

use crate::state::{Outcome, ProbabilityTriple};

#[derive(Debug, Clone, Copy)]
pub struct ConfidenceTier {
    /// Lower bound in percent, inclusive. Boundary values belong to the
    /// higher tier.
    pub min_pct: f64,
    pub level: &'static str,
    pub stars: u8,
    /// Historical hit rate observed for this tier in backtests.
    pub accuracy: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone)]
pub struct ScoringPolicy {
    pub name: &'static str,
    /// Priority order for exact ties: the earliest outcome wins.
    pub tie_break: [Outcome; 3],
    /// Ordered by descending `min_pct`; the last entry must cover 0.
    pub tiers: &'static [ConfidenceTier],
}

/// Odds-led grading. Canonical tie-break order for new callers.
pub static MARKET: ScoringPolicy = ScoringPolicy {
    name: "market",
    tie_break: [Outcome::Home, Outcome::Draw, Outcome::Away],
    tiers: &[
        ConfidenceTier {
            min_pct: 70.0,
            level: "HIGH",
            stars: 3,
            accuracy: "77%",
            description: "Strong conviction pick",
        },
        ConfidenceTier {
            min_pct: 60.0,
            level: "MEDIUM",
            stars: 2,
            accuracy: "72%",
            description: "Clear favourite",
        },
        ConfidenceTier {
            min_pct: 50.0,
            level: "LOW",
            stars: 1,
            accuracy: "65%",
            description: "Tight match, judge carefully",
        },
        ConfidenceTier {
            min_pct: 0.0,
            level: "UNCERTAIN",
            stars: 0,
            accuracy: "<60%",
            description: "Hard to call",
        },
    ],
};

/// Model-led grading. Keeps the original module's divergent home/away/draw
/// tie order; the discrepancy is product-visible and deliberately preserved.
pub static MODEL: ScoringPolicy = ScoringPolicy {
    name: "model",
    tie_break: [Outcome::Home, Outcome::Away, Outcome::Draw],
    tiers: &[
        ConfidenceTier {
            min_pct: 60.0,
            level: "STRONG",
            stars: 3,
            accuracy: "71%",
            description: "High-confidence model pick",
        },
        ConfidenceTier {
            min_pct: 55.0,
            level: "MEDIUM",
            stars: 2,
            accuracy: "65%",
            description: "Model pick",
        },
        ConfidenceTier {
            min_pct: 0.0,
            level: "NONE",
            stars: 0,
            accuracy: "",
            description: "",
        },
    ],
};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Pick {
    pub outcome: Outcome,
    /// Probability of the picked outcome, in percent.
    pub probability: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Confidence {
    pub level: &'static str,
    pub stars: u8,
    pub accuracy: &'static str,
    pub description: &'static str,
}

/// Selects the outcome with the maximum probability. Total function: ties go
/// to the earliest outcome in the policy's priority order.
pub fn select_pick(probs: &ProbabilityTriple, policy: &ScoringPolicy) -> Pick {
    let mut best = policy.tie_break[0];
    for &candidate in &policy.tie_break[1..] {
        if probs.get(candidate) > probs.get(best) {
            best = candidate;
        }
    }
    Pick {
        outcome: best,
        probability: probs.get(best),
    }
}

/// Grades a winning probability against the policy's tier table. Accepts
/// either a fraction or a percentage; values <= 1.0 are read as fractions
/// (a genuine pick probability is always above a third).
pub fn grade(probability: f64, policy: &ScoringPolicy) -> Confidence {
    let pct = if probability <= 1.0 {
        probability * 100.0
    } else {
        probability
    };
    let tier = policy
        .tiers
        .iter()
        .find(|t| pct >= t.min_pct)
        .unwrap_or_else(|| policy.tiers.last().expect("tier table is non-empty"));
    Confidence {
        level: tier.level,
        stars: tier.stars,
        accuracy: tier.accuracy,
        description: tier.description,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strict_maximum_wins_regardless_of_policy() {
        let probs = ProbabilityTriple::new(20.0, 30.0, 50.0);
        assert_eq!(select_pick(&probs, &MARKET).outcome, Outcome::Away);
        assert_eq!(select_pick(&probs, &MODEL).outcome, Outcome::Away);
    }

    #[test]
    fn tie_break_follows_policy_order() {
        // Exact three-way tie: market prefers draw over away, model the
        // reverse; both put home first.
        let even = ProbabilityTriple::new(100.0 / 3.0, 100.0 / 3.0, 100.0 / 3.0);
        assert_eq!(select_pick(&even, &MARKET).outcome, Outcome::Home);
        assert_eq!(select_pick(&even, &MODEL).outcome, Outcome::Home);

        let draw_away = ProbabilityTriple::new(20.0, 40.0, 40.0);
        assert_eq!(select_pick(&draw_away, &MARKET).outcome, Outcome::Draw);
        assert_eq!(select_pick(&draw_away, &MODEL).outcome, Outcome::Away);
    }

    #[test]
    fn pick_is_deterministic() {
        let probs = ProbabilityTriple::new(41.0, 29.0, 30.0);
        let first = select_pick(&probs, &MARKET);
        for _ in 0..10 {
            assert_eq!(select_pick(&probs, &MARKET), first);
        }
    }

    #[test]
    fn market_tier_boundaries() {
        assert_eq!(grade(70.0, &MARKET).level, "HIGH");
        assert_eq!(grade(69.999, &MARKET).level, "MEDIUM");
        assert_eq!(grade(60.0, &MARKET).level, "MEDIUM");
        assert_eq!(grade(50.0, &MARKET).level, "LOW");
        assert_eq!(grade(49.999, &MARKET).level, "UNCERTAIN");
    }

    #[test]
    fn fractional_input_is_scaled() {
        assert_eq!(grade(0.72, &MARKET).level, "HIGH");
        assert_eq!(grade(0.55, &MODEL).level, "MEDIUM");
    }

    #[test]
    fn model_tiers() {
        assert_eq!(grade(60.0, &MODEL).level, "STRONG");
        assert_eq!(grade(59.9, &MODEL).level, "MEDIUM");
        assert_eq!(grade(54.9, &MODEL).level, "NONE");
        assert_eq!(grade(60.0, &MODEL).stars, 3);
    }
}
