use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AnalysisError;

/// How far the components of a triple may drift from 100 before we treat it
/// as an upstream bug rather than rounding noise.
pub const SUM_TOLERANCE: f64 = 1.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Home,
    Draw,
    Away,
}

impl Outcome {
    pub fn label(self) -> &'static str {
        match self {
            Outcome::Home => "Home win",
            Outcome::Draw => "Draw",
            Outcome::Away => "Away win",
        }
    }

    pub fn code(self) -> char {
        match self {
            Outcome::Home => 'H',
            Outcome::Draw => 'D',
            Outcome::Away => 'A',
        }
    }
}

/// Win/draw/loss probabilities in percent. Ephemeral: recomputed per request,
/// never the sole persisted truth. Residual corrections always land in `draw`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProbabilityTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl ProbabilityTriple {
    pub fn new(home: f64, draw: f64, away: f64) -> Self {
        Self { home, draw, away }
    }

    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }

    pub fn sum(&self) -> f64 {
        self.home + self.draw + self.away
    }

    /// Checks the triple against the input contract: no negative components,
    /// sum within tolerance of 100.
    pub fn validate(&self) -> Result<(), AnalysisError> {
        if self.home < 0.0 || self.draw < 0.0 || self.away < 0.0 {
            return Err(AnalysisError::OutOfRange(format!(
                "negative component in {self:?}"
            )));
        }
        if (self.sum() - 100.0).abs() > SUM_TOLERANCE {
            return Err(AnalysisError::OutOfRange(format!(
                "components of {self:?} sum to {:.3}, expected 100",
                self.sum()
            )));
        }
        Ok(())
    }

    /// One-decimal presentation rounding, the form the model-led report uses.
    pub fn rounded_1dp(&self) -> Self {
        let r = |v: f64| (v * 10.0).round() / 10.0;
        Self {
            home: r(self.home),
            draw: r(self.draw),
            away: r(self.away),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchResult {
    W,
    D,
    L,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopScorer {
    pub name: String,
    pub goals: u32,
    pub is_injured: bool,
}

/// Per-team snapshot handed over by the ingestion layer. Read-only here.
/// `recent_results` is most-recent-first and expected to hold five entries;
/// an empty list is legal and reads as "no history" (0% rates, no streak).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TeamSnapshot {
    pub id: String,
    pub name: String,
    pub short_name: String,
    pub league_rank: u32,
    pub recent_results: Vec<MatchResult>,
    pub top_scorer: TopScorer,
    pub last_match_days_ago: u32,
}

impl TeamSnapshot {
    pub fn wins(&self) -> usize {
        self.recent_results
            .iter()
            .filter(|r| **r == MatchResult::W)
            .count()
    }

    pub fn draws(&self) -> usize {
        self.recent_results
            .iter()
            .filter(|r| **r == MatchResult::D)
            .count()
    }

    pub fn losses(&self) -> usize {
        self.recent_results
            .iter()
            .filter(|r| **r == MatchResult::L)
            .count()
    }

    /// Win rate over the recent window, in percent. Empty history is 0%.
    pub fn win_rate_pct(&self) -> f64 {
        if self.recent_results.is_empty() {
            return 0.0;
        }
        self.wins() as f64 / self.recent_results.len() as f64 * 100.0
    }

    /// Consecutive run of `target` counted from the most recent match
    /// backward, stopping at the first break.
    pub fn streak(&self, target: MatchResult) -> usize {
        self.recent_results
            .iter()
            .take_while(|r| **r == target)
            .count()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeatherCondition {
    Sunny,
    Cloudy,
    Rainy,
    Snowy,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Weather {
    pub condition: WeatherCondition,
    pub temperature_c: i32,
    pub icon: String,
}

/// One bookmaker's decimal odds for the three outcomes. Always >= 1.0 when
/// well-formed; the normalizer rejects anything <= 0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OddsTriple {
    pub home: f64,
    pub draw: f64,
    pub away: f64,
}

impl OddsTriple {
    pub fn new(home: f64, draw: f64, away: f64) -> Self {
        Self { home, draw, away }
    }

    pub fn get(&self, outcome: Outcome) -> f64 {
        match outcome {
            Outcome::Home => self.home,
            Outcome::Draw => self.draw,
            Outcome::Away => self.away,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Stable,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OddsRecord {
    pub domestic: OddsTriple,
    pub overseas: OddsTriple,
    pub domestic_trend: [Trend; 3],
    pub overseas_trend: [Trend; 3],
}

/// Rolling per-fixture aggregates from the feature store. Every field is
/// optional: teams without recorded history simply lack entries, and the
/// consumers substitute neutral constants instead of propagating the gap.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FeatureSnapshot {
    #[serde(default)]
    pub home_form_last5: Option<f64>,
    #[serde(default)]
    pub away_form_last5: Option<f64>,
    #[serde(default)]
    pub home_xg_avg: Option<f64>,
    #[serde(default)]
    pub away_xg_avg: Option<f64>,
    #[serde(default)]
    pub home_goals_for_avg: Option<f64>,
    #[serde(default)]
    pub away_goals_for_avg: Option<f64>,
    #[serde(default)]
    pub h2h_draws: Option<u32>,
    #[serde(default)]
    pub h2h_total_matches: Option<u32>,
    #[serde(default)]
    pub home_days_rest: Option<u32>,
    #[serde(default)]
    pub away_days_rest: Option<u32>,
}

/// Everything the collaborator layer hands the engine for one fixture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchInputs {
    pub id: String,
    pub kickoff: DateTime<Utc>,
    pub venue: String,
    pub league_id: u32,
    pub home: TeamSnapshot,
    pub away: TeamSnapshot,
    pub weather: Weather,
    pub odds: OddsRecord,
    #[serde(default)]
    pub features: Option<FeatureSnapshot>,
    /// Externally supplied model probabilities, when the scoring service has
    /// produced them. Opaque to this crate beyond range validation.
    #[serde(default)]
    pub model_probs: Option<ProbabilityTriple>,
}

impl MatchInputs {
    /// Decodes a single fixture bundle. Decode failures surface as
    /// `MalformedSnapshot` — the boundary is the one place "field missing
    /// entirely" can actually happen.
    pub fn from_json(raw: &str) -> Result<Self, AnalysisError> {
        serde_json::from_str(raw).map_err(|e| AnalysisError::MalformedSnapshot(e.to_string()))
    }

    /// Decodes a list of fixture bundles.
    pub fn list_from_json(raw: &str) -> Result<Vec<Self>, AnalysisError> {
        serde_json::from_str(raw).map_err(|e| AnalysisError::MalformedSnapshot(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot(results: &[MatchResult]) -> TeamSnapshot {
        TeamSnapshot {
            id: "t1".to_string(),
            name: "Test FC".to_string(),
            short_name: "TST".to_string(),
            league_rank: 7,
            recent_results: results.to_vec(),
            top_scorer: TopScorer {
                name: "Nine".to_string(),
                goals: 11,
                is_injured: false,
            },
            last_match_days_ago: 6,
        }
    }

    #[test]
    fn streak_stops_at_first_break() {
        use MatchResult::*;
        let team = snapshot(&[W, W, D, W, W]);
        assert_eq!(team.streak(W), 2);
        assert_eq!(team.streak(L), 0);
    }

    #[test]
    fn empty_history_reads_as_zero_rate() {
        let team = snapshot(&[]);
        assert_eq!(team.win_rate_pct(), 0.0);
        assert_eq!(team.streak(MatchResult::W), 0);
    }

    #[test]
    fn validate_rejects_negative_and_bad_sum() {
        assert!(ProbabilityTriple::new(-1.0, 51.0, 50.0).validate().is_err());
        assert!(ProbabilityTriple::new(40.0, 30.0, 40.0).validate().is_err());
        assert!(ProbabilityTriple::new(45.0, 25.0, 30.0).validate().is_ok());
        // Rounding drift inside the tolerance band is accepted.
        assert!(ProbabilityTriple::new(45.4, 25.0, 30.0).validate().is_ok());
    }

    #[test]
    fn from_json_maps_decode_failure_to_malformed_snapshot() {
        let err = MatchInputs::from_json("{\"id\": \"m1\"}").unwrap_err();
        assert!(matches!(err, AnalysisError::MalformedSnapshot(_)));
    }
}
