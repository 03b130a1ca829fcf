//! Per-fixture composition of the engine components.
//!
//! Two standalone pipelines mirror the product surfaces: `market_analysis`
//! works from a bookmaker quote alone, `model_analysis` from externally
//! supplied model probabilities. `analyze` runs the full treatment for one
//! fixture bundle and is safe to fan out across fixtures without
//! coordination; every invocation depends only on its arguments.

use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};

use crate::adjust;
use crate::draw_likelihood::{draw_likelihood, draw_warning, DrawWarning};
use crate::error::AnalysisError;
use crate::factors::{detect_factors, Factor};
use crate::league::League;
use crate::narrative::{build_report, MatchReport};
use crate::odds::demargin;
use crate::radar::{compare, RadarComparison};
use crate::scoring::{grade, select_pick, Confidence, Pick, MARKET, MODEL};
use crate::state::{FeatureSnapshot, MatchInputs, OddsTriple, ProbabilityTriple};
use crate::value_bet::{ev_value_bet, table_value_bet, EvSignal, ValueBetEdge};

/// Odds-led screening: implied probabilities, pick, confidence and any
/// catalogue edge. Enough for a pre-match look without the full bundle.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MarketAnalysis {
    pub implied: ProbabilityTriple,
    pub overround: f64,
    pub pick: Pick,
    pub confidence: Confidence,
    pub value_bet: Option<ValueBetEdge>,
}

pub fn market_analysis(
    odds: &OddsTriple,
    league: Option<League>,
) -> Result<MarketAnalysis, AnalysisError> {
    let demargined = demargin(odds)?;
    let pick = select_pick(&demargined.probs, &MARKET);
    let confidence = grade(pick.probability, &MARKET);
    let value_bet = table_value_bet(&demargined.probs, league);
    Ok(MarketAnalysis {
        implied: demargined.probs,
        overround: demargined.overround,
        pick,
        confidence,
        value_bet,
    })
}

/// Model-led report: recommendation grade, draw warning and the EV check of
/// the model pick against the quoted price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelAnalysis {
    /// Model probabilities, rounded to one decimal for presentation.
    pub probs: ProbabilityTriple,
    pub pick: Pick,
    pub recommendation: Confidence,
    pub draw_likelihood: f64,
    pub draw_warning: Option<DrawWarning>,
    pub value_bet: EvSignal,
}

pub fn model_analysis(
    model_probs: &ProbabilityTriple,
    odds: Option<&OddsTriple>,
    features: Option<&FeatureSnapshot>,
) -> Result<ModelAnalysis, AnalysisError> {
    model_probs.validate()?;

    let pick = select_pick(model_probs, &MODEL);
    let recommendation = grade(pick.probability, &MODEL);
    let likelihood = draw_likelihood(features);
    let value_bet = ev_value_bet(pick.outcome, pick.probability, odds)?;

    Ok(ModelAnalysis {
        probs: model_probs.rounded_1dp(),
        pick,
        recommendation,
        draw_likelihood: likelihood,
        draw_warning: draw_warning(likelihood),
        value_bet,
    })
}

/// A recommended model pick is one graded at least MEDIUM that is not
/// drowned out by a high draw risk.
pub fn is_recommended(model: &ModelAnalysis) -> bool {
    if let Some(warning) = &model.draw_warning {
        if warning.likelihood >= crate::draw_likelihood::CLOSE_MATCH_THRESHOLD
            && model.recommendation.stars == 0
        {
            return false;
        }
    }
    model.recommendation.stars >= 2
}

/// The full derived object for one fixture. Constructed fresh per request,
/// no identity, superseded by the next request; serializes to a flat
/// JSON-compatible structure for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    pub match_id: String,
    pub base_probability: ProbabilityTriple,
    /// Base refined by the detected factors; what the probability bars show.
    pub adjusted_probability: ProbabilityTriple,
    pub overround: f64,
    pub pick: Pick,
    pub confidence: Confidence,
    pub value_bet: Option<ValueBetEdge>,
    pub draw_likelihood: f64,
    pub draw_warning: Option<DrawWarning>,
    /// Present when the external scoring service supplied probabilities.
    pub model: Option<ModelAnalysis>,
    pub factors: Vec<Factor>,
    pub radar: RadarComparison,
    pub report: MatchReport,
}

/// Runs the whole engine for one fixture bundle.
pub fn analyze(inputs: &MatchInputs) -> Result<AnalysisResult, AnalysisError> {
    debug!(match_id = %inputs.id, league_id = inputs.league_id, "analyzing fixture");

    let league = League::from_api_id(inputs.league_id);
    let demargined = demargin(&inputs.odds.domestic)?;
    let base = demargined.probs;

    let factors = detect_factors(&inputs.home, &inputs.away, &inputs.weather);
    let adjusted = adjust::apply_factors(&base, &factors)?;

    let pick = select_pick(&base, &MARKET);
    let confidence = grade(pick.probability, &MARKET);

    let value_bet = table_value_bet(&base, league);
    if let Some(edge) = &value_bet {
        info!(
            match_id = %inputs.id,
            edge = edge.name,
            roi = edge.verified_roi,
            "value bet detected"
        );
    }

    let likelihood = draw_likelihood(inputs.features.as_ref());
    let model = inputs
        .model_probs
        .as_ref()
        .map(|probs| {
            model_analysis(
                probs,
                Some(&inputs.odds.domestic),
                inputs.features.as_ref(),
            )
        })
        .transpose()?;

    let radar = compare(&inputs.home, &inputs.away);
    let report = build_report(&inputs.home, &inputs.away, &inputs.weather, &adjusted);

    Ok(AnalysisResult {
        match_id: inputs.id.clone(),
        base_probability: base,
        adjusted_probability: adjusted,
        overround: demargined.overround,
        pick,
        confidence,
        value_bet,
        draw_likelihood: likelihood,
        draw_warning: draw_warning(likelihood),
        model,
        factors,
        radar,
        report,
    })
}

/// Analyzes many fixtures in parallel. Each result stands alone; one bad
/// bundle does not poison its neighbours.
pub fn analyze_batch(inputs: &[MatchInputs]) -> Vec<Result<AnalysisResult, AnalysisError>> {
    inputs.par_iter().map(analyze).collect()
}
