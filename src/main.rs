//! Demo driver: analyze a slate of fixtures and print the reports.
//!
//! Stands in for the excluded route layer. Fixture bundles come from a JSON
//! file when `WINSIGHT_FIXTURES` points at one, otherwise from the built-in
//! sample feed. `WINSIGHT_JSON=1` emits the serialized results instead of
//! the text report.

use std::fs;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use winsight::analysis::{analyze_batch, AnalysisResult};
use winsight::sample_feed;
use winsight::state::{MatchInputs, Trend};

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let fixtures = load_fixtures()?;
    let json_output = std::env::var("WINSIGHT_JSON").is_ok();

    let results = analyze_batch(&fixtures);

    if json_output {
        let ok: Vec<&AnalysisResult> = results.iter().filter_map(|r| r.as_ref().ok()).collect();
        println!("{}", serde_json::to_string_pretty(&ok)?);
    } else {
        for (inputs, result) in fixtures.iter().zip(&results) {
            match result {
                Ok(analysis) => print_report(inputs, analysis),
                Err(err) => eprintln!("[{}] analysis failed: {err}", inputs.id),
            }
        }
    }

    for result in &results {
        if let Err(err) = result {
            eprintln!("warning: {err}");
        }
    }
    Ok(())
}

fn load_fixtures() -> Result<Vec<MatchInputs>> {
    match std::env::var("WINSIGHT_FIXTURES") {
        Ok(path) => {
            let raw = fs::read_to_string(&path)
                .with_context(|| format!("reading fixtures from {path}"))?;
            Ok(MatchInputs::list_from_json(&raw)?)
        }
        Err(_) => Ok(sample_feed::sample_day()),
    }
}

fn trend_arrow(trend: Trend) -> char {
    match trend {
        Trend::Up => '^',
        Trend::Down => 'v',
        Trend::Stable => '-',
    }
}

fn print_report(inputs: &MatchInputs, analysis: &AnalysisResult) {
    let base = &analysis.base_probability;
    let adjusted = &analysis.adjusted_probability;

    println!();
    println!(
        "=== {} vs {}  ({}, {})",
        inputs.home.name,
        inputs.away.name,
        inputs.venue,
        inputs.kickoff.format("%Y-%m-%d %H:%M UTC")
    );
    println!(
        "odds      dom {:.2}/{:.2}/{:.2} [{}{}{}]   ovs {:.2}/{:.2}/{:.2} [{}{}{}]",
        inputs.odds.domestic.home,
        inputs.odds.domestic.draw,
        inputs.odds.domestic.away,
        trend_arrow(inputs.odds.domestic_trend[0]),
        trend_arrow(inputs.odds.domestic_trend[1]),
        trend_arrow(inputs.odds.domestic_trend[2]),
        inputs.odds.overseas.home,
        inputs.odds.overseas.draw,
        inputs.odds.overseas.away,
        trend_arrow(inputs.odds.overseas_trend[0]),
        trend_arrow(inputs.odds.overseas_trend[1]),
        trend_arrow(inputs.odds.overseas_trend[2]),
    );
    println!(
        "market    H {:.1}%  D {:.1}%  A {:.1}%   (overround {:.3})",
        base.home, base.draw, base.away, analysis.overround
    );
    println!(
        "adjusted  H {:.0}%  D {:.0}%  A {:.0}%",
        adjusted.home, adjusted.draw, adjusted.away
    );
    println!(
        "pick      {} at {:.1}%  [{} {}]",
        analysis.pick.outcome.label(),
        analysis.pick.probability,
        analysis.confidence.level,
        "*".repeat(analysis.confidence.stars as usize)
    );

    if let Some(edge) = &analysis.value_bet {
        println!(
            "edge      {} (+{:.1}% ROI over {} matches)",
            edge.name, edge.verified_roi, edge.sample_size
        );
    }
    if let Some(warning) = &analysis.draw_warning {
        println!("warning   {} (likelihood {:.2})", warning.message, warning.likelihood);
    }
    for factor in &analysis.factors {
        println!(
            "factor    {} ({}{}%) - {}",
            factor.label,
            if factor.impact >= 0 { "+" } else { "" },
            factor.impact,
            factor.description
        );
    }

    let radar = &analysis.radar;
    println!(
        "radar     ATT {:>3.0}/{:<3.0} DEF {:>3.0}/{:<3.0} ORG {:>3.0}/{:<3.0} FORM {:>3.0}/{:<3.0} FIN {:>3.0}/{:<3.0}",
        radar.home.attack, radar.away.attack,
        radar.home.defense, radar.away.defense,
        radar.home.organization, radar.away.organization,
        radar.home.form, radar.away.form,
        radar.home.finishing, radar.away.finishing
    );

    for sentence in analysis.report.home.iter().chain(&analysis.report.away) {
        println!("  {sentence}");
    }
    if let Some(weather) = &analysis.report.weather {
        println!("  {weather}");
    }
    println!("  >> {}", analysis.report.conclusion);
}
