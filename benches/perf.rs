use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;

use chrono::{TimeZone, Utc};
use winsight::adjust::{apply_toggles, AdjustmentToggles};
use winsight::analysis::{analyze, analyze_batch, market_analysis};
use winsight::state::{
    MatchInputs, MatchResult::*, OddsRecord, OddsTriple, ProbabilityTriple, TeamSnapshot,
    TopScorer, Trend, Weather, WeatherCondition,
};
use winsight::value_bet::table_value_bet;

fn sample_inputs(id: usize) -> MatchInputs {
    let team = |name: &str, rank: u32| TeamSnapshot {
        id: format!("{name}-{id}"),
        name: name.to_string(),
        short_name: name[..3].to_uppercase(),
        league_rank: rank,
        recent_results: vec![W, D, W, L, W],
        top_scorer: TopScorer {
            name: "Striker".to_string(),
            goals: 11,
            is_injured: false,
        },
        last_match_days_ago: 2 + (id as u32 % 6),
    };

    MatchInputs {
        id: format!("bench-{id}"),
        kickoff: Utc.with_ymd_and_hms(2026, 5, 2, 15, 0, 0).unwrap(),
        venue: "Bench Arena".to_string(),
        league_id: [39, 61, 78, 135, 140][id % 5],
        home: team("Alpha", 4),
        away: team("Omega", 12),
        weather: Weather {
            condition: if id % 4 == 0 {
                WeatherCondition::Rainy
            } else {
                WeatherCondition::Cloudy
            },
            temperature_c: 12,
            icon: "cloud".to_string(),
        },
        odds: OddsRecord {
            domestic: OddsTriple::new(1.95, 3.45, 4.05),
            overseas: OddsTriple::new(1.92, 3.50, 4.10),
            domestic_trend: [Trend::Stable, Trend::Stable, Trend::Up],
            overseas_trend: [Trend::Down, Trend::Stable, Trend::Up],
        },
        features: None,
        model_probs: None,
    }
}

fn bench_full_analysis(c: &mut Criterion) {
    let inputs = sample_inputs(0);
    c.bench_function("full_analysis", |b| {
        b.iter(|| {
            let result = analyze(black_box(&inputs)).unwrap();
            black_box(result.pick.probability);
        })
    });
}

fn bench_market_screen(c: &mut Criterion) {
    let odds = OddsTriple::new(1.80, 3.50, 4.20);
    c.bench_function("market_screen", |b| {
        b.iter(|| {
            let out = market_analysis(black_box(&odds), None).unwrap();
            black_box(out.implied.home);
        })
    });
}

fn bench_toggle_recompute(c: &mut Criterion) {
    let base = ProbabilityTriple::new(45.0, 25.0, 30.0);
    let toggles = AdjustmentToggles {
        rain: true,
        home_fatigue: true,
        away_injury: true,
        ..Default::default()
    };
    c.bench_function("toggle_recompute", |b| {
        b.iter(|| {
            let out = apply_toggles(black_box(&base), black_box(&toggles)).unwrap();
            black_box(out.draw);
        })
    });
}

fn bench_edge_table_scan(c: &mut Criterion) {
    // Worst case: no rule matches, the whole catalogue is scanned.
    let probs = ProbabilityTriple::new(45.0, 28.0, 27.0);
    c.bench_function("edge_table_scan", |b| {
        b.iter(|| {
            black_box(table_value_bet(black_box(&probs), None));
        })
    });
}

fn bench_batch_100(c: &mut Criterion) {
    let fixtures: Vec<MatchInputs> = (0..100).map(sample_inputs).collect();
    c.bench_function("batch_100", |b| {
        b.iter(|| {
            let results = analyze_batch(black_box(&fixtures));
            black_box(results.len());
        })
    });
}

criterion_group!(
    perf,
    bench_full_analysis,
    bench_market_screen,
    bench_toggle_recompute,
    bench_edge_table_scan,
    bench_batch_100
);
criterion_main!(perf);
