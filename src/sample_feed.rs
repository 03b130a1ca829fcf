//! Offline sample fixtures.
//!
//! Stands in for the ingestion layer so the demo binary and the benches can
//! run with no network or database. Team sheets are fixed; odds and weather
//! get a light jitter so repeated runs stay interesting.

use chrono::{Duration, Utc};
use rand::Rng;

use crate::state::{
    MatchInputs, MatchResult, OddsRecord, OddsTriple, TeamSnapshot, TopScorer, Trend, Weather,
    WeatherCondition,
};

struct SeedTeam {
    name: &'static str,
    short_name: &'static str,
    rank: u32,
    results: [MatchResult; 5],
    scorer: &'static str,
    scorer_goals: u32,
    scorer_injured: bool,
    days_ago: u32,
}

struct SeedFixture {
    league_id: u32,
    venue: &'static str,
    home: SeedTeam,
    away: SeedTeam,
    // Anchor odds; jittered a few ticks either way per run.
    odds: (f64, f64, f64),
}

fn seed_fixtures() -> Vec<SeedFixture> {
    use MatchResult::*;
    vec![
        SeedFixture {
            league_id: 140,
            venue: "Estadio del Norte",
            home: SeedTeam {
                name: "Norte CF",
                short_name: "NOR",
                rank: 2,
                results: [W, W, W, D, W],
                scorer: "Ivan Reyes",
                scorer_goals: 17,
                scorer_injured: false,
                days_ago: 6,
            },
            away: SeedTeam {
                name: "Atletico Sur",
                short_name: "SUR",
                rank: 16,
                results: [L, L, D, L, W],
                scorer: "Marco Vidal",
                scorer_goals: 6,
                scorer_injured: true,
                days_ago: 3,
            },
            odds: (1.40, 4.60, 7.80),
        },
        SeedFixture {
            league_id: 39,
            venue: "Riverside Lane",
            home: SeedTeam {
                name: "Riverside United",
                short_name: "RIV",
                rank: 11,
                results: [D, L, W, D, L],
                scorer: "Teddy Okafor",
                scorer_goals: 9,
                scorer_injured: false,
                days_ago: 2,
            },
            away: SeedTeam {
                name: "Harbour City",
                short_name: "HAR",
                rank: 3,
                results: [W, W, D, W, W],
                scorer: "Luca Berg",
                scorer_goals: 14,
                scorer_injured: false,
                days_ago: 7,
            },
            odds: (4.40, 3.70, 1.82),
        },
        SeedFixture {
            league_id: 135,
            venue: "Stadio Comunale",
            home: SeedTeam {
                name: "Calcio Ponte",
                short_name: "PON",
                rank: 9,
                results: [D, D, W, L, D],
                scorer: "Sandro Greco",
                scorer_goals: 8,
                scorer_injured: false,
                days_ago: 5,
            },
            away: SeedTeam {
                name: "Lupi Adriatici",
                short_name: "LUP",
                rank: 10,
                results: [D, W, D, L, D],
                scorer: "Emil Costa",
                scorer_goals: 7,
                scorer_injured: false,
                days_ago: 5,
            },
            odds: (2.75, 2.95, 2.80),
        },
        SeedFixture {
            league_id: 78,
            venue: "Waldstadion",
            home: SeedTeam {
                name: "SV Waldberg",
                short_name: "WAL",
                rank: 6,
                results: [W, D, W, W, L],
                scorer: "Jonas Brandt",
                scorer_goals: 12,
                scorer_injured: false,
                days_ago: 4,
            },
            away: SeedTeam {
                name: "FC Ostufer",
                short_name: "OST",
                rank: 13,
                results: [L, L, L, D, W],
                scorer: "Peter Hollmann",
                scorer_goals: 5,
                scorer_injured: false,
                days_ago: 6,
            },
            odds: (1.85, 3.60, 4.30),
        },
        SeedFixture {
            league_id: 61,
            venue: "Stade de la Cote",
            home: SeedTeam {
                name: "Racing Cote",
                short_name: "COT",
                rank: 18,
                results: [L, D, L, L, D],
                scorer: "Abdou Diallo",
                scorer_goals: 4,
                scorer_injured: false,
                days_ago: 6,
            },
            away: SeedTeam {
                name: "Olympique Vallee",
                short_name: "VAL",
                rank: 1,
                results: [W, W, W, W, D],
                scorer: "Hugo Marchand",
                scorer_goals: 19,
                scorer_injured: false,
                days_ago: 7,
            },
            odds: (6.80, 4.40, 1.48),
        },
    ]
}

fn build_team(seed: &SeedTeam) -> TeamSnapshot {
    TeamSnapshot {
        id: seed.short_name.to_lowercase(),
        name: seed.name.to_string(),
        short_name: seed.short_name.to_string(),
        league_rank: seed.rank,
        recent_results: seed.results.to_vec(),
        top_scorer: TopScorer {
            name: seed.scorer.to_string(),
            goals: seed.scorer_goals,
            is_injured: seed.scorer_injured,
        },
        last_match_days_ago: seed.days_ago,
    }
}

fn jitter_odds<R: Rng>(rng: &mut R, anchor: (f64, f64, f64)) -> OddsTriple {
    let mut tick = |v: f64| {
        let jittered = v * rng.gen_range(0.97..1.03);
        (jittered * 100.0).round() / 100.0
    };
    OddsTriple::new(tick(anchor.0), tick(anchor.1), tick(anchor.2))
}

fn random_trend<R: Rng>(rng: &mut R) -> Trend {
    match rng.gen_range(0..3) {
        0 => Trend::Up,
        1 => Trend::Down,
        _ => Trend::Stable,
    }
}

fn random_weather<R: Rng>(rng: &mut R) -> Weather {
    let (condition, icon) = match rng.gen_range(0..6) {
        0 | 1 => (WeatherCondition::Sunny, "sun"),
        2 | 3 => (WeatherCondition::Cloudy, "cloud"),
        4 => (WeatherCondition::Rainy, "rain"),
        _ => (WeatherCondition::Snowy, "snow"),
    };
    Weather {
        condition,
        temperature_c: rng.gen_range(-2..24),
        icon: icon.to_string(),
    }
}

/// One day's slate of sample fixtures.
pub fn sample_day() -> Vec<MatchInputs> {
    let mut rng = rand::thread_rng();
    let first_kickoff = Utc::now() + Duration::hours(4);

    seed_fixtures()
        .iter()
        .enumerate()
        .map(|(idx, seed)| {
            let domestic = jitter_odds(&mut rng, seed.odds);
            let overseas = jitter_odds(&mut rng, seed.odds);
            MatchInputs {
                id: format!("demo-{}", idx + 1),
                kickoff: first_kickoff + Duration::minutes(30 * idx as i64),
                venue: seed.venue.to_string(),
                league_id: seed.league_id,
                home: build_team(&seed.home),
                away: build_team(&seed.away),
                weather: random_weather(&mut rng),
                odds: OddsRecord {
                    domestic,
                    overseas,
                    domestic_trend: [
                        random_trend(&mut rng),
                        random_trend(&mut rng),
                        random_trend(&mut rng),
                    ],
                    overseas_trend: [
                        random_trend(&mut rng),
                        random_trend(&mut rng),
                        random_trend(&mut rng),
                    ],
                },
                features: None,
                model_probs: None,
            }
        })
        .collect()
}
