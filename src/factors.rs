//! Rule-based factor detection.
//!
//! The same detected factors drive the insight badges, the base-probability
//! refinement and the narrative report, so detection lives in one place.

use serde::Serialize;

use crate::state::{MatchResult, TeamSnapshot, Weather, WeatherCondition};

/// Rest below this many days counts as fatigue.
pub const SHORT_REST_DAYS: u32 = 3;
/// Last-5 win rate at or above this marks a strong home side.
pub const HOME_STRONG_WIN_RATE: f64 = 60.0;
/// Last-5 win rate below this marks a struggling away side.
pub const AWAY_WEAK_WIN_RATE: f64 = 30.0;
/// Streaks shorter than this are noise.
pub const STREAK_MIN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorSide {
    Home,
    Away,
    /// Affects the fixture as a whole (weather).
    Match,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FactorKind {
    Fatigue,
    HomeStrong,
    AwayWeak,
    Weather,
    WinStreak,
    LoseStreak,
    KeyPlayerInjured,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Factor {
    pub kind: FactorKind,
    pub side: FactorSide,
    /// Signed percentage-point impact on the affected side. For `Match`
    /// factors the magnitude is the draw bonus.
    pub impact: i32,
    pub label: String,
    pub description: String,
}

/// Detects every triggered factor for a fixture. Pure; order is stable
/// (home-side factors first, then away, then match-level).
pub fn detect_factors(home: &TeamSnapshot, away: &TeamSnapshot, weather: &Weather) -> Vec<Factor> {
    let mut factors = Vec::new();

    team_factors(home, FactorSide::Home, &mut factors);
    team_factors(away, FactorSide::Away, &mut factors);

    if matches!(
        weather.condition,
        WeatherCondition::Rainy | WeatherCondition::Snowy
    ) {
        let label = match weather.condition {
            WeatherCondition::Rainy => "Rain forecast",
            _ => "Snow forecast",
        };
        factors.push(Factor {
            kind: FactorKind::Weather,
            side: FactorSide::Match,
            impact: 8,
            label: label.to_string(),
            description: format!("{}\u{b0}C at kickoff", weather.temperature_c),
        });
    }

    factors
}

fn team_factors(team: &TeamSnapshot, side: FactorSide, out: &mut Vec<Factor>) {
    if team.last_match_days_ago < SHORT_REST_DAYS {
        out.push(Factor {
            kind: FactorKind::Fatigue,
            side,
            impact: -10,
            label: "Short rest".to_string(),
            description: format!("played {} days ago", team.last_match_days_ago),
        });
    }

    let win_rate = team.win_rate_pct();
    match side {
        FactorSide::Home if win_rate >= HOME_STRONG_WIN_RATE => {
            out.push(Factor {
                kind: FactorKind::HomeStrong,
                side,
                impact: 5,
                label: "Home fortress".to_string(),
                description: format!("{} wins in the last {}", team.wins(), team.recent_results.len()),
            });
        }
        FactorSide::Away if win_rate < AWAY_WEAK_WIN_RATE => {
            out.push(Factor {
                kind: FactorKind::AwayWeak,
                side,
                impact: -8,
                label: "Road struggles".to_string(),
                description: format!("{} wins in the last {}", team.wins(), team.recent_results.len()),
            });
        }
        _ => {}
    }

    let win_streak = team.streak(MatchResult::W);
    if win_streak >= STREAK_MIN {
        out.push(Factor {
            kind: FactorKind::WinStreak,
            side,
            impact: 3,
            label: format!("{win_streak}-match win streak"),
            description: "momentum building".to_string(),
        });
    }

    let lose_streak = team.streak(MatchResult::L);
    if lose_streak >= STREAK_MIN {
        out.push(Factor {
            kind: FactorKind::LoseStreak,
            side,
            impact: -5,
            label: format!("{lose_streak}-match losing streak"),
            description: "confidence draining".to_string(),
        });
    }

    if team.top_scorer.is_injured {
        out.push(Factor {
            kind: FactorKind::KeyPlayerInjured,
            side,
            impact: -15,
            label: "Top scorer out".to_string(),
            description: format!("{} unavailable", team.top_scorer.name),
        });
    }
}
