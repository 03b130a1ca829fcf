//! Rule-based match report text.
//!
//! Plain-language rendering of the same detected conditions the factor
//! engine works from. No state, no formatting cleverness: each rule either
//! contributes a sentence or stays quiet, and a fallback line keeps every
//! paragraph non-empty.

use serde::Serialize;

use crate::factors::{AWAY_WEAK_WIN_RATE, HOME_STRONG_WIN_RATE, SHORT_REST_DAYS, STREAK_MIN};
use crate::state::{MatchResult, ProbabilityTriple, TeamSnapshot, Weather, WeatherCondition};

const TOP_RANK: u32 = 4;
const BOTTOM_RANK: u32 = 15;
const COLD_TEMP_C: i32 = 5;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MatchReport {
    pub home: Vec<String>,
    pub away: Vec<String>,
    pub weather: Option<String>,
    pub conclusion: String,
}

pub fn build_report(
    home: &TeamSnapshot,
    away: &TeamSnapshot,
    weather: &Weather,
    probability: &ProbabilityTriple,
) -> MatchReport {
    MatchReport {
        home: home_paragraph(home),
        away: away_paragraph(away),
        weather: weather_note(weather),
        conclusion: conclusion(home, away, probability),
    }
}

fn home_paragraph(team: &TeamSnapshot) -> Vec<String> {
    let mut sentences = Vec::new();

    if team.last_match_days_ago < SHORT_REST_DAYS {
        sentences.push(format!(
            "{} come into this one only {} days after their last match; late-game legs could decide it.",
            team.name, team.last_match_days_ago
        ));
    }

    if team.win_rate_pct() >= HOME_STRONG_WIN_RATE {
        sentences.push(format!(
            "{} wins from the last {} give them real momentum to lean on in front of their own crowd.",
            team.wins(),
            team.recent_results.len()
        ));
    }

    let streak = team.streak(MatchResult::W);
    if streak >= STREAK_MIN {
        sentences.push(format!(
            "Riding a {streak}-match winning run, they will look to keep the home record rolling."
        ));
    }

    let slump = team.streak(MatchResult::L);
    if slump >= STREAK_MIN {
        sentences.push(format!(
            "A {slump}-match losing skid has drained the dressing room, and the home advantage may not be enough to stop it."
        ));
    }

    if team.league_rank <= TOP_RANK {
        sentences.push(format!(
            "Sitting {} in the table, they should control long stretches of this match.",
            ordinal(team.league_rank)
        ));
    } else if team.league_rank >= BOTTOM_RANK {
        sentences.push(format!(
            "Stuck {} in the standings, they badly need the points and will play like it.",
            ordinal(team.league_rank)
        ));
    }

    if sentences.is_empty() {
        sentences.push(format!(
            "{} arrive in ordinary shape, with nothing unusual flagged ahead of kickoff.",
            team.name
        ));
    }
    sentences
}

fn away_paragraph(team: &TeamSnapshot) -> Vec<String> {
    let mut sentences = Vec::new();

    if team.last_match_days_ago < SHORT_REST_DAYS {
        sentences.push(format!(
            "{} also played just {} days ago, and the travel on top of it makes squad freshness a real question.",
            team.name, team.last_match_days_ago
        ));
    }

    let win_rate = team.win_rate_pct();
    if win_rate < AWAY_WEAK_WIN_RATE {
        sentences.push(
            "Recent results have dried up, and turning that around on the road is a tall order."
                .to_string(),
        );
    }
    if win_rate >= HOME_STRONG_WIN_RATE {
        sentences.push(format!(
            "With {} wins from the last {}, their form travels well enough to trouble anyone.",
            team.wins(),
            team.recent_results.len()
        ));
    }

    let streak = team.streak(MatchResult::W);
    if streak >= STREAK_MIN {
        sentences.push(format!(
            "A {streak}-match winning streak has them full of belief."
        ));
    }

    let slump = team.streak(MatchResult::L);
    if slump >= STREAK_MIN {
        sentences.push(format!(
            "{slump} straight defeats have left the back line shaky, and away trips rarely fix that."
        ));
    }

    if team.league_rank <= TOP_RANK {
        sentences.push(format!(
            "As the league's {} side they carry enough quality to win anywhere.",
            ordinal(team.league_rank)
        ));
    } else if team.league_rank >= BOTTOM_RANK {
        sentences.push(format!(
            "Languishing {} in the table, a tough away fixture is the last thing they needed.",
            ordinal(team.league_rank)
        ));
    }

    if sentences.is_empty() {
        sentences.push(format!(
            "{} head into the trip with no notable concerns on record.",
            team.name
        ));
    }
    sentences
}

fn weather_note(weather: &Weather) -> Option<String> {
    match weather.condition {
        WeatherCondition::Rainy => Some(
            "Rain is forecast for matchday. A wet surface breeds misplaced passes and scrappy goals, and draws become more likely."
                .to_string(),
        ),
        WeatherCondition::Snowy => Some(
            "Snow is expected, so pitch conditions may be poor; both sides are likely to favour a cautious, defensive setup."
                .to_string(),
        ),
        _ if weather.temperature_c < COLD_TEMP_C => Some(format!(
            "At {}\u{b0}C the cold raises the injury risk and can slow the match down.",
            weather.temperature_c
        )),
        _ => None,
    }
}

fn conclusion(home: &TeamSnapshot, away: &TeamSnapshot, prob: &ProbabilityTriple) -> String {
    let diff = (prob.home - prob.away).abs();

    if prob.home >= prob.away + 20.0 {
        return format!(
            "On the balance of form and data, {} should win this comfortably at home; {:.0}% is a number you can trust.",
            home.name, prob.home
        );
    }
    if prob.away >= prob.home + 20.0 {
        return format!(
            "The visitors {} actually rate as the stronger side here, with the away win priced at {:.0}%.",
            away.name, prob.away
        );
    }
    if prob.draw >= 30.0 || diff < 10.0 {
        return "The two sides are finely balanced and a hard-fought draw is a live outcome; bet with caution."
            .to_string();
    }
    if prob.home > prob.away {
        return format!(
            "{} hold a narrow home edge, though a {:.0}-point gap is small enough to flip on a single variable.",
            home.name, diff
        );
    }
    format!(
        "{} are slightly favoured on the road, but the home advantage keeps this closer than the numbers suggest.",
        away.name
    )
}

fn ordinal(rank: u32) -> String {
    let suffix = match (rank % 10, rank % 100) {
        (1, 11) | (2, 12) | (3, 13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{rank}{suffix}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MatchResult::*;
    use crate::state::TopScorer;

    fn team(name: &str, results: &[MatchResult], rank: u32, days_ago: u32) -> TeamSnapshot {
        TeamSnapshot {
            id: name.to_lowercase(),
            name: name.to_string(),
            short_name: name[..3.min(name.len())].to_uppercase(),
            league_rank: rank,
            recent_results: results.to_vec(),
            top_scorer: TopScorer {
                name: "Striker".to_string(),
                goals: 9,
                is_injured: false,
            },
            last_match_days_ago: days_ago,
        }
    }

    fn mild() -> Weather {
        Weather {
            condition: WeatherCondition::Cloudy,
            temperature_c: 14,
            icon: "cloud".to_string(),
        }
    }

    #[test]
    fn quiet_teams_get_the_fallback_sentence() {
        let home = team("Alpha", &[W, L, D, W, L], 8, 6);
        let away = team("Omega", &[W, D, W, L, L], 9, 7);
        let report = build_report(&home, &away, &mild(), &ProbabilityTriple::new(40.0, 28.0, 32.0));
        assert_eq!(report.home.len(), 1);
        assert!(report.home[0].contains("Alpha"));
        assert_eq!(report.away.len(), 1);
        assert!(report.weather.is_none());
    }

    #[test]
    fn triggered_rules_stack_sentences() {
        let home = team("Alpha", &[W, W, W, W, D], 2, 2);
        let report = build_report(
            &home,
            &team("Omega", &[L, L, L, D, W], 17, 6),
            &mild(),
            &ProbabilityTriple::new(60.0, 22.0, 18.0),
        );
        // Short rest + strong form + win streak + top-four rank.
        assert_eq!(report.home.len(), 4);
        // Weak away form + losing streak + bottom-table rank.
        assert_eq!(report.away.len(), 3);
    }

    #[test]
    fn conclusion_tiers() {
        let home = team("Alpha", &[W, W, D, W, L], 5, 6);
        let away = team("Omega", &[L, D, W, L, D], 12, 6);

        let c = conclusion(&home, &away, &ProbabilityTriple::new(55.0, 25.0, 20.0));
        assert!(c.contains("comfortably"));

        let c = conclusion(&home, &away, &ProbabilityTriple::new(20.0, 25.0, 55.0));
        assert!(c.contains("Omega"));

        let c = conclusion(&home, &away, &ProbabilityTriple::new(36.0, 31.0, 33.0));
        assert!(c.contains("finely balanced"));

        let c = conclusion(&home, &away, &ProbabilityTriple::new(43.0, 28.0, 29.0));
        assert!(c.contains("narrow home edge"));

        let c = conclusion(&home, &away, &ProbabilityTriple::new(29.0, 28.0, 43.0));
        assert!(c.contains("slightly favoured"));
    }

    #[test]
    fn weather_notes() {
        let mut w = mild();
        w.condition = WeatherCondition::Rainy;
        assert!(weather_note(&w).unwrap().contains("Rain"));
        w.condition = WeatherCondition::Snowy;
        assert!(weather_note(&w).unwrap().contains("Snow"));
        w.condition = WeatherCondition::Sunny;
        w.temperature_c = 2;
        assert!(weather_note(&w).unwrap().contains("2"));
        w.temperature_c = 15;
        assert!(weather_note(&w).is_none());
    }
}
