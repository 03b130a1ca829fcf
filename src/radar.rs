//! Five-axis team power ratings for the comparison radar.
//!
//! Stateless and per-team: everything derives from the recent-results
//! window, the league rank and the top scorer's goal count. Axes are capped
//! at 100; the only floors are the ones the formulas produce themselves.

use serde::Serialize;

use crate::state::{MatchResult, TeamSnapshot};

/// Points available over a five-match window (3 per win).
const MAX_FORM_POINTS: f64 = 15.0;
/// Rank decay per place; zero from rank 21 on.
const RANK_DECAY: f64 = 5.0;
/// Bonus per consecutive win at the head of the window.
const STREAK_BONUS: f64 = 8.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarAxes {
    pub attack: f64,
    pub defense: f64,
    pub organization: f64,
    pub form: f64,
    pub finishing: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RadarComparison {
    pub home: RadarAxes,
    pub away: RadarAxes,
}

/// Derives the five axis scores for one team.
pub fn team_axes(team: &TeamSnapshot) -> RadarAxes {
    let form_score =
        (team.wins() as f64 * 3.0 + team.draws() as f64) / MAX_FORM_POINTS * 100.0;
    let rank_score = (100.0 - (team.league_rank.saturating_sub(1) as f64) * RANK_DECAY).max(0.0);
    let goal_score = (50.0 + team.top_scorer.goals as f64 * 5.0).min(100.0);
    let momentum_bonus = team.streak(MatchResult::W) as f64 * STREAK_BONUS;

    let attack = (rank_score * 0.4 + goal_score * 0.4 + form_score * 0.2).round();
    let defense =
        (rank_score * 0.5 + (100.0 - team.losses() as f64 * 15.0) * 0.5).round();
    let organization = (rank_score * 0.6 + form_score * 0.4).round();
    // Deliberately unclamped before the bonus add: a perfect window plus a
    // streak saturates, it does not overflow.
    let form = (form_score + momentum_bonus).round();
    let finishing = goal_score.round();

    RadarAxes {
        attack: attack.min(100.0),
        defense: defense.min(100.0),
        organization: organization.min(100.0),
        form: form.min(100.0),
        finishing: finishing.min(100.0),
    }
}

/// Side-by-side axes for the two teams of a fixture.
pub fn compare(home: &TeamSnapshot, away: &TeamSnapshot) -> RadarComparison {
    RadarComparison {
        home: team_axes(home),
        away: team_axes(away),
    }
}
