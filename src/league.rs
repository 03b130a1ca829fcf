use serde::{Deserialize, Serialize};

/// Leagues with historically backtested edge rules. Anything outside the big
/// five maps to `None` and only matches the catch-all rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    PremierLeague,
    LaLiga,
    SerieA,
    Bundesliga,
    Ligue1,
}

impl League {
    /// API-Football league ids, as used by the ingestion layer.
    pub fn from_api_id(id: u32) -> Option<League> {
        match id {
            39 => Some(League::PremierLeague),
            140 => Some(League::LaLiga),
            135 => Some(League::SerieA),
            78 => Some(League::Bundesliga),
            61 => Some(League::Ligue1),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            League::PremierLeague => "Premier League",
            League::LaLiga => "La Liga",
            League::SerieA => "Serie A",
            League::Bundesliga => "Bundesliga",
            League::Ligue1 => "Ligue 1",
        }
    }
}
