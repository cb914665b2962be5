use std::collections::HashMap;
use std::path::Path;

use crate::cricket::Team;

/// Team logo references, resolved by the web layer only.
#[derive(Debug, Clone)]
pub struct TeamAssets {
    logos: HashMap<Team, String>,
}

/// File name of each team's logo inside the assets directory.
fn logo_file(team: Team) -> &'static str {
    match team {
        Team::SunrisersHyderabad => "sunrisers_hyderabad.jpg",
        Team::MumbaiIndians => "mumbai_indians.png",
        Team::RoyalChallengersBangalore => "rcb.jpg",
        Team::KolkataKnightRiders => "kkr.png",
        Team::KingsXiPunjab => "kings_punjab.png",
        Team::ChennaiSuperKings => "csk.png",
        Team::RajasthanRoyals => "rajasthan.png",
        Team::DelhiCapitals => "delhi.png",
    }
}

impl TeamAssets {
    /// Build references under `url_prefix`, e.g. `/assets`.
    pub fn new(url_prefix: &str) -> Self {
        let prefix = url_prefix.trim_end_matches('/');
        let logos = Team::ALL
            .into_iter()
            .map(|t| (t, format!("{}/{}", prefix, logo_file(t))))
            .collect();
        TeamAssets { logos }
    }

    pub fn logo(&self, team: Team) -> &str {
        // every Team is inserted in new()
        self.logos.get(&team).map(String::as_str).unwrap_or_default()
    }

    /// Teams whose logo file is absent from `dir`.
    pub fn missing_in(&self, dir: &Path) -> Vec<Team> {
        Team::ALL
            .into_iter()
            .filter(|t| !dir.join(logo_file(*t)).is_file())
            .collect()
    }
}
