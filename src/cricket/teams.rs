use serde::{Deserialize, Serialize, Serializer};
use std::fmt;

/// IPL franchises the model was trained on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Team {
    SunrisersHyderabad,
    MumbaiIndians,
    RoyalChallengersBangalore,
    KolkataKnightRiders,
    KingsXiPunjab,
    ChennaiSuperKings,
    RajasthanRoyals,
    DelhiCapitals,
}

impl Team {
    pub const ALL: [Team; 8] = [
        Team::SunrisersHyderabad,
        Team::MumbaiIndians,
        Team::RoyalChallengersBangalore,
        Team::KolkataKnightRiders,
        Team::KingsXiPunjab,
        Team::ChennaiSuperKings,
        Team::RajasthanRoyals,
        Team::DelhiCapitals,
    ];

    /// Display name, identical to the category label the model was fit on.
    pub fn name(self) -> &'static str {
        match self {
            Team::SunrisersHyderabad => "Sunrisers Hyderabad",
            Team::MumbaiIndians => "Mumbai Indians",
            Team::RoyalChallengersBangalore => "Royal Challengers Bangalore",
            Team::KolkataKnightRiders => "Kolkata Knight Riders",
            Team::KingsXiPunjab => "Kings XI Punjab",
            Team::ChennaiSuperKings => "Chennai Super Kings",
            Team::RajasthanRoyals => "Rajasthan Royals",
            Team::DelhiCapitals => "Delhi Capitals",
        }
    }

    /// All teams ordered by display name, the order the form lists them in.
    pub fn sorted() -> Vec<Team> {
        let mut teams = Team::ALL.to_vec();
        teams.sort_by_key(|t| t.name());
        teams
    }
}

impl fmt::Display for Team {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for Team {
    type Error = UnknownName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        Team::ALL
            .into_iter()
            .find(|t| t.name() == s)
            .ok_or(UnknownName(s))
    }
}

impl Serialize for Team {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

/// Host cities seen in the training data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum City {
    Hyderabad,
    Bangalore,
    Mumbai,
    Indore,
    Kolkata,
    Delhi,
    Chandigarh,
    Jaipur,
    Chennai,
    CapeTown,
    PortElizabeth,
    Durban,
    Centurion,
    EastLondon,
    Johannesburg,
    Kimberley,
    Bloemfontein,
    Ahmedabad,
    Cuttack,
    Nagpur,
    Dharamsala,
    Visakhapatnam,
    Pune,
    Raipur,
    Ranchi,
    AbuDhabi,
    Sharjah,
    Mohali,
    Bengaluru,
}

impl City {
    pub const ALL: [City; 29] = [
        City::Hyderabad,
        City::Bangalore,
        City::Mumbai,
        City::Indore,
        City::Kolkata,
        City::Delhi,
        City::Chandigarh,
        City::Jaipur,
        City::Chennai,
        City::CapeTown,
        City::PortElizabeth,
        City::Durban,
        City::Centurion,
        City::EastLondon,
        City::Johannesburg,
        City::Kimberley,
        City::Bloemfontein,
        City::Ahmedabad,
        City::Cuttack,
        City::Nagpur,
        City::Dharamsala,
        City::Visakhapatnam,
        City::Pune,
        City::Raipur,
        City::Ranchi,
        City::AbuDhabi,
        City::Sharjah,
        City::Mohali,
        City::Bengaluru,
    ];

    pub fn name(self) -> &'static str {
        match self {
            City::Hyderabad => "Hyderabad",
            City::Bangalore => "Bangalore",
            City::Mumbai => "Mumbai",
            City::Indore => "Indore",
            City::Kolkata => "Kolkata",
            City::Delhi => "Delhi",
            City::Chandigarh => "Chandigarh",
            City::Jaipur => "Jaipur",
            City::Chennai => "Chennai",
            City::CapeTown => "Cape Town",
            City::PortElizabeth => "Port Elizabeth",
            City::Durban => "Durban",
            City::Centurion => "Centurion",
            City::EastLondon => "East London",
            City::Johannesburg => "Johannesburg",
            City::Kimberley => "Kimberley",
            City::Bloemfontein => "Bloemfontein",
            City::Ahmedabad => "Ahmedabad",
            City::Cuttack => "Cuttack",
            City::Nagpur => "Nagpur",
            City::Dharamsala => "Dharamsala",
            City::Visakhapatnam => "Visakhapatnam",
            City::Pune => "Pune",
            City::Raipur => "Raipur",
            City::Ranchi => "Ranchi",
            City::AbuDhabi => "Abu Dhabi",
            City::Sharjah => "Sharjah",
            City::Mohali => "Mohali",
            City::Bengaluru => "Bengaluru",
        }
    }

    pub fn sorted() -> Vec<City> {
        let mut cities = City::ALL.to_vec();
        cities.sort_by_key(|c| c.name());
        cities
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<String> for City {
    type Error = UnknownName;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        City::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or(UnknownName(s))
    }
}

impl Serialize for City {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown name {0:?}")]
pub struct UnknownName(pub String);
