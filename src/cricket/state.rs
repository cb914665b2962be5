use serde::{Deserialize, Serialize};

use super::teams::{City, Team};

/// Full T20 innings length in overs.
pub const MAX_OVERS: f64 = 20.0;
/// Wickets available to a batting side.
pub const MAX_WICKETS: u32 = 10;

/// Raw second-innings match situation as entered on the form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchState {
    pub batting_team: Team,
    pub bowling_team: Team,
    pub city: City,
    /// Runs the chasing side needs to win.
    pub target: u32,
    pub current_score: u32,
    /// Decimal overs, e.g. `10.0`. The fraction is taken literally.
    pub overs_completed: f64,
    pub wickets_lost: u32,
}

/// Reasons the form rejects a match state before any prediction is made.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InputError {
    #[error("no overs bowled yet")]
    NoOversBowled,
    #[error("overs completed {0} outside 0-20")]
    OversOutOfRange(f64),
    #[error("wickets lost {0} exceeds 10")]
    TooManyWickets(u32),
    #[error("target must be at least 1")]
    TargetTooLow,
}

impl InputError {
    /// Notice shown to the user for any rejected input.
    pub const NOTICE: &'static str = "Please enter valid match data!";
}

impl MatchState {
    /// Check the state the same way the form does before predicting.
    ///
    /// Batting and bowling the same team is accepted.
    pub fn validate(&self) -> Result<(), InputError> {
        if self.overs_completed == 0.0 {
            return Err(InputError::NoOversBowled);
        }
        if !self.overs_completed.is_finite()
            || self.overs_completed < 0.0
            || self.overs_completed > MAX_OVERS
        {
            return Err(InputError::OversOutOfRange(self.overs_completed));
        }
        if self.wickets_lost > MAX_WICKETS {
            return Err(InputError::TooManyWickets(self.wickets_lost));
        }
        if self.target < 1 {
            return Err(InputError::TargetTooLow);
        }
        Ok(())
    }
}

#[cfg(test)]
pub(crate) fn sample_state() -> MatchState {
    MatchState {
        batting_team: Team::MumbaiIndians,
        bowling_team: Team::ChennaiSuperKings,
        city: City::Mumbai,
        target: 180,
        current_score: 90,
        overs_completed: 10.0,
        wickets_lost: 2,
    }
}
