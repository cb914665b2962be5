//! Derived chase statistics fed to the win model.
//!
//! The arithmetic follows the convention the model was trained with: overs
//! are treated as plain decimals and multiplied by six, so `4.3` overs counts
//! as 25.8 balls rather than 27. Nothing is clamped; a chase that is already
//! won yields a negative `runs_left`, and the caller is expected to have
//! validated the state first.

use serde::Serialize;

use super::state::MatchState;
use super::teams::{City, Team};

/// Balls in a full T20 innings.
pub const BALLS_PER_INNINGS: f64 = 120.0;
/// Balls in one over.
pub const BALLS_PER_OVER: f64 = 6.0;

/// One model input row. Field names match the columns the model expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FeatureVector {
    pub batting_team: Team,
    pub bowling_team: Team,
    pub city: City,
    pub runs_left: i64,
    pub balls_left: f64,
    /// Wickets still in hand.
    pub wickets: i64,
    /// The target, under the name the model was fit with.
    pub total_runs_x: u32,
    /// Current run rate.
    pub crr: f64,
    /// Required run rate, `0.0` once no balls remain.
    pub rrr: f64,
}

/// Build the feature row for a validated match state.
///
/// `overs_completed` must be non-zero; otherwise `crr` comes out non-finite.
pub fn derive(state: &MatchState) -> FeatureVector {
    debug_assert!(
        state.overs_completed != 0.0,
        "derive called before any overs were bowled"
    );

    let runs_left = state.target as i64 - state.current_score as i64;
    let balls_left = BALLS_PER_INNINGS - state.overs_completed * BALLS_PER_OVER;
    let wickets = 10 - state.wickets_lost as i64;
    let crr = state.current_score as f64 / state.overs_completed;
    let rrr = if balls_left > 0.0 {
        runs_left as f64 * BALLS_PER_OVER / balls_left
    } else {
        0.0
    };

    FeatureVector {
        batting_team: state.batting_team,
        bowling_team: state.bowling_team,
        city: state.city,
        runs_left,
        balls_left,
        wickets,
        total_runs_x: state.target,
        crr,
        rrr,
    }
}
