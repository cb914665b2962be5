//! Turns a model score into what the form shows: percentages, the stacked
//! bar and a line of commentary.

pub mod commentary;

pub use commentary::Commentary;

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::sync::Arc;
use tracing::debug;

use crate::cricket::{derive, FeatureVector, InputError, MatchState, Team};
use crate::model::{ModelError, WinPredictor};

/// Two-segment horizontal bar. The loss segment starts where the win
/// segment ends; neither is renormalised.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ProbabilityBar {
    pub win_fraction: f64,
    pub loss_fraction: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PresentationOutput {
    pub batting_team: Team,
    pub bowling_team: Team,
    /// Batting side's chance, percent, two decimals.
    pub win_percent: f64,
    /// Bowling side's chance, percent, two decimals.
    pub loss_percent: f64,
    pub bar: ProbabilityBar,
    pub commentary: Commentary,
    pub commentary_message: &'static str,
    pub predicted_at: DateTime<Utc>,
}

#[derive(Debug, thiserror::Error)]
pub enum PredictError {
    #[error("invalid match data: {0}")]
    InvalidInput(#[from] InputError),
    #[error("model inference failed: {0}")]
    Model(#[from] ModelError),
}

/// Formats predictions from an injected model.
#[derive(Clone)]
pub struct Presenter {
    model: Arc<dyn WinPredictor>,
}

impl Presenter {
    pub fn new(model: Arc<dyn WinPredictor>) -> Self {
        Presenter { model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Score `features` and format the result. Model errors are returned
    /// as-is; nothing is retried.
    pub fn present(&self, features: &FeatureVector) -> Result<PresentationOutput, ModelError> {
        let (loss, win) = self.model.predict_probabilities(features)?;
        let commentary = Commentary::from_win_probability(win);

        Ok(PresentationOutput {
            batting_team: features.batting_team,
            bowling_team: features.bowling_team,
            win_percent: round2(win * 100.0),
            loss_percent: round2(loss * 100.0),
            bar: ProbabilityBar {
                win_fraction: win,
                loss_fraction: loss,
            },
            commentary,
            commentary_message: commentary.message(),
            predicted_at: Utc::now(),
        })
    }

    /// Validate, derive and present in one pass.
    pub fn predict_match(&self, state: &MatchState) -> Result<PresentationOutput, PredictError> {
        state.validate()?;
        let features = derive(state);
        debug!(
            runs_left = features.runs_left,
            balls_left = features.balls_left,
            wickets = features.wickets,
            crr = features.crr,
            rrr = features.rrr,
            "Derived features for {} vs {} at {}",
            features.batting_team,
            features.bowling_team,
            features.city
        );
        Ok(self.present(&features)?)
    }
}

/// Round to two decimals on the exact decimal expansion of `v`, so
/// `28.884999999999998` becomes `28.88` rather than `28.89`.
fn round2(v: f64) -> f64 {
    format!("{v:.2}").parse().unwrap_or(v)
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::cricket::state::sample_state;
    use approx::assert_relative_eq;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Returns a fixed `(loss, win)` pair and counts calls.
    pub(crate) struct FixedPredictor {
        pub loss: f64,
        pub win: f64,
        pub calls: AtomicUsize,
    }

    impl FixedPredictor {
        pub(crate) fn new(loss: f64, win: f64) -> Self {
            FixedPredictor {
                loss,
                win,
                calls: AtomicUsize::new(0),
            }
        }
    }

    impl WinPredictor for FixedPredictor {
        fn predict_probabilities(&self, _: &FeatureVector) -> Result<(f64, f64), ModelError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok((self.loss, self.win))
        }

        fn name(&self) -> &str {
            "fixed"
        }
    }

    pub(crate) struct FailingPredictor;

    impl WinPredictor for FailingPredictor {
        fn predict_probabilities(&self, _: &FeatureVector) -> Result<(f64, f64), ModelError> {
            Err(ModelError::Invalid("weights not loaded".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    #[test]
    fn formats_fixed_pair() {
        let presenter = Presenter::new(Arc::new(FixedPredictor::new(0.3, 0.7)));
        let out = presenter.present(&derive(&sample_state())).unwrap();
        assert_eq!(out.win_percent, 70.0);
        assert_eq!(out.loss_percent, 30.0);
        assert_eq!(out.commentary, Commentary::Strong);
        assert_eq!(out.commentary_message, "🚀 In a strong position!");
        assert_eq!(out.batting_team, Team::MumbaiIndians);
        assert_eq!(out.bowling_team, Team::ChennaiSuperKings);
    }

    #[test]
    fn percentages_round_to_two_decimals() {
        let presenter = Presenter::new(Arc::new(FixedPredictor::new(0.123456, 0.876544)));
        let out = presenter.present(&derive(&sample_state())).unwrap();
        assert_relative_eq!(out.win_percent, 87.65, epsilon = 1e-9);
        assert_relative_eq!(out.loss_percent, 12.35, epsilon = 1e-9);
        assert_eq!(out.commentary, Commentary::Dominant);
    }

    #[test]
    fn bar_uses_raw_probabilities() {
        // Not renormalised even if the model's pair drifts from 1.0
        let presenter = Presenter::new(Arc::new(FixedPredictor::new(0.35, 0.6)));
        let out = presenter.present(&derive(&sample_state())).unwrap();
        assert_eq!(out.bar.win_fraction, 0.6);
        assert_eq!(out.bar.loss_fraction, 0.35);
        assert_eq!(out.commentary, Commentary::Even);
    }

    #[test]
    fn commentary_reads_only_the_win_side() {
        let presenter = Presenter::new(Arc::new(FixedPredictor::new(0.9, 0.1)));
        let out = presenter.present(&derive(&sample_state())).unwrap();
        assert_eq!(out.commentary, Commentary::Bleak);
    }

    #[test]
    fn model_failure_propagates() {
        let presenter = Presenter::new(Arc::new(FailingPredictor));
        let err = presenter.present(&derive(&sample_state())).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn invalid_input_never_reaches_the_model() {
        let model = Arc::new(FixedPredictor::new(0.5, 0.5));
        let presenter = Presenter::new(model.clone());
        let state = MatchState {
            overs_completed: 0.0,
            ..sample_state()
        };
        let err = presenter.predict_match(&state).unwrap_err();
        assert!(matches!(
            err,
            PredictError::InvalidInput(InputError::NoOversBowled)
        ));
        assert_eq!(model.calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn predict_match_runs_the_whole_chain() {
        let model = Arc::new(FixedPredictor::new(0.15, 0.85));
        let presenter = Presenter::new(model.clone());
        let out = presenter.predict_match(&sample_state()).unwrap();
        assert_eq!(out.win_percent, 85.0);
        assert_eq!(out.commentary, Commentary::Dominant);
        assert_eq!(model.calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn predict_match_wraps_model_errors() {
        let presenter = Presenter::new(Arc::new(FailingPredictor));
        let err = presenter.predict_match(&sample_state()).unwrap_err();
        assert!(matches!(err, PredictError::Model(_)));
    }

    #[test]
    fn round2_behaviour() {
        assert_eq!(round2(30.000000000000004), 30.0);
        assert_eq!(round2(33.333333), 33.33);
        assert_eq!(round2(66.666666), 66.67);
        assert_eq!(round2(28.884999999999998), 28.88);
    }

    #[test]
    fn rounding_follows_the_stored_value_not_a_rescaled_one() {
        // 0.28885 * 100 is stored just below 28.885
        let presenter = Presenter::new(Arc::new(FixedPredictor::new(0.71115, 0.28885)));
        let out = presenter.present(&derive(&sample_state())).unwrap();
        assert_eq!(out.win_percent, 28.88);
        assert_eq!(out.commentary, Commentary::NeedsMiracle);
    }
}
