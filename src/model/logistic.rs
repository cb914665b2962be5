//! One-hot + logistic-regression win model.
//!
//! The artifact is a JSON export of a fitted pipeline: each categorical
//! column carries its category list and one weight per category (the
//! dropped baseline category has weight `0.0`), followed by one weight per
//! numeric column and an intercept.
//!
//! ```json
//! {
//!   "name": "ipl-logreg",
//!   "categorical": {
//!     "batting_team": { "categories": ["..."], "weights": [0.0] },
//!     "bowling_team": { "categories": ["..."], "weights": [0.0] },
//!     "city":         { "categories": ["..."], "weights": [0.0] }
//!   },
//!   "numeric": { "runs_left": -0.02, "balls_left": 0.01, "wickets": 0.25,
//!                "total_runs_x": 0.0, "crr": 0.1, "rrr": -0.3 },
//!   "intercept": 0.7
//! }
//! ```

use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;

use super::predictor::{ModelError, WinPredictor};
use crate::cricket::FeatureVector;

/// Loaded pipeline. Immutable after [`LogisticPipeline::load`].
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogisticPipeline {
    name: String,
    categorical: CategoricalColumns,
    numeric: NumericWeights,
    intercept: f64,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct CategoricalColumns {
    batting_team: OneHotColumn,
    bowling_team: OneHotColumn,
    city: OneHotColumn,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
struct OneHotColumn {
    categories: Vec<String>,
    weights: Vec<f64>,
}

#[derive(Debug, Clone, Copy, Deserialize)]
#[serde(deny_unknown_fields)]
struct NumericWeights {
    runs_left: f64,
    balls_left: f64,
    wickets: f64,
    total_runs_x: f64,
    crr: f64,
    rrr: f64,
}

impl OneHotColumn {
    fn check(&self, column: &str) -> Result<(), ModelError> {
        if self.categories.is_empty() {
            return Err(ModelError::Invalid(format!("{column} has no categories")));
        }
        if self.categories.len() != self.weights.len() {
            return Err(ModelError::Invalid(format!(
                "{column} has {} categories but {} weights",
                self.categories.len(),
                self.weights.len()
            )));
        }
        let mut seen = HashSet::new();
        for c in &self.categories {
            if !seen.insert(c.as_str()) {
                return Err(ModelError::Invalid(format!(
                    "{column} lists category {c:?} twice"
                )));
            }
        }
        if let Some(w) = self.weights.iter().find(|w| !w.is_finite()) {
            return Err(ModelError::Invalid(format!("{column} has weight {w}")));
        }
        Ok(())
    }

    fn weight(&self, column: &'static str, value: &str) -> Result<f64, ModelError> {
        self.categories
            .iter()
            .position(|c| c == value)
            .map(|i| self.weights[i])
            .ok_or_else(|| ModelError::UnknownCategory {
                column,
                value: value.to_string(),
            })
    }
}

impl LogisticPipeline {
    /// Read and check the artifact at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ModelError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| ModelError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> Result<Self, ModelError> {
        let pipeline: LogisticPipeline = serde_json::from_str(raw)?;
        pipeline.check()?;
        Ok(pipeline)
    }

    fn check(&self) -> Result<(), ModelError> {
        self.categorical.batting_team.check("batting_team")?;
        self.categorical.bowling_team.check("bowling_team")?;
        self.categorical.city.check("city")?;
        let n = self.numeric;
        let numeric = [
            ("runs_left", n.runs_left),
            ("balls_left", n.balls_left),
            ("wickets", n.wickets),
            ("total_runs_x", n.total_runs_x),
            ("crr", n.crr),
            ("rrr", n.rrr),
            ("intercept", self.intercept),
        ];
        if let Some((column, w)) = numeric.iter().find(|(_, w)| !w.is_finite()) {
            return Err(ModelError::Invalid(format!("{column} has weight {w}")));
        }
        Ok(())
    }

    /// Category counts per encoded column, for startup logging.
    pub fn category_counts(&self) -> (usize, usize, usize) {
        (
            self.categorical.batting_team.categories.len(),
            self.categorical.bowling_team.categories.len(),
            self.categorical.city.categories.len(),
        )
    }

    /// Log-odds of the batting side winning.
    fn decision(&self, f: &FeatureVector) -> Result<f64, ModelError> {
        let numeric = [
            ("runs_left", f.runs_left as f64, self.numeric.runs_left),
            ("balls_left", f.balls_left, self.numeric.balls_left),
            ("wickets", f.wickets as f64, self.numeric.wickets),
            ("total_runs_x", f.total_runs_x as f64, self.numeric.total_runs_x),
            ("crr", f.crr, self.numeric.crr),
            ("rrr", f.rrr, self.numeric.rrr),
        ];

        let mut z = self.intercept;
        z += self
            .categorical
            .batting_team
            .weight("batting_team", f.batting_team.name())?;
        z += self
            .categorical
            .bowling_team
            .weight("bowling_team", f.bowling_team.name())?;
        z += self.categorical.city.weight("city", f.city.name())?;
        for (column, value, weight) in numeric {
            if !value.is_finite() {
                return Err(ModelError::NonFiniteFeature { column, value });
            }
            z += value * weight;
        }
        Ok(z)
    }
}

impl WinPredictor for LogisticPipeline {
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<(f64, f64), ModelError> {
        let win = sigmoid(self.decision(features)?);
        Ok((1.0 - win, win))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

fn sigmoid(x: f64) -> f64 {
    if x >= 0.0 {
        let z = (-x).exp();
        1.0 / (1.0 + z)
    } else {
        let z = x.exp();
        z / (1.0 + z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cricket::state::sample_state;
    use crate::cricket::{derive, City, MatchState, Team};
    use approx::assert_relative_eq;

    const BUNDLED: &str = include_str!("../../models/ipl_logreg.json");

    fn tiny_json(intercept: f64) -> String {
        format!(
            r#"{{
                "name": "tiny",
                "categorical": {{
                    "batting_team": {{ "categories": ["Chennai Super Kings", "Mumbai Indians"], "weights": [0.0, 0.5] }},
                    "bowling_team": {{ "categories": ["Chennai Super Kings", "Mumbai Indians"], "weights": [0.0, -0.5] }},
                    "city": {{ "categories": ["Chennai", "Mumbai"], "weights": [0.0, 0.25] }}
                }},
                "numeric": {{ "runs_left": 0.0, "balls_left": 0.0, "wickets": 0.0,
                              "total_runs_x": 0.0, "crr": 0.0, "rrr": 0.0 }},
                "intercept": {intercept}
            }}"#
        )
    }

    #[test]
    fn bundled_artifact_loads_and_covers_every_option() {
        let model = LogisticPipeline::from_json(BUNDLED).expect("bundled model");
        assert_eq!(model.category_counts(), (8, 8, 29));
        for batting in Team::ALL {
            for city in City::ALL {
                let state = MatchState {
                    batting_team: batting,
                    city,
                    ..sample_state()
                };
                let (loss, win) = model.predict_probabilities(&derive(&state)).unwrap();
                assert_relative_eq!(loss + win, 1.0, epsilon = 1e-12);
                assert!((0.0..=1.0).contains(&win));
            }
        }
    }

    #[test]
    fn bundled_model_prefers_easier_chases() {
        let model = LogisticPipeline::from_json(BUNDLED).unwrap();
        let cruising = MatchState {
            current_score: 150,
            overs_completed: 15.0,
            wickets_lost: 2,
            ..sample_state()
        };
        let collapsing = MatchState {
            current_score: 80,
            overs_completed: 15.0,
            wickets_lost: 8,
            ..sample_state()
        };
        let (_, p_cruising) = model.predict_probabilities(&derive(&cruising)).unwrap();
        let (_, p_collapsing) = model.predict_probabilities(&derive(&collapsing)).unwrap();
        assert!(
            p_cruising > p_collapsing,
            "30 off 30 with 8 in hand ({p_cruising:.3}) should beat 100 off 30 with 2 ({p_collapsing:.3})"
        );
    }

    #[test]
    fn sums_intercept_and_one_hot_weights() {
        let model = LogisticPipeline::from_json(&tiny_json(0.0)).unwrap();
        let state = MatchState {
            batting_team: Team::MumbaiIndians,
            bowling_team: Team::MumbaiIndians,
            city: City::Mumbai,
            ..sample_state()
        };
        // 0.5 - 0.5 + 0.25
        let (loss, win) = model.predict_probabilities(&derive(&state)).unwrap();
        assert_relative_eq!(win, sigmoid(0.25), epsilon = 1e-12);
        assert_relative_eq!(loss, 1.0 - sigmoid(0.25), epsilon = 1e-12);
    }

    #[test]
    fn baseline_categories_contribute_nothing() {
        let model = LogisticPipeline::from_json(&tiny_json(0.0)).unwrap();
        let state = MatchState {
            batting_team: Team::ChennaiSuperKings,
            bowling_team: Team::ChennaiSuperKings,
            city: City::Chennai,
            ..sample_state()
        };
        let (_, win) = model.predict_probabilities(&derive(&state)).unwrap();
        assert_relative_eq!(win, 0.5, epsilon = 1e-12);
    }

    #[test]
    fn unknown_category_is_an_error() {
        let model = LogisticPipeline::from_json(&tiny_json(0.0)).unwrap();
        let state = MatchState {
            batting_team: Team::DelhiCapitals,
            ..sample_state()
        };
        let err = model.predict_probabilities(&derive(&state)).unwrap_err();
        assert!(matches!(
            err,
            ModelError::UnknownCategory { column: "batting_team", .. }
        ));
    }

    #[test]
    fn non_finite_feature_is_an_error() {
        let model = LogisticPipeline::from_json(BUNDLED).unwrap();
        let mut features = derive(&sample_state());
        features.crr = f64::INFINITY;
        let err = model.predict_probabilities(&features).unwrap_err();
        assert!(matches!(err, ModelError::NonFiniteFeature { column: "crr", .. }));
    }

    #[test]
    fn rejects_mismatched_weights() {
        let raw = tiny_json(0.0).replace("[0.0, 0.25]", "[0.0]");
        let err = LogisticPipeline::from_json(&raw).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_duplicate_categories() {
        let raw = tiny_json(0.0).replace(r#"["Chennai", "Mumbai"]"#, r#"["Mumbai", "Mumbai"]"#);
        let err = LogisticPipeline::from_json(&raw).unwrap_err();
        assert!(matches!(err, ModelError::Invalid(_)));
    }

    #[test]
    fn rejects_malformed_json() {
        let err = LogisticPipeline::from_json("{ \"name\": ").unwrap_err();
        assert!(matches!(err, ModelError::Parse(_)));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = LogisticPipeline::load("does/not/exist.json").unwrap_err();
        assert!(matches!(err, ModelError::Read { .. }));
        assert!(err.to_string().contains("does/not/exist.json"));
    }

    #[test]
    fn sigmoid_is_stable_at_extremes() {
        assert_relative_eq!(sigmoid(0.0), 0.5, epsilon = 1e-12);
        assert!(sigmoid(800.0) <= 1.0);
        assert!(sigmoid(-800.0) >= 0.0);
    }
}
