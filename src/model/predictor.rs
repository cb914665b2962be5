use std::path::PathBuf;

use crate::cricket::FeatureVector;

/// Trait every win model must implement.
///
/// Implementations are loaded once at startup and shared read-only across
/// requests, so they must not need `&mut self`.
pub trait WinPredictor: Send + Sync {
    /// Score one feature row. Returns `(loss_probability, win_probability)`
    /// for the batting side, in that order.
    fn predict_probabilities(&self, features: &FeatureVector) -> Result<(f64, f64), ModelError>;

    /// Human-readable name for logging.
    fn name(&self) -> &str;
}

#[derive(Debug, thiserror::Error)]
pub enum ModelError {
    #[error("failed to read model artifact {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed model artifact: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid model artifact: {0}")]
    Invalid(String),
    #[error("{column} value {value:?} was not seen when the model was fit")]
    UnknownCategory { column: &'static str, value: String },
    #[error("{column} is not finite ({value})")]
    NonFiniteFeature { column: &'static str, value: f64 },
}
