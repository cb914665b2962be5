pub mod logistic;
pub mod predictor;

pub use logistic::LogisticPipeline;
pub use predictor::{ModelError, WinPredictor};
