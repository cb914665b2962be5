pub mod features;
pub mod state;
pub mod teams;

pub use features::{derive, FeatureVector};
pub use state::{InputError, MatchState};
pub use teams::{City, Team};
