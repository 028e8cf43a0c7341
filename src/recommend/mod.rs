//! # Similarity Engine
//!
//! Weighted content-based recommendations: "similar to listing X" and
//! "match these preferences".

pub mod engine;
pub mod scaler;
pub mod similarity;
pub mod summary;

pub use engine::{FittedModel, Match, Recommender};
pub use scaler::StandardScaler;
pub use summary::{summarize, PropertySummary};
