//! # Regional Price Estimator
//!
//! One boosted-tree regressor per region with enough listings, routed by the
//! region resolved from each record.

pub mod estimator;
pub mod gbm;
pub mod metrics;
pub mod split;

pub use estimator::{Performance, PriceEstimator, PricePrediction, RegionalModel};
pub use gbm::GradientBoostedRegressor;
