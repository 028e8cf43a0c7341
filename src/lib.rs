//! # Lakaz Library
//!
//! Content-based recommendations and regional price estimates for Mauritius
//! real-estate listings.
//!
//! - [`recommend`]: weighted, standardized feature vectors compared by cosine similarity
//! - [`pricing`]: one boosted-tree regressor per region with a fallback route
//! - [`storage`]: dataset loading and model artifacts

pub mod cli;
pub mod commands;
pub mod config;
pub mod core;
pub mod error;
pub mod pricing;
pub mod recommend;
pub mod storage;
pub mod ui;

pub use error::{Error, Result};
