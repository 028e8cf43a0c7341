//! Error taxonomy shared by the recommender and the price estimator

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
	/// A query was issued before `fit`/`train` (or `load`)
	#[error("model has not been fitted")]
	NotFitted,

	#[error("property {property_id} not found")]
	NotFound { property_id: String },

	/// No configured feature could be used with the given data
	#[error("configuration error: {0}")]
	Configuration(String),

	#[error("invalid input: {0}")]
	InvalidInput(String),

	#[error("i/o error: {0}")]
	Io(#[from] std::io::Error),

	#[error("failed to encode model: {0}")]
	Encode(#[from] rmp_serde::encode::Error),

	#[error("failed to decode model: {0}")]
	Decode(#[from] rmp_serde::decode::Error),

	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
}
