//! Application configuration and constants

use std::path::PathBuf;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::core::Region;

static CUSTOM_MODEL_DIR: OnceLock<PathBuf> = OnceLock::new();

// === Storage ===
pub const MODELS_DIR_ENV: &str = "LAKAZ_MODELS_DIR";
pub const RECOMMENDER_FILE: &str = "recommender.msgpack";
pub const PRICE_MODEL_PREFIX: &str = "price_model";
pub const MODEL_EXT: &str = "msgpack";
pub const METADATA_SUFFIX: &str = "metadata.json";

// === Recommender ===
pub const FEATURE_WEIGHTS: &[(&str, f64)] = &[
	("price", 0.2),
	("bedrooms", 0.1),
	("bathrooms", 0.05),
	("property_type_encoded", 0.15),
	("area_size", 0.1),
	("location_score", 0.25),
	("dist_to_beach", 0.15),
];

/// Share of `max_price` used as the virtual listing's price
pub const BUDGET_TARGET_RATIO: f64 = 0.8;
pub const DEFAULT_BEDROOMS: f64 = 2.0;
pub const DEFAULT_BATHROOMS: f64 = 1.0;
pub const DEFAULT_AREA: f64 = 100.0;
pub const PREMIUM_LOCATION_SCORE: f64 = 80.0;
pub const AVERAGE_LOCATION_SCORE: f64 = 50.0;
pub const BEACHFRONT_DISTANCE_KM: f64 = 0.2;
pub const AVERAGE_BEACH_DISTANCE_KM: f64 = 2.0;

// === Price model ===
pub const PRICE_FEATURES: &[&str] = &[
	"bedrooms",
	"bathrooms",
	"property_type_encoded",
	"area_size",
	"dist_to_beach",
	"dist_to_city",
	"location_score",
	"is_beachfront",
	"is_tourist_area",
];

pub const MIN_REGION_SAMPLES: usize = 100;
pub const TEST_SIZE: f64 = 0.2;
pub const RANDOM_SEED: u64 = 42;
pub const BASE_CONFIDENCE: f64 = 0.8;

// === Query defaults ===
pub const DEFAULT_LIMIT: usize = 5;
pub const MAX_LIMIT: usize = 20;

/// Feature weights for the similarity engine.
///
/// The order of `weights` is the candidate order; it becomes the column order
/// of every fitted feature vector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommenderConfig {
	pub weights: Vec<(String, f64)>,
}

impl RecommenderConfig {
	pub fn new(weights: Vec<(String, f64)>) -> Self {
		Self { weights }
	}

	pub fn weight(&self, feature: &str) -> Option<f64> {
		self.weights.iter().find(|(name, _)| name == feature).map(|(_, w)| *w)
	}
}

impl Default for RecommenderConfig {
	fn default() -> Self {
		Self {
			weights: FEATURE_WEIGHTS.iter().map(|(name, w)| (name.to_string(), *w)).collect(),
		}
	}
}

/// Hyperparameters for the boosted regression trees
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostingParams {
	pub n_estimators: usize,
	pub learning_rate: f64,
	pub max_depth: usize,
	/// Fraction of rows sampled for each tree
	pub subsample: f64,
	/// Fraction of features sampled for each tree
	pub colsample: f64,
	/// Minimum loss reduction required to keep a split
	pub gamma: f64,
	/// L2 penalty on leaf weights
	pub lambda: f64,
	pub min_child_weight: f64,
	pub seed: u64,
}

impl Default for BoostingParams {
	fn default() -> Self {
		Self {
			n_estimators: 200,
			learning_rate: 0.05,
			max_depth: 6,
			subsample: 0.8,
			colsample: 0.8,
			gamma: 0.1,
			lambda: 1.0,
			min_child_weight: 1.0,
			seed: RANDOM_SEED,
		}
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModelConfig {
	pub features: Vec<String>,
	pub min_region_samples: usize,
	pub test_size: f64,
	pub seed: u64,
	pub fallback_region: Region,
	pub boosting: BoostingParams,
}

impl Default for PriceModelConfig {
	fn default() -> Self {
		Self {
			features: PRICE_FEATURES.iter().map(|f| f.to_string()).collect(),
			min_region_samples: MIN_REGION_SAMPLES,
			test_size: TEST_SIZE,
			seed: RANDOM_SEED,
			fallback_region: Region::Central,
			boosting: BoostingParams::default(),
		}
	}
}

pub fn set_model_dir(path: PathBuf) {
	let _ = CUSTOM_MODEL_DIR.set(path);
}

/// Get models directory (custom override, LAKAZ_MODELS_DIR, next to the executable, or ./models)
pub fn models_dir() -> PathBuf {
	if let Some(custom) = CUSTOM_MODEL_DIR.get() {
		crate::ui::debug(&format!("Using custom model dir: {}", custom.display()));
		return custom.clone();
	}

	if let Ok(env_path) = std::env::var(MODELS_DIR_ENV) {
		let path = PathBuf::from(&env_path);
		if path.is_dir() {
			crate::ui::debug(&format!("Using {}: {}", MODELS_DIR_ENV, env_path));
			return path;
		}
	}

	if let Ok(exe) = std::env::current_exe() {
		if let Some(dir) = exe.parent() {
			let models = dir.join("models");
			if models.is_dir() {
				crate::ui::debug(&format!("Found models at: {}", models.display()));
				return models;
			}
		}
	}

	PathBuf::from("models")
}

pub fn recommender_path() -> PathBuf {
	models_dir().join(RECOMMENDER_FILE)
}

pub fn price_model_prefix() -> PathBuf {
	models_dir().join(PRICE_MODEL_PREFIX)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_weights_keep_candidate_order() {
		let config = RecommenderConfig::default();
		let names: Vec<&str> = config.weights.iter().map(|(n, _)| n.as_str()).collect();
		assert_eq!(names[0], "price");
		assert_eq!(names[6], "dist_to_beach");
		assert_eq!(config.weight("location_score"), Some(0.25));
		assert_eq!(config.weight("is_beachfront"), None);
	}

	#[test]
	fn boosting_defaults_match_tuned_values() {
		let params = BoostingParams::default();
		assert_eq!(params.n_estimators, 200);
		assert_eq!(params.max_depth, 6);
		assert!((params.learning_rate - 0.05).abs() < 1e-12);
		assert!((params.gamma - 0.1).abs() < 1e-12);
	}
}
