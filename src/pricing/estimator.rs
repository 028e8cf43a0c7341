//! Regional price models with an explicit fallback chain

use ndarray::{Array1, Array2, Axis};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::gbm::GradientBoostedRegressor;
use super::metrics::{mean_absolute_error, r2_score};
use super::split::train_test_split;
use crate::config::{PriceModelConfig, BASE_CONFIDENCE};
use crate::core::region::{fallback_chain, resolve_region};
use crate::core::{Property, Region};
use crate::error::Result;
use crate::ui;

/// Held-out fit quality of a regional model
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Performance {
	pub mae: f64,
	pub r2: f64,
}

/// Trained regressor plus the feature list and metrics for one region
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionalModel {
	pub region: Region,
	pub model: GradientBoostedRegressor,
	pub features: Vec<String>,
	pub performance: Performance,
	pub n_samples: usize,
}

impl RegionalModel {
	/// Confidence derived from held-out R², clamped to [0, 1]
	pub fn confidence(&self) -> f64 {
		(BASE_CONFIDENCE * self.performance.r2).clamp(0.0, 1.0)
	}

	/// Predicts from the declared features; missing ones read as 0
	pub fn predict(&self, property: &Property) -> f64 {
		let row: Array1<f64> = self
			.features
			.iter()
			.map(|f| property.number(f).unwrap_or(0.0))
			.collect();
		self.model.predict_row(row.view())
	}
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricePrediction {
	/// `None` when no regional model could serve the record
	pub predicted_price: Option<f64>,
	pub confidence: f64,
	/// Region resolved from the record
	pub region: Region,
	/// Region whose model produced the estimate
	pub model_region: Option<Region>,
}

/// Region-partitioned price estimator.
///
/// Not internally synchronized: `train` and `predict` must not overlap
/// without external locking.
#[derive(Debug, Clone, Default)]
pub struct PriceEstimator {
	config: PriceModelConfig,
	models: BTreeMap<Region, RegionalModel>,
}

impl PriceEstimator {
	pub fn new(config: PriceModelConfig) -> Self {
		Self {
			config,
			models: BTreeMap::new(),
		}
	}

	pub fn from_models(config: PriceModelConfig, models: BTreeMap<Region, RegionalModel>) -> Self {
		Self { config, models }
	}

	pub fn config(&self) -> &PriceModelConfig {
		&self.config
	}

	pub fn models(&self) -> &BTreeMap<Region, RegionalModel> {
		&self.models
	}

	pub fn model(&self, region: Region) -> Option<&RegionalModel> {
		self.models.get(&region)
	}

	pub fn is_trained(&self) -> bool {
		!self.models.is_empty()
	}

	/// Retrains every regional model from scratch.
	///
	/// Regions below the sample threshold are skipped. Rows without a numeric
	/// `target` neither count toward the threshold nor train.
	pub fn train(&mut self, properties: &[Property], target: &str) -> Result<&BTreeMap<Region, RegionalModel>> {
		ui::info("Training Mauritius price prediction model...");
		self.models.clear();

		let mut by_region: BTreeMap<Region, Vec<&Property>> = BTreeMap::new();
		for property in properties {
			let Some(label) = property.text("region") else { continue };
			let region = Region::parse(label);
			if region == Region::Unknown || property.number(target).is_none() {
				continue;
			}
			by_region.entry(region).or_default().push(property);
		}

		for (region, rows) in by_region {
			if rows.len() < self.config.min_region_samples {
				ui::info(&format!("Not enough data for region {}, skipping", region));
				continue;
			}

			ui::info(&format!("Training model for {} region with {} properties", region, rows.len()));
			if let Some(model) = self.train_region(region, &rows, target)? {
				self.models.insert(region, model);
			}
		}

		if self.models.is_empty() {
			ui::warn("No region had enough data; every prediction will fail softly");
		}

		Ok(&self.models)
	}

	fn train_region(&self, region: Region, rows: &[&Property], target: &str) -> Result<Option<RegionalModel>> {
		let features: Vec<String> = self
			.config
			.features
			.iter()
			.filter(|f| rows.iter().any(|p| p.number(f).is_some()))
			.cloned()
			.collect();

		if features.is_empty() {
			ui::warn(&format!("No price features available for region {}, skipping", region));
			return Ok(None);
		}
		ui::debug(&format!("{} features: {}", region, features.join(", ")));

		let x = Array2::from_shape_fn((rows.len(), features.len()), |(i, j)| {
			rows[i].number(&features[j]).unwrap_or(0.0)
		});
		let y: Vec<f64> = rows.iter().map(|p| p.number(target).unwrap_or(0.0)).collect();

		let (train_idx, test_idx) = train_test_split(rows.len(), self.config.test_size, self.config.seed);
		let x_train = x.select(Axis(0), &train_idx);
		let x_test = x.select(Axis(0), &test_idx);
		let y_train: Vec<f64> = train_idx.iter().map(|&i| y[i]).collect();
		let y_test: Vec<f64> = test_idx.iter().map(|&i| y[i]).collect();

		let mut model = GradientBoostedRegressor::new(self.config.boosting);
		model.fit(&x_train, &y_train)?;

		ui::debug(&format!(
			"{}: {} trees, max depth {}",
			region,
			model.n_trees(),
			model.max_tree_depth()
		));

		let y_pred = model.predict(&x_test);
		let performance = Performance {
			mae: mean_absolute_error(&y_test, &y_pred),
			r2: r2_score(&y_test, &y_pred),
		};

		ui::success(&format!(
			"{} Model Performance: MAE = Rs{:.2}, R² = {:.4}",
			region, performance.mae, performance.r2
		));

		Ok(Some(RegionalModel {
			region,
			model,
			features,
			performance,
			n_samples: rows.len(),
		}))
	}

	/// Price estimate for one record.
	///
	/// Walks the fallback chain (resolved region, then the configured
	/// fallback region). With no model on the chain the result carries no
	/// price and zero confidence.
	pub fn predict(&self, property: &Property) -> PricePrediction {
		let region = resolve_region(property);

		for candidate in fallback_chain(region, self.config.fallback_region) {
			if let Some(model) = self.models.get(&candidate) {
				if candidate != region {
					ui::debug(&format!("No model for {}, using {}", region, candidate));
				}
				return PricePrediction {
					predicted_price: Some(model.predict(property)),
					confidence: model.confidence(),
					region,
					model_region: Some(candidate),
				};
			}
		}

		PricePrediction {
			predicted_price: None,
			confidence: 0.0,
			region,
			model_region: None,
		}
	}

	pub fn predict_many(&self, properties: &[Property]) -> Vec<PricePrediction> {
		properties.iter().map(|p| self.predict(p)).collect()
	}
}
