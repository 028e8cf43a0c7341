//! Content-based recommender over a weighted, standardized feature space

use ndarray::{Array1, Array2};
use serde::{Deserialize, Serialize};

use super::scaler::StandardScaler;
use super::similarity::{similarities_to, similarity_matrix, top_n};
use crate::config::{
	RecommenderConfig, AVERAGE_BEACH_DISTANCE_KM, AVERAGE_LOCATION_SCORE, BEACHFRONT_DISTANCE_KM,
	BUDGET_TARGET_RATIO, DEFAULT_AREA, DEFAULT_BATHROOMS, DEFAULT_BEDROOMS, PREMIUM_LOCATION_SCORE,
};
use crate::core::property::{column, column_present};
use crate::core::{Preferences, Property};
use crate::error::{Error, Result};
use crate::ui;

/// A ranked recommendation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
	/// Row of the listing in the fitted population
	pub index: usize,
	pub property_id: String,
	pub score: f64,
}

impl Match {
	/// Display percentage: score * 100 clamped to [0, 100], one decimal
	pub fn match_percentage(&self) -> f64 {
		((self.score * 100.0).clamp(0.0, 100.0) * 10.0).round() / 10.0
	}
}

/// Everything produced by `fit`; this is also the persisted artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FittedModel {
	pub version: String,
	pub created_at: String,
	/// Features actually used, in column order
	pub features: Vec<String>,
	/// Weight per used feature, same order as `features`
	pub weights: Vec<(String, f64)>,
	pub property_ids: Vec<String>,
	/// Standardized and weighted, one row per property
	pub feature_matrix: Array2<f64>,
	pub similarity: Array2<f64>,
	pub scaler: StandardScaler,
	/// Unscaled columns kept for hard filters
	pub raw_price: Vec<Option<f64>>,
	pub raw_bedrooms: Vec<Option<f64>>,
	/// Median of the fitted price column, before scaling
	pub price_median: Option<f64>,
}

/// Similarity engine.
///
/// Not internally synchronized: concurrent `fit` and queries need a single
/// writer or external locking.
#[derive(Debug, Clone, Default)]
pub struct Recommender {
	config: RecommenderConfig,
	model: Option<FittedModel>,
}

impl Recommender {
	pub fn new(config: RecommenderConfig) -> Self {
		Self { config, model: None }
	}

	pub fn from_fitted(config: RecommenderConfig, model: FittedModel) -> Self {
		Self { config, model: Some(model) }
	}

	pub fn fitted(&self) -> Result<&FittedModel> {
		self.model.as_ref().ok_or(Error::NotFitted)
	}

	/// Rebuilds the feature space and similarity matrix from scratch.
	///
	/// Returns the features actually used. Configured features with no
	/// numeric values in `properties` are dropped, not defaulted.
	pub fn fit(&mut self, properties: &[Property]) -> Result<&[String]> {
		if properties.is_empty() {
			return Err(Error::InvalidInput("cannot fit on an empty dataset".into()));
		}

		let property_ids = properties
			.iter()
			.enumerate()
			.map(|(i, p)| {
				p.id().ok_or_else(|| Error::InvalidInput(format!("record {} has no property_id", i)))
			})
			.collect::<Result<Vec<_>>>()?;

		let weights: Vec<(String, f64)> = self
			.config
			.weights
			.iter()
			.filter(|(name, _)| {
				let present = column_present(properties, name);
				if !present {
					ui::debug(&format!("Feature '{}' not in dataset, dropped", name));
				}
				present
			})
			.cloned()
			.collect();

		if weights.is_empty() {
			return Err(Error::Configuration(
				"none of the configured features are present in the dataset".into(),
			));
		}

		let features: Vec<String> = weights.iter().map(|(name, _)| name.clone()).collect();
		let raw = raw_matrix(properties, &features);
		let scaler = StandardScaler::fit(&raw);
		let mut feature_matrix = scaler.transform(&raw);
		for (j, (_, weight)) in weights.iter().enumerate() {
			feature_matrix.column_mut(j).mapv_inplace(|v| v * weight);
		}

		let similarity = similarity_matrix(&feature_matrix);

		let price_median = features
			.iter()
			.position(|f| f == "price")
			.and_then(|j| median(raw.column(j).iter().copied()));

		ui::info(&format!(
			"Recommender trained on {} properties using {} features",
			properties.len(),
			features.len()
		));
		ui::debug(&format!("Features: {}", features.join(", ")));

		self.model = Some(FittedModel {
			version: env!("CARGO_PKG_VERSION").to_string(),
			created_at: chrono::Utc::now().to_rfc3339(),
			features,
			weights,
			property_ids,
			feature_matrix,
			similarity,
			scaler,
			raw_price: column(properties, "price"),
			raw_bedrooms: column(properties, "bedrooms"),
			price_median,
		});

		Ok(&self.fitted()?.features)
	}

	/// The `n` listings most similar to `property_id`, excluding itself
	pub fn recommend_similar(&self, property_id: &str, n: usize) -> Result<Vec<Match>> {
		let model = self.fitted()?;
		let idx = model
			.property_ids
			.iter()
			.position(|id| id == property_id)
			.ok_or_else(|| Error::NotFound { property_id: property_id.to_string() })?;

		let row = model.similarity.row(idx);
		let candidates = row.iter().enumerate().filter(|(j, _)| *j != idx).map(|(j, s)| (j, *s));

		Ok(top_n(candidates, n)
			.into_iter()
			.map(|(j, score)| model.to_match(j, score))
			.collect())
	}

	/// Listings closest to a virtual listing built from `preferences`.
	///
	/// Budget and bedroom limits are hard filters on the raw values; listings
	/// that fail them never appear, so fewer than `n` results may come back.
	pub fn recommend_from_preferences(&self, preferences: &Preferences, n: usize) -> Result<Vec<Match>> {
		let model = self.fitted()?;
		let query = self.virtual_vector(preferences)?;
		let scores = similarities_to(&model.feature_matrix, query.view());

		let candidates = scores
			.into_iter()
			.enumerate()
			.filter(|(i, _)| model.passes_filters(*i, preferences));

		Ok(top_n(candidates, n)
			.into_iter()
			.map(|(i, score)| model.to_match(i, score))
			.collect())
	}

	/// Unscaled virtual listing in fitted column order
	pub fn virtual_listing(&self, preferences: &Preferences) -> Result<Array1<f64>> {
		let model = self.fitted()?;
		Ok(model
			.features
			.iter()
			.enumerate()
			.map(|(j, feature)| match feature.as_str() {
				"price" => match preferences.max_price {
					Some(max) => max * BUDGET_TARGET_RATIO,
					None => model.price_median.unwrap_or(model.scaler.mean()[j]),
				},
				"bedrooms" => preferences.min_bedrooms.map_or(DEFAULT_BEDROOMS, f64::from),
				"bathrooms" => preferences.min_bathrooms.map_or(DEFAULT_BATHROOMS, f64::from),
				"property_type_encoded" => preferences.property_type().encoded(),
				"area_size" => preferences.min_area.unwrap_or(DEFAULT_AREA),
				"location_score" if preferences.premium_location => PREMIUM_LOCATION_SCORE,
				"location_score" => AVERAGE_LOCATION_SCORE,
				"dist_to_beach" if preferences.beachfront => BEACHFRONT_DISTANCE_KM,
				"dist_to_beach" => AVERAGE_BEACH_DISTANCE_KM,
				// No preference rule: sit at the population mean
				_ => model.scaler.mean()[j],
			})
			.collect())
	}

	/// Virtual listing standardized with the fitted scaler, then weighted
	fn virtual_vector(&self, preferences: &Preferences) -> Result<Array1<f64>> {
		let model = self.fitted()?;
		let raw = self.virtual_listing(preferences)?;
		let mut scaled = model.scaler.transform_row(raw.view());
		for (v, (_, weight)) in scaled.iter_mut().zip(model.weights.iter()) {
			*v *= weight;
		}
		Ok(scaled)
	}
}

impl FittedModel {
	/// True when this model was fitted on `properties`, by id and in order
	pub fn fitted_on(&self, properties: &[Property]) -> bool {
		self.property_ids.len() == properties.len()
			&& self
				.property_ids
				.iter()
				.zip(properties)
				.all(|(id, p)| p.id().as_deref() == Some(id.as_str()))
	}

	fn to_match(&self, index: usize, score: f64) -> Match {
		Match {
			index,
			property_id: self.property_ids[index].clone(),
			score,
		}
	}

	fn passes_filters(&self, index: usize, preferences: &Preferences) -> bool {
		if let Some(max_price) = preferences.max_price {
			if !self.raw_price[index].is_some_and(|price| price <= max_price) {
				return false;
			}
		}
		if let Some(min_bedrooms) = preferences.min_bedrooms {
			if !self.raw_bedrooms[index].is_some_and(|beds| beds >= f64::from(min_bedrooms)) {
				return false;
			}
		}
		true
	}
}

/// Raw feature matrix; missing cells take the column mean of present values
fn raw_matrix(properties: &[Property], features: &[String]) -> Array2<f64> {
	let mut raw = Array2::<f64>::zeros((properties.len(), features.len()));
	for (j, feature) in features.iter().enumerate() {
		let values = column(properties, feature);
		let present: Vec<f64> = values.iter().flatten().copied().collect();
		let fill = present.iter().sum::<f64>() / present.len().max(1) as f64;
		for (i, value) in values.iter().enumerate() {
			raw[[i, j]] = value.unwrap_or(fill);
		}
	}
	raw
}

fn median(values: impl Iterator<Item = f64>) -> Option<f64> {
	let mut sorted: Vec<f64> = values.collect();
	if sorted.is_empty() {
		return None;
	}
	sorted.sort_by(|a, b| a.total_cmp(b));
	let mid = sorted.len() / 2;
	if sorted.len() % 2 == 0 {
		Some((sorted[mid - 1] + sorted[mid]) / 2.0)
	} else {
		Some(sorted[mid])
	}
}
