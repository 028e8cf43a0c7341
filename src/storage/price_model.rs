//! Regional price model artifacts.
//!
//! Layout for a prefix `models/price_model`:
//! - `models/price_model_{region}.msgpack`, one per trained region
//! - `models/price_model_metadata.json`, the index of regions, features and metrics

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{PriceModelConfig, METADATA_SUFFIX, MODEL_EXT};
use crate::core::Region;
use crate::error::Result;
use crate::pricing::{Performance, PriceEstimator, RegionalModel};
use crate::ui;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PriceModelMetadata {
	pub version: String,
	pub trained_at: String,
	pub regions: Vec<Region>,
	pub features: BTreeMap<Region, Vec<String>>,
	pub performance: BTreeMap<Region, Performance>,
}

impl PriceModelMetadata {
	pub fn describe(estimator: &PriceEstimator) -> Self {
		let models = estimator.models();
		Self {
			version: env!("CARGO_PKG_VERSION").to_string(),
			trained_at: chrono::Utc::now().to_rfc3339(),
			regions: models.keys().copied().collect(),
			features: models.iter().map(|(r, m)| (*r, m.features.clone())).collect(),
			performance: models.iter().map(|(r, m)| (*r, m.performance)).collect(),
		}
	}
}

fn with_suffix(prefix: &Path, suffix: &str) -> PathBuf {
	let mut name = prefix.as_os_str().to_os_string();
	name.push(format!("_{}", suffix));
	PathBuf::from(name)
}

pub fn bundle_path(prefix: &Path, region: Region) -> PathBuf {
	with_suffix(prefix, &format!("{}.{}", region.slug(), MODEL_EXT))
}

pub fn metadata_path(prefix: &Path) -> PathBuf {
	with_suffix(prefix, METADATA_SUFFIX)
}

/// Write every regional bundle, then the metadata index.
///
/// Bundles left over from regions this estimator has no model for are removed.
pub fn save(estimator: &PriceEstimator, prefix: &Path) -> Result<()> {
	if let Some(parent) = prefix.parent() {
		if !parent.as_os_str().is_empty() {
			fs::create_dir_all(parent)?;
		}
	}

	for region in Region::TRAINABLE {
		let path = bundle_path(prefix, region);
		match estimator.model(region) {
			Some(model) => fs::write(&path, rmp_serde::to_vec(model)?)?,
			None if path.exists() => fs::remove_file(&path)?,
			None => {}
		}
	}

	let metadata = PriceModelMetadata::describe(estimator);
	fs::write(metadata_path(prefix), serde_json::to_vec_pretty(&metadata)?)?;

	Ok(())
}

/// Remove every bundle and the metadata index under `prefix`. Returns how many files were removed.
pub fn clear(prefix: &Path) -> Result<usize> {
	let mut removed = 0;
	let paths = Region::TRAINABLE
		.iter()
		.map(|r| bundle_path(prefix, *r))
		.chain(std::iter::once(metadata_path(prefix)));

	for path in paths {
		if path.exists() {
			fs::remove_file(&path)?;
			removed += 1;
		}
	}
	Ok(removed)
}

fn read_metadata(prefix: &Path) -> Result<PriceModelMetadata> {
	let bytes = fs::read(metadata_path(prefix))?;
	Ok(serde_json::from_slice(&bytes)?)
}

fn read_bundle(path: &Path) -> Result<RegionalModel> {
	let bytes = fs::read(path)?;
	Ok(rmp_serde::from_slice(&bytes)?)
}

/// Rebuild an estimator from disk.
///
/// Regions come from the metadata index; if the index is missing or
/// unreadable every known region is probed directly. Bundles that are absent
/// are skipped and bundles that fail to decode are skipped with a warning.
pub fn load(prefix: &Path, config: PriceModelConfig) -> PriceEstimator {
	let regions = match read_metadata(prefix) {
		Ok(metadata) => metadata.regions,
		Err(e) => {
			ui::debug(&format!("No usable price model index ({}), probing regions", e));
			Region::TRAINABLE.to_vec()
		}
	};

	let mut models = BTreeMap::new();
	for region in regions {
		let path = bundle_path(prefix, region);
		if !path.exists() {
			continue;
		}
		match read_bundle(&path) {
			Ok(model) => {
				models.insert(region, model);
			}
			Err(e) => ui::warn(&format!("Skipping {} price model: {}", region, e)),
		}
	}

	ui::debug(&format!("Loaded {} regional price models", models.len()));
	PriceEstimator::from_models(config, models)
}
