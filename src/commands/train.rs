//! Train command - fit and save regional price models

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;
use std::time::Instant;

use super::load_listings;
use crate::config;
use crate::pricing::PriceEstimator;
use crate::storage;
use crate::ui;

pub fn run(data: &Path, target: &str, output: Option<&Path>) -> Result<()> {
	let start = Instant::now();
	let properties = load_listings(data)?;

	let mut estimator = PriceEstimator::default();
	estimator.train(&properties, target)?;

	let prefix = output.map(Path::to_path_buf).unwrap_or_else(config::price_model_prefix);

	if !estimator.is_trained() {
		let removed = storage::price_model::clear(&prefix)
			.with_context(|| format!("Failed to remove old price models at {}", prefix.display()))?;
		if removed > 0 {
			ui::warn(&format!("Removed {} price model files from a previous run", removed));
		}
		ui::warn("Nothing to save");
		return Ok(());
	}

	storage::price_model::save(&estimator, &prefix)
		.with_context(|| format!("Failed to save price models to {}", prefix.display()))?;

	ui::header("Regional models");
	for (region, model) in estimator.models() {
		println!(
			"  {:<8} {:>5} listings  MAE {}  R² {}",
			region.as_str().bright_blue(),
			model.n_samples,
			format!("{:.2}", model.performance.mae).yellow(),
			format!("{:.3}", model.performance.r2).yellow()
		);
	}

	ui::success(&format!(
		"Trained {} regional models in {:.2}s",
		estimator.models().len(),
		start.elapsed().as_secs_f32()
	));
	ui::info(&format!("Saved under {}", ui::path_link(&storage::price_model::metadata_path(&prefix))));

	Ok(())
}
