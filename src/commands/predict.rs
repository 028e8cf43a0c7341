//! Predict command - price estimates for one record or many

use anyhow::{Context, Result};
use std::path::Path;

use crate::config::{self, PriceModelConfig};
use crate::storage::{self, Records};
use crate::ui;

pub fn run(input: &Path, models: Option<&Path>) -> Result<()> {
	let records = storage::load_records(input)
		.with_context(|| format!("Failed to read query from {}", input.display()))?;

	let prefix = models.map(Path::to_path_buf).unwrap_or_else(config::price_model_prefix);
	let estimator = storage::price_model::load(&prefix, PriceModelConfig::default());

	if !estimator.is_trained() {
		ui::warn(&format!("No price models found at {}", prefix.display()));
	}

	let output = match records {
		Records::One(property) => serde_json::to_string_pretty(&estimator.predict(&property))?,
		Records::Many(properties) => serde_json::to_string_pretty(&estimator.predict_many(&properties))?,
	};
	println!("{}", output);

	Ok(())
}
