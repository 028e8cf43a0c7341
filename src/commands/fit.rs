//! Fit command - build and save the similarity model

use anyhow::{Context, Result};
use std::path::Path;
use std::time::Instant;

use super::load_listings;
use crate::config;
use crate::recommend::Recommender;
use crate::storage;
use crate::ui;

pub fn run(data: &Path, output: Option<&Path>) -> Result<()> {
	let start = Instant::now();
	let properties = load_listings(data)?;

	let mut recommender = Recommender::default();
	let features = recommender.fit(&properties)?.to_vec();

	let path = output.map(Path::to_path_buf).unwrap_or_else(config::recommender_path);
	storage::recommender::save(&recommender, &path)
		.with_context(|| format!("Failed to save model to {}", path.display()))?;

	ui::success(&format!(
		"Fitted {} listings on {} features in {:.2}s",
		properties.len(),
		features.len(),
		start.elapsed().as_secs_f32()
	));
	ui::info(&format!("Saved {}", ui::path_link(&path)));

	Ok(())
}
