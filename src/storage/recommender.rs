//! Recommender artifact format and I/O

use std::fs;
use std::path::Path;

use crate::config::RecommenderConfig;
use crate::error::Result;
use crate::recommend::{FittedModel, Recommender};

/// Save a fitted recommender as a single MessagePack artifact
pub fn save(recommender: &Recommender, path: &Path) -> Result<()> {
	let model = recommender.fitted()?;

	if let Some(parent) = path.parent() {
		fs::create_dir_all(parent)?;
	}

	let bytes = rmp_serde::to_vec(model)?;
	fs::write(path, bytes)?;

	Ok(())
}

/// Load a recommender; its configuration is the stored weight mapping
pub fn load(path: &Path) -> Result<Recommender> {
	let bytes = fs::read(path)?;
	let model: FittedModel = rmp_serde::from_slice(&bytes)?;

	if model.version != env!("CARGO_PKG_VERSION") {
		crate::ui::debug(&format!("Recommender artifact written by v{}", model.version));
	}

	let config = RecommenderConfig::new(model.weights.clone());
	Ok(Recommender::from_fitted(config, model))
}
