//! Similar command - listings closest to a reference listing

use anyhow::Result;
use std::path::Path;

use super::{load_listings, print_summaries, saved_or_fitted};
use crate::recommend::summarize;
use crate::ui;

pub fn run(property_id: &str, data: &Path, limit: usize, json: bool) -> Result<()> {
	let properties = load_listings(data)?;
	let recommender = saved_or_fitted(&properties)?;

	ui::info(&format!("Finding listings similar to {}", property_id));
	let matches = recommender.recommend_similar(property_id, limit)?;
	let summaries = summarize(&properties, &matches);

	print_summaries(&format!("Similar to {}", property_id), &summaries, json)
}
