//! Suggest command - listings matching buyer preferences

use anyhow::Result;
use std::path::Path;

use super::{load_listings, print_summaries, saved_or_fitted};
use crate::core::Preferences;
use crate::recommend::summarize;
use crate::ui;

pub fn run(data: &Path, preferences: &Preferences, limit: usize, json: bool) -> Result<()> {
	let properties = load_listings(data)?;
	let recommender = saved_or_fitted(&properties)?;

	if let Some(max_price) = preferences.max_price {
		ui::debug(&format!("Budget ceiling: {:.0}", max_price));
	}
	ui::debug(&format!("Looking for: {:?}", preferences.property_type()));

	let matches = recommender.recommend_from_preferences(preferences, limit)?;
	let summaries = summarize(&properties, &matches);

	print_summaries("Suggested listings", &summaries, json)
}
