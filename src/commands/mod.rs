//! # Command Implementations
//!
//! Each submodule handles one CLI command (fit, similar, suggest, etc.).

pub mod fit;
pub mod predict;
pub mod similar;
pub mod suggest;
pub mod train;

use anyhow::{Context, Result};
use colored::*;
use std::path::Path;

use crate::config;
use crate::core::Property;
use crate::recommend::{PropertySummary, Recommender};
use crate::storage;
use crate::ui;

/// Load a listings dataset and fill region fields derived from location text
pub(crate) fn load_listings(path: &Path) -> Result<Vec<Property>> {
	let mut properties = storage::load_dataset(path)
		.with_context(|| format!("Failed to read listings from {}", path.display()))?;

	let filled = storage::fill_location_fields(&mut properties);
	if filled > 0 {
		ui::debug(&format!("Derived district and region for {} listings", filled));
	}

	ui::debug(&format!("Loaded {} listings from {}", properties.len(), path.display()));
	Ok(properties)
}

/// The saved recommender if it was fitted on exactly `properties`, otherwise a fresh fit
pub(crate) fn saved_or_fitted(properties: &[Property]) -> Result<Recommender> {
	let path = config::recommender_path();

	if path.exists() {
		match storage::recommender::load(&path) {
			Ok(recommender) if recommender.fitted().is_ok_and(|m| m.fitted_on(properties)) => {
				ui::debug(&format!("Using saved model: {}", path.display()));
				return Ok(recommender);
			}
			Ok(_) => ui::warn(&format!(
				"Saved model {} was fitted on different listings, refitting",
				path.display()
			)),
			Err(e) => ui::warn(&format!("Ignoring unreadable model {}: {}", path.display(), e)),
		}
	} else {
		ui::debug("No saved model, fitting on the dataset");
	}

	let mut recommender = Recommender::default();
	recommender.fit(properties)?;
	Ok(recommender)
}

fn format_price(price: f64) -> String {
	let digits = format!("{:.0}", price.abs());
	let mut grouped = String::new();
	for (i, c) in digits.chars().enumerate() {
		if i > 0 && (digits.len() - i) % 3 == 0 {
			grouped.push(',');
		}
		grouped.push(c);
	}
	let sign = if price < 0.0 && digits != "0" { "-" } else { "" };
	format!("Rs {}{}", sign, grouped)
}

pub(crate) fn print_summaries(title: &str, summaries: &[PropertySummary], json: bool) -> Result<()> {
	if json {
		println!("{}", serde_json::to_string_pretty(summaries)?);
		return Ok(());
	}

	if summaries.is_empty() {
		ui::warn("No matching listings");
		return Ok(());
	}

	ui::header(title);
	for (i, s) in summaries.iter().enumerate() {
		let name = s.title.as_deref().unwrap_or(&s.property_id);
		println!(
			"{:>3}. {} {} {}",
			i + 1,
			ui::score_color(s.score),
			name.bright_white().bold(),
			format!("[{}]", s.property_id).dimmed()
		);

		let mut details = Vec::new();
		if let Some(price) = s.price {
			details.push(format_price(price));
		}
		if let Some(kind) = &s.property_type {
			details.push(kind.clone());
		}
		if let Some(beds) = s.bedrooms {
			details.push(format!("{} bd", beds));
		}
		if let Some(baths) = s.bathrooms {
			details.push(format!("{} ba", baths));
		}
		if let Some(location) = &s.location {
			details.push(location.clone());
		}
		if !details.is_empty() {
			println!("     {}", details.join(" · ").dimmed());
		}
	}

	Ok(())
}
