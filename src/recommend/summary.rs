//! Display summaries joining matches back onto dataset records

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::Match;
use crate::core::Property;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertySummary {
	pub property_id: String,
	pub title: Option<String>,
	pub price: Option<f64>,
	pub location: Option<String>,
	pub bedrooms: Option<u32>,
	pub bathrooms: Option<f64>,
	pub property_type: Option<String>,
	pub image_url: String,
	pub score: f64,
	pub match_percentage: f64,
}

impl PropertySummary {
	pub fn new(property: &Property, m: &Match) -> Self {
		Self {
			property_id: m.property_id.clone(),
			title: property.text("title").map(str::to_string),
			price: property.number("price"),
			location: property.text("location").map(str::to_string),
			bedrooms: property.number("bedrooms").map(|b| b as u32),
			bathrooms: property.number("bathrooms"),
			property_type: property.text("property_type").map(str::to_string),
			image_url: property.text("image_url").unwrap_or_default().to_string(),
			score: m.score,
			match_percentage: m.match_percentage(),
		}
	}
}

/// Summaries for `matches`, looked up by id in the current dataset.
///
/// Matches whose id is no longer in `properties` are skipped.
pub fn summarize(properties: &[Property], matches: &[Match]) -> Vec<PropertySummary> {
	let by_id: HashMap<String, &Property> = properties
		.iter()
		.filter_map(|p| p.id().map(|id| (id, p)))
		.collect();

	matches
		.iter()
		.filter_map(|m| by_id.get(&m.property_id).map(|p| PropertySummary::new(p, m)))
		.collect()
}
