//! Buyer preferences for preference-based recommendations

use serde::{Deserialize, Serialize};

/// Categorical property type with its fixed integer encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyType {
	Apartment,
	#[default]
	House,
	Villa,
	Land,
}

impl PropertyType {
	/// Case-insensitive parse; unrecognized labels fall back to `House`
	pub fn parse(label: &str) -> Self {
		match label.trim().to_lowercase().as_str() {
			"apartment" => PropertyType::Apartment,
			"house" => PropertyType::House,
			"villa" => PropertyType::Villa,
			"land" => PropertyType::Land,
			_ => PropertyType::House,
		}
	}

	pub fn encoded(&self) -> f64 {
		match self {
			PropertyType::Apartment => 0.0,
			PropertyType::House => 1.0,
			PropertyType::Villa => 2.0,
			PropertyType::Land => 3.0,
		}
	}
}

/// Stated preferences. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub max_price: Option<f64>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_bedrooms: Option<u32>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_bathrooms: Option<u32>,
	/// Free text, mapped through [`PropertyType::parse`]
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub property_type: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub min_area: Option<f64>,
	#[serde(default)]
	pub premium_location: bool,
	#[serde(default)]
	pub beachfront: bool,
}

impl Preferences {
	pub fn property_type(&self) -> PropertyType {
		self.property_type
			.as_deref()
			.map(PropertyType::parse)
			.unwrap_or_default()
	}
}
