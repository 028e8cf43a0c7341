//! Property dataset and query loading

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::region::{district_for_location, is_tourist_district, region_for_district};
use crate::core::Property;
use crate::error::Result;

/// One record or a sequence of records, as found in a query file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Records {
	One(Property),
	Many(Vec<Property>),
}

/// Load a JSON array of property objects
pub fn load_dataset(path: &Path) -> Result<Vec<Property>> {
	let bytes = fs::read(path)?;
	Ok(serde_json::from_slice(&bytes)?)
}

pub fn load_records(path: &Path) -> Result<Records> {
	let bytes = fs::read(path)?;
	Ok(serde_json::from_slice(&bytes)?)
}

/// Fill `district`, `region` and `is_tourist_area` from `location` text on
/// records that carry neither a district nor a region. Returns how many
/// records were filled.
pub fn fill_location_fields(properties: &mut [Property]) -> usize {
	let mut filled = 0;
	for property in properties.iter_mut() {
		if property.has("district") || property.has("region") {
			continue;
		}
		let Some(location) = property.text("location") else { continue };

		let district = district_for_location(location).unwrap_or("Unknown");
		property.set("district", district);
		property.set("region", region_for_district(district).as_str());
		if !property.has("is_tourist_area") {
			property.set("is_tourist_area", is_tourist_district(district));
		}
		filled += 1;
	}
	filled
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn fills_region_from_location_text() {
		let mut rows = vec![
			Property::from(json!({"location": "Sea view flat, Flic en Flac"})),
			Property::from(json!({"location": "Grand Baie", "region": "East"})),
			Property::from(json!({"location": "Nowhere"})),
		];

		assert_eq!(fill_location_fields(&mut rows), 2);
		assert_eq!(rows[0].text("district"), Some("Black River"));
		assert_eq!(rows[0].text("region"), Some("West"));
		assert_eq!(rows[0].number("is_tourist_area"), Some(1.0));
		assert_eq!(rows[1].text("region"), Some("East"));
		assert_eq!(rows[2].text("region"), Some("Unknown"));
	}

	#[test]
	fn records_accept_object_or_array() {
		let one: Records = serde_json::from_str(r#"{"region": "North"}"#).expect("object");
		assert!(matches!(one, Records::One(_)));
		let many: Records = serde_json::from_str(r#"[{"region": "North"}, {}]"#).expect("array");
		assert!(matches!(many, Records::Many(ref v) if v.len() == 2));
	}
}
