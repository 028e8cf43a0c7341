#![allow(dead_code)]

use lakaz::config::{BoostingParams, PriceModelConfig};
use lakaz::core::Property;
use serde_json::json;

/// A listing with every recommender feature populated
pub fn listing(id: &str, price: f64, bedrooms: u32, area: f64, location_score: f64, dist_to_beach: f64) -> Property {
	Property::from(json!({
		"property_id": id,
		"title": format!("Listing {}", id),
		"price": price,
		"bedrooms": bedrooms,
		"bathrooms": (bedrooms + 1) / 2,
		"property_type_encoded": (bedrooms % 4) as f64,
		"area_size": area,
		"location_score": location_score,
		"dist_to_beach": dist_to_beach,
		"location": "Grand Baie",
	}))
}

/// `n` varied listings with ids `P0..Pn` priced 1M apart starting at 1M
pub fn listings(n: usize) -> Vec<Property> {
	(0..n)
		.map(|i| {
			listing(
				&format!("P{}", i),
				1_000_000.0 * (i + 1) as f64,
				1 + (i % 5) as u32,
				60.0 + 17.0 * ((i * 7) % 11) as f64,
				30.0 + 6.0 * ((i * 3) % 10) as f64,
				0.1 + 0.4 * ((i * 5) % 9) as f64,
			)
		})
		.collect()
}

/// A priced training row for `region`; price follows area and bedrooms
pub fn priced(region: &str, i: usize) -> Property {
	let bedrooms = 1.0 + (i % 5) as f64;
	let area = 50.0 + 10.0 * (i % 20) as f64;
	let beachfront = (i % 7 == 0) as u8;
	Property::from(json!({
		"property_id": format!("{}-{}", region, i),
		"region": region,
		"price": 1_500_000.0 + 40_000.0 * area + 250_000.0 * bedrooms + 2_000_000.0 * beachfront as f64,
		"bedrooms": bedrooms,
		"bathrooms": 1 + i % 3,
		"property_type_encoded": (i % 4) as f64,
		"area_size": area,
		"dist_to_beach": 0.2 + (i % 9) as f64,
		"dist_to_city": 1.0 + (i % 13) as f64,
		"location_score": 40.0 + (i % 50) as f64,
		"is_beachfront": beachfront,
		"is_tourist_area": i % 2 == 0,
	}))
}

pub fn priced_rows(region: &str, n: usize) -> Vec<Property> {
	(0..n).map(|i| priced(region, i)).collect()
}

/// Default configuration with a short boosting schedule
pub fn quick_price_config() -> PriceModelConfig {
	PriceModelConfig {
		boosting: BoostingParams { n_estimators: 20, ..BoostingParams::default() },
		..PriceModelConfig::default()
	}
}
