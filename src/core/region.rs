//! Regions of Mauritius and the lookup tables that resolve them

use serde::{Deserialize, Serialize};
use std::fmt;

use super::Property;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Region {
	North,
	East,
	Central,
	West,
	South,
	Unknown,
}

impl Region {
	/// Regions that can carry a price model, in probing order
	pub const TRAINABLE: [Region; 5] = [
		Region::North,
		Region::East,
		Region::Central,
		Region::West,
		Region::South,
	];

	/// Case-insensitive parse; anything outside the enumeration is `Unknown`
	pub fn parse(label: &str) -> Self {
		match label.trim().to_lowercase().as_str() {
			"north" => Region::North,
			"east" => Region::East,
			"central" => Region::Central,
			"west" => Region::West,
			"south" => Region::South,
			_ => Region::Unknown,
		}
	}

	pub fn as_str(&self) -> &'static str {
		match self {
			Region::North => "North",
			Region::East => "East",
			Region::Central => "Central",
			Region::West => "West",
			Region::South => "South",
			Region::Unknown => "Unknown",
		}
	}

	/// Lowercase slug used in artifact file names
	pub fn slug(&self) -> String {
		self.as_str().to_lowercase()
	}
}

impl fmt::Display for Region {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

const DISTRICT_REGIONS: &[(&str, Region)] = &[
	("Port Louis", Region::North),
	("Pamplemousses", Region::North),
	("Rivière du Rempart", Region::North),
	("Flacq", Region::East),
	("Grand Port", Region::East),
	("Moka", Region::Central),
	("Plaines Wilhems", Region::Central),
	("Black River", Region::West),
	("Savanne", Region::South),
];

// First matching group wins, so the order here is the precedence order.
const REGION_KEYWORDS: &[(Region, &[&str])] = &[
	(Region::North, &["port louis", "grand baie", "pamplemousses", "triolet", "grand gaube"]),
	(Region::East, &["flacq", "belle mare", "trou d'eau douce", "poste lafayette"]),
	(Region::Central, &["curepipe", "quatre bornes", "vacoas", "moka", "rose hill"]),
	(Region::West, &["flic en flac", "tamarin", "black river", "rivière noire"]),
	(Region::South, &["mahebourg", "souillac", "blue bay", "savanne"]),
];

const DISTRICT_MENTIONS: &[(&[&str], &str)] = &[
	(&["port louis"], "Port Louis"),
	(&["plaines wilhems", "curepipe", "quatre bornes"], "Plaines Wilhems"),
	(&["black river", "rivière noire"], "Black River"),
	(&["flacq"], "Flacq"),
	(&["grand port"], "Grand Port"),
	(&["moka"], "Moka"),
	(&["pamplemousses"], "Pamplemousses"),
	(&["rivière du rempart"], "Rivière du Rempart"),
	(&["savanne"], "Savanne"),
];

const PLACE_DISTRICTS: &[(&str, &str)] = &[
	("grand baie", "Rivière du Rempart"),
	("flic en flac", "Black River"),
	("tamarin", "Black River"),
	("trou aux biches", "Pamplemousses"),
	("belle mare", "Flacq"),
	("mahebourg", "Grand Port"),
	("rose hill", "Plaines Wilhems"),
	("beau bassin", "Plaines Wilhems"),
	("phoenix", "Plaines Wilhems"),
	("vacoas", "Plaines Wilhems"),
	("ebene", "Plaines Wilhems"),
	("triolet", "Pamplemousses"),
	("goodlands", "Rivière du Rempart"),
	("surinam", "Savanne"),
	("souillac", "Savanne"),
	("chemin grenier", "Savanne"),
	("le morne", "Black River"),
	("trou d'eau douce", "Flacq"),
];

const TOURIST_DISTRICTS: &[&str] = &["Black River", "Rivière du Rempart", "Flacq"];

/// Exact district lookup; districts outside the table are `Unknown`
pub fn region_for_district(district: &str) -> Region {
	DISTRICT_REGIONS
		.iter()
		.find(|(name, _)| *name == district)
		.map(|(_, region)| *region)
		.unwrap_or(Region::Unknown)
}

/// Keyword match on free-text location, defaulting to Central
pub fn region_for_location(location: &str) -> Region {
	let location = location.to_lowercase();
	REGION_KEYWORDS
		.iter()
		.find(|(_, places)| places.iter().any(|place| location.contains(place)))
		.map(|(region, _)| *region)
		.unwrap_or(Region::Central)
}

/// Maps free-text location to one of the nine districts, if recognizable
pub fn district_for_location(location: &str) -> Option<&'static str> {
	let location = location.to_lowercase();

	if let Some((_, district)) = DISTRICT_MENTIONS
		.iter()
		.find(|(mentions, _)| mentions.iter().any(|m| location.contains(m)))
	{
		return Some(district);
	}

	PLACE_DISTRICTS
		.iter()
		.find(|(place, _)| location.contains(place))
		.map(|(_, district)| *district)
}

pub fn is_tourist_district(district: &str) -> bool {
	TOURIST_DISTRICTS.contains(&district)
}

/// Region for a record: explicit `region`, then `district`, then `location` keywords
pub fn resolve_region(property: &Property) -> Region {
	if let Some(region) = property.text("region") {
		return Region::parse(region);
	}
	if let Some(district) = property.text("district") {
		return region_for_district(district);
	}
	if let Some(location) = property.text("location") {
		return region_for_location(location);
	}
	Region::Central
}

/// Ordered list of regions whose model may serve a prediction
pub fn fallback_chain(resolved: Region, fallback: Region) -> Vec<Region> {
	let mut chain = vec![resolved];
	if fallback != resolved {
		chain.push(fallback);
	}
	chain
}
