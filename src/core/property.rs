//! Property records and column access

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One listing as a mapping of field names to JSON values.
///
/// Records are schemaless: the feature provider may or may not have filled
/// the engineered columns, so every numeric read is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Property(Map<String, Value>);

impl Property {
	pub fn set(&mut self, field: &str, value: impl Into<Value>) {
		self.0.insert(field.to_string(), value.into());
	}

	/// `property_id` normalized to a string (numbers are rendered as-is)
	pub fn id(&self) -> Option<String> {
		match self.0.get("property_id")? {
			Value::String(s) => Some(s.clone()),
			Value::Number(n) => Some(n.to_string()),
			_ => None,
		}
	}

	pub fn has(&self, field: &str) -> bool {
		!matches!(self.0.get(field), None | Some(Value::Null))
	}

	/// Numeric value of a field; booleans read as 1/0, `null` and absent as `None`
	pub fn number(&self, field: &str) -> Option<f64> {
		match self.0.get(field)? {
			Value::Number(n) => n.as_f64().filter(|v| v.is_finite()),
			Value::Bool(b) => Some(if *b { 1.0 } else { 0.0 }),
			_ => None,
		}
	}

	pub fn text(&self, field: &str) -> Option<&str> {
		match self.0.get(field)? {
			Value::String(s) => Some(s.as_str()),
			_ => None,
		}
	}
}

impl From<Value> for Property {
	fn from(value: Value) -> Self {
		match value {
			Value::Object(map) => Self(map),
			_ => Self::default(),
		}
	}
}

/// True when at least one record carries a numeric value for `field`
pub fn column_present(properties: &[Property], field: &str) -> bool {
	properties.iter().any(|p| p.number(field).is_some())
}

/// Raw column values in record order
pub fn column(properties: &[Property], field: &str) -> Vec<Option<f64>> {
	properties.iter().map(|p| p.number(field)).collect()
}

#[cfg(test)]
mod tests {
	use super::*;
	use serde_json::json;

	#[test]
	fn numeric_reads_accept_numbers_and_booleans() {
		let p = Property::from(json!({
			"property_id": 17,
			"price": 4500000,
			"is_beachfront": true,
			"bathrooms": null,
			"title": "Villa in Tamarin",
		}));

		assert_eq!(p.id().as_deref(), Some("17"));
		assert_eq!(p.number("price"), Some(4_500_000.0));
		assert_eq!(p.number("is_beachfront"), Some(1.0));
		assert_eq!(p.number("bathrooms"), None);
		assert_eq!(p.number("title"), None);
		assert!(!p.has("bathrooms"));
		assert_eq!(p.text("title"), Some("Villa in Tamarin"));
	}

	#[test]
	fn column_presence_needs_one_numeric_cell() {
		let rows = vec![
			Property::from(json!({"price": null})),
			Property::from(json!({"price": 10})),
		];
		assert!(column_present(&rows, "price"));
		assert!(!column_present(&rows, "area_size"));
		assert_eq!(column(&rows, "price"), vec![None, Some(10.0)]);
	}
}
