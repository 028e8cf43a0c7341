mod common;

use common::{listing, listings};
use lakaz::core::{Preferences, Property};
use lakaz::recommend::{summarize, Recommender};
use lakaz::Error;
use serde_json::json;

fn fitted(properties: &[Property]) -> Recommender {
	let mut recommender = Recommender::default();
	recommender.fit(properties).expect("fit");
	recommender
}

#[test]
fn similar_listings_exclude_the_reference_and_respect_n() {
	let properties = listings(12);
	let recommender = fitted(&properties);

	let matches = recommender.recommend_similar("P3", 5).expect("recommend");
	assert_eq!(matches.len(), 5);
	assert!(matches.iter().all(|m| m.property_id != "P3"));
	assert!(matches.windows(2).all(|w| w[0].score >= w[1].score));

	let all = recommender.recommend_similar("P3", 50).expect("recommend");
	assert_eq!(all.len(), 11);
}

#[test]
fn similarity_matrix_is_symmetric_with_unit_diagonal() {
	let recommender = fitted(&listings(8));
	let model = recommender.fitted().expect("fitted");

	for i in 0..8 {
		assert_eq!(model.similarity[[i, i]], 1.0);
		for j in 0..8 {
			assert!((model.similarity[[i, j]] - model.similarity[[j, i]]).abs() < 1e-12);
			assert!(model.similarity[[i, j]] <= 1.0 && model.similarity[[i, j]] >= -1.0);
		}
	}
}

#[test]
fn budget_is_a_hard_filter() {
	let properties = listings(10);
	let recommender = fitted(&properties);

	let preferences = Preferences { max_price: Some(5_000_000.0), ..Preferences::default() };
	let matches = recommender.recommend_from_preferences(&preferences, 10).expect("recommend");

	assert_eq!(matches.len(), 5);
	for summary in summarize(&properties, &matches) {
		assert!(summary.price.expect("price") <= 5_000_000.0);
	}
}

#[test]
fn bedroom_minimum_is_a_hard_filter() {
	let properties = listings(15);
	let recommender = fitted(&properties);

	let preferences = Preferences { min_bedrooms: Some(4), ..Preferences::default() };
	let matches = recommender.recommend_from_preferences(&preferences, 20).expect("recommend");

	assert!(!matches.is_empty());
	for summary in summarize(&properties, &matches) {
		assert!(summary.bedrooms.expect("bedrooms") >= 4);
	}
}

#[test]
fn listing_without_bedrooms_fails_the_bedroom_filter() {
	let mut properties = listings(6);
	properties.push(Property::from(json!({
		"property_id": "NO-BEDS",
		"price": 2_000_000.0,
		"area_size": 90.0,
		"location_score": 60.0,
	})));
	let recommender = fitted(&properties);

	let preferences = Preferences { min_bedrooms: Some(1), ..Preferences::default() };
	let matches = recommender.recommend_from_preferences(&preferences, 20).expect("recommend");

	assert_eq!(matches.len(), 6);
	assert!(matches.iter().all(|m| m.property_id != "NO-BEDS"));
}

#[test]
fn refitting_the_same_data_is_idempotent() {
	let properties = listings(9);
	let mut recommender = Recommender::default();

	recommender.fit(&properties).expect("first fit");
	let first = recommender.fitted().expect("fitted").clone();
	recommender.fit(&properties).expect("second fit");
	let second = recommender.fitted().expect("fitted");

	assert_eq!(first.features, second.features);
	assert_eq!(first.feature_matrix, second.feature_matrix);
	assert_eq!(first.similarity, second.similarity);
}

#[test]
fn preferences_describing_a_listing_rank_it_first() {
	let mut properties = listings(10);
	// Villa, 3 bedrooms, premium beachfront, 4M
	let mut target = listing("TARGET", 4_000_000.0, 3, 180.0, 80.0, 0.2);
	target.set("bathrooms", 2);
	target.set("property_type_encoded", 2.0);
	properties.push(target);
	let recommender = fitted(&properties);

	let preferences = Preferences {
		max_price: Some(5_000_000.0),
		min_bedrooms: Some(3),
		min_bathrooms: Some(2),
		property_type: Some("Villa".to_string()),
		min_area: Some(180.0),
		premium_location: true,
		beachfront: true,
	};
	let matches = recommender.recommend_from_preferences(&preferences, 3).expect("recommend");

	assert_eq!(matches[0].property_id, "TARGET");
	assert!(matches[0].score > 0.999);
	assert!((matches[0].match_percentage() - 100.0).abs() < 0.1);
}

#[test]
fn absent_features_are_dropped_from_the_fit() {
	let properties: Vec<Property> = (0..4)
		.map(|i| Property::from(json!({"property_id": i, "price": 1e6 * (i + 1) as f64, "bedrooms": i + 1})))
		.collect();
	let mut recommender = Recommender::default();

	let features = recommender.fit(&properties).expect("fit").to_vec();
	assert_eq!(features, vec!["price".to_string(), "bedrooms".to_string()]);
	assert_eq!(recommender.fitted().expect("fitted").property_ids[2], "2");
}

#[test]
fn unknown_reference_listing_is_not_found() {
	let recommender = fitted(&listings(4));
	let err = recommender.recommend_similar("P99", 3).unwrap_err();
	assert!(matches!(err, Error::NotFound { ref property_id } if property_id == "P99"));
}

#[test]
fn single_listing_has_no_neighbours() {
	let recommender = fitted(&listings(1));
	assert!(recommender.recommend_similar("P0", 5).expect("recommend").is_empty());
}

#[test]
fn zero_results_requested_gives_empty_lists() {
	let recommender = fitted(&listings(5));

	assert!(recommender.recommend_similar("P1", 0).expect("similar").is_empty());
	let preferences = Preferences::default();
	assert!(recommender.recommend_from_preferences(&preferences, 0).expect("preferences").is_empty());
}
