mod common;

use common::{listings, priced, priced_rows, quick_price_config};
use lakaz::config::PriceModelConfig;
use lakaz::core::Region;
use lakaz::pricing::PriceEstimator;
use lakaz::recommend::Recommender;
use lakaz::storage;
use std::fs;

#[test]
fn recommender_round_trips_through_disk() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("nested").join("recommender.msgpack");

	let mut recommender = Recommender::default();
	recommender.fit(&listings(10)).expect("fit");
	storage::recommender::save(&recommender, &path).expect("save");

	let loaded = storage::recommender::load(&path).expect("load");
	assert_eq!(loaded.fitted().expect("fitted"), recommender.fitted().expect("fitted"));
	assert_eq!(
		loaded.recommend_similar("P4", 3).expect("loaded"),
		recommender.recommend_similar("P4", 3).expect("original")
	);
}

#[test]
fn saving_an_unfitted_recommender_fails() {
	let dir = tempfile::tempdir().expect("tempdir");
	let path = dir.path().join("recommender.msgpack");

	assert!(storage::recommender::save(&Recommender::default(), &path).is_err());
	assert!(!path.exists());
}

fn trained_pair() -> PriceEstimator {
	let mut rows = priced_rows("North", 100);
	rows.extend(priced_rows("Central", 100));
	let mut estimator = PriceEstimator::new(quick_price_config());
	estimator.train(&rows, "price").expect("train");
	estimator
}

#[test]
fn price_models_round_trip_with_metadata() {
	let dir = tempfile::tempdir().expect("tempdir");
	let prefix = dir.path().join("price_model");
	let estimator = trained_pair();

	storage::price_model::save(&estimator, &prefix).expect("save");
	assert!(dir.path().join("price_model_north.msgpack").exists());
	assert!(dir.path().join("price_model_central.msgpack").exists());

	let metadata: storage::PriceModelMetadata =
		serde_json::from_slice(&fs::read(dir.path().join("price_model_metadata.json")).expect("read")).expect("json");
	assert_eq!(metadata.regions, vec![Region::North, Region::Central]);
	assert_eq!(metadata.features[&Region::North].len(), 9);

	let loaded = storage::price_model::load(&prefix, quick_price_config());
	assert_eq!(loaded.models(), estimator.models());
	assert_eq!(loaded.predict(&priced("North", 3)), estimator.predict(&priced("North", 3)));
}

#[test]
fn missing_or_corrupt_metadata_falls_back_to_probing() {
	let dir = tempfile::tempdir().expect("tempdir");
	let prefix = dir.path().join("price_model");
	let estimator = trained_pair();
	storage::price_model::save(&estimator, &prefix).expect("save");

	let metadata = dir.path().join("price_model_metadata.json");
	fs::write(&metadata, "{ not json").expect("corrupt");
	let loaded = storage::price_model::load(&prefix, PriceModelConfig::default());
	assert_eq!(loaded.models().len(), 2);

	fs::remove_file(&metadata).expect("remove");
	let loaded = storage::price_model::load(&prefix, PriceModelConfig::default());
	assert_eq!(loaded.models(), estimator.models());
}

#[test]
fn corrupt_bundles_are_skipped() {
	let dir = tempfile::tempdir().expect("tempdir");
	let prefix = dir.path().join("price_model");
	storage::price_model::save(&trained_pair(), &prefix).expect("save");

	fs::write(dir.path().join("price_model_north.msgpack"), b"garbage").expect("corrupt");
	let loaded = storage::price_model::load(&prefix, PriceModelConfig::default());

	assert!(loaded.model(Region::North).is_none());
	assert!(loaded.model(Region::Central).is_some());
	let prediction = loaded.predict(&priced("North", 1));
	assert_eq!(prediction.model_region, Some(Region::Central));
}

#[test]
fn loading_from_an_empty_location_gives_an_untrained_estimator() {
	let dir = tempfile::tempdir().expect("tempdir");
	let loaded = storage::price_model::load(&dir.path().join("price_model"), PriceModelConfig::default());
	assert!(!loaded.is_trained());
}

#[test]
fn saving_fewer_regions_removes_stale_bundles() {
	let dir = tempfile::tempdir().expect("tempdir");
	let prefix = dir.path().join("price_model");
	storage::price_model::save(&trained_pair(), &prefix).expect("save pair");

	let mut central_only = PriceEstimator::new(quick_price_config());
	central_only.train(&priced_rows("Central", 100), "price").expect("train");
	storage::price_model::save(&central_only, &prefix).expect("save central");

	assert!(!dir.path().join("price_model_north.msgpack").exists());
	fs::remove_file(dir.path().join("price_model_metadata.json")).expect("remove index");
	let loaded = storage::price_model::load(&prefix, PriceModelConfig::default());
	assert_eq!(loaded.models().keys().copied().collect::<Vec<_>>(), vec![Region::Central]);
}

#[test]
fn clear_removes_bundles_and_index() {
	let dir = tempfile::tempdir().expect("tempdir");
	let prefix = dir.path().join("price_model");
	storage::price_model::save(&trained_pair(), &prefix).expect("save");

	assert_eq!(storage::price_model::clear(&prefix).expect("clear"), 3);
	assert!(!storage::price_model::load(&prefix, PriceModelConfig::default()).is_trained());
	assert_eq!(storage::price_model::clear(&prefix).expect("clear again"), 0);
}
