//! Dataset loading and model persistence

pub mod dataset;
pub mod price_model;
pub mod recommender;

pub use dataset::{fill_location_fields, load_dataset, load_records, Records};
pub use price_model::PriceModelMetadata;
