//! Extraction of typed geometries from `GeoJSON` feature collections

mod parser;
mod types;

pub use parser::{features_from_value, parse_feature_collection};
pub use types::{FeatureGeometry, FeatureKind, ParsedFeature, Properties, PropertyValue};
