//! Offline spatial engine for campus navigation.
//!
//! Builds a walkable path network from `GeoJSON` line strings, answers
//! nearest-node and shortest-path queries over it, and hit-tests building
//! footprints with a ray-casting point-in-polygon classifier.

pub mod algo;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;
pub use loading::{CampusModelConfig, create_campus_model};
pub use model::{CampusModel, GeoPoint, PathGraph, Ring, distance};

/// Distance along the path network, in metres
pub type Meters = f64;
