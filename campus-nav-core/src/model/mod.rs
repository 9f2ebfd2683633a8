//! Data model for offline campus navigation
//!
//! Contains the geographic primitives, the walkable path network and the
//! building footprint catalogue.

pub mod campus_model;
pub mod footprints;
pub mod geometry;
pub mod paths;

// Re-export of the main model structure
pub use campus_model::CampusModel;

// Re-export of basic types for convenience
pub use footprints::{Footprint, FootprintIndex};
pub use geometry::{GeoPoint, Ring, distance};
pub use paths::{NodeKey, PathEdge, PathGraph, PathNode};
