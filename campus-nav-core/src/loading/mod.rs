//! This module is responsible for loading `GeoJSON` campus data
//! and building the routing model.

mod builder;
mod config;
pub mod geojson;
pub mod sectors;

pub use builder::{build_path_graph, create_campus_model};
pub use config::CampusModelConfig;
