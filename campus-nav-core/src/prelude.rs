pub use crate::Meters;

// Re-export key components
pub use crate::algo::point_in_polygon::point_in_polygon;
pub use crate::loading::geojson::{
    FeatureGeometry, FeatureKind, ParsedFeature, PropertyValue, Properties,
    parse_feature_collection,
};
pub use crate::loading::sectors::{SectorCoordinate, sector_rings};
pub use crate::loading::{CampusModelConfig, build_path_graph, create_campus_model};
pub use crate::model::{
    CampusModel, Footprint, FootprintIndex, GeoPoint, NodeKey, PathGraph, PathNode, Ring,
    distance,
};
pub use crate::routing::{Route, find_route, path_length, shortest_path, shortest_paths_many};

pub use crate::Error;
