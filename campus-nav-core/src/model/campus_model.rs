use crate::loading::geojson::ParsedFeature;
use crate::loading::build_path_graph;
use crate::model::{Footprint, FootprintIndex, GeoPoint, PathGraph};
use crate::routing::{self, Route};
use crate::Error;

/// Everything needed to answer navigation queries for one campus dataset:
/// the walkable path network and the building footprints.
///
/// Immutable once built; queries only take shared references, so one model
/// can serve any number of threads.
#[derive(Debug, Clone, Default)]
pub struct CampusModel {
    pub path_graph: PathGraph,
    pub footprints: FootprintIndex,
}

impl CampusModel {
    pub fn new(path_graph: PathGraph, footprints: FootprintIndex) -> Self {
        Self {
            path_graph,
            footprints,
        }
    }

    /// Builds a model whose path network comes from the line strings of
    /// `features`, ignoring footprints
    pub fn from_path_features(features: &[ParsedFeature]) -> Self {
        Self::new(build_path_graph(features), FootprintIndex::default())
    }

    /// Shortest walking route between two arbitrary points, `None` if the
    /// graph is empty or the anchors are disconnected
    pub fn shortest_path(&self, start: GeoPoint, end: GeoPoint) -> Option<Route> {
        routing::shortest_path(&self.path_graph, start, end)
    }

    /// Like [`CampusModel::shortest_path`], but reports why no route exists
    ///
    /// # Errors
    ///
    /// [`Error::NoPointsFound`] for an empty graph, [`Error::Unreachable`]
    /// when start and end anchor to different components
    pub fn find_route(&self, start: GeoPoint, end: GeoPoint) -> Result<Route, Error> {
        routing::find_route(&self.path_graph, start, end)
    }

    /// Route from `start` to the centroid of a footprint
    ///
    /// # Errors
    ///
    /// Same as [`CampusModel::find_route`]
    pub fn route_to_footprint(&self, start: GeoPoint, footprint: &Footprint) -> Result<Route, Error> {
        self.find_route(start, footprint.centroid)
    }

    pub fn hit_test(&self, point: GeoPoint) -> Option<&Footprint> {
        self.footprints.hit_test(point)
    }

    pub fn node_count(&self) -> usize {
        self.path_graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.path_graph.edge_count()
    }

    pub fn footprint_count(&self) -> usize {
        self.footprints.len()
    }

    pub fn summary(&self) -> String {
        format!(
            "CampusModel with {} path nodes, {} directed edges and {} footprints",
            self.node_count(),
            self.edge_count(),
            self.footprint_count()
        )
    }
}
