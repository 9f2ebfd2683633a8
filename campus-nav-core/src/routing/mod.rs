//! Shortest walking paths over the campus path network

pub(crate) mod dijkstra;
mod route;

use log::debug;
use rayon::prelude::*;

use crate::{Error, GeoPoint, PathGraph};

pub use route::{Route, path_length};

/// Finds the shortest walking route between two arbitrary points.
///
/// Both points are anchored to their nearest graph node first; the route
/// runs between those anchors. Start and end anchoring to the same node
/// yield a single-point route.
///
/// # Errors
///
/// [`Error::NoPointsFound`] if the graph has no nodes,
/// [`Error::Unreachable`] if the anchors lie in different components
pub fn find_route(graph: &PathGraph, start: GeoPoint, end: GeoPoint) -> Result<Route, Error> {
    let (start_node, start_offset) = graph.nearest_node(&start).ok_or(Error::NoPointsFound)?;
    let (end_node, end_offset) = graph.nearest_node(&end).ok_or(Error::NoPointsFound)?;
    debug!(
        "Anchored start {start_offset:.1} m and end {end_offset:.1} m from the network"
    );

    let (node_path, _) =
        dijkstra::dijkstra_path(graph, start_node, end_node).ok_or(Error::Unreachable)?;

    let points = node_path
        .into_iter()
        .filter_map(|idx| graph.node(idx).map(|node| node.point))
        .collect();

    Ok(Route::from_points(points))
}

/// [`find_route`] with "no route" folded into `None`
pub fn shortest_path(graph: &PathGraph, start: GeoPoint, end: GeoPoint) -> Option<Route> {
    find_route(graph, start, end)
        .inspect_err(|e| debug!("No route: {e}"))
        .ok()
}

/// Evaluates independent route queries in parallel.
///
/// Results are in the same order as `pairs`.
pub fn shortest_paths_many(graph: &PathGraph, pairs: &[(GeoPoint, GeoPoint)]) -> Vec<Option<Route>> {
    pairs
        .par_iter()
        .map(|&(start, end)| shortest_path(graph, start, end))
        .collect()
}
