use geo::{ConvexHull, Intersects, MultiPoint, Point};
use itertools::Itertools;
use log::info;

use super::config::CampusModelConfig;
use super::geojson::{FeatureGeometry, ParsedFeature, parse_feature_collection};
use crate::model::{CampusModel, FootprintIndex, PathGraph};
use crate::Error;

/// Builds the path network from every line string in `features`.
///
/// Consecutive coordinates become bidirectional edges weighted by their
/// distance. Coordinates shared between line strings map to the same node,
/// so the resulting structure does not depend on feature order.
pub fn build_path_graph(features: &[ParsedFeature]) -> PathGraph {
    let mut graph = PathGraph::new();

    for feature in features {
        let FeatureGeometry::LineString(points) = &feature.geometry else {
            continue;
        };
        if let [single] = points.as_slice() {
            graph.get_or_insert_node(*single);
            continue;
        }
        for (a, b) in points.iter().tuple_windows() {
            graph.add_segment(*a, *b);
        }
    }

    info!(
        "Path graph built with {} nodes and {} directed edges",
        graph.node_count(),
        graph.edge_count()
    );
    graph
}

/// Creates a campus model based on the provided configuration
///
/// # Errors
///
/// Returns an error if the configuration is invalid or a source is not
/// valid JSON. Malformed individual features are skipped, not reported.
pub fn create_campus_model(config: &CampusModelConfig) -> Result<CampusModel, Error> {
    validate_config(config)?;

    info!("Processing path data");
    let (graph, footprints) = rayon::join(
        || -> Result<PathGraph, Error> {
            let features = parse_feature_collection(&config.paths_geojson)?;
            Ok(build_path_graph(&features))
        },
        || -> Result<FootprintIndex, Error> {
            let Some(text) = &config.footprints_geojson else {
                return Ok(FootprintIndex::default());
            };
            let features = parse_feature_collection(text)?;
            Ok(FootprintIndex::from_features(
                &features,
                &config.unnamed_building_prefix,
            ))
        },
    );
    let (graph, footprints) = (graph?, footprints?);

    validate_graph_footprint_overlap(&graph, &footprints);

    let model = CampusModel::new(graph, footprints);
    info!("{}", model.summary());
    Ok(model)
}

fn validate_config(config: &CampusModelConfig) -> Result<(), Error> {
    if config.paths_geojson.trim().is_empty() {
        return Err(Error::InvalidData(
            "No path GeoJSON provided in the configuration".to_string(),
        ));
    }

    if config.unnamed_building_prefix.trim().is_empty() {
        return Err(Error::InvalidData(
            "Unnamed building prefix must not be blank".to_string(),
        ));
    }

    Ok(())
}

#[allow(clippy::cast_precision_loss)]
fn validate_graph_footprint_overlap(paths: &PathGraph, footprints: &FootprintIndex) {
    if paths.is_empty() || footprints.is_empty() {
        return;
    }

    let graph_nodes: MultiPoint = paths.nodes().map(|node| Point::from(node.point)).collect();
    let graph_hull = graph_nodes.convex_hull();

    let outside_hull = footprints
        .iter()
        .filter(|footprint| !Point::from(footprint.centroid).intersects(&graph_hull))
        .count();

    let total = footprints.len();
    let percentage = (outside_hull as f64 / total as f64) * 100.0;
    if outside_hull > 0 {
        log::warn!(
            "{outside_hull} of {total} footprints ({percentage:.1}%) lie outside the path \
        network coverage area. Routes to them will end at the nearest path node."
        );
    }
}
