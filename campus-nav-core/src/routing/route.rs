use itertools::Itertools;

use crate::{GeoPoint, Meters, distance};

mod to_geojson;

/// A walking route through the path network.
///
/// Owns a copy of the node coordinates, independent of the graph it was
/// computed on.
#[derive(Debug, Clone, PartialEq)]
pub struct Route {
    points: Vec<GeoPoint>,
    length: Meters,
}

impl Route {
    /// Builds a route from its vertices, measuring its length
    pub fn from_points(points: Vec<GeoPoint>) -> Self {
        let length = path_length(&points);
        Self { points, length }
    }

    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    pub fn into_points(self) -> Vec<GeoPoint> {
        self.points
    }

    /// Sum of the distances between consecutive points, in metres
    pub fn length(&self) -> Meters {
        self.length
    }

    pub fn start(&self) -> Option<GeoPoint> {
        self.points.first().copied()
    }

    pub fn end(&self) -> Option<GeoPoint> {
        self.points.last().copied()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Length of a polyline using the engine's distance metric
pub fn path_length(points: &[GeoPoint]) -> Meters {
    points
        .iter()
        .tuple_windows()
        .map(|(a, b)| distance(*a, *b))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn length_sums_segments() {
        let points = vec![
            GeoPoint::new(0.0, 0.0),
            GeoPoint::new(0.0, 0.01),
            GeoPoint::new(0.01, 0.01),
        ];
        let route = Route::from_points(points.clone());
        let expected = distance(points[0], points[1]) + distance(points[1], points[2]);
        assert!((route.length() - expected).abs() < 1e-9);
        assert_eq!(route.start(), Some(points[0]));
        assert_eq!(route.end(), Some(points[2]));
    }

    #[test]
    fn single_point_route_has_zero_length() {
        let route = Route::from_points(vec![GeoPoint::new(1.0, 2.0)]);
        assert_eq!(route.length(), 0.0);
        assert_eq!(route.len(), 1);
    }
}
