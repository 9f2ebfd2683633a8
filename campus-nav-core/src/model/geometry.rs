//! Geographic primitives shared by the parser, the classifier and the router.

use geo::{Coord, Distance, Haversine, Point};
use serde::{Deserialize, Serialize};

use crate::Meters;
use crate::algo::point_in_polygon::point_in_polygon;

/// A latitude/longitude pair in decimal degrees (WGS84)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

// `geo` works in x = longitude, y = latitude
impl From<GeoPoint> for Point<f64> {
    fn from(point: GeoPoint) -> Self {
        Point::new(point.longitude, point.latitude)
    }
}

impl From<GeoPoint> for Coord<f64> {
    fn from(point: GeoPoint) -> Self {
        Coord {
            x: point.longitude,
            y: point.latitude,
        }
    }
}

impl From<Point<f64>> for GeoPoint {
    fn from(point: Point<f64>) -> Self {
        GeoPoint::new(point.y(), point.x())
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(coord: Coord<f64>) -> Self {
        GeoPoint::new(coord.y, coord.x)
    }
}

/// Great-circle (haversine) distance between two points in metres.
///
/// This is the only metric used by the engine: edge weights and
/// nearest-node anchoring both go through it.
pub fn distance(a: GeoPoint, b: GeoPoint) -> Meters {
    Haversine.distance(Point::from(a), Point::from(b))
}

/// Closed loop of vertices. The closing edge from the last vertex back to
/// the first is implicit, a repeated first vertex is not stored.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Ring {
    vertices: Vec<GeoPoint>,
}

impl Ring {
    pub fn new(mut vertices: Vec<GeoPoint>) -> Self {
        if vertices.len() > 1 && vertices.first() == vertices.last() {
            vertices.pop();
        }
        Self { vertices }
    }

    pub fn vertices(&self) -> &[GeoPoint] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Even-odd containment test, see [`point_in_polygon`]
    pub fn contains(&self, point: GeoPoint) -> bool {
        point_in_polygon(point, &self.vertices)
    }

    /// Arithmetic mean of the vertices. `None` for an empty ring.
    #[allow(clippy::cast_precision_loss)]
    pub fn centroid(&self) -> Option<GeoPoint> {
        if self.vertices.is_empty() {
            return None;
        }
        let n = self.vertices.len() as f64;
        let (lat_sum, lon_sum) = self
            .vertices
            .iter()
            .fold((0.0, 0.0), |(lat, lon), p| (lat + p.latitude, lon + p.longitude));

        Some(GeoPoint::new(lat_sum / n, lon_sum / n))
    }
}

impl From<&geo::LineString<f64>> for Ring {
    fn from(line: &geo::LineString<f64>) -> Self {
        Ring::new(line.coords().map(|c| GeoPoint::from(*c)).collect())
    }
}

impl FromIterator<GeoPoint> for Ring {
    fn from_iter<I: IntoIterator<Item = GeoPoint>>(iter: I) -> Self {
        Ring::new(iter.into_iter().collect())
    }
}
