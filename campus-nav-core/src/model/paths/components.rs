//! Path network components - node keys, nodes and edges

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::{GeoPoint, Meters};

/// Coordinates are quantized to this many units per degree when deriving
/// node keys (1e-9 degrees is well below a millimetre).
const KEY_SCALE: f64 = 1e9;

/// Coordinate-derived node identity.
///
/// Two points whose coordinates quantize to the same key are the same
/// node, which is how line strings sharing an endpoint get joined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeKey {
    lat: i64,
    lon: i64,
}

impl NodeKey {
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_point(point: GeoPoint) -> Self {
        Self {
            lat: (point.latitude * KEY_SCALE).round() as i64,
            lon: (point.longitude * KEY_SCALE).round() as i64,
        }
    }
}

impl From<GeoPoint> for NodeKey {
    fn from(point: GeoPoint) -> Self {
        NodeKey::from_point(point)
    }
}

impl fmt::Display for NodeKey {
    #[allow(clippy::cast_precision_loss)]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:.9},{:.9}",
            self.lat as f64 / KEY_SCALE,
            self.lon as f64 / KEY_SCALE
        )
    }
}

/// Path graph node
///
/// Equality and hashing look at the key only.
#[derive(Debug, Clone)]
pub struct PathNode {
    pub key: NodeKey,
    /// Coordinates of the first occurrence of this key
    pub point: GeoPoint,
}

impl PartialEq for PathNode {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl Eq for PathNode {}

impl Hash for PathNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

/// Directed half of a walkable segment. Every segment is stored twice,
/// once per direction.
#[derive(Debug, Clone)]
pub struct PathEdge {
    pub from: NodeKey,
    pub to: NodeKey,
    /// Segment length in metres
    pub weight: Meters,
}

impl PartialEq for PathEdge {
    fn eq(&self, other: &Self) -> bool {
        self.from == other.from && self.to == other.to
    }
}

impl Eq for PathEdge {}

impl Hash for PathEdge {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.from.hash(state);
        self.to.hash(state);
    }
}
