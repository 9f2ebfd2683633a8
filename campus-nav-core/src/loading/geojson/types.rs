use geojson::JsonValue;
use hashbrown::HashMap;

use crate::{GeoPoint, Ring};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeatureKind {
    LineString,
    Polygon,
    MultiPolygon,
    Ignored,
}

/// Geometry of a single feature, reduced to what routing and hit-testing use.
///
/// Polygons keep only their outer boundary, holes are dropped.
#[derive(Debug, Clone, PartialEq)]
pub enum FeatureGeometry {
    LineString(Vec<GeoPoint>),
    Polygon(Ring),
    /// One outer ring per member polygon
    MultiPolygon(Vec<Ring>),
    /// Points, multi-line strings, collections
    Ignored,
}

impl FeatureGeometry {
    pub fn kind(&self) -> FeatureKind {
        match self {
            FeatureGeometry::LineString(_) => FeatureKind::LineString,
            FeatureGeometry::Polygon(_) => FeatureKind::Polygon,
            FeatureGeometry::MultiPolygon(_) => FeatureKind::MultiPolygon,
            FeatureGeometry::Ignored => FeatureKind::Ignored,
        }
    }

    /// Coordinate sequences of this geometry: the path itself for a line
    /// string, one outer ring per polygon otherwise.
    pub fn rings(&self) -> Vec<&[GeoPoint]> {
        match self {
            FeatureGeometry::LineString(points) => vec![points.as_slice()],
            FeatureGeometry::Polygon(ring) => vec![ring.vertices()],
            FeatureGeometry::MultiPolygon(rings) => rings.iter().map(Ring::vertices).collect(),
            FeatureGeometry::Ignored => Vec::new(),
        }
    }
}

impl From<geo::Geometry<f64>> for FeatureGeometry {
    fn from(geometry: geo::Geometry<f64>) -> Self {
        match geometry {
            geo::Geometry::LineString(line) => {
                FeatureGeometry::LineString(line.coords().map(|c| GeoPoint::from(*c)).collect())
            }
            geo::Geometry::Polygon(polygon) => FeatureGeometry::Polygon(Ring::from(polygon.exterior())),
            geo::Geometry::MultiPolygon(polygons) => FeatureGeometry::MultiPolygon(
                polygons
                    .0
                    .iter()
                    .map(|polygon| Ring::from(polygon.exterior()))
                    .collect(),
            ),
            _ => FeatureGeometry::Ignored,
        }
    }
}

/// Scalar property value. Numbers are kept in their textual form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyValue {
    Text(String),
    Flag(bool),
}

impl PropertyValue {
    /// Nested objects, arrays and nulls have no scalar form and yield `None`
    pub fn from_json(value: JsonValue) -> Option<Self> {
        match value {
            JsonValue::String(text) => Some(PropertyValue::Text(text)),
            JsonValue::Bool(flag) => Some(PropertyValue::Flag(flag)),
            JsonValue::Number(number) => Some(PropertyValue::Text(number.to_string())),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            PropertyValue::Text(text) => Some(text),
            PropertyValue::Flag(_) => None,
        }
    }
}

/// Flat property map carried over from the source feature
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Properties(HashMap<String, PropertyValue>);

impl Properties {
    pub fn get(&self, key: &str) -> Option<&PropertyValue> {
        self.0.get(key)
    }

    pub fn text(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(PropertyValue::as_text)
    }

    pub fn insert(&mut self, key: impl Into<String>, value: PropertyValue) {
        self.0.insert(key.into(), value);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &PropertyValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, PropertyValue)> for Properties {
    fn from_iter<I: IntoIterator<Item = (String, PropertyValue)>>(iter: I) -> Self {
        Properties(iter.into_iter().collect())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFeature {
    pub geometry: FeatureGeometry,
    pub properties: Properties,
}

impl ParsedFeature {
    pub fn kind(&self) -> FeatureKind {
        self.geometry.kind()
    }
}
