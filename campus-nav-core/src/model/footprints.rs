//! Building footprints and tap hit-testing

use log::{debug, warn};

use crate::loading::geojson::{FeatureGeometry, ParsedFeature, Properties};
use crate::{GeoPoint, Ring};

/// One outer ring of a polygon feature together with its properties
#[derive(Debug, Clone)]
pub struct Footprint {
    pub ring: Ring,
    pub properties: Properties,
    /// `name` property, or a generated label for unnamed buildings
    pub display_name: Option<String>,
    /// Mean of the ring vertices, used as the routing destination
    pub centroid: GeoPoint,
    /// Index of the source feature in the parsed collection
    pub feature_index: usize,
}

impl Footprint {
    /// Footprints tagged `building=yes` respond to taps
    pub fn is_building(&self) -> bool {
        is_building(&self.properties)
    }

    pub fn contains(&self, point: GeoPoint) -> bool {
        self.ring.contains(point)
    }
}

fn is_building(properties: &Properties) -> bool {
    properties.text("building") == Some("yes")
}

/// Catalogue of footprints in feature order
#[derive(Debug, Clone, Default)]
pub struct FootprintIndex {
    footprints: Vec<Footprint>,
}

impl FootprintIndex {
    /// Collects every polygon and multi-polygon feature.
    ///
    /// Unnamed buildings are labelled `"{unnamed_prefix} {n}"`, with `n`
    /// counting unnamed building features from 1 in feature order. All
    /// rings of one multi-polygon share the same label.
    pub fn from_features(features: &[ParsedFeature], unnamed_prefix: &str) -> Self {
        let mut footprints = Vec::new();
        let mut unnamed_buildings = 0;

        for (feature_index, feature) in features.iter().enumerate() {
            let rings: Vec<&Ring> = match &feature.geometry {
                FeatureGeometry::Polygon(ring) => vec![ring],
                FeatureGeometry::MultiPolygon(rings) => rings.iter().collect(),
                FeatureGeometry::LineString(_) | FeatureGeometry::Ignored => continue,
            };

            let mut display_name = feature
                .properties
                .text("name")
                .filter(|name| !name.trim().is_empty())
                .map(str::to_string);
            if display_name.is_none() && is_building(&feature.properties) {
                unnamed_buildings += 1;
                display_name = Some(format!("{unnamed_prefix} {unnamed_buildings}"));
            }

            for ring in rings {
                let Some(centroid) = ring.centroid() else {
                    warn!("Feature {feature_index} has an empty ring, skipping footprint");
                    continue;
                };
                footprints.push(Footprint {
                    ring: ring.clone(),
                    properties: feature.properties.clone(),
                    display_name: display_name.clone(),
                    centroid,
                    feature_index,
                });
            }
        }

        debug!(
            "Collected {} footprints ({} unnamed buildings)",
            footprints.len(),
            unnamed_buildings
        );
        Self { footprints }
    }

    /// First building footprint (in feature order) containing `point`
    pub fn hit_test(&self, point: GeoPoint) -> Option<&Footprint> {
        self.footprints
            .iter()
            .find(|footprint| footprint.is_building() && footprint.contains(point))
    }

    /// All footprints containing `point`, buildings or not
    pub fn containing(&self, point: GeoPoint) -> impl Iterator<Item = &Footprint> {
        self.footprints
            .iter()
            .filter(move |footprint| footprint.contains(point))
    }

    pub fn find_by_name(&self, name: &str) -> Option<&Footprint> {
        self.footprints
            .iter()
            .find(|footprint| footprint.display_name.as_deref() == Some(name))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Footprint> {
        self.footprints.iter()
    }

    pub fn len(&self) -> usize {
        self.footprints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.footprints.is_empty()
    }
}
