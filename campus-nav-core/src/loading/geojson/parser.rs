use geojson::{Geometry, JsonObject, JsonValue};
use log::{debug, info};

use super::types::{FeatureGeometry, ParsedFeature, Properties, PropertyValue};
use crate::Error;

/// Parses `GeoJSON` text into geometry records.
///
/// Only syntactically invalid JSON is an error. A document without a
/// `features` array yields no records, and features that fail to parse
/// are dropped individually.
///
/// # Errors
///
/// Returns [`Error::JsonError`] if `text` is not valid JSON
pub fn parse_feature_collection(text: &str) -> Result<Vec<ParsedFeature>, Error> {
    let document: JsonValue = serde_json::from_str(text)?;
    Ok(features_from_value(&document))
}

/// Same as [`parse_feature_collection`] for an already decoded document
pub fn features_from_value(document: &JsonValue) -> Vec<ParsedFeature> {
    let Some(features) = document.get("features").and_then(JsonValue::as_array) else {
        debug!("Document has no features array");
        return Vec::new();
    };

    let parsed: Vec<ParsedFeature> = features
        .iter()
        .enumerate()
        .filter_map(|(idx, value)| match parse_feature(value) {
            Ok(feature) => Some(feature),
            Err(e) => {
                debug!("Skipping feature {idx}: {e}");
                None
            }
        })
        .collect();

    info!(
        "Parsed {} of {} GeoJSON features",
        parsed.len(),
        features.len()
    );
    parsed
}

/// Decodes one feature. Only `geometry` (and optionally `properties`) is
/// read, a missing `"type": "Feature"` tag is tolerated.
fn parse_feature(value: &JsonValue) -> Result<ParsedFeature, Error> {
    let geometry = value
        .get("geometry")
        .filter(|geometry| !geometry.is_null())
        .ok_or_else(|| Error::InvalidData("feature has no geometry".to_string()))?;
    validate_positions(geometry)?;

    let geometry: Geometry = serde_json::from_value(geometry.clone())
        .map_err(|e| Error::GeoJsonError(e.to_string()))?;
    let geometry = geo::Geometry::<f64>::try_from(geometry)
        .map_err(|e| Error::GeoJsonError(e.to_string()))?;

    Ok(ParsedFeature {
        geometry: FeatureGeometry::from(geometry),
        properties: value
            .get("properties")
            .and_then(JsonValue::as_object)
            .cloned()
            .map(properties_from_json)
            .unwrap_or_default(),
    })
}

/// Rejects positions with fewer than two numeric axes, which the
/// `geo` conversion cannot handle.
fn validate_positions(geometry: &JsonValue) -> Result<(), Error> {
    if let Some(coordinates) = geometry.get("coordinates") {
        check_position_arrays(coordinates)?;
    }
    if let Some(members) = geometry.get("geometries").and_then(JsonValue::as_array) {
        members.iter().try_for_each(validate_positions)?;
    }
    Ok(())
}

fn check_position_arrays(value: &JsonValue) -> Result<(), Error> {
    let JsonValue::Array(items) = value else {
        return Ok(());
    };
    if items.iter().any(JsonValue::is_number) {
        if items.len() < 2 || !items.iter().all(JsonValue::is_number) {
            return Err(Error::InvalidData(format!("invalid position {value}")));
        }
        return Ok(());
    }
    items.iter().try_for_each(check_position_arrays)
}

fn properties_from_json(object: JsonObject) -> Properties {
    object
        .into_iter()
        .filter_map(|(key, value)| PropertyValue::from_json(value).map(|value| (key, value)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GeoPoint;
    use crate::loading::geojson::FeatureKind;

    #[test]
    fn missing_features_array_is_empty() {
        assert!(parse_feature_collection(r#"{"type": "FeatureCollection"}"#)
            .unwrap()
            .is_empty());
        assert!(parse_feature_collection("{}").unwrap().is_empty());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(matches!(
            parse_feature_collection("{not json"),
            Err(Error::JsonError(_))
        ));
    }

    #[test]
    fn line_string_swaps_axis_order() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"highway": "footway"},
                "geometry": {"type": "LineString", "coordinates": [[-71.6, -35.4], [-71.7, -35.5]]}
            }]
        }"#;
        let features = parse_feature_collection(text).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(
            features[0].geometry,
            FeatureGeometry::LineString(vec![
                GeoPoint::new(-35.4, -71.6),
                GeoPoint::new(-35.5, -71.7)
            ])
        );
        assert_eq!(features[0].properties.text("highway"), Some("footway"));
    }

    #[test]
    fn polygons_keep_outer_ring_only() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {
                    "type": "Feature",
                    "properties": null,
                    "geometry": {"type": "Polygon", "coordinates": [
                        [[0, 0], [4, 0], [4, 4], [0, 4], [0, 0]],
                        [[1, 1], [2, 1], [2, 2], [1, 1]]
                    ]}
                },
                {
                    "type": "Feature",
                    "properties": {},
                    "geometry": {"type": "MultiPolygon", "coordinates": [
                        [[[0, 0], [1, 0], [1, 1], [0, 0]]],
                        [[[5, 5], [6, 5], [6, 6], [5, 5]]]
                    ]}
                }
            ]
        }"#;
        let features = parse_feature_collection(text).unwrap();
        assert_eq!(features.len(), 2);

        assert_eq!(features[0].kind(), FeatureKind::Polygon);
        let rings = features[0].geometry.rings();
        assert_eq!(rings.len(), 1);
        assert_eq!(rings[0].len(), 4);

        assert_eq!(features[1].kind(), FeatureKind::MultiPolygon);
        assert_eq!(features[1].geometry.rings().len(), 2);
    }

    #[test]
    fn malformed_features_are_skipped() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}},
                {"type": "Feature", "properties": {}, "geometry": null},
                {"type": "Feature", "properties": {}, "geometry": {"type": "LineString"}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": "nope"}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[0], [1, 1]]}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, "x"], [1, 1], [0, 0]]]}},
                {"type": "Feature", "properties": {}, "geometry": {"type": "GeometryCollection", "geometries": [
                    {"type": "Point", "coordinates": [7]}
                ]}},
                42,
                {"type": "Feature", "properties": {}, "geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}}
            ]
        }"#;
        let features = parse_feature_collection(text).unwrap();
        assert_eq!(features.len(), 1);
        assert_eq!(features[0].kind(), FeatureKind::LineString);
    }

    #[test]
    fn untagged_features_are_accepted() {
        let text = r#"{
            "features": [
                {"geometry": {"type": "LineString", "coordinates": [[0, 0], [1, 1]]}},
                {"properties": {"building": "yes"},
                 "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}}
            ]
        }"#;
        let features = parse_feature_collection(text).unwrap();
        assert_eq!(features.len(), 2);
        assert_eq!(features[0].kind(), FeatureKind::LineString);
        assert!(features[0].properties.is_empty());
        assert_eq!(features[1].kind(), FeatureKind::Polygon);
        assert_eq!(features[1].properties.text("building"), Some("yes"));
    }

    #[test]
    fn unsupported_geometries_are_ignored() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {}, "geometry": {"type": "Point", "coordinates": [0, 0]}}
            ]
        }"#;
        let features = parse_feature_collection(text).unwrap();
        assert!(features.iter().all(|f| f.kind() == FeatureKind::Ignored));
        assert!(features.iter().all(|f| f.geometry.rings().is_empty()));
    }

    #[test]
    fn properties_keep_scalars() {
        let text = r#"{
            "type": "FeatureCollection",
            "features": [{
                "type": "Feature",
                "properties": {"name": "Library", "building": "yes", "levels": 3, "open": true, "tags": ["a"], "note": null},
                "geometry": {"type": "Polygon", "coordinates": [[[0, 0], [1, 0], [1, 1], [0, 0]]]}
            }]
        }"#;
        let features = parse_feature_collection(text).unwrap();
        let properties = &features[0].properties;
        assert_eq!(properties.len(), 4);
        assert_eq!(properties.text("name"), Some("Library"));
        assert_eq!(properties.text("levels"), Some("3"));
        assert_eq!(properties.get("open"), Some(&PropertyValue::Flag(true)));
        assert!(properties.get("tags").is_none());
    }
}
