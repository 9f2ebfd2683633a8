//! Sector outlines stored as ordered coordinate rows.
//!
//! Campus back-ends often keep a sector's outline as one row per vertex
//! with an explicit drawing order instead of a `GeoJSON` polygon.

use std::collections::BTreeMap;

use itertools::Itertools;
use serde::Deserialize;

use crate::{Error, GeoPoint, Ring};

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectorCoordinate {
    pub id: u32,
    #[serde(alias = "id_sector")]
    pub sector_id: u32,
    #[serde(alias = "latitud")]
    pub latitude: f64,
    #[serde(alias = "longitud")]
    pub longitude: f64,
    /// Position of this vertex along the outline
    #[serde(alias = "orden_punto")]
    pub order: i32,
}

impl SectorCoordinate {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }
}

/// Parses a JSON array of coordinate rows
///
/// # Errors
///
/// Returns [`Error::JsonError`] if the text is not an array of rows
pub fn parse_sector_coordinates(text: &str) -> Result<Vec<SectorCoordinate>, Error> {
    Ok(serde_json::from_str(text)?)
}

/// Groups rows by sector and orders each group into a ring.
///
/// Rows with equal `order` keep their input order.
pub fn sector_rings(coordinates: &[SectorCoordinate]) -> BTreeMap<u32, Ring> {
    coordinates
        .iter()
        .into_group_map_by(|row| row.sector_id)
        .into_iter()
        .map(|(sector_id, rows)| {
            let ring = rows
                .into_iter()
                .sorted_by_key(|row| row.order)
                .map(SectorCoordinate::point)
                .collect();
            (sector_id, ring)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_are_grouped_and_ordered() {
        let text = r#"[
            {"id": 1, "id_sector": 7, "latitud": 1.0, "longitud": 1.0, "orden_punto": 3},
            {"id": 2, "id_sector": 7, "latitud": 0.0, "longitud": 0.0, "orden_punto": 1},
            {"id": 3, "id_sector": 9, "latitud": 5.0, "longitud": 5.0, "orden_punto": 1},
            {"id": 4, "id_sector": 7, "latitud": 0.0, "longitud": 1.0, "orden_punto": 2},
            {"id": 5, "id_sector": 7, "latitud": 1.0, "longitud": 0.0, "orden_punto": 4}
        ]"#;
        let rows = parse_sector_coordinates(text).unwrap();
        let rings = sector_rings(&rows);

        assert_eq!(rings.len(), 2);
        assert_eq!(
            rings[&7].vertices(),
            &[
                GeoPoint::new(0.0, 0.0),
                GeoPoint::new(0.0, 1.0),
                GeoPoint::new(1.0, 1.0),
                GeoPoint::new(1.0, 0.0),
            ]
        );
        assert!(rings[&7].contains(GeoPoint::new(0.5, 0.5)));
        assert_eq!(rings[&9].len(), 1);
    }

    #[test]
    fn english_field_names_are_accepted() {
        let rows = parse_sector_coordinates(
            r#"[{"id": 1, "sector_id": 2, "latitude": 3.0, "longitude": 4.0, "order": 0}]"#,
        )
        .unwrap();
        assert_eq!(rows[0].point(), GeoPoint::new(3.0, 4.0));
    }
}
