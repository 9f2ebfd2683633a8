use geo::{Coord, LineString, Point};
use geojson::{Feature, Geometry, Value as GeoJsonValue};
use serde_json::json;

use super::Route;
use crate::Error;

impl Route {
    /// Converts the route to a `GeoJSON` `Feature` for rendering.
    ///
    /// Multi-point routes become a `LineString`; a route that starts and
    /// ends on the same node becomes a `Point`.
    ///
    /// # Errors
    ///
    /// Returns an error for an empty route or if the feature cannot be
    /// assembled
    pub fn to_geojson(&self) -> Result<Feature, Error> {
        let geometry = match self.points() {
            [] => return Err(Error::InvalidData("Route has no points".to_string())),
            [single] => Geometry::new(GeoJsonValue::from(&Point::from(*single))),
            points => {
                let coords: Vec<Coord<f64>> = points.iter().map(|p| Coord::from(*p)).collect();
                Geometry::new(GeoJsonValue::from(&LineString::new(coords)))
            }
        };

        let value = json!({
            "type": "Feature",
            "geometry": geometry,
            "properties": {
                "length_m": self.length(),
                "node_count": self.len(),
            }
        });

        serde_json::from_value::<Feature>(value).map_err(|e| Error::GeoJsonError(e.to_string()))
    }

    pub fn to_geojson_string(&self) -> Result<String, Error> {
        serde_json::to_string(&self.to_geojson()?).map_err(|e| Error::GeoJsonError(e.to_string()))
    }
}
