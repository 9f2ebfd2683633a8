/// Label prefix for buildings without a `name` property
pub const DEFAULT_UNNAMED_PREFIX: &str = "Building";

/// Inputs for [`create_campus_model`](super::create_campus_model).
///
/// Sources are passed as text; reading them from disk or the network is
/// the caller's job.
#[derive(Debug, Clone)]
pub struct CampusModelConfig {
    /// `GeoJSON` feature collection whose line strings form the path network
    pub paths_geojson: String,
    /// `GeoJSON` feature collection with building footprints
    pub footprints_geojson: Option<String>,
    pub unnamed_building_prefix: String,
}

impl CampusModelConfig {
    pub fn new(paths_geojson: impl Into<String>) -> Self {
        Self {
            paths_geojson: paths_geojson.into(),
            footprints_geojson: None,
            unnamed_building_prefix: DEFAULT_UNNAMED_PREFIX.to_string(),
        }
    }

    #[must_use]
    pub fn with_footprints(mut self, footprints_geojson: impl Into<String>) -> Self {
        self.footprints_geojson = Some(footprints_geojson.into());
        self
    }

    #[must_use]
    pub fn with_unnamed_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.unnamed_building_prefix = prefix.into();
        self
    }
}
