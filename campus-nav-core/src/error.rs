use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("No graph nodes available for snapping")]
    NoPointsFound,
    #[error("No path connects the start and end nodes")]
    Unreachable,
    #[error("Invalid JSON: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("GeoJSON error: {0}")]
    GeoJsonError(String),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}
