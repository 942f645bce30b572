use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeocodingError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse geocoding response")]
    JsonParse(#[from] serde_json::Error),

    #[error("No location found for ZIP code: {0}")]
    NoMatch(String),

    #[error("Geocoder returned an unusable {field} value '{value}'")]
    InvalidCoordinate { field: &'static str, value: String },
}
