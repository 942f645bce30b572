use thiserror::Error;

#[derive(Debug, Error)]
pub enum LocateStationError {
    #[error("Cannot select a nearest station from an empty catalog")]
    EmptyCatalog,

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse station catalog JSON")]
    JsonParse(#[from] serde_json::Error),
}
