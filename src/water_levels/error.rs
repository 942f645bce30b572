use crate::types::product::Granularity;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum WaterLevelError {
    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to parse water level response")]
    JsonParse(#[from] serde_json::Error),

    // The data getter answered, but with an error payload instead of data.
    #[error("NOAA API error: {0}")]
    Upstream(String),

    #[error("No data returned for station {station} ({start} to {end}, product={product})")]
    MissingData {
        station: String,
        start: NaiveDate,
        end: NaiveDate,
        product: Granularity,
    },

    #[error("Unrecognised timestamp '{value}' for station {station}")]
    InvalidTimestamp { station: String, value: String },
}
