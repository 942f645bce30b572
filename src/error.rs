use crate::assistant::error::AssistantError;
use crate::config::ConfigError;
use crate::geocoding::error::GeocodingError;
use crate::stations::error::LocateStationError;
use crate::water_levels::error::WaterLevelError;
use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TideGaugeError {
    #[error(transparent)]
    Geocoding(#[from] GeocodingError),

    #[error(transparent)]
    LocateStation(#[from] LocateStationError),

    #[error(transparent)]
    WaterLevel(#[from] WaterLevelError),

    #[error(transparent)]
    Assistant(#[from] AssistantError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("Please enter a ZIP code")]
    MissingPostalCode,

    #[error("End date {end} must be after start date {start}")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Failed to build HTTP client")]
    HttpClient(#[source] reqwest::Error),
}
