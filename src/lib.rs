mod assistant;
#[cfg(feature = "plotting")]
pub mod chart;
mod config;
mod error;
mod geocoding;
mod stations;
mod tidegauge;
mod types;
mod water_levels;

pub use config::*;
pub use error::TideGaugeError;
pub use tidegauge::*;

pub use assistant::client::OceanAssistant;
pub use geocoding::geocoder::{GeocodedLocation, Geocoder};
pub use stations::catalog::StationCatalog;
pub use stations::distance::{distance, EARTH_RADIUS_MILES};
pub use stations::locate_station::nearest;
pub use water_levels::fetcher::WaterLevelFetcher;
pub use water_levels::request::WaterLevelRequest;

pub use types::coordinate::Coordinate;
pub use types::observation::{Observation, ObservationSeries, SeriesSummary};
pub use types::product::{
    select_product, Granularity, ProductThresholds, HOURLY_HEIGHT_MAX_DAYS, WATER_LEVEL_MAX_DAYS,
};
pub use types::station::Station;

pub use assistant::error::AssistantError;
pub use geocoding::error::GeocodingError;
pub use stations::error::LocateStationError;
pub use water_levels::error::WaterLevelError;
