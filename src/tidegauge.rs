//! This module provides the main entry point of the crate. A [`TideGauge`]
//! turns a US postal code and a date range into the water level history of
//! the closest NOAA station, and forwards free-text questions to the
//! assistant.

use crate::assistant::client::OceanAssistant;
use crate::config::Config;
use crate::error::TideGaugeError;
use crate::geocoding::geocoder::{GeocodedLocation, Geocoder};
use crate::stations::catalog::StationCatalog;
use crate::stations::locate_station::nearest;
use crate::types::observation::ObservationSeries;
use crate::types::product::Granularity;
use crate::types::station::Station;
use crate::water_levels::fetcher::WaterLevelFetcher;
use crate::water_levels::request::WaterLevelRequest;
use bon::bon;
use chrono::NaiveDate;
use log::info;
use reqwest::Client;

/// A geocoded postal code and the station closest to it.
#[derive(Debug, Clone, PartialEq)]
pub struct NearestStation {
    pub location: GeocodedLocation,
    pub station: Station,
    pub distance_miles: f64,
}

/// Everything gathered for one water level lookup.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterLevelReport {
    pub location: GeocodedLocation,
    pub station: Station,
    pub distance_miles: f64,
    pub granularity: Granularity,
    pub series: ObservationSeries,
}

/// The main client.
///
/// Holds one `Config` and one HTTP client shared by the geocoder, the station
/// catalog, the data getter and the assistant. Every call runs its stages in
/// order and stops at the first failure.
///
/// # Examples
///
/// ```no_run
/// # use tidegauge::{Config, TideGauge, TideGaugeError};
/// use chrono::NaiveDate;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), TideGaugeError> {
/// let gauge = TideGauge::new(Config::from_env()?)?;
/// let report = gauge
///     .water_levels()
///     .postal_code("02108")
///     .start(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap())
///     .end(NaiveDate::from_ymd_opt(2024, 1, 8).unwrap())
///     .call()
///     .await?;
///
/// println!(
///     "{} is {:.1} miles away, {} {} observations",
///     report.station,
///     report.distance_miles,
///     report.series.len(),
///     report.granularity.label()
/// );
/// # Ok(())
/// # }
/// ```
pub struct TideGauge {
    config: Config,
    client: Client,
    geocoder: Geocoder,
    catalog: StationCatalog,
    fetcher: WaterLevelFetcher,
}

#[bon]
impl TideGauge {
    pub fn new(config: Config) -> Result<Self, TideGaugeError> {
        let client = Client::builder()
            .build()
            .map_err(TideGaugeError::HttpClient)?;
        Ok(Self::with_client(client, config))
    }

    /// Uses an existing `reqwest::Client` (e.g. one with a proxy configured).
    pub fn with_client(client: Client, config: Config) -> Self {
        Self {
            geocoder: Geocoder::new(client.clone(), &config),
            catalog: StationCatalog::new(client.clone(), &config),
            fetcher: WaterLevelFetcher::new(client.clone(), &config),
            client,
            config,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Geocodes `postal_code` and picks the closest station from the live catalog.
    ///
    /// # Errors
    ///
    /// Returns [`TideGaugeError::MissingPostalCode`] for a blank code,
    /// [`TideGaugeError::Geocoding`] if the code cannot be resolved and
    /// [`TideGaugeError::LocateStation`] if the catalog cannot be fetched or is empty.
    pub async fn nearest_station(
        &self,
        postal_code: &str,
    ) -> Result<NearestStation, TideGaugeError> {
        let postal_code = validate_postal_code(postal_code)?;
        let location = self.geocoder.geocode(postal_code).await?;
        info!(
            "{} resolved to {}",
            location.display_name, location.coordinate
        );

        let stations = self.catalog.fetch().await?;
        let (station, distance_miles) = nearest(location.coordinate, &stations)?;
        info!(
            "Nearest station: {} - {:.1} miles away",
            station, distance_miles
        );

        Ok(NearestStation {
            location,
            station,
            distance_miles,
        })
    }

    /// Fetches the water level history near a postal code.
    ///
    /// This method uses a builder pattern.
    ///
    /// # Arguments
    ///
    /// * `.postal_code(&str)`: **Required.** A five digit US ZIP code.
    /// * `.start(NaiveDate)`: **Required.** First day of the range (inclusive).
    /// * `.end(NaiveDate)`: **Required.** Last day of the range (inclusive), after `start`.
    ///
    /// The product is chosen from the number of days between `start` and `end`
    /// using the configured [`crate::ProductThresholds`].
    ///
    /// # Errors
    ///
    /// Input problems ([`TideGaugeError::MissingPostalCode`],
    /// [`TideGaugeError::InvalidDateRange`]) are reported before any request is
    /// made. After that, the first failing stage decides the error.
    #[builder]
    pub async fn water_levels(
        &self,
        postal_code: &str,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<WaterLevelReport, TideGaugeError> {
        validate_postal_code(postal_code)?;
        validate_date_range(start, end)?;

        let NearestStation {
            location,
            station,
            distance_miles,
        } = self.nearest_station(postal_code).await?;

        let days = (end - start).num_days();
        let granularity = self.config.thresholds.select(days);
        let request = WaterLevelRequest::new(station.id.clone(), start, end, granularity);
        let series = self.fetcher.fetch(&request).await?;

        Ok(WaterLevelReport {
            location,
            station,
            distance_miles,
            granularity,
            series,
        })
    }

    /// Forwards a free-text question to the language model and returns its answer.
    ///
    /// # Errors
    ///
    /// Returns [`TideGaugeError::Assistant`] if no API key is configured, the
    /// question is blank or the API call fails.
    pub async fn ask(&self, question: &str) -> Result<String, TideGaugeError> {
        let assistant = OceanAssistant::new(self.client.clone(), &self.config)?;
        Ok(assistant.ask(question).await?)
    }
}

fn validate_postal_code(postal_code: &str) -> Result<&str, TideGaugeError> {
    let trimmed = postal_code.trim();
    if trimmed.is_empty() {
        return Err(TideGaugeError::MissingPostalCode);
    }
    Ok(trimmed)
}

fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), TideGaugeError> {
    if end <= start {
        return Err(TideGaugeError::InvalidDateRange { start, end });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::error::AssistantError;
    use crate::config::ConfigError;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Every endpoint points at a closed local port, so any request that does
    // go out fails with a network error instead of reaching a real service.
    fn offline_gauge() -> TideGauge {
        let config = Config::builder()
            .nominatim_url("http://127.0.0.1:9/search")
            .noaa_stations_url("http://127.0.0.1:9/stations.json")
            .noaa_data_url("http://127.0.0.1:9/datagetter")
            .anthropic_url("http://127.0.0.1:9/v1/messages")
            .build();
        TideGauge::new(config).unwrap()
    }

    #[test]
    fn test_validate_postal_code() {
        assert_eq!(validate_postal_code(" 10001 ").unwrap(), "10001");
        assert!(matches!(
            validate_postal_code("   "),
            Err(TideGaugeError::MissingPostalCode)
        ));
    }

    #[test]
    fn test_validate_date_range() {
        assert!(validate_date_range(date(2024, 1, 1), date(2024, 1, 2)).is_ok());
        assert!(matches!(
            validate_date_range(date(2024, 1, 2), date(2024, 1, 2)),
            Err(TideGaugeError::InvalidDateRange { .. })
        ));
        assert!(matches!(
            validate_date_range(date(2024, 1, 3), date(2024, 1, 2)),
            Err(TideGaugeError::InvalidDateRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_water_levels_rejects_blank_zip_before_any_request() {
        let gauge = offline_gauge();
        let result = gauge
            .water_levels()
            .postal_code("")
            .start(date(2024, 1, 1))
            .end(date(2024, 1, 8))
            .call()
            .await;
        assert!(matches!(result, Err(TideGaugeError::MissingPostalCode)));
    }

    #[tokio::test]
    async fn test_water_levels_rejects_reversed_range_before_any_request() {
        let gauge = offline_gauge();
        let result = gauge
            .water_levels()
            .postal_code("10001")
            .start(date(2024, 1, 8))
            .end(date(2024, 1, 1))
            .call()
            .await;
        assert!(matches!(
            result,
            Err(TideGaugeError::InvalidDateRange { .. })
        ));
    }

    #[tokio::test]
    async fn test_geocoding_failure_short_circuits() {
        let gauge = offline_gauge();
        let result = gauge
            .water_levels()
            .postal_code("10001")
            .start(date(2024, 1, 1))
            .end(date(2024, 1, 8))
            .call()
            .await;
        assert!(matches!(result, Err(TideGaugeError::Geocoding(_))));
    }

    #[tokio::test]
    async fn test_ask_without_api_key() {
        let gauge = offline_gauge();
        let result = gauge.ask("What is MLLW?").await;
        assert!(matches!(
            result,
            Err(TideGaugeError::Assistant(AssistantError::Config(
                ConfigError::MissingVar(_)
            )))
        ));
    }
}
