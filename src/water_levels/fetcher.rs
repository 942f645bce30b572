use crate::config::Config;
use crate::types::observation::ObservationSeries;
use crate::water_levels::error::WaterLevelError;
use crate::water_levels::payload::parse_data_payload;
use crate::water_levels::request::WaterLevelRequest;
use log::{info, warn};
use reqwest::Client;
use std::time::Duration;

pub struct WaterLevelFetcher {
    client: Client,
    url: String,
    timeout: Duration,
}

impl WaterLevelFetcher {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.noaa_data_url.clone(),
            timeout: config.data_timeout,
        }
    }

    /// Downloads one water level series from the NOAA data getter.
    pub async fn fetch(
        &self,
        request: &WaterLevelRequest,
    ) -> Result<ObservationSeries, WaterLevelError> {
        info!(
            "Fetching {} data for station {} ({} to {})",
            request.granularity, request.station_id, request.start, request.end
        );

        let response = self
            .client
            .get(&self.url)
            .query(&request.query_pairs())
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!(
                    "Data request failed for station {} ({} to {}): {}",
                    request.station_id, request.start, request.end, e
                );
                WaterLevelError::NetworkRequest(self.url.clone(), e)
            })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.url, e);
                return Err(if let Some(status) = e.status() {
                    WaterLevelError::HttpStatus {
                        url: self.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    WaterLevelError::NetworkRequest(self.url.clone(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| WaterLevelError::NetworkRequest(self.url.clone(), e))?;

        let series = parse_data_payload(request, &body).inspect_err(|e| {
            if let WaterLevelError::Upstream(message) = e {
                warn!("NOAA API error for station {}: {}", request.station_id, message);
            }
        })?;
        info!(
            "Received {} observations for station {}",
            series.len(),
            request.station_id
        );
        Ok(series)
    }
}
