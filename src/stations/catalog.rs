//! Fetches the NOAA CO-OPS list of active water level stations.

use crate::config::Config;
use crate::stations::error::LocateStationError;
use crate::types::coordinate::Coordinate;
use crate::types::station::Station;
use log::{info, warn};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct CatalogPayload {
    stations: Vec<CatalogEntry>,
}

// Entries carry many more fields (state, tidal, shefcode, ...); only these are read.
#[derive(Debug, Deserialize)]
struct CatalogEntry {
    id: String,
    name: String,
    lat: f64,
    lng: f64,
}

pub struct StationCatalog {
    client: Client,
    url: String,
    timeout: Duration,
}

impl StationCatalog {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.noaa_stations_url.clone(),
            timeout: config.stations_timeout,
        }
    }

    /// Downloads the full catalog, keeping NOAA's ordering.
    pub async fn fetch(&self) -> Result<Vec<Station>, LocateStationError> {
        info!("Fetching water level stations from {}", self.url);
        let response = self
            .client
            .get(&self.url)
            .query(&[("type", "waterlevels")])
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| LocateStationError::NetworkRequest(self.url.clone(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error for {}: {:?}", self.url, e);
                return Err(if let Some(status) = e.status() {
                    LocateStationError::HttpStatus {
                        url: self.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    LocateStationError::NetworkRequest(self.url.clone(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| LocateStationError::NetworkRequest(self.url.clone(), e))?;
        let stations = parse_catalog(&body)?;
        info!("Parsed {} water level stations", stations.len());
        Ok(stations)
    }
}

/// Turns a `stations.json` body into [`Station`]s.
///
/// Entries whose coordinates are out of range are skipped.
pub(crate) fn parse_catalog(body: &[u8]) -> Result<Vec<Station>, LocateStationError> {
    let payload: CatalogPayload = serde_json::from_slice(body)?;
    Ok(payload
        .stations
        .into_iter()
        .filter_map(|entry| match Coordinate::checked(entry.lat, entry.lng) {
            Some(coordinate) => Some(Station::new(entry.id, entry.name, coordinate)),
            None => {
                warn!(
                    "Skipping station {} with invalid coordinates ({}, {})",
                    entry.id, entry.lat, entry.lng
                );
                None
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog_keeps_order() {
        let body = br#"{
            "count": 3,
            "units": null,
            "stations": [
                {"tidal": true, "id": "8518750", "name": "The Battery", "lat": 40.7006, "lng": -74.0142, "state": "NY"},
                {"tidal": true, "id": "8443970", "name": "Boston", "lat": 42.3539, "lng": -71.0503, "state": "MA"},
                {"tidal": true, "id": "9414290", "name": "San Francisco", "lat": 37.8063, "lng": -122.4659, "state": "CA"}
            ]
        }"#;
        let stations = parse_catalog(body).unwrap();
        let ids: Vec<&str> = stations.iter().map(|s| s.id.as_str()).collect();
        assert_eq!(ids, ["8518750", "8443970", "9414290"]);
        assert_eq!(stations[1].name, "Boston");
        assert_eq!(stations[2].coordinate, Coordinate::new(37.8063, -122.4659));
    }

    #[test]
    fn test_parse_catalog_skips_invalid_coordinates() {
        let body = br#"{"stations": [
            {"id": "1", "name": "Bad", "lat": 123.0, "lng": 0.0},
            {"id": "2", "name": "Good", "lat": 12.0, "lng": 1.0}
        ]}"#;
        let stations = parse_catalog(body).unwrap();
        assert_eq!(stations.len(), 1);
        assert_eq!(stations[0].id, "2");
    }

    #[test]
    fn test_parse_catalog_empty_list() {
        let stations = parse_catalog(br#"{"stations": []}"#).unwrap();
        assert!(stations.is_empty());
    }

    #[test]
    fn test_parse_catalog_missing_stations_key() {
        let result = parse_catalog(br#"{"count": 0}"#);
        assert!(matches!(result, Err(LocateStationError::JsonParse(_))));
    }
}
