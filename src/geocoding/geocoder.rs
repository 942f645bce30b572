//! Resolves US postal codes to coordinates through the Nominatim search API.

use crate::config::Config;
use crate::geocoding::error::GeocodingError;
use crate::types::coordinate::Coordinate;
use log::{debug, warn};
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A resolved postal code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeocodedLocation {
    pub coordinate: Coordinate,
    /// Nominatim's human readable label, e.g. "New York, ..., 10001, United States".
    pub display_name: String,
}

// Nominatim encodes coordinates as strings.
#[derive(Debug, Deserialize)]
struct SearchResult {
    lat: String,
    lon: String,
    display_name: String,
}

pub struct Geocoder {
    client: Client,
    url: String,
    user_agent: String,
    timeout: Duration,
}

impl Geocoder {
    pub fn new(client: Client, config: &Config) -> Self {
        Self {
            client,
            url: config.nominatim_url.clone(),
            user_agent: config.nominatim_user_agent.clone(),
            timeout: config.geocoding_timeout,
        }
    }

    /// Looks up `postal_code` within the US and returns the best match.
    pub async fn geocode(&self, postal_code: &str) -> Result<GeocodedLocation, GeocodingError> {
        debug!("Geocoding ZIP code {}", postal_code);
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("postalcode", postal_code),
                ("country", "US"),
                ("format", "json"),
            ])
            .header(USER_AGENT, &self.user_agent)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| {
                warn!("Geocoding request failed for ZIP {}: {}", postal_code, e);
                GeocodingError::NetworkRequest(self.url.clone(), e)
            })?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                warn!("HTTP error geocoding ZIP {}: {:?}", postal_code, e);
                return Err(if let Some(status) = e.status() {
                    GeocodingError::HttpStatus {
                        url: self.url.clone(),
                        status,
                        source: e,
                    }
                } else {
                    GeocodingError::NetworkRequest(self.url.clone(), e)
                });
            }
        };

        let body = response
            .bytes()
            .await
            .map_err(|e| GeocodingError::NetworkRequest(self.url.clone(), e))?;
        parse_search_results(postal_code, &body)
    }
}

/// Picks the first Nominatim result from a search response body.
pub(crate) fn parse_search_results(
    postal_code: &str,
    body: &[u8],
) -> Result<GeocodedLocation, GeocodingError> {
    let results: Vec<SearchResult> = serde_json::from_slice(body)?;
    let first = results
        .into_iter()
        .next()
        .ok_or_else(|| GeocodingError::NoMatch(postal_code.to_string()))?;

    let latitude = parse_degrees("lat", &first.lat)?;
    let longitude = parse_degrees("lon", &first.lon)?;
    let coordinate =
        Coordinate::checked(latitude, longitude).ok_or(GeocodingError::InvalidCoordinate {
            field: "lat/lon",
            value: format!("{}, {}", first.lat, first.lon),
        })?;

    Ok(GeocodedLocation {
        coordinate,
        display_name: first.display_name,
    })
}

fn parse_degrees(field: &'static str, raw: &str) -> Result<f64, GeocodingError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| GeocodingError::InvalidCoordinate {
            field,
            value: raw.to_string(),
        })
}
