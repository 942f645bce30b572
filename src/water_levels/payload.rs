//! Parsing of NOAA data getter responses into [`ObservationSeries`].

use crate::types::observation::{Observation, ObservationSeries};
use crate::water_levels::error::WaterLevelError;
use crate::water_levels::request::WaterLevelRequest;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Deserialize;
use serde_json::Value;

const UNKNOWN_ERROR: &str = "Unknown NOAA error";

#[derive(Debug, Deserialize)]
struct DataPayload {
    error: Option<ErrorBody>,
    data: Option<Vec<RawSample>>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// One `{"t": ..., "v": ...}` record. Quality flags and sigma are ignored.
#[derive(Debug, Deserialize)]
struct RawSample {
    t: String,
    #[serde(default)]
    v: Value,
}

/// Parses a data getter response for `request`.
///
/// An `error` object wins over any data. Samples whose value is blank or not
/// numeric are dropped; an unreadable timestamp fails the whole response.
pub(crate) fn parse_data_payload(
    request: &WaterLevelRequest,
    body: &[u8],
) -> Result<ObservationSeries, WaterLevelError> {
    let payload: DataPayload = serde_json::from_slice(body)?;

    if let Some(error) = payload.error {
        return Err(WaterLevelError::Upstream(
            error.message.unwrap_or_else(|| UNKNOWN_ERROR.to_string()),
        ));
    }

    let samples = payload.data.ok_or_else(|| WaterLevelError::MissingData {
        station: request.station_id.clone(),
        start: request.start,
        end: request.end,
        product: request.granularity,
    })?;

    let mut observations = Vec::with_capacity(samples.len());
    for sample in samples {
        let timestamp =
            parse_timestamp(&sample.t).ok_or_else(|| WaterLevelError::InvalidTimestamp {
                station: request.station_id.clone(),
                value: sample.t.clone(),
            })?;
        if let Some(water_level_ft) = parse_value(&sample.v) {
            observations.push(Observation {
                timestamp,
                water_level_ft,
            });
        }
    }

    Ok(ObservationSeries::new(
        request.station_id.clone(),
        request.granularity,
        observations,
    ))
}

/// `2024-01-01 00:06` for the sub-daily products, `2024-01-01` for daily means.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S"))
        .ok()
        .or_else(|| {
            NaiveDate::parse_from_str(raw, "%Y-%m-%d")
                .ok()
                .and_then(|d| d.and_hms_opt(0, 0, 0))
        })
}

fn parse_value(raw: &Value) -> Option<f64> {
    let value = match raw {
        Value::String(s) => s.trim().parse::<f64>().ok(),
        Value::Number(n) => n.as_f64(),
        _ => None,
    }?;
    (!value.is_nan()).then_some(value)
}
