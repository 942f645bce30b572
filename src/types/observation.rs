//! Water level observations and the series returned for one station, date
//! range and granularity.

use crate::types::product::Granularity;
use chrono::NaiveDateTime;
use polars::prelude::*;
use serde::{Deserialize, Serialize};

/// A single water level sample.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Observation time in local standard/daylight time of the station.
    pub timestamp: NaiveDateTime,
    /// Water level in feet above MLLW.
    pub water_level_ft: f64,
}

/// Ordered water level observations for one station.
///
/// Observations are kept in ascending timestamp order. Samples sharing a
/// timestamp are kept as delivered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationSeries {
    pub station_id: String,
    pub granularity: Granularity,
    observations: Vec<Observation>,
}

/// Aggregate figures for a non-empty series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesSummary {
    pub count: usize,
    pub min_ft: f64,
    pub max_ft: f64,
    pub mean_ft: f64,
    pub first: NaiveDateTime,
    pub last: NaiveDateTime,
}

impl ObservationSeries {
    /// Builds a series, sorting `observations` by timestamp.
    ///
    /// The sort is stable, so duplicates keep their relative order.
    pub fn new(
        station_id: impl Into<String>,
        granularity: Granularity,
        mut observations: Vec<Observation>,
    ) -> Self {
        observations.sort_by_key(|o| o.timestamp);
        Self {
            station_id: station_id.into(),
            granularity,
            observations,
        }
    }

    pub fn observations(&self) -> &[Observation] {
        &self.observations
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn first(&self) -> Option<&Observation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&Observation> {
        self.observations.last()
    }

    /// Whole calendar days between the first and the last observation.
    ///
    /// `None` for an empty series.
    pub fn span_days(&self) -> Option<i64> {
        let first = self.first()?.timestamp.date();
        let last = self.last()?.timestamp.date();
        Some((last - first).num_days())
    }

    pub fn summary(&self) -> Option<SeriesSummary> {
        let first = self.first()?;
        let last = self.last()?;
        let (min_ft, max_ft, sum) = self.observations.iter().fold(
            (f64::INFINITY, f64::NEG_INFINITY, 0.0),
            |(min, max, sum), o| {
                (
                    min.min(o.water_level_ft),
                    max.max(o.water_level_ft),
                    sum + o.water_level_ft,
                )
            },
        );
        Some(SeriesSummary {
            count: self.len(),
            min_ft,
            max_ft,
            mean_ft: sum / self.len() as f64,
            first: first.timestamp,
            last: last.timestamp,
        })
    }

    /// Converts the series into a polars `DataFrame` with a `timestamp`
    /// (datetime) and a `water_level_ft` (f64) column.
    pub fn to_frame(&self) -> PolarsResult<DataFrame> {
        let timestamps: Vec<NaiveDateTime> =
            self.observations.iter().map(|o| o.timestamp).collect();
        let levels: Vec<f64> = self.observations.iter().map(|o| o.water_level_ft).collect();
        df!(
            "timestamp" => timestamps,
            "water_level_ft" => levels,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(day: u32, hour: u32, minute: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, day)
            .unwrap()
            .and_hms_opt(hour, minute, 0)
            .unwrap()
    }

    fn obs(day: u32, hour: u32, level: f64) -> Observation {
        Observation {
            timestamp: at(day, hour, 0),
            water_level_ft: level,
        }
    }

    #[test]
    fn test_new_sorts_stably() {
        let series = ObservationSeries::new(
            "8518750",
            Granularity::Fine,
            vec![obs(2, 0, 1.0), obs(1, 0, 2.0), obs(2, 0, 3.0), obs(1, 6, 4.0)],
        );
        let levels: Vec<f64> = series
            .observations()
            .iter()
            .map(|o| o.water_level_ft)
            .collect();
        assert_eq!(levels, vec![2.0, 4.0, 1.0, 3.0]);
    }

    #[test]
    fn test_span_days_uses_calendar_dates() {
        let series = ObservationSeries::new(
            "8518750",
            Granularity::Fine,
            vec![
                Observation {
                    timestamp: at(1, 23, 54),
                    water_level_ft: 1.0,
                },
                Observation {
                    timestamp: at(3, 0, 0),
                    water_level_ft: 1.5,
                },
            ],
        );
        assert_eq!(series.span_days(), Some(2));

        let empty = ObservationSeries::new("8518750", Granularity::Fine, vec![]);
        assert_eq!(empty.span_days(), None);
        assert!(empty.summary().is_none());
    }

    #[test]
    fn test_summary() {
        let series = ObservationSeries::new(
            "8518750",
            Granularity::Hourly,
            vec![obs(1, 0, 1.0), obs(1, 1, -0.5), obs(1, 2, 2.5)],
        );
        let summary = series.summary().unwrap();
        assert_eq!(summary.count, 3);
        assert_eq!(summary.min_ft, -0.5);
        assert_eq!(summary.max_ft, 2.5);
        assert!((summary.mean_ft - 1.0).abs() < 1e-12);
        assert_eq!(summary.first, at(1, 0, 0));
        assert_eq!(summary.last, at(1, 2, 0));
    }

    #[test]
    fn test_to_frame_columns() {
        let series = ObservationSeries::new(
            "8518750",
            Granularity::Fine,
            vec![obs(1, 0, 1.25), obs(1, 1, 1.5)],
        );
        let frame = series.to_frame().unwrap();
        assert_eq!(frame.shape(), (2, 2));
        let names: Vec<&str> = frame
            .get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect();
        assert_eq!(names, ["timestamp", "water_level_ft"]);
        let levels: Vec<Option<f64>> = frame
            .column("water_level_ft")
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(levels, vec![Some(1.25), Some(1.5)]);
    }
}
