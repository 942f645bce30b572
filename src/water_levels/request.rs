use crate::types::product::Granularity;
use chrono::NaiveDate;

/// What to ask the NOAA data getter for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterLevelRequest {
    pub station_id: String,
    /// First day of the range (inclusive).
    pub start: NaiveDate,
    /// Last day of the range (inclusive).
    pub end: NaiveDate,
    pub granularity: Granularity,
}

impl WaterLevelRequest {
    pub fn new(
        station_id: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Self {
        Self {
            station_id: station_id.into(),
            start,
            end,
            granularity,
        }
    }

    pub(crate) fn query_pairs(&self) -> Vec<(&'static str, String)> {
        vec![
            ("begin_date", self.start.format("%Y%m%d").to_string()),
            ("end_date", self.end.format("%Y%m%d").to_string()),
            ("station", self.station_id.clone()),
            ("product", self.granularity.product_name().to_string()),
            ("datum", "MLLW".to_string()),
            ("time_zone", "lst_ldt".to_string()),
            ("units", "english".to_string()),
            ("format", "json".to_string()),
        ]
    }
}
