//! Defines the data granularities offered by the NOAA data getter and the
//! rule that picks one from the length of a requested date range.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest range, in days, served with [`Granularity::Fine`] by default.
pub const WATER_LEVEL_MAX_DAYS: i64 = 31;
/// Longest range, in days, served with [`Granularity::Hourly`] by default.
pub const HOURLY_HEIGHT_MAX_DAYS: i64 = 365;

/// The temporal resolution of a water level series.
///
/// NOAA caps the range it serves for each product, so longer windows have to
/// fall back to coarser data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Granularity {
    /// Six-minute observations (`water_level`).
    Fine,
    /// Verified hourly heights (`hourly_height`).
    Hourly,
    /// Daily means (`daily_mean`).
    Coarse,
}

impl Granularity {
    /// The `product` query parameter understood by the NOAA data getter.
    pub fn product_name(&self) -> &'static str {
        match self {
            Granularity::Fine => "water_level",
            Granularity::Hourly => "hourly_height",
            Granularity::Coarse => "daily_mean",
        }
    }

    /// Human readable label, e.g. "hourly height".
    pub fn label(&self) -> String {
        self.product_name().replace('_', " ")
    }
}

/// Allows formatting a `Granularity` using its NOAA product name.
///
/// # Examples
///
/// ```
/// use tidegauge::Granularity;
///
/// assert_eq!(Granularity::Fine.to_string(), "water_level");
/// assert_eq!(format!("{}", Granularity::Coarse), "daily_mean");
/// ```
impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.product_name())
    }
}

/// Inclusive upper bounds, in days, for the two finer granularities.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductThresholds {
    pub fine_max_days: i64,
    pub hourly_max_days: i64,
}

impl Default for ProductThresholds {
    fn default() -> Self {
        Self {
            fine_max_days: WATER_LEVEL_MAX_DAYS,
            hourly_max_days: HOURLY_HEIGHT_MAX_DAYS,
        }
    }
}

impl ProductThresholds {
    /// Picks the finest granularity whose bound still covers `days`.
    ///
    /// Total over all integers. Zero and negative ranges map to
    /// [`Granularity::Fine`]; checking date order is the caller's job.
    pub fn select(&self, days: i64) -> Granularity {
        if days <= self.fine_max_days {
            Granularity::Fine
        } else if days <= self.hourly_max_days {
            Granularity::Hourly
        } else {
            Granularity::Coarse
        }
    }
}

/// Chooses the product for a range of `days` using the default NOAA limits.
///
/// # Examples
///
/// ```
/// use tidegauge::{select_product, Granularity};
///
/// assert_eq!(select_product(7), Granularity::Fine);
/// assert_eq!(select_product(90), Granularity::Hourly);
/// assert_eq!(select_product(800), Granularity::Coarse);
/// ```
pub fn select_product(days: i64) -> Granularity {
    ProductThresholds::default().select(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boundaries_are_inclusive() {
        assert_eq!(select_product(31), Granularity::Fine);
        assert_eq!(select_product(32), Granularity::Hourly);
        assert_eq!(select_product(365), Granularity::Hourly);
        assert_eq!(select_product(366), Granularity::Coarse);
    }

    #[test]
    fn test_degenerate_ranges_never_fail() {
        assert_eq!(select_product(0), Granularity::Fine);
        assert_eq!(select_product(-10), Granularity::Fine);
        assert_eq!(select_product(i64::MIN), Granularity::Fine);
        assert_eq!(select_product(i64::MAX), Granularity::Coarse);
    }

    #[test]
    fn test_custom_thresholds() {
        let thresholds = ProductThresholds {
            fine_max_days: 5,
            hourly_max_days: 10,
        };
        assert_eq!(thresholds.select(5), Granularity::Fine);
        assert_eq!(thresholds.select(6), Granularity::Hourly);
        assert_eq!(thresholds.select(11), Granularity::Coarse);
    }

    #[test]
    fn test_product_names() {
        assert_eq!(Granularity::Fine.product_name(), "water_level");
        assert_eq!(Granularity::Hourly.product_name(), "hourly_height");
        assert_eq!(Granularity::Coarse.product_name(), "daily_mean");
        assert_eq!(Granularity::Hourly.label(), "hourly height");
    }
}
