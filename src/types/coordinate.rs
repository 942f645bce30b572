//! Geographic coordinates in decimal degrees.

use crate::stations::distance::distance;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A `(latitude, longitude)` pair in decimal degrees.
///
/// Latitude is expected in `[-90, 90]` and longitude in `[-180, 180]`. Use
/// [`Coordinate::checked`] at the boundary where untrusted values come in;
/// [`Coordinate::new`] stores whatever it is given.
///
/// # Examples
///
/// ```
/// use tidegauge::Coordinate;
///
/// let battery = Coordinate::new(40.7006, -74.0142);
/// assert_eq!(battery.latitude, 40.7006);
/// assert!(Coordinate::checked(91.0, 0.0).is_none());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    /// Latitude in decimal degrees (positive for North).
    pub latitude: f64,
    /// Longitude in decimal degrees (positive for East).
    pub longitude: f64,
}

impl Coordinate {
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Returns a coordinate only if both components are finite and within range.
    pub fn checked(latitude: f64, longitude: f64) -> Option<Self> {
        let coordinate = Self::new(latitude, longitude);
        coordinate.is_valid().then_some(coordinate)
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }

    /// Great-circle distance to `other` in miles.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        distance(
            self.latitude,
            self.longitude,
            other.latitude,
            other.longitude,
        )
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.4}, {:.4})", self.latitude, self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_checked_rejects_out_of_range() {
        assert!(Coordinate::checked(40.7, -74.0).is_some());
        assert!(Coordinate::checked(90.0, 180.0).is_some());
        assert!(Coordinate::checked(-90.0, -180.0).is_some());
        assert!(Coordinate::checked(90.5, 0.0).is_none());
        assert!(Coordinate::checked(0.0, -180.1).is_none());
        assert!(Coordinate::checked(f64::NAN, 0.0).is_none());
    }

    #[test]
    fn test_display_rounds_to_four_places() {
        let nyc = Coordinate::new(40.712_776, -74.005_974);
        assert_eq!(nyc.to_string(), "(40.7128, -74.0060)");
    }

    #[test]
    fn test_distance_to_matches_free_function() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        assert_eq!(a.distance_to(&b), distance(0.0, 0.0, 0.0, 1.0));
    }
}
