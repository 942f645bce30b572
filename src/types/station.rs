//! Defines the data structure representing a NOAA water level station.

use crate::types::coordinate::Coordinate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fixed water level observation point from the NOAA CO-OPS catalog.
///
/// Stations are built from the catalog response on every lookup and are never
/// stored between requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    /// The NOAA station identifier (e.g., "8518750" for The Battery, NY).
    pub id: String,
    /// Human readable station name.
    pub name: String,
    /// Where the station is.
    pub coordinate: Coordinate,
}

impl Station {
    pub fn new(id: impl Into<String>, name: impl Into<String>, coordinate: Coordinate) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            coordinate,
        }
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}
