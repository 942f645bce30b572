//! Great-circle distance between two points given in decimal degrees.

/// Mean Earth radius used for all distances, in miles.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Haversine distance in miles between `(lat1, lon1)` and `(lat2, lon2)`.
///
/// Treats the Earth as a sphere, which is plenty for ranking nearby stations.
/// No range checks: malformed input yields a NaN-bearing result.
///
/// # Examples
///
/// ```
/// use tidegauge::distance;
///
/// // One degree of longitude at the equator.
/// let miles = distance(0.0, 0.0, 0.0, 1.0);
/// assert!((miles - 69.09).abs() < 0.5);
/// ```
pub fn distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();
    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1.to_radians().cos() * lat2.to_radians().cos() * (delta_lon / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_MILES * a.sqrt().asin()
}
