use crate::stations::error::LocateStationError;
use crate::types::coordinate::Coordinate;
use crate::types::station::Station;
use ordered_float::OrderedFloat;

/// Finds the station closest to `target` and its distance in miles.
///
/// A plain linear scan: catalogs hold a few hundred entries. When several
/// stations are exactly equally close, the one listed first wins, so a fixed
/// catalog order always gives the same answer.
///
/// # Errors
///
/// Returns [`LocateStationError::EmptyCatalog`] if `candidates` is empty.
///
/// # Examples
///
/// ```
/// use tidegauge::{nearest, Coordinate, Station};
///
/// let stations = vec![
///     Station::new("8518750", "The Battery", Coordinate::new(40.7006, -74.0142)),
///     Station::new("8531680", "Sandy Hook", Coordinate::new(40.4669, -74.0094)),
/// ];
/// let (station, miles) = nearest(Coordinate::new(40.7128, -74.0060), &stations)?;
/// assert_eq!(station.id, "8518750");
/// assert!(miles < 1.0);
/// # Ok::<(), tidegauge::LocateStationError>(())
/// ```
pub fn nearest(
    target: Coordinate,
    candidates: &[Station],
) -> Result<(Station, f64), LocateStationError> {
    // min_by_key keeps the first of several equal minima.
    candidates
        .iter()
        .map(|station| (station, target.distance_to(&station.coordinate)))
        .min_by_key(|(_, miles)| OrderedFloat(*miles))
        .map(|(station, miles)| (station.clone(), miles))
        .ok_or(LocateStationError::EmptyCatalog)
}
