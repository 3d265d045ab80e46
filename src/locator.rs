//! Nearest charging station lookup.
//!
//! A linear scan over the candidate snapshot: O(n) per query, which is the
//! scaling limit for large station sets. No spatial index is kept.

use crate::error::{LookupKind, PlanError, Result};
use crate::haversine::distance_km;
use crate::model::{GeoPoint, Station};

/// Returns the station closest to `origin` by great-circle distance.
///
/// Ties keep the first station in input order. An empty candidate set is
/// `NotFound`, never a zero-distance match.
pub fn nearest(origin: GeoPoint, stations: &[Station]) -> Result<&Station> {
    nearest_where(origin, stations, |_| true)
}

/// Like [`nearest`], but only considers stations flagged as available.
pub fn nearest_available(origin: GeoPoint, stations: &[Station]) -> Result<&Station> {
    nearest_where(origin, stations, |station| station.available)
}

fn nearest_where<F>(origin: GeoPoint, stations: &[Station], accept: F) -> Result<&Station>
where
    F: Fn(&Station) -> bool,
{
    let mut best: Option<(&Station, f64)> = None;

    for station in stations.iter().filter(|station| accept(station)) {
        let dist = distance_km(origin, station.point);
        match best {
            Some((_, best_dist)) if dist >= best_dist => {}
            _ => best = Some((station, dist)),
        }
    }

    match best {
        Some((station, dist)) => {
            tracing::debug!("nearest station to origin is {} at {:.1} km", station.name, dist);
            Ok(station)
        }
        None => Err(PlanError::not_found(
            LookupKind::Station,
            format!(
                "no candidate near ({:.4}, {:.4})",
                origin.latitude(),
                origin.longitude()
            ),
        )),
    }
}
