//! Seams to the collaborators that own reference data.
//!
//! The engine only reads from these. Hosts implement them over whatever store
//! they have; built-in implementations live in [`crate::catalog`] and
//! [`crate::registry`].

use crate::error::Result;
use crate::model::{NamedLocation, Station, Vehicle};

/// Read-only lookup of known locations by exact name.
pub trait LocationDirectory {
    fn location(&self, name: &str) -> Option<NamedLocation>;

    /// All known location names, in directory order.
    fn names(&self) -> Vec<String>;
}

/// Read-only snapshot of charging stations.
///
/// The order of the returned sequence is whatever the registry yields; the
/// locator relies on it for tie-breaking and never re-sorts.
pub trait StationRegistry {
    fn stations(&self) -> Result<Vec<Station>>;
}

/// Read-only lookup of vehicle profiles by model name.
pub trait VehicleCatalog {
    fn vehicle(&self, model_name: &str) -> Option<Vehicle>;
}

impl StationRegistry for [Station] {
    fn stations(&self) -> Result<Vec<Station>> {
        Ok(self.to_vec())
    }
}

impl StationRegistry for Vec<Station> {
    fn stations(&self) -> Result<Vec<Station>> {
        Ok(self.clone())
    }
}
