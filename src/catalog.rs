//! Built-in reference data: the city directory and EV model catalog.

use crate::model::{GeoPoint, NamedLocation, Vehicle};
use crate::traits::{LocationDirectory, VehicleCatalog};

/// A static city entry.
#[derive(Debug, Clone, Copy)]
pub struct City {
    pub name: &'static str,
    pub lat: f64,
    pub lng: f64,
}

impl City {
    pub const fn new(name: &'static str, lat: f64, lng: f64) -> Self {
        Self { name, lat, lng }
    }
}

pub const INDIAN_CITIES: &[City] = &[
    City::new("Mumbai", 19.0760, 72.8777),
    City::new("Delhi", 28.7041, 77.1025),
    City::new("Bengaluru", 12.9716, 77.5946),
    City::new("Hyderabad", 17.3850, 78.4867),
    City::new("Ahmedabad", 23.0225, 72.5714),
    City::new("Chennai", 13.0827, 80.2707),
    City::new("Kolkata", 22.5726, 88.3639),
    City::new("Surat", 21.1702, 72.8311),
    City::new("Pune", 18.5204, 73.8567),
    City::new("Jaipur", 26.9124, 75.7873),
    City::new("Thane", 19.2183, 72.9781),
];

/// Model name and real-world range in km.
pub const EV_MODELS: &[(&str, f64)] = &[
    ("Tesla Model 3", 450.0),
    ("Tata Nexon EV", 312.0),
    ("MG ZS EV", 419.0),
    ("Hyundai Kona", 452.0),
    ("Mahindra XUV400", 375.0),
    ("Kia EV6", 500.0),
];

/// Directory over [`INDIAN_CITIES`].
#[derive(Debug, Clone, Copy, Default)]
pub struct IndianCities;

impl LocationDirectory for IndianCities {
    fn location(&self, name: &str) -> Option<NamedLocation> {
        let city = INDIAN_CITIES.iter().find(|city| city.name == name)?;
        // The table is compiled in, so its coordinates are always in range
        let point = GeoPoint::new(city.lat, city.lng).ok()?;
        Some(NamedLocation::new(city.name, point))
    }

    fn names(&self) -> Vec<String> {
        INDIAN_CITIES.iter().map(|city| city.name.to_string()).collect()
    }
}

/// Catalog over [`EV_MODELS`].
#[derive(Debug, Clone, Copy, Default)]
pub struct EvModels;

impl EvModels {
    pub fn all(&self) -> Vec<Vehicle> {
        EV_MODELS
            .iter()
            .map(|(name, range)| Vehicle::new(*name, *range))
            .collect()
    }
}

impl VehicleCatalog for EvModels {
    fn vehicle(&self, model_name: &str) -> Option<Vehicle> {
        EV_MODELS
            .iter()
            .find(|(name, _)| *name == model_name)
            .map(|(name, range)| Vehicle::new(*name, *range))
    }
}
