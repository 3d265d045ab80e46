//! Value types shared by the planning flows.
//!
//! Everything here is an immutable snapshot: the engine never owns station or
//! location records, it only reads what the collaborators hand it.

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// A validated latitude/longitude pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = PlanError;

    fn try_from(raw: RawGeoPoint) -> Result<Self> {
        GeoPoint::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Creates a point, failing with `InvalidCoordinate` when either value is
    /// out of range or not finite.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(PlanError::InvalidCoordinate {
                latitude,
                longitude,
            });
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// A point of the known-location set, looked up by its unique name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedLocation {
    pub name: String,
    pub point: GeoPoint,
}

impl NamedLocation {
    pub fn new(name: impl Into<String>, point: GeoPoint) -> Self {
        Self {
            name: name.into(),
            point,
        }
    }
}

/// Charger category as tagged by the station registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargerType {
    Fast,
    Slow,
    Super,
    Other(String),
}

impl ChargerType {
    /// Maps the free-form tag used by the registry ("DC Fast", "Level 2",
    /// "Supercharger", ...) onto a charger category.
    pub fn from_tag(tag: &str) -> Self {
        let normalized = tag.trim().to_ascii_lowercase();
        if normalized.contains("super") {
            ChargerType::Super
        } else if normalized.contains("fast") {
            ChargerType::Fast
        } else if normalized.contains("level 2") || normalized.contains("slow") {
            ChargerType::Slow
        } else {
            ChargerType::Other(tag.trim().to_string())
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Station {
    /// Registry identifier, when the snapshot came from the registry.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub address: String,
    pub point: GeoPoint,
    pub charger_type: ChargerType,
    /// Price per kWh.
    pub price: f64,
    pub available: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub model_name: String,
    pub max_range_km: f64,
}

impl Vehicle {
    pub fn new(model_name: impl Into<String>, max_range_km: f64) -> Self {
        Self {
            model_name: model_name.into(),
            max_range_km,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct TripRequest {
    pub source: NamedLocation,
    pub destination: NamedLocation,
    pub vehicle: Vehicle,
    /// Current state of charge, 0..=100.
    pub battery_percent: u8,
}

/// A recharge stop inserted by the range simulation, in travel order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChargingStop {
    pub sequence_index: usize,
    /// Distance from trip start, rounded to whole kilometers.
    pub cumulative_distance_km: f64,
    /// Exact distance driven since the previous stop (or the trip start).
    pub leg_distance_km: f64,
    pub station_label: String,
    pub charger_kind: String,
    pub estimated_charge_time_minutes: u32,
    /// Price per kWh shown for this stop.
    pub price_estimate: f64,
    pub open_ports: u8,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripPlan {
    pub source: String,
    pub destination: String,
    pub vehicle_model: String,
    /// Estimated road distance, rounded to whole kilometers.
    pub total_distance_km: f64,
    pub estimated_duration_label: String,
    pub stops: Vec<ChargingStop>,
    pub total_charging_minutes: u32,
    pub estimated_cost: f64,
}

impl TripPlan {
    /// True when the starting charge covers the whole trip.
    pub fn is_non_stop(&self) -> bool {
        self.stops.is_empty()
    }
}

/// The map-assist result: start, a charging pit stop, then the destination.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PitStopRoute {
    pub start: NamedLocation,
    pub station: Station,
    pub end: NamedLocation,
    /// Great-circle distance from the start to the station.
    pub distance_to_station_km: f64,
}

impl PitStopRoute {
    /// Waypoints in travel order.
    pub fn waypoints(&self) -> [GeoPoint; 3] {
        [self.start.point, self.station.point, self.end.point]
    }
}
