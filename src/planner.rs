//! Trip planning and map-assist flows.
//!
//! Trip planning estimates the road distance, runs the range simulation and
//! assembles a display-ready [`TripPlan`]. Map assist picks the charging
//! station nearest to the trip's start and returns a Start -> Station -> End
//! route. Both are pure functions of their inputs.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{LookupKind, PlanError, Result};
use crate::haversine::distance_km;
use crate::locator::{nearest, nearest_available};
use crate::model::{NamedLocation, PitStopRoute, Station, TripPlan, TripRequest};
use crate::route::RouteEstimator;
use crate::simulator::{simulate, SeededPricing, SimulateOptions, DEFAULT_PRICING_SEED};
use crate::traits::{LocationDirectory, StationRegistry, VehicleCatalog};

const FNV_OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
const FNV_PRIME: u64 = 0x0000_0100_0000_01b3;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub estimator: RouteEstimator,
    pub simulate: SimulateOptions,
    /// Base seed for per-stop display prices.
    pub pricing_seed: u64,
    /// Flat trip cost per estimated road kilometer.
    pub cost_per_km: f64,
    /// Map assist ignores stations not flagged as available.
    pub available_stations_only: bool,
    /// Assumed average driving speed behind the duration label.
    pub average_speed_kmh: f64,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            estimator: RouteEstimator::default(),
            simulate: SimulateOptions::default(),
            pricing_seed: DEFAULT_PRICING_SEED,
            cost_per_km: 1.5,
            available_stations_only: false,
            average_speed_kmh: 60.0,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TripPlanner {
    config: PlannerConfig,
}

impl TripPlanner {
    pub fn new(config: PlannerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plans a single trip.
    pub fn plan(&self, request: &TripRequest) -> Result<TripPlan> {
        if !self.config.average_speed_kmh.is_finite() || self.config.average_speed_kmh <= 0.0 {
            return Err(PlanError::invalid_configuration(format!(
                "average speed {} km/h must be positive",
                self.config.average_speed_kmh
            )));
        }
        if request.battery_percent > 100 {
            return Err(PlanError::invalid_configuration(format!(
                "battery percent {} must be within [0, 100]",
                request.battery_percent
            )));
        }

        let road_km = self
            .config
            .estimator
            .road_distance_km(request.source.point, request.destination.point);

        let mut pricing = SeededPricing::new(self.request_seed(request));
        let stops = simulate(
            road_km,
            request.vehicle.max_range_km,
            f64::from(request.battery_percent) / 100.0,
            &self.config.simulate,
            &mut pricing,
        )
        .inspect_err(|err| {
            tracing::warn!(
                "cannot plan {} -> {} with {}: {}",
                request.source.name,
                request.destination.name,
                request.vehicle.model_name,
                err
            );
        })?;

        let total_distance_km = road_km.round();
        let stop_count = stops.len() as u32;
        let plan = TripPlan {
            source: request.source.name.clone(),
            destination: request.destination.name.clone(),
            vehicle_model: request.vehicle.model_name.clone(),
            total_distance_km,
            estimated_duration_label: duration_label(total_distance_km, stop_count, self.config.average_speed_kmh),
            total_charging_minutes: stop_count * self.config.simulate.charge_time_minutes,
            estimated_cost: (total_distance_km * self.config.cost_per_km).round(),
            stops,
        };

        tracing::debug!(
            "planned {} -> {}: {} km, {} stops",
            plan.source,
            plan.destination,
            plan.total_distance_km,
            plan.stops.len()
        );

        Ok(plan)
    }

    /// Resolves names through the collaborators, then plans.
    pub fn plan_by_names<D, C>(
        &self,
        directory: &D,
        catalog: &C,
        source: &str,
        destination: &str,
        model_name: &str,
        battery_percent: u8,
    ) -> Result<TripPlan>
    where
        D: LocationDirectory + ?Sized,
        C: VehicleCatalog + ?Sized,
    {
        let request = TripRequest {
            source: lookup_location(directory, source)?,
            destination: lookup_location(directory, destination)?,
            vehicle: catalog
                .vehicle(model_name)
                .ok_or_else(|| PlanError::not_found(LookupKind::Vehicle, model_name))?,
            battery_percent,
        };

        self.plan(&request)
    }

    /// Plans independent requests in parallel; results keep the input order.
    pub fn plan_batch(&self, requests: &[TripRequest]) -> Vec<Result<TripPlan>> {
        requests.par_iter().map(|request| self.plan(request)).collect()
    }

    /// Map assist: routes through the station nearest to `source`.
    ///
    /// The destination side of the route is not considered when choosing the
    /// station.
    pub fn pit_stop(
        &self,
        source: &NamedLocation,
        destination: &NamedLocation,
        stations: &[Station],
    ) -> Result<PitStopRoute> {
        let station = if self.config.available_stations_only {
            nearest_available(source.point, stations)?
        } else {
            nearest(source.point, stations)?
        };

        Ok(PitStopRoute {
            start: source.clone(),
            station: station.clone(),
            end: destination.clone(),
            distance_to_station_km: distance_km(source.point, station.point),
        })
    }

    /// Map assist over named locations and a registry snapshot.
    pub fn pit_stop_by_names<D, R>(
        &self,
        directory: &D,
        registry: &R,
        source: &str,
        destination: &str,
    ) -> Result<PitStopRoute>
    where
        D: LocationDirectory + ?Sized,
        R: StationRegistry + ?Sized,
    {
        let start = lookup_location(directory, source)?;
        let end = lookup_location(directory, destination)?;
        let stations = registry.stations()?;
        self.pit_stop(&start, &end, &stations)
    }

    /// Pricing seed derived from the configured seed and the request itself, so
    /// concurrent plans never share generator state.
    fn request_seed(&self, request: &TripRequest) -> u64 {
        mix_seed(
            self.config.pricing_seed,
            &[
                request.source.name.as_bytes(),
                request.destination.name.as_bytes(),
                request.vehicle.model_name.as_bytes(),
                &[request.battery_percent],
            ],
        )
    }
}

/// FNV-1a over the base seed and each part, finished with the SplitMix64
/// mixer. Stable across builds and platforms.
fn mix_seed(base: u64, parts: &[&[u8]]) -> u64 {
    let mut hash = FNV_OFFSET_BASIS;
    let mut feed = |byte: u8| {
        hash ^= u64::from(byte);
        hash = hash.wrapping_mul(FNV_PRIME);
    };

    base.to_le_bytes().into_iter().for_each(&mut feed);
    for part in parts {
        part.iter().copied().for_each(&mut feed);
        // Separator so ("ab", "c") and ("a", "bc") differ
        feed(0xff);
    }

    let mut z = hash.wrapping_add(0x9e37_79b9_7f4a_7c15);
    z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

fn lookup_location<D>(directory: &D, name: &str) -> Result<NamedLocation>
where
    D: LocationDirectory + ?Sized,
{
    directory
        .location(name)
        .ok_or_else(|| PlanError::not_found(LookupKind::Location, name))
}

/// "{hours}h {minutes}m" for a rounded road distance, one extra hour per stop.
///
/// Minutes are the kilometers left over after whole hours, which reads as
/// clock minutes at the default 60 km/h.
fn duration_label(distance_km: f64, stops: u32, speed_kmh: f64) -> String {
    let hours = (distance_km / speed_kmh).floor() as u32 + stops;
    let minutes = ((distance_km % speed_kmh) / speed_kmh * 60.0).round() as u32;
    format!("{hours}h {minutes}m")
}
