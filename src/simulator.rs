//! Range simulation and charging stop insertion.
//!
//! Greedy single pass: drive until the charge reaches the safety floor, stop,
//! recharge to the target fraction, repeat until the remaining range covers
//! the rest of the trip.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::model::ChargingStop;

/// Seed used when no explicit pricing seed is configured.
pub const DEFAULT_PRICING_SEED: u64 = 42;

/// Most charging stops a single trip may need before it is rejected.
pub const MAX_STOPS: usize = 100_000;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulateOptions {
    /// Fraction of full range kept as an un-drivable buffer.
    pub safety_margin_fraction: f64,
    /// Fraction of full range reached after each fast-charge stop.
    pub recharge_target_fraction: f64,
    /// Time to recharge to the target, per stop.
    pub charge_time_minutes: u32,
    /// Brand used when synthesizing stop labels.
    pub station_brand: String,
    pub charger_kind: String,
}

impl Default for SimulateOptions {
    fn default() -> Self {
        Self {
            safety_margin_fraction: 0.10,
            recharge_target_fraction: 0.80,
            charge_time_minutes: 40,
            station_brand: "Indian Fuel".to_string(),
            charger_kind: "DC Fast Charger".to_string(),
        }
    }
}

impl SimulateOptions {
    fn validate(&self) -> Result<()> {
        let margin = self.safety_margin_fraction;
        let target = self.recharge_target_fraction;

        if !(0.0..=1.0).contains(&margin) {
            return Err(PlanError::invalid_configuration(format!(
                "safety margin {margin} must be within [0, 1]"
            )));
        }
        if !(0.0..=1.0).contains(&target) {
            return Err(PlanError::invalid_configuration(format!(
                "recharge target {target} must be within [0, 1]"
            )));
        }
        if target <= margin {
            return Err(PlanError::invalid_configuration(format!(
                "recharge target {target} must exceed safety margin {margin}"
            )));
        }
        Ok(())
    }
}

/// Source of the display price and port count attached to each stop.
pub trait StopPricing {
    /// Price per kWh for the stop with the given sequence index.
    fn price_per_kwh(&mut self, sequence_index: usize) -> f64;

    /// Number of free charging ports shown for the stop.
    fn open_ports(&mut self, sequence_index: usize) -> u8;
}

/// Reproducible pricing backed by a seeded ChaCha8 generator.
///
/// Prices fall in `[18.0, 20.0)` per kWh and port counts in `1..=3`.
#[derive(Debug, Clone)]
pub struct SeededPricing {
    rng: ChaCha8Rng,
}

impl SeededPricing {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Default for SeededPricing {
    fn default() -> Self {
        Self::new(DEFAULT_PRICING_SEED)
    }
}

impl StopPricing for SeededPricing {
    fn price_per_kwh(&mut self, _sequence_index: usize) -> f64 {
        let price: f64 = 18.0 + self.rng.gen_range(0.0..2.0);
        (price * 100.0).round() / 100.0
    }

    fn open_ports(&mut self, _sequence_index: usize) -> u8 {
        self.rng.gen_range(1..=3)
    }
}

/// Fixed pricing, handy when the display values do not matter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlatPricing {
    pub price_per_kwh: f64,
    pub open_ports: u8,
}

impl StopPricing for FlatPricing {
    fn price_per_kwh(&mut self, _sequence_index: usize) -> f64 {
        self.price_per_kwh
    }

    fn open_ports(&mut self, _sequence_index: usize) -> u8 {
        self.open_ports
    }
}

/// Upper bound on loop iterations for a validated configuration.
///
/// After the first stop every leg covers at least
/// `max_range_km * (target - margin)`, so this many iterations always suffice.
/// Trips that would need more than [`MAX_STOPS`] stops are `InvalidConfiguration`.
pub fn iteration_cap(total_distance_km: f64, max_range_km: f64, options: &SimulateOptions) -> Result<usize> {
    let min_leg = max_range_km * (options.recharge_target_fraction - options.safety_margin_fraction);
    let legs = (total_distance_km / min_leg).ceil();

    if !legs.is_finite() || legs >= MAX_STOPS as f64 {
        return Err(PlanError::invalid_configuration(format!(
            "{total_distance_km} km would need more than {MAX_STOPS} charging stops with a {max_range_km} km range"
        )));
    }

    Ok((legs as usize).saturating_add(1))
}

/// Computes the ordered charging stops for a trip.
///
/// Returns an empty list when the starting charge covers `total_distance_km`.
pub fn simulate<P>(
    total_distance_km: f64,
    max_range_km: f64,
    start_charge_fraction: f64,
    options: &SimulateOptions,
    pricing: &mut P,
) -> Result<Vec<ChargingStop>>
where
    P: StopPricing + ?Sized,
{
    options.validate()?;

    if !max_range_km.is_finite() || max_range_km <= 0.0 {
        return Err(PlanError::invalid_configuration(format!(
            "max range {max_range_km} km must be positive"
        )));
    }
    if !(0.0..=1.0).contains(&start_charge_fraction) {
        return Err(PlanError::invalid_configuration(format!(
            "start charge {start_charge_fraction} must be within [0, 1]"
        )));
    }
    if !total_distance_km.is_finite() || total_distance_km < 0.0 {
        return Err(PlanError::invalid_configuration(format!(
            "total distance {total_distance_km} km must be a non-negative number"
        )));
    }

    let reserve_km = max_range_km * options.safety_margin_fraction;
    let recharged_km = max_range_km * options.recharge_target_fraction;
    let cap = iteration_cap(total_distance_km, max_range_km, options)?;

    let mut available_km = max_range_km * start_charge_fraction;
    let mut distance_covered = 0.0;
    let mut stops: Vec<ChargingStop> = Vec::new();

    while distance_covered + available_km < total_distance_km {
        if stops.len() >= cap {
            return Err(PlanError::IterationCapExceeded { cap });
        }

        // Drive until the charge reaches the safety floor
        let drivable_now = available_km - reserve_km;
        if drivable_now <= 0.0 {
            return Err(PlanError::InsufficientRange {
                available_km,
                reserve_km,
            });
        }

        distance_covered += drivable_now;

        let sequence_index = stops.len() + 1;
        let stop = ChargingStop {
            sequence_index,
            cumulative_distance_km: distance_covered.round(),
            leg_distance_km: drivable_now,
            station_label: format!("{} (Highway Stop {})", options.station_brand, sequence_index),
            charger_kind: options.charger_kind.clone(),
            estimated_charge_time_minutes: options.charge_time_minutes,
            price_estimate: pricing.price_per_kwh(sequence_index),
            open_ports: pricing.open_ports(sequence_index),
        };

        tracing::debug!(
            "stop {} at {:.1} km after a {:.1} km leg",
            sequence_index,
            distance_covered,
            drivable_now
        );
        stops.push(stop);

        available_km = recharged_km;
    }

    Ok(stops)
}
