//! Road distance estimation without a routing service.
//!
//! Real roads detour around terrain, so the great-circle distance is scaled by
//! a fixed curvature factor. The factor is not derived from any road graph.

use serde::{Deserialize, Serialize};

use crate::haversine::distance_km;
use crate::model::GeoPoint;

/// Average detour ratio of a road network over a straight line.
pub const DEFAULT_CURVATURE_FACTOR: f64 = 1.2;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RouteEstimator {
    pub curvature_factor: f64,
}

impl Default for RouteEstimator {
    fn default() -> Self {
        Self {
            curvature_factor: DEFAULT_CURVATURE_FACTOR,
        }
    }
}

impl RouteEstimator {
    pub fn new(curvature_factor: f64) -> Self {
        Self { curvature_factor }
    }

    /// Estimated road distance in kilometers, at full precision.
    pub fn road_distance_km(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        estimate_road_distance_km(from, to, self.curvature_factor)
    }
}

/// Great-circle distance scaled by `curvature_factor`.
///
/// Callers round for display; the range simulation consumes the unrounded value.
pub fn estimate_road_distance_km(from: GeoPoint, to: GeoPoint, curvature_factor: f64) -> f64 {
    distance_km(from, to) * curvature_factor
}
