//! ev-trip-planner core
//!
//! Estimates road distance between two points and inserts charging stops
//! when an electric vehicle's charge cannot cover the trip.

pub mod error;
pub mod model;
pub mod traits;
pub mod haversine;
pub mod route;
pub mod locator;
pub mod simulator;
pub mod planner;
pub mod catalog;
pub mod registry;

pub use error::{LookupKind, PlanError, Result};
pub use model::{ChargerType, ChargingStop, GeoPoint, NamedLocation, PitStopRoute, Station, TripPlan, TripRequest, Vehicle};
pub use planner::{PlannerConfig, TripPlanner};
