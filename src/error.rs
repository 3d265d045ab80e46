//! Error taxonomy for the planning engine.

use thiserror::Error;

pub type Result<T, E = PlanError> = std::result::Result<T, E>;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("invalid coordinate: latitude {latitude}, longitude {longitude}")]
    InvalidCoordinate { latitude: f64, longitude: f64 },

    #[error("{kind} not found: {name}")]
    NotFound { kind: LookupKind, name: String },

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// The starting charge does not clear the safety margin, so no stop can be placed.
    #[error(
        "insufficient range: {available_km:.1} km available does not clear the {reserve_km:.1} km safety reserve"
    )]
    InsufficientRange { available_km: f64, reserve_km: f64 },

    /// A registry record that cannot be used as a station.
    #[error("invalid station record {name}: {reason}")]
    InvalidStation { name: String, reason: String },

    #[error("range simulation exceeded its iteration cap of {cap}")]
    IterationCapExceeded { cap: usize },

    #[error("station registry request failed: {0}")]
    Registry(#[from] reqwest::Error),
}

impl PlanError {
    pub fn not_found(kind: LookupKind, name: impl Into<String>) -> Self {
        PlanError::NotFound {
            kind,
            name: name.into(),
        }
    }

    pub fn invalid_configuration(reason: impl Into<String>) -> Self {
        PlanError::InvalidConfiguration(reason.into())
    }
}

/// What a failed lookup was looking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LookupKind {
    Location,
    Vehicle,
    Station,
}

impl std::fmt::Display for LookupKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            LookupKind::Location => "location",
            LookupKind::Vehicle => "vehicle model",
            LookupKind::Station => "charging station",
        };
        f.write_str(label)
    }
}
