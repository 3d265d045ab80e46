//! HTTP adapter for the station registry (`GET /api/stations`).

use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::model::{ChargerType, GeoPoint, Station};
use crate::traits::StationRegistry;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    pub base_url: String,
    pub timeout_secs: u64,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct HttpStationRegistry {
    config: RegistryConfig,
    client: reqwest::blocking::Client,
}

impl HttpStationRegistry {
    pub fn new(config: RegistryConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    fn url(&self) -> String {
        format!("{}/api/stations", self.config.base_url.trim_end_matches('/'))
    }
}

impl StationRegistry for HttpStationRegistry {
    fn stations(&self) -> Result<Vec<Station>> {
        let url = self.url();
        tracing::info!("fetching station snapshot from {}", url);

        let records = self
            .client
            .get(url)
            .send()
            .and_then(|resp| resp.error_for_status())
            .and_then(|resp| resp.json::<Vec<StationRecord>>())?;

        let stations = decode_records(records)?;
        tracing::info!("received {} stations", stations.len());
        Ok(stations)
    }
}

/// Station as stored by the registry service.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationRecord {
    #[serde(rename = "_id", default)]
    id: Option<String>,
    name: String,
    #[serde(default)]
    address: String,
    latitude: f64,
    longitude: f64,
    #[serde(default)]
    charger_type: String,
    #[serde(default)]
    availability: bool,
    #[serde(default)]
    price: f64,
}

impl StationRecord {
    fn into_station(self) -> Result<Station> {
        if !self.price.is_finite() || self.price < 0.0 {
            tracing::warn!("rejecting station {} with price {}", self.name, self.price);
            return Err(PlanError::InvalidStation {
                reason: format!("price {} must be a non-negative number", self.price),
                name: self.name,
            });
        }

        Ok(Station {
            id: self.id,
            name: self.name,
            address: self.address,
            point: GeoPoint::new(self.latitude, self.longitude)?,
            charger_type: ChargerType::from_tag(&self.charger_type),
            price: self.price,
            available: self.availability,
        })
    }
}

fn decode_records(records: Vec<StationRecord>) -> Result<Vec<Station>> {
    records.into_iter().map(StationRecord::into_station).collect()
}
