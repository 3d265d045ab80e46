//! Charging stations along major Indian highways.
//!
//! Coordinates are approximate highway positions; prices are per kWh.

use ev_trip_planner::{ChargerType, GeoPoint, NamedLocation, Station, TripRequest, Vehicle};

/// Builder for test stations with sensible defaults.
#[derive(Clone, Debug)]
pub struct TestStation {
    name: String,
    lat: f64,
    lng: f64,
    charger_type: ChargerType,
    price: f64,
    available: bool,
}

impl TestStation {
    pub fn new(name: &str, lat: f64, lng: f64) -> Self {
        Self {
            name: name.to_string(),
            lat,
            lng,
            charger_type: ChargerType::Fast,
            price: 18.0,
            available: true,
        }
    }

    pub fn charger(mut self, charger_type: ChargerType) -> Self {
        self.charger_type = charger_type;
        self
    }

    pub fn price(mut self, price: f64) -> Self {
        self.price = price;
        self
    }

    pub fn unavailable(mut self) -> Self {
        self.available = false;
        self
    }

    pub fn build(self) -> Station {
        Station {
            id: None,
            address: format!("{} highway plaza", self.name),
            name: self.name,
            point: GeoPoint::new(self.lat, self.lng).expect("fixture coordinates are valid"),
            charger_type: self.charger_type,
            price: self.price,
            available: self.available,
        }
    }
}

pub fn highway_stations() -> Vec<Station> {
    vec![
        TestStation::new("Lonavala Expressway Plaza", 18.7546, 73.4062).build(),
        TestStation::new("Vapi NH48 Hub", 20.3893, 72.9106)
            .charger(ChargerType::Super)
            .price(19.5)
            .build(),
        TestStation::new("Udaipur Bypass", 24.5854, 73.7125)
            .charger(ChargerType::Slow)
            .price(14.0)
            .build(),
        TestStation::new("Gurugram Toll", 28.4595, 77.0266).build(),
        TestStation::new("Krishnagiri Junction", 12.5186, 78.2137)
            .unavailable()
            .build(),
        TestStation::new("Thane Ghodbunder Road", 19.2307, 72.9781).build(),
    ]
}

pub fn location(name: &str, lat: f64, lng: f64) -> NamedLocation {
    NamedLocation::new(name, GeoPoint::new(lat, lng).expect("fixture coordinates are valid"))
}

pub fn mumbai() -> NamedLocation {
    location("Mumbai", 19.0760, 72.8777)
}

pub fn delhi() -> NamedLocation {
    location("Delhi", 28.7041, 77.1025)
}

pub fn pune() -> NamedLocation {
    location("Pune", 18.5204, 73.8567)
}

pub fn trip(source: NamedLocation, destination: NamedLocation, model: &str, range_km: f64, battery: u8) -> TripRequest {
    TripRequest {
        source,
        destination,
        vehicle: Vehicle::new(model, range_km),
        battery_percent: battery,
    }
}
