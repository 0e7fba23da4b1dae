//! # Device telemetry
//!
//! `GET /api/devices` returns an array of:
//!
//! ```json
//! { "name": "rover-1", "deviceData": { "latitude": 10.0, "longitude": 20.0, "battery": 87 } }
//! ```
//!
//! Devices are read-only on the client and re-fetched on every directory load.

use serde::{Deserialize, Serialize};

/// A remote device and its last reported telemetry.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    pub name: String,
    pub device_data: DeviceData,
}

/// Last known position and battery level.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceData {
    pub latitude: f64,
    pub longitude: f64,
    /// Battery charge in percent.
    pub battery: f64,
}

impl Device {
    pub fn new(name: impl Into<String>, latitude: f64, longitude: f64, battery: f64) -> Self {
        Self {
            name: name.into(),
            device_data: DeviceData {
                latitude,
                longitude,
                battery,
            },
        }
    }

    /// `[latitude, longitude]`, the order Leaflet expects.
    pub fn position(&self) -> [f64; 2] {
        [self.device_data.latitude, self.device_data.longitude]
    }
}
