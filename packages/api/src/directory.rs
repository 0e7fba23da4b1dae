//! # Device directory
//!
//! Loads the device list for the map and derives everything the map needs from
//! it: the initial center and one [`MapMarker`] per device.
//!
//! The center is the componentwise arithmetic mean of all device coordinates. An
//! empty list keeps whatever center was in place before, so the map falls back to
//! [`DEFAULT_CENTER`] on first load.

use serde::Serialize;

use crate::client::DeviceApi;
use crate::error::{ApiError, Result};
use crate::models::Device;

/// Map center used until a non-empty device list arrives.
pub const DEFAULT_CENTER: MapCenter = MapCenter {
    latitude: 51.505,
    longitude: -0.09,
};

pub const DEFAULT_ZOOM: u8 = 13;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MapCenter {
    pub latitude: f64,
    pub longitude: f64,
}

impl MapCenter {
    pub fn as_array(&self) -> [f64; 2] {
        [self.latitude, self.longitude]
    }
}

impl Default for MapCenter {
    fn default() -> Self {
        DEFAULT_CENTER
    }
}

/// Data contract of a single map marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    /// `[latitude, longitude]`
    pub position: [f64; 2],
    pub label: String,
    pub detail: MarkerDetail,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MarkerDetail {
    pub battery: f64,
}

impl From<&Device> for MapMarker {
    fn from(device: &Device) -> Self {
        Self {
            position: device.position(),
            label: device.name.clone(),
            detail: MarkerDetail {
                battery: device.device_data.battery,
            },
        }
    }
}

/// Mean of all device coordinates, or `previous` for an empty list.
pub fn map_center(devices: &[Device], previous: MapCenter) -> MapCenter {
    if devices.is_empty() {
        return previous;
    }

    let count = devices.len() as f64;
    let (lat_sum, lng_sum) = devices.iter().fold((0.0, 0.0), |(lat, lng), d| {
        (lat + d.device_data.latitude, lng + d.device_data.longitude)
    });

    MapCenter {
        latitude: lat_sum / count,
        longitude: lng_sum / count,
    }
}

/// One authenticated read of the device list.
pub async fn fetch_devices<A: DeviceApi>(api: &A, token: &str) -> Result<Vec<Device>> {
    let devices = api.devices(token).await?;
    tracing::debug!("Fetched {} devices", devices.len());
    Ok(devices)
}

/// Presentation state of the map page: devices, center, loading flag.
#[derive(Debug, Clone, PartialEq)]
pub struct DeviceDirectory {
    devices: Vec<Device>,
    center: MapCenter,
    loading: bool,
    error: Option<ApiError>,
}

impl Default for DeviceDirectory {
    fn default() -> Self {
        Self {
            devices: Vec::new(),
            center: DEFAULT_CENTER,
            loading: true,
            error: None,
        }
    }
}

impl DeviceDirectory {
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn center(&self) -> MapCenter {
        self.center
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&ApiError> {
        self.error.as_ref()
    }

    pub fn begin_load(&mut self) {
        self.loading = true;
    }

    /// Adopt a fetch result. A failure keeps the previous devices and center.
    pub fn finish_load(&mut self, result: Result<Vec<Device>>) {
        match result {
            Ok(devices) => {
                self.center = map_center(&devices, self.center);
                self.devices = devices;
                self.error = None;
            }
            Err(e) => {
                tracing::error!("Failed to load devices: {}", e);
                self.error = Some(e);
            }
        }
        self.loading = false;
    }

    pub fn markers(&self) -> Vec<MapMarker> {
        self.devices.iter().map(MapMarker::from).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::FakeApi;

    #[test]
    fn test_center_is_componentwise_mean() {
        let devices = vec![
            Device::new("a", 10.0, 20.0, 90.0),
            Device::new("b", 10.0, 22.0, 80.0),
            Device::new("c", 10.0, 24.0, 70.0),
        ];
        let center = map_center(&devices, DEFAULT_CENTER);
        assert_eq!(center.as_array(), [10.0, 22.0]);
    }

    #[test]
    fn test_center_ignores_order() {
        let mut devices = vec![
            Device::new("a", -4.0, 8.0, 1.0),
            Device::new("b", 2.0, 1.0, 1.0),
            Device::new("c", 5.0, -3.0, 1.0),
        ];
        let forward = map_center(&devices, DEFAULT_CENTER);
        devices.reverse();
        let backward = map_center(&devices, DEFAULT_CENTER);

        assert!((forward.latitude - 1.0).abs() < 1e-9);
        assert!((forward.longitude - 2.0).abs() < 1e-9);
        assert!((forward.latitude - backward.latitude).abs() < 1e-9);
        assert!((forward.longitude - backward.longitude).abs() < 1e-9);
    }

    #[test]
    fn test_empty_list_keeps_previous_center() {
        let previous = MapCenter {
            latitude: 1.5,
            longitude: 2.5,
        };
        assert_eq!(map_center(&[], previous), previous);
        assert_eq!(map_center(&[], DEFAULT_CENTER), DEFAULT_CENTER);
    }

    #[test]
    fn test_directory_starts_loading_at_default_center() {
        let directory = DeviceDirectory::default();
        assert!(directory.is_loading());
        assert_eq!(directory.center(), DEFAULT_CENTER);
        assert!(directory.markers().is_empty());
    }

    #[test]
    fn test_finish_load_adopts_devices() {
        let mut directory = DeviceDirectory::default();
        directory.finish_load(Ok(vec![
            Device::new("rover-1", 10.0, 20.0, 87.0),
            Device::new("rover-2", 12.0, 22.0, 40.0),
        ]));

        assert!(!directory.is_loading());
        assert_eq!(directory.devices().len(), 2);
        assert_eq!(directory.center().as_array(), [11.0, 21.0]);

        let markers = directory.markers();
        assert_eq!(markers[0].position, [10.0, 20.0]);
        assert_eq!(markers[0].label, "rover-1");
        assert_eq!(markers[1].detail.battery, 40.0);
    }

    #[test]
    fn test_failed_load_keeps_previous_state() {
        let mut directory = DeviceDirectory::default();
        directory.finish_load(Ok(vec![Device::new("rover-1", 10.0, 20.0, 87.0)]));

        directory.begin_load();
        assert!(directory.is_loading());
        directory.finish_load(Err(ApiError::Status { status: 500 }));

        assert!(!directory.is_loading());
        assert_eq!(directory.error(), Some(&ApiError::Status { status: 500 }));
        assert_eq!(directory.devices().len(), 1);
        assert_eq!(directory.center().as_array(), [10.0, 20.0]);
    }

    #[test]
    fn test_marker_serializes_to_leaflet_shape() {
        let marker = MapMarker::from(&Device::new("rover-1", 10.0, 20.0, 87.0));
        let json = serde_json::to_value(&marker).unwrap();
        assert_eq!(json["position"], serde_json::json!([10.0, 20.0]));
        assert_eq!(json["label"], "rover-1");
        assert_eq!(json["detail"]["battery"], 87.0);
    }

    #[tokio::test]
    async fn test_fetch_devices_passes_token() {
        let api = FakeApi::default().with_devices(vec![Device::new("a", 1.0, 2.0, 3.0)]);
        let devices = fetch_devices(&api, "tok").await.unwrap();

        assert_eq!(devices.len(), 1);
        assert_eq!(api.calls(), vec!["devices tok".to_string()]);
    }
}
