//! Leaflet device map.
//!
//! Rendering is delegated to Leaflet (loaded from unpkg). Rust hands the map a
//! single JSON setup message and listens for the names of devices whose "Book me"
//! popup button was pressed.

use api::directory::DEFAULT_ZOOM;
use api::{MapCenter, MapMarker};
use dioxus::prelude::*;
use serde::Serialize;

const MAP_CONTAINER_ID: &str = "device-map";

const LEAFLET_CSS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.css";
const LEAFLET_JS: &str = "https://unpkg.com/leaflet@1.9.3/dist/leaflet.js";

const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

/// Builds the map from the setup message, then reports "Book me" clicks.
/// Popup content is built with DOM nodes so device names are never parsed as HTML.
const MAP_SCRIPT: &str = r#"
const setup = await dioxus.recv();
const L = await new Promise((resolve) => {
    const tick = () => (window.L ? resolve(window.L) : setTimeout(tick, 50));
    tick();
});
const container = document.getElementById(setup.container);
if (!container) {
    return;
}
if (window.__deviceMap) {
    window.__deviceMap.remove();
}
const map = L.map(container).setView(setup.center, setup.zoom);
window.__deviceMap = map;
L.tileLayer(setup.tiles, { attribution: setup.attribution }).addTo(map);
for (const marker of setup.markers) {
    const body = document.createElement("div");
    const name = document.createElement("h4");
    name.textContent = `Name: ${marker.label}`;
    const battery = document.createElement("h4");
    battery.textContent = `Battery: ${marker.detail.battery}%`;
    const button = document.createElement("button");
    button.className = "book-btn";
    button.textContent = "Book me";
    button.addEventListener("click", () => dioxus.send(marker.label));
    body.append(name, battery, button);
    L.marker(marker.position).addTo(map).bindPopup(body);
}
"#;

#[derive(Serialize)]
struct MapSetup {
    container: &'static str,
    center: [f64; 2],
    zoom: u8,
    tiles: &'static str,
    attribution: &'static str,
    markers: Vec<MapMarker>,
}

/// One marker per device; `on_book` receives the device name.
///
/// The markers and center are read once when the map mounts.
#[component]
pub fn DeviceMap(markers: Vec<MapMarker>, center: MapCenter, on_book: EventHandler<String>) -> Element {
    use_effect(move || {
        let setup = MapSetup {
            container: MAP_CONTAINER_ID,
            center: center.as_array(),
            zoom: DEFAULT_ZOOM,
            tiles: TILE_URL,
            attribution: TILE_ATTRIBUTION,
            markers: markers.clone(),
        };

        spawn(async move {
            let mut eval = document::eval(MAP_SCRIPT);
            if let Err(e) = eval.send(setup) {
                tracing::error!("Failed to initialise map: {:?}", e);
                return;
            }
            while let Ok(name) = eval.recv::<String>().await {
                on_book.call(name);
            }
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: LEAFLET_CSS }
        document::Script { src: LEAFLET_JS }
        div {
            id: MAP_CONTAINER_ID,
            class: "device-map",
        }
    }
}
