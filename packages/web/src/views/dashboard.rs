//! The map page: devices, booking overlay, notices.

use api::directory::fetch_devices;
use api::{BookingController, DeviceApi, DeviceDirectory};
use dioxus::prelude::*;
use ui::{make_api, use_token, BookingOverlay, DeviceMap, LogoutButton, NoticeBanner};

#[component]
pub fn Dashboard() -> Element {
    let token = use_token();
    let api = use_hook(make_api);
    let mut directory = use_signal(DeviceDirectory::default);
    let mut booking = use_signal(|| BookingController::new(make_api()));
    let mut notice = use_signal(|| Option::<String>::None);

    // Devices and booking status load independently whenever a token appears
    let _devices = use_resource(move || {
        let api = api.clone();
        let token = token();
        async move {
            let Some(token) = token else {
                return;
            };
            directory.write().begin_load();
            let result = fetch_devices(&api, &token).await;
            directory.write().finish_load(result);
        }
    });

    let _status = use_resource(move || {
        let token = token();
        async move {
            let Some(token) = token else {
                return;
            };
            let api = booking.peek().api().clone();
            let result = api.status(&token).await;
            // Failures are logged by the controller
            let _ = booking.write().apply_status(result);
        }
    });

    let on_book = move |name: String| {
        let Some(token) = token() else {
            return;
        };
        spawn(async move {
            let api = booking.peek().api().clone();
            let result = api.book(&token, &name).await;
            if let Ok(message) = booking.write().apply_book(&name, result) {
                notice.set(Some(message));
            }
        });
    };

    let on_unbook = move |_: ()| {
        let Some(token) = token() else {
            return;
        };
        spawn(async move {
            let api = booking.peek().api().clone();
            let result = api.unbook(&token).await;
            if let Ok(message) = booking.write().apply_unbook(result) {
                notice.set(Some(message));
            }
        });
    };

    let state = directory();

    rsx! {
        div {
            class: "dashboard",

            BookingOverlay {
                visible: booking.read().overlay_visible(),
                on_unbook: on_unbook,
            }

            if let Some(message) = notice() {
                NoticeBanner {
                    message: message,
                    on_dismiss: move |_| notice.set(None),
                }
            }

            div {
                class: "dashboard__toolbar",
                LogoutButton { class: "logout-btn" }
            }

            if state.is_loading() {
                div {
                    class: "loading",
                    h2 { "Loading..." }
                }
            } else if let Some(err) = state.error() {
                div {
                    class: "load-error",
                    h2 { "Could not load devices" }
                    p { "{err}" }
                }
            } else {
                DeviceMap {
                    markers: state.markers(),
                    center: state.center(),
                    on_book: on_book,
                }
            }
        }
    }
}
