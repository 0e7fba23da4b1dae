use dioxus::prelude::*;

/// A full-screen overlay that blocks the map while a booking is held.
///
/// Always in the tree; `data-booking` toggles its visibility and whether it
/// captures pointer events. The only way out is the unbook button.
#[component]
pub fn BookingOverlay(visible: bool, on_unbook: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "booking-overlay",
            "data-booking": "{visible}",
            div {
                class: "booking-overlay__card",
                h1 { "You are already booking" }
                button {
                    class: "booking-overlay__unbook",
                    onclick: move |_| on_unbook.call(()),
                    "Unbook"
                }
            }
        }
    }
}
