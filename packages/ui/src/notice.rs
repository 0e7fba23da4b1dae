use dioxus::prelude::*;

/// Confirmation banner for booking actions.
#[component]
pub fn NoticeBanner(message: String, on_dismiss: EventHandler<()>) -> Element {
    rsx! {
        div {
            class: "notice",
            role: "status",
            span { "{message}" }
            button {
                class: "notice__dismiss",
                onclick: move |_| on_dismiss.call(()),
                "Dismiss"
            }
        }
    }
}
