//! Authentication context and hooks for the UI.
//!
//! [`AuthProvider`] builds one [`api::AuthController`] from injected parts (session
//! store, API client, a redirect callback) and hands it to descendants through the
//! Dioxus context. Views reach it with [`use_auth`]; nothing else can.

use api::{AuthController, HttpApi, Redirect, View};
use dioxus::prelude::*;

use crate::platform::{make_api, make_session_store, PlatformStore};

/// The controller as wired for the running platform.
pub type WebAuth = AuthController<PlatformStore, HttpApi, ViewRedirect>;

/// Forwards controller redirects to an event handler supplied by the router.
#[derive(Clone, Copy)]
pub struct ViewRedirect(EventHandler<View>);

impl Redirect for ViewRedirect {
    fn redirect(&self, view: View) {
        self.0.call(view);
    }
}

/// Get the auth controller.
pub fn use_auth() -> Signal<WebAuth> {
    use_context::<Signal<WebAuth>>()
}

/// The current token. Only notifies when the token itself changes.
pub fn use_token() -> Memo<Option<String>> {
    let auth = use_auth();
    use_memo(move || auth.read().token().map(str::to_string))
}

/// Provider component that owns the session.
/// Wrap the routed views with this component; it must live inside the router.
#[component]
pub fn AuthProvider(on_redirect: EventHandler<View>, children: Element) -> Element {
    let mut auth = use_signal(|| {
        AuthController::new(make_session_store(), make_api(), ViewRedirect(on_redirect))
    });

    // One-time check of the persisted token once mounted
    use_effect(move || {
        auth.write().restore();
    });

    use_context_provider(|| auth);

    rsx! {
        {children}
    }
}

/// Button to log out the current user.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let mut auth = use_auth();

    rsx! {
        button {
            class: "{class}",
            onclick: move |_| auth.write().logout(),
            "{label}"
        }
    }
}
