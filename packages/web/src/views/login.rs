//! Login page view with an email/password form.

use api::{Credentials, DeviceApi};
use dioxus::prelude::*;
use ui::{use_auth, use_token};

use crate::Route;

/// Login page component.
#[component]
pub fn Login() -> Element {
    let mut auth = use_auth();
    let token = use_token();
    let nav = use_navigator();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| Option::<String>::None);
    let mut loading = use_signal(|| false);

    // If already logged in, go to the map
    use_effect(move || {
        if token().is_some() {
            nav.replace(Route::Dashboard {});
        }
    });

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        spawn(async move {
            error.set(None);
            loading.set(true);

            let credentials = Credentials::new(email(), password());
            let api = auth.peek().api().clone();
            let outcome = api.login(&credentials).await;

            // Redirects to the map on success
            let result = auth.write().apply_login(outcome);
            loading.set(false);
            if let Err(e) = result {
                error.set(Some(e.to_string()));
            }
        });
    };

    rsx! {
        div {
            class: "login-container",

            h1 { "Device Map" }

            form {
                onsubmit: handle_login,
                class: "login-form",

                if let Some(err) = error() {
                    div {
                        class: "login-error",
                        "{err}"
                    }
                }

                input {
                    r#type: "email",
                    placeholder: "Email",
                    required: true,
                    value: email(),
                    oninput: move |evt: FormEvent| email.set(evt.value()),
                }

                input {
                    r#type: "password",
                    placeholder: "Password",
                    required: true,
                    value: password(),
                    oninput: move |evt: FormEvent| password.set(evt.value()),
                }

                button {
                    r#type: "submit",
                    disabled: loading(),
                    if loading() { "Signing in..." } else { "Sign in" }
                }
            }
        }
    }
}
