use api::View;
use dioxus::prelude::*;

use crate::Route;

/// Layout that owns the session for every routed view.
///
/// Sits inside the router so controller redirects can be turned into navigation.
#[component]
pub fn AuthLayout() -> Element {
    let nav = use_navigator();

    let on_redirect = move |view: View| match view {
        View::Login => {
            nav.replace(Route::Login {});
        }
        View::Map => {
            nav.replace(Route::Dashboard {});
        }
    };

    rsx! {
        ui::AuthProvider {
            on_redirect: on_redirect,
            Outlet::<Route> {}
        }
    }
}
