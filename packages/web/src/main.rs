use dioxus::prelude::*;

use views::{AuthLayout, Dashboard, Login};

mod views;

#[cfg(feature = "server")]
mod proxy;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(AuthLayout)]
        #[route("/")]
        Dashboard {},
        #[route("/login")]
        Login {},
}

fn main() {
    #[cfg(feature = "server")]
    {
        tokio::runtime::Runtime::new()
            .unwrap()
            .block_on(launch_server());
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() {
    use dioxus::server::{DioxusRouterExt, ServeConfig};

    tracing_subscriber::fmt::init();

    let config = match api::ProxyConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Cannot start server: {}", e);
            return;
        }
    };
    tracing::info!("Forwarding /api/* to {}", config.upstream);

    // /api/* goes upstream, everything else is the Dioxus app
    let router = axum::Router::new()
        .route(
            &format!("{}{{*path}}", api::config::PROXY_PREFIX),
            axum::routing::any(proxy::forward),
        )
        .with_state(proxy::ProxyState::new(config))
        .serve_dioxus_application(ServeConfig::new(), App);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await.unwrap();
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service())
        .await
        .unwrap();
}

#[component]
fn App() -> Element {
    rsx! {
        document::Stylesheet { href: ui::DASHBOARD_CSS }

        Router::<Route> {}
    }
}
