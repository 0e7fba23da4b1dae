//! Platform-appropriate constructors for the controller dependencies.
//!
//! - **Web** (WASM + `web` feature): tab-scoped `sessionStorage` via
//!   [`store::BrowserSessionStore`], API base resolved against the page origin
//! - **Native**: [`store::MemoryStore`], API base taken from the build environment

use api::{ApiConfig, HttpApi};

#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub type PlatformStore = store::BrowserSessionStore;
#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
pub type PlatformStore = store::MemoryStore;

/// Create the session store for the current platform.
pub fn make_session_store() -> PlatformStore {
    PlatformStore::new()
}

/// Create an API client for the configured base URL.
///
/// When no `PUBLIC_API_URL` was set at build time, the browser build talks to its
/// own origin, where the fullstack server forwards `/api/*` upstream.
pub fn make_api() -> HttpApi {
    let config = ApiConfig::from_build_env();

    #[cfg(target_arch = "wasm32")]
    let config = match web_sys::window().and_then(|w| w.location().origin().ok()) {
        Some(origin) => config.with_origin(&origin),
        None => config,
    };

    HttpApi::new(config)
}
