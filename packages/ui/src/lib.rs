//! This crate contains all shared UI for the device dashboard.

use dioxus::prelude::*;

mod platform;
pub use platform::{make_api, make_session_store, PlatformStore};

pub mod views;
pub use views::BookingOverlay;

pub const DASHBOARD_CSS: Asset = asset!("/assets/dashboard.css");

mod auth;
pub use auth::{use_auth, use_token, AuthProvider, LogoutButton, ViewRedirect, WebAuth};

mod map;
pub use map::DeviceMap;

mod notice;
pub use notice::NoticeBanner;
