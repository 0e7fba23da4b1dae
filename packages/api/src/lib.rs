//! # API crate — client side of the device booking service
//!
//! Everything the dashboard knows about the remote API and the state built on top
//! of it, kept free of UI code so it can be tested natively.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`client`] | [`DeviceApi`] transport trait and its reqwest implementation [`HttpApi`] |
//! | [`models`] | Wire types: [`Device`], [`BookingStatus`], [`Credentials`], [`LoginResponse`] |
//! | [`auth`] | [`Session`] state machine and [`AuthController`] (login / logout / restore) |
//! | [`directory`] | Device list loading, map center, marker data |
//! | [`booking`] | [`BookingController`] (status / book / unbook) |
//! | [`config`] | Base URLs for the browser and for the server-side `/api/*` rewrite |
//! | [`error`] | [`ApiError`], returned by every fallible call |
//!
//! ## Remote endpoints
//!
//! - `POST /login` — `{email, password}` → `{token}` or `{message}`
//! - `GET /api/devices` — bearer auth → `[{name, deviceData: {latitude, longitude, battery}}]`
//! - `GET /api/status` — bearer auth → `{booking}`
//! - `GET /api/book?name=` — bearer auth, status only
//! - `GET /api/unbook` — bearer auth, status only

pub mod auth;
pub mod booking;
pub mod client;
pub mod config;
pub mod directory;
pub mod error;
pub mod models;

#[cfg(test)]
mod testing;

pub use auth::{AuthController, AuthState, Redirect, Session, View};
pub use booking::{BookingController, BookingState};
pub use client::{DeviceApi, HttpApi};
pub use config::{ApiConfig, ProxyConfig};
pub use directory::{DeviceDirectory, MapCenter, MapMarker};
pub use error::ApiError;
pub use models::{BookingStatus, Credentials, Device, DeviceData, LoginResponse};
