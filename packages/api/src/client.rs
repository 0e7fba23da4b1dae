//! # Device API transport
//!
//! [`DeviceApi`] is the seam between the controllers and the network. Every call
//! returns an explicit [`Result`]; nothing is parsed unless the status allows it.
//!
//! | Method | Request | Success | Failure |
//! |--------|---------|---------|---------|
//! | [`login`](DeviceApi::login) | `POST /login` JSON body | [`LoginResponse`] (token or message) | unreadable body → [`ApiError::Auth`] |
//! | [`devices`](DeviceApi::devices) | `GET /api/devices` | `Vec<Device>` | [`ApiError::Status`] / [`ApiError::Decode`] |
//! | [`status`](DeviceApi::status) | `GET /api/status` | [`BookingStatus`] | [`ApiError::Status`] / [`ApiError::Decode`] |
//! | [`book`](DeviceApi::book) | `GET /api/book?name=` | `()` | [`ApiError::Booking`] |
//! | [`unbook`](DeviceApi::unbook) | `GET /api/unbook` | `()` | [`ApiError::Booking`] |
//!
//! All but `login` send `Authorization: Bearer <token>`. Transport failures map to
//! [`ApiError::Network`] everywhere. There are no retries and no timeouts.

use serde::de::DeserializeOwned;

use crate::config::ApiConfig;
use crate::error::{ApiError, Result, DEFAULT_LOGIN_FAILURE};
use crate::models::{BookingStatus, Credentials, Device, LoginResponse};

pub const LOGIN_PATH: &str = "/login";
pub const DEVICES_PATH: &str = "/api/devices";
pub const STATUS_PATH: &str = "/api/status";
pub const BOOK_PATH: &str = "/api/book";
pub const UNBOOK_PATH: &str = "/api/unbook";

/// Async interface to the remote device API.
pub trait DeviceApi {
    fn login(
        &self,
        credentials: &Credentials,
    ) -> impl std::future::Future<Output = Result<LoginResponse>>;
    fn devices(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<Vec<Device>>>;
    fn status(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<BookingStatus>>;
    fn book(
        &self,
        token: &str,
        name: &str,
    ) -> impl std::future::Future<Output = Result<()>>;
    fn unbook(
        &self,
        token: &str,
    ) -> impl std::future::Future<Output = Result<()>>;
}

/// reqwest-backed DeviceApi. Works natively and in the browser (fetch).
#[derive(Clone, Debug)]
pub struct HttpApi {
    client: reqwest::Client,
    config: ApiConfig,
}

impl HttpApi {
    pub fn new(config: ApiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str, token: &str) -> Result<T> {
        let response = self
            .client
            .get(self.config.url(path))
            .bearer_auth(token)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ApiError::Status {
                status: status.as_u16(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn send_booking(&self, request: reqwest::RequestBuilder) -> Result<()> {
        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(())
        } else {
            Err(ApiError::Booking {
                status: status.as_u16(),
            })
        }
    }
}

impl DeviceApi for HttpApi {
    async fn login(&self, credentials: &Credentials) -> Result<LoginResponse> {
        let response = self
            .client
            .post(self.config.url(LOGIN_PATH))
            .json(credentials)
            .send()
            .await?;

        // Status is not checked: a rejection still carries a JSON message.
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| {
            tracing::warn!("Unreadable login response: {}", e);
            ApiError::Auth(DEFAULT_LOGIN_FAILURE.to_string())
        })
    }

    async fn devices(&self, token: &str) -> Result<Vec<Device>> {
        self.get_json(DEVICES_PATH, token).await
    }

    async fn status(&self, token: &str) -> Result<BookingStatus> {
        self.get_json(STATUS_PATH, token).await
    }

    async fn book(&self, token: &str, name: &str) -> Result<()> {
        let request = self
            .client
            .get(self.config.url(BOOK_PATH))
            .query(&[("name", name)])
            .bearer_auth(token);
        self.send_booking(request).await
    }

    async fn unbook(&self, token: &str) -> Result<()> {
        let request = self
            .client
            .get(self.config.url(UNBOOK_PATH))
            .bearer_auth(token);
        self.send_booking(request).await
    }
}
