//! Error type shared by every remote call and controller.

use thiserror::Error;

/// Message used when a login is rejected without an explanation.
pub const DEFAULT_LOGIN_FAILURE: &str = "Login failed";

pub type Result<T, E = ApiError> = std::result::Result<T, E>;

/// Everything that can go wrong talking to the device API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// Login rejected or the login response was unreadable.
    #[error("{0}")]
    Auth(String),

    /// The request never produced a response.
    #[error("network error: {0}")]
    Network(String),

    /// A read endpoint answered with a non-success status.
    #[error("request failed with status {status}")]
    Status { status: u16 },

    /// A read endpoint answered with a body that does not match the model.
    #[error("unexpected response: {0}")]
    Decode(String),

    /// Book or unbook answered with a non-success status.
    #[error("booking request failed with status {status}")]
    Booking { status: u16 },

    #[error("configuration error: {0}")]
    Config(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}
