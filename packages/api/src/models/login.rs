//! # Login exchange
//!
//! `POST /login` with `{"email", "password"}`. The server answers with either
//! `{"token": "..."}` or `{"message": "..."}`; the HTTP status carries no extra
//! meaning, the presence of a non-empty token is what counts.

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, DEFAULT_LOGIN_FAILURE};

/// Request body for `POST /login`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Response body for `POST /login`.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl LoginResponse {
    pub fn accepted(token: impl Into<String>) -> Self {
        Self {
            token: Some(token.into()),
            message: None,
        }
    }

    pub fn rejected(message: impl Into<String>) -> Self {
        Self {
            token: None,
            message: Some(message.into()),
        }
    }

    /// The issued token, or an [`ApiError::Auth`] carrying the server's message.
    pub fn into_token(self) -> Result<String, ApiError> {
        match self.token.filter(|t| !t.is_empty()) {
            Some(token) => Ok(token),
            None => {
                let message = self
                    .message
                    .filter(|m| !m.is_empty())
                    .unwrap_or_else(|| DEFAULT_LOGIN_FAILURE.to_string());
                Err(ApiError::Auth(message))
            }
        }
    }
}
