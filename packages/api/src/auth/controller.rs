//! # Auth controller
//!
//! Two states, decided by whether a token is held:
//!
//! ```text
//!                  login ok
//!  Unauthenticated ────────▶ Authenticated
//!         ▲                    │     ▲
//!         │       logout       │     │ login rejected (no-op, error returned)
//!         └────────────────────┘─────┘
//! ```
//!
//! The initial state comes from [`AuthController::restore`], which runs once per
//! mount. A token revoked server-side is not noticed here; the next API call
//! fails instead.
//!
//! Login is split into the request ([`DeviceApi::login`]) and the transition
//! ([`AuthController::apply_login`]) so a UI can await the request without
//! holding the controller borrowed. [`AuthController::login`] chains both.

use store::{SessionStore, TOKEN_KEY};

use super::session::{AuthState, Redirect, Session, View};
use crate::client::DeviceApi;
use crate::error::Result;
use crate::models::{Credentials, LoginResponse};

/// Owns the [`Session`] and its persisted copy.
pub struct AuthController<S, A, R> {
    store: S,
    api: A,
    redirect: R,
    session: Session,
}

impl<S: SessionStore, A: DeviceApi, R: Redirect> AuthController<S, A, R> {
    /// A controller with an empty session. Call [`restore`](Self::restore) once
    /// the view tree is mounted.
    pub fn new(store: S, api: A, redirect: R) -> Self {
        Self {
            store,
            api,
            redirect,
            session: Session::default(),
        }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn token(&self) -> Option<&str> {
        self.session.token.as_deref()
    }

    pub fn state(&self) -> AuthState {
        self.session.state()
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    /// Adopt a previously persisted token, or send the user to the login view.
    pub fn restore(&mut self) -> AuthState {
        match self.store.get(TOKEN_KEY).filter(|t| !t.is_empty()) {
            Some(token) => {
                tracing::debug!("Restored session from storage");
                self.session.token = Some(token);
            }
            None => {
                tracing::info!("No stored session, redirecting to login");
                self.redirect.redirect(View::Login);
            }
        }
        self.state()
    }

    /// Exchange credentials for a token and enter the map view.
    pub async fn login(&mut self, email: &str, password: &str) -> Result<()> {
        let credentials = Credentials::new(email, password);
        let outcome = self.api.login(&credentials).await;
        self.apply_login(outcome)
    }

    /// Apply the outcome of a login request.
    ///
    /// On a token: persist it, adopt it, redirect to [`View::Map`]. Otherwise the
    /// session is left exactly as it was and the error is returned.
    pub fn apply_login(&mut self, outcome: Result<LoginResponse>) -> Result<()> {
        let token = outcome.and_then(LoginResponse::into_token).map_err(|e| {
            tracing::warn!("Login failed: {}", e);
            e
        })?;

        self.store.set(TOKEN_KEY, &token);
        self.session.token = Some(token);
        tracing::info!("Logged in");
        self.redirect.redirect(View::Map);
        Ok(())
    }

    /// Drop the token everywhere and return to the login view. Never fails.
    pub fn logout(&mut self) {
        self.store.clear(TOKEN_KEY);
        self.session.token = None;
        tracing::info!("Logged out");
        self.redirect.redirect(View::Login);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ApiError, DEFAULT_LOGIN_FAILURE};
    use crate::testing::{FakeApi, RecordingRedirect};
    use store::MemoryStore;

    fn controller(
        store: MemoryStore,
        api: FakeApi,
    ) -> (
        AuthController<MemoryStore, FakeApi, RecordingRedirect>,
        RecordingRedirect,
    ) {
        let redirect = RecordingRedirect::default();
        (AuthController::new(store, api, redirect.clone()), redirect)
    }

    #[test]
    fn test_restore_without_token_redirects_to_login() {
        let (mut auth, redirect) = controller(MemoryStore::new(), FakeApi::default());

        assert_eq!(auth.restore(), AuthState::Unauthenticated);
        assert_eq!(redirect.views(), vec![View::Login]);
        assert!(auth.token().is_none());
    }

    #[test]
    fn test_restore_adopts_stored_token() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "stored-token");
        let (mut auth, redirect) = controller(store, FakeApi::default());

        assert_eq!(auth.restore(), AuthState::Authenticated);
        assert_eq!(auth.token(), Some("stored-token"));
        assert!(redirect.views().is_empty());
    }

    #[test]
    fn test_restore_ignores_empty_token() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "");
        let (mut auth, redirect) = controller(store, FakeApi::default());

        assert_eq!(auth.restore(), AuthState::Unauthenticated);
        assert_eq!(redirect.last(), Some(View::Login));
    }

    #[tokio::test]
    async fn test_login_success_persists_and_redirects() {
        let store = MemoryStore::new();
        let (mut auth, redirect) = controller(store.clone(), FakeApi::accepting("fresh-token"));

        auth.login("ops@example.com", "secret").await.unwrap();

        assert_eq!(auth.state(), AuthState::Authenticated);
        assert_eq!(auth.token(), Some("fresh-token"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("fresh-token"));
        assert_eq!(redirect.last(), Some(View::Map));
    }

    #[tokio::test]
    async fn test_login_sends_credentials() {
        let api = FakeApi::accepting("t");
        let (mut auth, _) = controller(MemoryStore::new(), api.clone());

        auth.login("ops@example.com", "secret").await.unwrap();
        assert_eq!(api.calls(), vec!["login ops@example.com".to_string()]);
    }

    #[tokio::test]
    async fn test_login_rejected_leaves_session_unchanged() {
        let store = MemoryStore::new();
        let (mut auth, redirect) =
            controller(store.clone(), FakeApi::rejecting("Invalid credentials"));

        let err = auth.login("ops@example.com", "wrong").await.unwrap_err();

        assert_eq!(err, ApiError::Auth("Invalid credentials".to_string()));
        assert_eq!(auth.state(), AuthState::Unauthenticated);
        assert!(store.is_empty());
        assert!(redirect.views().is_empty());
    }

    #[tokio::test]
    async fn test_failed_login_while_authenticated_is_a_no_op() {
        let store = MemoryStore::with_entry(TOKEN_KEY, "old-token");
        let (mut auth, redirect) = controller(store.clone(), FakeApi::default());
        auth.restore();

        let outcome = Ok(LoginResponse::default());
        let err = auth.apply_login(outcome).unwrap_err();

        assert_eq!(err, ApiError::Auth(DEFAULT_LOGIN_FAILURE.to_string()));
        assert_eq!(auth.token(), Some("old-token"));
        assert_eq!(store.get(TOKEN_KEY).as_deref(), Some("old-token"));
        assert!(redirect.views().is_empty());
    }

    #[test]
    fn test_network_failure_is_not_an_auth_error() {
        let (mut auth, _) = controller(MemoryStore::new(), FakeApi::default());

        let err = auth
            .apply_login(Err(ApiError::Network("connection refused".to_string())))
            .unwrap_err();
        assert!(matches!(err, ApiError::Network(_)));
        assert!(auth.token().is_none());
    }

    #[tokio::test]
    async fn test_logout_clears_everything() {
        let store = MemoryStore::new();
        let (mut auth, redirect) = controller(store.clone(), FakeApi::accepting("t"));
        auth.login("a@b.c", "pw").await.unwrap();

        auth.logout();

        assert_eq!(auth.state(), AuthState::Unauthenticated);
        assert!(store.get(TOKEN_KEY).is_none());
        assert_eq!(redirect.views(), vec![View::Map, View::Login]);
    }

    #[test]
    fn test_logout_is_idempotent() {
        let store = MemoryStore::new();
        let (mut auth, redirect) = controller(store.clone(), FakeApi::default());

        auth.logout();
        auth.logout();

        assert!(auth.session().token.is_none());
        assert!(store.is_empty());
        assert_eq!(redirect.last(), Some(View::Login));
    }
}
