//! # Session persistence — a pluggable key-value seam
//!
//! The dashboard keeps exactly one piece of client state across page reloads: the
//! bearer token issued at login. [`SessionStore`] abstracts where that string lives
//! so the auth logic can run against the browser's tab-scoped `sessionStorage`
//! ([`crate::BrowserSessionStore`]) in production and against
//! [`crate::MemoryStore`] in tests and native builds.
//!
//! Backends never fail loudly: a storage that is unavailable or full degrades to
//! "nothing stored". The remote API stays the authority on whether a token is
//! still valid.

/// Key under which the bearer token is persisted.
pub const TOKEN_KEY: &str = "token";

/// Synchronous string key-value storage.
pub trait SessionStore {
    /// Read the value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str);

    /// Remove `key`. Clearing a missing key is a no-op.
    fn clear(&self, key: &str);
}
