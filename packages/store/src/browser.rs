//! # Browser session storage
//!
//! [`BrowserSessionStore`] is the [`SessionStore`] used on the **web platform**. It
//! writes into `window.sessionStorage` via [`web_sys`], which gives exactly the
//! lifetime the dashboard wants for its token:
//!
//! - survives reloads of the same tab
//! - is not shared with other tabs
//! - is dropped when the tab closes
//!
//! The value is stored as-is (no encryption).
//!
//! ## Error handling
//!
//! `sessionStorage` can be missing (privacy modes, sandboxed iframes) or throw on
//! write (quota). All of these degrade to `None` for reads and a no-op for writes.

use crate::session::SessionStore;
use web_sys::Storage;

/// `window.sessionStorage`-backed SessionStore.
///
/// Zero-size and `Clone`: the storage handle is looked up on every call, the
/// browser keeps it cached.
#[derive(Clone, Debug, Default)]
pub struct BrowserSessionStore;

impl BrowserSessionStore {
    pub fn new() -> Self {
        Self
    }

    fn storage(&self) -> Option<Storage> {
        web_sys::window()?.session_storage().ok()?
    }
}

impl SessionStore for BrowserSessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.storage()?.get_item(key).ok()?
    }

    fn set(&self, key: &str, value: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.set_item(key, value);
    }

    fn clear(&self, key: &str) {
        let Some(storage) = self.storage() else {
            return;
        };
        let _ = storage.remove_item(key);
    }
}
