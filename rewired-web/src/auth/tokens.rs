//! Browser-storage token store.
//!
//! Both tokens live under fixed keys in local storage so a reload can pick
//! the session back up. Reads and writes are synchronous; storage being
//! unavailable (private browsing, disabled storage) degrades to a session
//! that lasts until the next reload.

use gloo_storage::{LocalStorage, Storage};

const ACCESS_TOKEN_KEY: &str = "accessToken";
const REFRESH_TOKEN_KEY: &str = "refreshToken";

/// The bearer token attached to API calls, when one is stored.
#[must_use]
pub fn access_token() -> Option<String> {
    LocalStorage::get(ACCESS_TOKEN_KEY).ok()
}

/// The long-lived token held for a future refresh flow. Stored and cleared
/// alongside the access token but never attached to requests.
#[must_use]
pub fn refresh_token() -> Option<String> {
    LocalStorage::get(REFRESH_TOKEN_KEY).ok()
}

/// Persist both tokens of a fresh session.
pub fn store(access_token: &str, refresh_token: &str) {
    if let Err(err) = LocalStorage::set(ACCESS_TOKEN_KEY, access_token) {
        web_sys::console::warn_1(&format!("token store unavailable: {err}").into());
    }
    if let Err(err) = LocalStorage::set(REFRESH_TOKEN_KEY, refresh_token) {
        web_sys::console::warn_1(&format!("token store unavailable: {err}").into());
    }
}

/// Drop both tokens.
pub fn clear() {
    LocalStorage::delete(ACCESS_TOKEN_KEY);
    LocalStorage::delete(REFRESH_TOKEN_KEY);
}

#[cfg(all(test, target_arch = "wasm32"))]
mod tests {
    use super::*;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn roundtrip_and_clear() {
        clear();
        assert!(access_token().is_none());
        assert!(refresh_token().is_none());

        store("access-abc", "refresh-def");
        assert_eq!(access_token().as_deref(), Some("access-abc"));
        assert_eq!(refresh_token().as_deref(), Some("refresh-def"));

        clear();
        assert!(access_token().is_none());
        assert!(refresh_token().is_none());
    }

    #[wasm_bindgen_test]
    fn store_overwrites_previous_session() {
        store("first-access", "first-refresh");
        store("second-access", "second-refresh");
        assert_eq!(access_token().as_deref(), Some("second-access"));
        assert_eq!(refresh_token().as_deref(), Some("second-refresh"));
        clear();
    }
}
