//! Browser `sessionStorage` helpers for state that should survive a reload.
//!
//! SYSTEM CONTEXT
//! ==============
//! The cart lives for the browser session. These helpers centralise the
//! hydrate-only read/write glue so the app shell can restore and save the
//! cart without repeating web-sys calls.

use serde::Serialize;
use serde::de::DeserializeOwned;

/// Storage key for the cart snapshot.
pub const CART_STORAGE_KEY: &str = "storefront_cart";

/// Load a JSON value from `sessionStorage` for `key`.
pub fn load_json<T: DeserializeOwned>(key: &str) -> Option<T> {
    #[cfg(feature = "hydrate")]
    {
        let storage = web_sys::window().and_then(|w| w.session_storage().ok().flatten())?;
        let raw = storage.get_item(key).ok().flatten()?;
        serde_json::from_str(&raw).ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Save a JSON value to `sessionStorage` for `key`.
pub fn save_json<T: Serialize>(key: &str, value: &T) {
    #[cfg(feature = "hydrate")]
    {
        let Some(storage) = web_sys::window().and_then(|w| w.session_storage().ok().flatten()) else {
            return;
        };
        let Ok(raw) = serde_json::to_string(value) else {
            return;
        };
        let _ = storage.set_item(key, &raw);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}
