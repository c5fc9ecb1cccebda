//! REST API helpers for the catalog endpoints.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since catalog data is only
//! fetched after hydration; SSR renders the loading placeholders.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` outputs instead of panics so a failed fetch
//! degrades the storefront to its empty state without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{Category, MenuItem, PaymentMethod, SiteSettings};

pub const CATEGORIES_ENDPOINT: &str = "/api/categories";
pub const MENU_ITEMS_ENDPOINT: &str = "/api/menu-items";
pub const PAYMENT_METHODS_ENDPOINT: &str = "/api/payment-methods";
pub const SITE_SETTINGS_ENDPOINT: &str = "/api/site-settings";

#[cfg(any(test, feature = "hydrate"))]
fn fetch_failed_message(endpoint: &str, status: u16) -> String {
    format!("GET {endpoint} failed: {status}")
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(endpoint: &str) -> Result<T, String> {
    let resp = gloo_net::http::Request::get(endpoint)
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(fetch_failed_message(endpoint, resp.status()));
    }
    resp.json::<T>().await.map_err(|e| e.to_string())
}

/// Fetch active categories from `/api/categories`, ordered for display.
///
/// # Errors
///
/// Returns an error string if the request fails or on the server.
pub async fn fetch_categories() -> Result<Vec<Category>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(CATEGORIES_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch the full menu (with variations and add-ons) from `/api/menu-items`.
///
/// # Errors
///
/// Returns an error string if the request fails or on the server.
pub async fn fetch_menu_items() -> Result<Vec<MenuItem>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(MENU_ITEMS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch active payment methods from `/api/payment-methods`.
///
/// # Errors
///
/// Returns an error string if the request fails or on the server.
pub async fn fetch_payment_methods() -> Result<Vec<PaymentMethod>, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(PAYMENT_METHODS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch merchant branding from `/api/site-settings`.
///
/// # Errors
///
/// Returns an error string if the request fails or on the server.
pub async fn fetch_site_settings() -> Result<SiteSettings, String> {
    #[cfg(feature = "hydrate")]
    {
        get_json(SITE_SETTINGS_ENDPOINT).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}
