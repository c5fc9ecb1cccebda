//! Catalog JSON endpoints consumed by the storefront after hydration.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use client::net::types::{Category, MenuItem, PaymentMethod, SiteSettings};

use crate::services::catalog::{self, CatalogError};
use crate::state::AppState;

pub(crate) fn catalog_error_to_status(err: CatalogError) -> StatusCode {
    tracing::error!(error = %err, "catalog query failed");
    match err {
        CatalogError::Orphaned { .. } | CatalogError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// `GET /api/categories`
pub async fn list_categories(State(state): State<AppState>) -> Result<Json<Vec<Category>>, StatusCode> {
    catalog::list_categories(&state.pool)
        .await
        .map(Json)
        .map_err(catalog_error_to_status)
}

/// `GET /api/menu-items`
pub async fn list_menu_items(State(state): State<AppState>) -> Result<Json<Vec<MenuItem>>, StatusCode> {
    catalog::list_menu_items(&state.pool)
        .await
        .map(Json)
        .map_err(catalog_error_to_status)
}

/// `GET /api/payment-methods`
pub async fn list_payment_methods(State(state): State<AppState>) -> Result<Json<Vec<PaymentMethod>>, StatusCode> {
    catalog::list_payment_methods(&state.pool)
        .await
        .map(Json)
        .map_err(catalog_error_to_status)
}

/// `GET /api/site-settings`
pub async fn site_settings(State(state): State<AppState>) -> Result<Json<SiteSettings>, StatusCode> {
    catalog::site_settings(&state.pool)
        .await
        .map(Json)
        .map_err(catalog_error_to_status)
}
