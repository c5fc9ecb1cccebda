//! Shared application state.
//!
//! `AppState` is injected into Axum handlers via the `State` extractor. The
//! catalog is read-only from the storefront's point of view, so the pool is
//! all handlers need.

use sqlx::PgPool;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
}

impl AppState {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}
