//! Catalog service: categories, menu items, payment methods, site settings.
//!
//! DESIGN
//! ======
//! Queries return flat rows; nesting variations and add-ons under their menu
//! items happens in pure helpers so the shape of the JSON contract is
//! testable without a database. The DTOs are the client crate's own types,
//! so both sides agree on the wire format by construction.
//!
//! Ordering is `sort_order` then name everywhere. Only active categories and
//! payment methods are served; unavailable menu items are served with
//! `available = false` so the storefront can show them greyed out.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use std::collections::HashMap;

use client::net::types::{AddOn, Category, MenuItem, PaymentMethod, SiteSettings, Variation};
use sqlx::PgPool;

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("orphaned {kind} row {id} references unknown menu item {menu_item_id}")]
    Orphaned { kind: &'static str, id: String, menu_item_id: String },
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// `(id, name, description, base_price, category_id, image_url, popular, available)`
pub type MenuItemRow = (String, String, String, f64, String, Option<String>, bool, bool);
/// `(id, menu_item_id, name, price)`
pub type VariationRow = (String, String, String, f64);
/// `(id, menu_item_id, name, price, category)`
pub type AddOnRow = (String, String, String, f64, String);

/// List active categories.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_categories(pool: &PgPool) -> Result<Vec<Category>, CatalogError> {
    let rows = sqlx::query_as::<_, (String, String, String, i32)>(
        "SELECT id, name, icon, sort_order
         FROM categories
         WHERE active
         ORDER BY sort_order, name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, icon, sort_order)| Category { id, name, icon, sort_order })
        .collect())
}

/// List menu items of active categories with their variations and add-ons.
///
/// # Errors
///
/// Returns a database error if any query fails, or [`CatalogError::Orphaned`]
/// when a variation/add-on row points at an item that was not returned.
pub async fn list_menu_items(pool: &PgPool) -> Result<Vec<MenuItem>, CatalogError> {
    let items = sqlx::query_as::<_, MenuItemRow>(
        "SELECT m.id, m.name, m.description, m.base_price, m.category_id, m.image_url, m.popular, m.available
         FROM menu_items m
         JOIN categories c ON c.id = m.category_id
         WHERE c.active
         ORDER BY m.sort_order, m.name",
    )
    .fetch_all(pool)
    .await?;

    let variations = sqlx::query_as::<_, VariationRow>(
        "SELECT v.id, v.menu_item_id, v.name, v.price
         FROM variations v
         JOIN menu_items m ON m.id = v.menu_item_id
         JOIN categories c ON c.id = m.category_id
         WHERE c.active
         ORDER BY v.sort_order, v.name",
    )
    .fetch_all(pool)
    .await?;

    let add_ons = sqlx::query_as::<_, AddOnRow>(
        "SELECT a.id, a.menu_item_id, a.name, a.price, a.category
         FROM add_ons a
         JOIN menu_items m ON m.id = a.menu_item_id
         JOIN categories c ON c.id = m.category_id
         WHERE c.active
         ORDER BY a.sort_order, a.name",
    )
    .fetch_all(pool)
    .await?;

    assemble_menu_items(items, variations, add_ons)
}

/// Nest variation and add-on rows under their items, preserving row order.
///
/// # Errors
///
/// Returns [`CatalogError::Orphaned`] for a child row without a parent item.
pub fn assemble_menu_items(
    items: Vec<MenuItemRow>,
    variations: Vec<VariationRow>,
    add_ons: Vec<AddOnRow>,
) -> Result<Vec<MenuItem>, CatalogError> {
    let mut out: Vec<MenuItem> = items
        .into_iter()
        .map(|(id, name, description, price, category, image, popular, available)| MenuItem {
            id,
            name,
            description,
            price,
            category,
            image: image.filter(|url| !url.trim().is_empty()),
            popular,
            available,
            variations: Vec::new(),
            add_ons: Vec::new(),
        })
        .collect();
    let index: HashMap<String, usize> = out.iter().enumerate().map(|(i, item)| (item.id.clone(), i)).collect();

    for (id, menu_item_id, name, price) in variations {
        let Some(&slot) = index.get(&menu_item_id) else {
            return Err(CatalogError::Orphaned { kind: "variation", id, menu_item_id });
        };
        out[slot].variations.push(Variation { id, name, price });
    }
    for (id, menu_item_id, name, price, category) in add_ons {
        let Some(&slot) = index.get(&menu_item_id) else {
            return Err(CatalogError::Orphaned { kind: "add-on", id, menu_item_id });
        };
        out[slot].add_ons.push(AddOn { id, name, price, category });
    }
    Ok(out)
}

/// List active payment methods.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_payment_methods(pool: &PgPool) -> Result<Vec<PaymentMethod>, CatalogError> {
    let rows = sqlx::query_as::<_, (String, String, String, String, String)>(
        "SELECT id, name, account_number, account_name, qr_code_url
         FROM payment_methods
         WHERE active
         ORDER BY sort_order, name",
    )
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(id, name, account_number, account_name, qr_code_url)| PaymentMethod {
            id,
            name,
            account_number,
            account_name,
            qr_code_url,
        })
        .collect())
}

/// Load merchant branding from the key/value settings table.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn site_settings(pool: &PgPool) -> Result<SiteSettings, CatalogError> {
    let rows = sqlx::query_as::<_, (String, String)>("SELECT key, value FROM site_settings")
        .fetch_all(pool)
        .await?;
    Ok(site_settings_from_rows(rows))
}

/// Fold key/value rows into [`SiteSettings`]. Unknown keys are ignored and
/// missing ones keep their defaults.
pub fn site_settings_from_rows(rows: impl IntoIterator<Item = (String, String)>) -> SiteSettings {
    let mut settings = SiteSettings::default();
    for (key, value) in rows {
        match key.as_str() {
            "site_name" => settings.site_name = value,
            "site_logo" => settings.site_logo = Some(value).filter(|v| !v.trim().is_empty()),
            "site_description" => settings.site_description = value,
            "currency" => settings.currency = value,
            other => tracing::debug!(key = other, "ignoring unknown site setting"),
        }
    }
    settings
}
