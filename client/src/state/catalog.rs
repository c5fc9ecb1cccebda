//! Catalog snapshots (categories, menu items, payment methods, branding).
//!
//! SYSTEM CONTEXT
//! ==============
//! Each snapshot pairs data with a `loading` flag. The app shell fills them
//! once after hydration; components render placeholders while `loading` is
//! set. A failed fetch clears `loading` and leaves the data empty.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use crate::net::types::{Category, MenuItem, PaymentMethod, SiteSettings};

/// Synthetic category id meaning "no filter". Never present in the source list.
pub const ALL_CATEGORY_ID: &str = "all";

/// Category the menu highlights first when the catalog contains it.
pub const PREFERRED_CATEGORY_ID: &str = "dim-sum";

/// Categories plus menu items.
#[derive(Clone, Debug, PartialEq)]
pub struct CatalogState {
    pub categories: Vec<Category>,
    pub menu_items: Vec<MenuItem>,
    pub loading: bool,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self { categories: Vec::new(), menu_items: Vec::new(), loading: true }
    }
}

/// Payment methods shown in the checkout payment step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PaymentMethodsState {
    pub methods: Vec<PaymentMethod>,
    pub loading: bool,
}

impl Default for PaymentMethodsState {
    fn default() -> Self {
        Self { methods: Vec::new(), loading: true }
    }
}

/// Merchant branding for the header.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteState {
    pub settings: Option<SiteSettings>,
    pub loading: bool,
}

impl Default for SiteState {
    fn default() -> Self {
        Self { settings: None, loading: true }
    }
}

/// Default active category: the preferred id when present, else the first.
pub fn default_active_category(categories: &[Category]) -> Option<String> {
    categories
        .iter()
        .find(|c| c.id == PREFERRED_CATEGORY_ID)
        .or_else(|| categories.first())
        .map(|c| c.id.clone())
}

/// Keep `current` while it still exists in `categories`, otherwise fall back
/// to [`default_active_category`]. Returns `None` for an empty list.
pub fn reconcile_active_category(current: Option<&str>, categories: &[Category]) -> Option<String> {
    match current {
        Some(id) if categories.iter().any(|c| c.id == id) => Some(id.to_owned()),
        _ => default_active_category(categories),
    }
}

/// Items narrowed to the SubNav selection; [`ALL_CATEGORY_ID`] keeps everything.
pub fn filter_by_selection(items: &[MenuItem], selected: &str) -> Vec<MenuItem> {
    if selected == ALL_CATEGORY_ID {
        return items.to_vec();
    }
    items.iter().filter(|i| i.category == selected).cloned().collect()
}

/// Menu sections in category order, skipping categories with no items.
pub fn menu_sections(categories: &[Category], items: &[MenuItem]) -> Vec<(Category, Vec<MenuItem>)> {
    categories
        .iter()
        .filter_map(|cat| {
            let in_cat: Vec<MenuItem> = items.iter().filter(|i| i.category == cat.id).cloned().collect();
            (!in_cat.is_empty()).then(|| (cat.clone(), in_cat))
        })
        .collect()
}
