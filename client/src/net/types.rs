//! Shared catalog DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the JSON served by the catalog API. The server builds
//! the same shapes from its Postgres rows, so field names here are the wire
//! contract (`snake_case`, optional fields omitted when absent).

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A menu category used to section the catalog.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable slug (e.g. `"hot-coffee"`). Doubles as the section element id.
    pub id: String,
    pub name: String,
    /// Emoji or short glyph rendered next to the name.
    pub icon: String,
    #[serde(default)]
    pub sort_order: i32,
}

/// A size/tier option on a menu item. `price` is added to the base price.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Variation {
    pub id: String,
    pub name: String,
    pub price: f64,
}

/// An optional extra that can be attached to a cart line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    /// Grouping label within the customisation panel (e.g. `"syrups"`).
    #[serde(default)]
    pub category: String,
}

/// One catalog item.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Base price before variation and add-on deltas.
    pub price: f64,
    /// Foreign key into [`Category::id`].
    pub category: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default)]
    pub popular: bool,
    #[serde(default = "default_true")]
    pub available: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub variations: Vec<Variation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub add_ons: Vec<AddOn>,
}

impl MenuItem {
    /// Whether adding this item needs a choice from the customer first.
    pub fn is_customizable(&self) -> bool {
        !self.variations.is_empty() || !self.add_ons.is_empty()
    }
}

fn default_true() -> bool {
    true
}

/// A payment channel the customer pays through before messaging the order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub name: String,
    pub account_number: String,
    pub account_name: String,
    pub qr_code_url: String,
}

/// Merchant branding served from the `site_settings` table.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteSettings {
    #[serde(default)]
    pub site_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_logo: Option<String>,
    #[serde(default)]
    pub site_description: String,
    #[serde(default)]
    pub currency: String,
}
