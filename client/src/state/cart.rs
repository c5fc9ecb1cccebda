//! Cart store: line items plus the reducer that owns every mutation.
//!
//! DESIGN
//! ======
//! Components never edit cart lines directly. They build a [`CartAction`] and
//! hand it to [`CartStore::dispatch`], which runs [`CartState::apply`] inside a
//! signal update. Keeping the reducer in one place is what guarantees that no
//! line is ever held with a quantity of zero or less.
//!
//! Line identity: a plain item uses its menu item id as the line id, so the
//! menu card can find "its" line. Customised selections get a derived id so
//! that the same customisation merges and different ones stay apart.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use crate::net::types::{AddOn, MenuItem, Variation};

/// Variation chosen for a cart line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedVariation {
    pub id: String,
    pub name: String,
    /// Price delta over the item's base price.
    pub price: f64,
}

impl From<&Variation> for SelectedVariation {
    fn from(v: &Variation) -> Self {
        Self { id: v.id.clone(), name: v.name.clone(), price: v.price }
    }
}

/// Add-on attached to a cart line. `quantity` is `None` for a single unit.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SelectedAddOn {
    pub id: String,
    pub name: String,
    pub price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<u32>,
}

impl SelectedAddOn {
    /// Select `quantity` units of `add_on`. Quantities of one are stored as `None`.
    pub fn new(add_on: &AddOn, quantity: u32) -> Self {
        Self {
            id: add_on.id.clone(),
            name: add_on.name.clone(),
            price: add_on.price,
            quantity: (quantity > 1).then_some(quantity),
        }
    }

    pub fn units(&self) -> u32 {
        self.quantity.unwrap_or(1).max(1)
    }

    /// `"Name"` for a single unit, `"Name xN"` otherwise.
    pub fn label(&self) -> String {
        match self.quantity {
            Some(q) if q > 1 => format!("{} x{q}", self.name),
            _ => self.name.clone(),
        }
    }
}

/// One line in the cart.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CartItem {
    /// Line id; equals `menu_item_id` for uncustomised lines.
    pub id: String,
    pub menu_item_id: String,
    pub name: String,
    pub quantity: u32,
    /// Per-unit price including variation and add-on deltas.
    pub total_price: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_variation: Option<SelectedVariation>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub selected_add_ons: Vec<SelectedAddOn>,
}

impl CartItem {
    pub fn subtotal(&self) -> f64 {
        self.total_price * f64::from(self.quantity)
    }

    /// Comma-joined add-on labels, or `None` when the line has no add-ons.
    pub fn add_ons_label(&self) -> Option<String> {
        if self.selected_add_ons.is_empty() {
            return None;
        }
        Some(
            self.selected_add_ons
                .iter()
                .map(SelectedAddOn::label)
                .collect::<Vec<_>>()
                .join(", "),
        )
    }
}

/// Derive the cart line id for a selection. Add-on order does not matter.
pub fn line_id(menu_item_id: &str, variation: Option<&SelectedVariation>, add_ons: &[SelectedAddOn]) -> String {
    if variation.is_none() && add_ons.is_empty() {
        return menu_item_id.to_owned();
    }
    let variation_part = variation.map_or("-", |v| v.id.as_str());
    let mut add_on_parts: Vec<String> = add_ons.iter().map(|a| format!("{}*{}", a.id, a.units())).collect();
    add_on_parts.sort_unstable();
    let add_on_part = add_on_parts.join(",");
    format!("{menu_item_id}:{variation_part}:{add_on_part}")
}

/// Per-unit price of a selection: base + variation delta + add-on deltas.
pub fn unit_price(base: f64, variation: Option<&SelectedVariation>, add_ons: &[SelectedAddOn]) -> f64 {
    let variation_delta = variation.map_or(0.0, |v| v.price);
    let add_on_delta: f64 = add_ons.iter().map(|a| a.price * f64::from(a.units())).sum();
    base + variation_delta + add_on_delta
}

/// Every cart mutation the storefront can request.
#[derive(Clone, Debug, PartialEq)]
pub enum CartAction {
    /// Add `quantity` units of a selection, merging into an existing line.
    Add {
        item: MenuItem,
        quantity: u32,
        variation: Option<SelectedVariation>,
        add_ons: Vec<SelectedAddOn>,
    },
    /// Set a line's quantity. Zero or negative removes the line.
    UpdateQuantity { id: String, quantity: i64 },
    Remove { id: String },
    Clear,
}

impl CartAction {
    /// Add one plain unit of `item`.
    pub fn add_one(item: MenuItem) -> Self {
        Self::Add { item, quantity: 1, variation: None, add_ons: Vec::new() }
    }
}

/// Cart contents for the current browser session.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CartState {
    pub items: Vec<CartItem>,
}

impl CartState {
    /// Apply one action. Unknown line ids are ignored.
    pub fn apply(&mut self, action: CartAction) {
        match action {
            CartAction::Add { item, quantity, variation, add_ons } => {
                if quantity == 0 {
                    return;
                }
                let id = line_id(&item.id, variation.as_ref(), &add_ons);
                if let Some(line) = self.items.iter_mut().find(|l| l.id == id) {
                    line.quantity = line.quantity.saturating_add(quantity);
                    return;
                }
                let total_price = unit_price(item.price, variation.as_ref(), &add_ons);
                self.items.push(CartItem {
                    id,
                    menu_item_id: item.id,
                    name: item.name,
                    quantity,
                    total_price,
                    selected_variation: variation,
                    selected_add_ons: add_ons,
                });
            }
            CartAction::UpdateQuantity { id, quantity } => {
                if quantity <= 0 {
                    self.items.retain(|l| l.id != id);
                    return;
                }
                if let Some(line) = self.items.iter_mut().find(|l| l.id == id) {
                    line.quantity = u32::try_from(quantity).unwrap_or(u32::MAX);
                }
            }
            CartAction::Remove { id } => self.items.retain(|l| l.id != id),
            CartAction::Clear => self.items.clear(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Sum of `total_price * quantity` over every line.
    pub fn total_price(&self) -> f64 {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Total units across all lines (badge count).
    pub fn item_count(&self) -> u32 {
        self.items.iter().fold(0u32, |acc, l| acc.saturating_add(l.quantity))
    }

    pub fn line(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|l| l.id == id)
    }

    /// Quantity of the plain (uncustomised) line for a menu item.
    pub fn quantity_of(&self, menu_item_id: &str) -> u32 {
        self.line(menu_item_id).map_or(0, |l| l.quantity)
    }

    /// Drop any line that slipped in with a zero quantity (e.g. a stale
    /// session snapshot).
    #[must_use]
    pub fn sanitized(mut self) -> Self {
        self.items.retain(|l| l.quantity > 0);
        self
    }
}

/// Copyable handle to the shared cart signal, provided via context.
#[derive(Clone, Copy)]
pub struct CartStore {
    state: RwSignal<CartState>,
}

impl CartStore {
    pub fn new(initial: CartState) -> Self {
        Self { state: RwSignal::new(initial.sanitized()) }
    }

    /// Run `action` through the reducer.
    pub fn dispatch(self, action: CartAction) {
        self.state.update(|cart| cart.apply(action));
    }

    /// Replace the contents with a saved snapshot, dropping zero-quantity lines.
    pub fn restore(self, saved: CartState) {
        self.state.set(saved.sanitized());
    }

    /// Read-only view of the cart signal for rendering.
    pub fn state(self) -> ReadSignal<CartState> {
        self.state.read_only()
    }

    pub fn item_count(self) -> u32 {
        self.state.with(CartState::item_count)
    }

    pub fn total_price(self) -> f64 {
        self.state.with(CartState::total_price)
    }
}
