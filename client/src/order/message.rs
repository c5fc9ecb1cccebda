//! Order summary and its human-readable message rendering.
//!
//! The message is the only record of the order: it is pasted into the
//! messenger conversation and confirmed manually by the merchant.

#[cfg(test)]
#[path = "message_test.rs"]
mod message_test;

use crate::net::types::PaymentMethod;
use crate::state::cart::{CartItem, CartState, SelectedAddOn};
use crate::state::checkout::{CheckoutState, ServiceType};
use crate::util::format::plain_amount;

/// Store name as shown on the site (footer, page title).
pub const STORE_NAME: &str = "Coin Bank";

/// Brand spelling in the message header line.
pub const MESSAGE_HEADER_BRAND: &str = "Coinbank";

/// Brand spelling in the message's closing line.
pub const MESSAGE_CLOSING_BRAND: &str = "Coin bank";

/// One itemised line of the order.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderLine {
    pub name: String,
    pub variation: Option<String>,
    /// Add-on labels in selection order (`"Extra Shot x2"`).
    pub add_ons: Vec<String>,
    pub quantity: u32,
    pub subtotal: f64,
}

impl From<&CartItem> for OrderLine {
    fn from(line: &CartItem) -> Self {
        Self {
            name: line.name.clone(),
            variation: line.selected_variation.as_ref().map(|v| v.name.clone()),
            add_ons: line.selected_add_ons.iter().map(SelectedAddOn::label).collect(),
            quantity: line.quantity,
            subtotal: line.subtotal(),
        }
    }
}

impl OrderLine {
    /// `• Name (Variation) + AddOn, AddOn x2 xQTY - ₱SUBTOTAL`
    pub fn render(&self) -> String {
        let mut out = format!("• {}", self.name);
        if let Some(variation) = &self.variation {
            out.push_str(&format!(" ({variation})"));
        }
        if !self.add_ons.is_empty() {
            out.push_str(&format!(" + {}", self.add_ons.join(", ")));
        }
        out.push_str(&format!(" x{} - ₱{}", self.quantity, plain_amount(self.subtotal)));
        out
    }
}

/// Everything the merchant needs to confirm an order.
#[derive(Clone, Debug, PartialEq)]
pub struct OrderSummary {
    pub customer_name: String,
    pub contact_number: String,
    pub service_type: ServiceType,
    pub lines: Vec<OrderLine>,
    pub total: f64,
    pub payment_method: String,
    pub notes: String,
}

impl OrderSummary {
    pub fn new(checkout: &CheckoutState, cart: &CartState, methods: &[PaymentMethod]) -> Self {
        Self {
            customer_name: checkout.customer_name.clone(),
            contact_number: checkout.contact_number.clone(),
            service_type: checkout.service_type,
            lines: cart.items.iter().map(OrderLine::from).collect(),
            total: cart.total_price(),
            payment_method: checkout.payment_method_label(methods),
            notes: checkout.notes.clone(),
        }
    }

    /// Render the message text sent to the merchant.
    pub fn to_message(&self) -> String {
        let items = self.lines.iter().map(OrderLine::render).collect::<Vec<_>>().join("\n");
        let notes = if self.notes.is_empty() {
            String::new()
        } else {
            format!("📝 Notes: {}", self.notes)
        };

        let message = format!(
            "🛒 {MESSAGE_HEADER_BRAND} ORDER\n\
             \n\
             👤 Customer: {name}\n\
             📞 Contact: {contact}\n\
             📍 Service: {service}\n\
             \n\
             \n\
             📋 ORDER DETAILS:\n\
             {items}\n\
             \n\
             💰 TOTAL: ₱{total}\n\
             \n\
             💳 Payment: {payment}\n\
             📸 Payment Screenshot: Please attach your payment receipt screenshot\n\
             \n\
             {notes}\n\
             \n\
             Please confirm this order to proceed. Thank you for choosing {MESSAGE_CLOSING_BRAND}!",
            name = self.customer_name,
            contact = self.contact_number,
            service = self.service_type.label(),
            total = plain_amount(self.total),
            payment = self.payment_method,
        );
        message.trim().to_owned()
    }
}
