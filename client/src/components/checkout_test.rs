use std::sync::Mutex;

use super::*;
use crate::state::cart::CartAction;
use crate::net::types::MenuItem;

#[derive(Default)]
struct RecordingSubmitter {
    messages: Mutex<Vec<String>>,
}

impl OrderSubmitter for RecordingSubmitter {
    fn submit(&self, order: &OrderSummary) -> Result<SubmitReceipt, SubmitError> {
        if order.lines.is_empty() {
            return Err(SubmitError::EmptyOrder);
        }
        let message = order.to_message();
        self.messages.lock().unwrap().push(message.clone());
        Ok(SubmitReceipt { url: format!("test://{}", message.len()) })
    }
}

fn gcash() -> PaymentMethod {
    PaymentMethod {
        id: "gcash".to_owned(),
        name: "GCash".to_owned(),
        account_number: "09171234567".to_owned(),
        account_name: "Coin Bank".to_owned(),
        qr_code_url: "https://cdn.example/gcash.png".to_owned(),
    }
}

fn latte() -> MenuItem {
    MenuItem {
        id: "latte".to_owned(),
        name: "Latte".to_owned(),
        description: String::new(),
        price: 120.0,
        category: "coffee".to_owned(),
        image: None,
        popular: false,
        available: true,
        variations: Vec::new(),
        add_ons: Vec::new(),
    }
}

fn ready_checkout() -> CheckoutState {
    CheckoutState {
        step: CheckoutStep::Payment,
        customer_name: "Jane Doe".to_owned(),
        contact_number: "09171234567".to_owned(),
        payment_method_id: Some("gcash".to_owned()),
        ..CheckoutState::default()
    }
}

// =============================================================
// place_order
// =============================================================

#[test]
fn place_order_submits_rendered_message() {
    let submitter = RecordingSubmitter::default();
    let mut cart = CartState::default();
    cart.apply(CartAction::Add { item: latte(), quantity: 2, variation: None, add_ons: Vec::new() });

    let receipt = place_order(&submitter, &ready_checkout(), &cart, &[gcash()]).unwrap();
    assert!(receipt.url.starts_with("test://"));

    let messages = submitter.messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("Jane Doe"));
    assert!(messages[0].contains("• Latte x2 - ₱240"));
    assert!(messages[0].contains("TOTAL: ₱240"));
    assert!(messages[0].contains("GCash"));
}

#[test]
fn place_order_with_empty_cart_is_rejected() {
    let submitter = RecordingSubmitter::default();
    let err = place_order(&submitter, &ready_checkout(), &CartState::default(), &[gcash()]).unwrap_err();
    assert_eq!(err, SubmitError::EmptyOrder);
    assert!(submitter.messages.lock().unwrap().is_empty());
}

#[test]
fn messenger_handoff_rejects_empty_order() {
    let err = place_order(&MessengerHandoff::default(), &ready_checkout(), &CartState::default(), &[]).unwrap_err();
    assert_eq!(err, SubmitError::EmptyOrder);
}

// =============================================================
// display helpers
// =============================================================

#[test]
fn unit_times_quantity_formats_price_and_count() {
    let mut cart = CartState::default();
    cart.apply(CartAction::Add { item: latte(), quantity: 3, variation: None, add_ons: Vec::new() });
    assert_eq!(unit_times_quantity(&cart.items[0]), "₱120.00 x 3");
}

#[test]
fn qr_source_prefers_method_url() {
    assert_eq!(qr_source(&gcash()), "https://cdn.example/gcash.png");
}

#[test]
fn qr_source_falls_back_when_blank() {
    let method = PaymentMethod { qr_code_url: "  ".to_owned(), ..gcash() };
    assert_eq!(qr_source(&method), QR_FALLBACK_URL);
}
