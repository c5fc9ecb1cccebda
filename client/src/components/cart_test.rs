use super::*;
use crate::state::cart::{SelectedAddOn, SelectedVariation};

fn line(id: &str, quantity: u32, total_price: f64) -> CartItem {
    CartItem {
        id: id.to_owned(),
        menu_item_id: id.to_owned(),
        name: "Latte".to_owned(),
        quantity,
        total_price,
        selected_variation: None,
        selected_add_ons: Vec::new(),
    }
}

#[test]
fn empty_cart_has_dedicated_view() {
    assert_eq!(CartView::from_state(&CartState::default()), CartView::Empty);
}

#[test]
fn populated_view_has_rows_count_and_total() {
    let cart = CartState { items: vec![line("latte", 2, 120.0), line("mocha", 1, 95.5)] };
    let CartView::Populated { rows, count_label, total } = CartView::from_state(&cart) else {
        panic!("expected populated view");
    };
    assert_eq!(rows.len(), 2);
    assert_eq!(count_label, "2 items");
    assert_eq!(total, "₱335.50");
    assert_eq!(rows[0].unit_price, "₱120.00 each");
    assert_eq!(rows[0].subtotal, "₱240.00");
}

#[test]
fn non_finite_total_displays_as_zero() {
    let cart = CartState { items: vec![line("latte", 1, f64::NAN)] };
    let CartView::Populated { total, count_label, .. } = CartView::from_state(&cart) else {
        panic!("expected populated view");
    };
    assert_eq!(total, "₱0.00");
    assert_eq!(count_label, "1 item");
}

#[test]
fn row_describes_variation_and_add_ons() {
    let mut item = line("latte:lg:shot*2", 1, 190.0);
    item.selected_variation = Some(SelectedVariation { id: "lg".to_owned(), name: "Large".to_owned(), price: 20.0 });
    item.selected_add_ons = vec![
        SelectedAddOn { id: "shot".to_owned(), name: "Extra Shot".to_owned(), price: 25.0, quantity: Some(2) },
        SelectedAddOn { id: "oat".to_owned(), name: "Oat Milk".to_owned(), price: 15.0, quantity: None },
    ];
    let row = CartRow::from(&item);
    assert_eq!(row.variation.as_deref(), Some("Size: Large"));
    assert_eq!(row.add_ons.as_deref(), Some("Add-ons: Extra Shot x2, Oat Milk"));
}

#[test]
fn decrement_at_one_requests_zero_and_removes_line() {
    let mut cart = CartState { items: vec![line("latte", 1, 120.0)] };
    let row = CartRow::from(&cart.items[0]);
    let action = decrement_action(&row);
    assert_eq!(action, CartAction::UpdateQuantity { id: "latte".to_owned(), quantity: 0 });
    cart.apply(action);
    assert!(cart.is_empty());
}

#[test]
fn increment_adds_one() {
    let mut cart = CartState { items: vec![line("latte", 2, 120.0)] };
    let row = CartRow::from(&cart.items[0]);
    cart.apply(increment_action(&row));
    assert_eq!(cart.items[0].quantity, 3);
}
