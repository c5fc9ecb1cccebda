use super::*;

// =============================================================
// Helpers
// =============================================================

fn make_item(id: &str, name: &str, price: f64) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: name.to_owned(),
        description: String::new(),
        price,
        category: "hot-coffee".to_owned(),
        image: None,
        popular: false,
        available: true,
        variations: Vec::new(),
        add_ons: Vec::new(),
    }
}

fn large() -> SelectedVariation {
    SelectedVariation { id: "v-large".to_owned(), name: "Large".to_owned(), price: 30.0 }
}

fn shot(quantity: u32) -> SelectedAddOn {
    let add_on = AddOn {
        id: "a-shot".to_owned(),
        name: "Extra Shot".to_owned(),
        price: 25.0,
        category: "coffee".to_owned(),
    };
    SelectedAddOn::new(&add_on, quantity)
}

fn cart_with(lines: &[(&str, f64, u32)]) -> CartState {
    let mut cart = CartState::default();
    for (name, price, qty) in lines {
        cart.apply(CartAction::Add {
            item: make_item(&format!("m-{name}"), name, *price),
            quantity: *qty,
            variation: None,
            add_ons: Vec::new(),
        });
    }
    cart
}

// =============================================================
// Add
// =============================================================

#[test]
fn add_plain_item_uses_menu_item_id_as_line_id() {
    let mut cart = CartState::default();
    cart.apply(CartAction::add_one(make_item("m-1", "Latte", 120.0)));
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].id, "m-1");
    assert_eq!(cart.items[0].quantity, 1);
    assert!((cart.items[0].total_price - 120.0).abs() < f64::EPSILON);
}

#[test]
fn add_same_plain_item_merges_quantities() {
    let mut cart = CartState::default();
    cart.apply(CartAction::add_one(make_item("m-1", "Latte", 120.0)));
    cart.apply(CartAction::Add {
        item: make_item("m-1", "Latte", 120.0),
        quantity: 2,
        variation: None,
        add_ons: Vec::new(),
    });
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.quantity_of("m-1"), 3);
}

#[test]
fn add_with_zero_quantity_is_noop() {
    let mut cart = CartState::default();
    cart.apply(CartAction::Add {
        item: make_item("m-1", "Latte", 120.0),
        quantity: 0,
        variation: None,
        add_ons: Vec::new(),
    });
    assert!(cart.is_empty());
}

#[test]
fn add_customised_selection_creates_distinct_line() {
    let mut cart = CartState::default();
    cart.apply(CartAction::add_one(make_item("m-1", "Latte", 120.0)));
    cart.apply(CartAction::Add {
        item: make_item("m-1", "Latte", 120.0),
        quantity: 1,
        variation: Some(large()),
        add_ons: vec![shot(2)],
    });
    assert_eq!(cart.items.len(), 2);
    assert_ne!(cart.items[1].id, "m-1");
    assert_eq!(cart.items[1].menu_item_id, "m-1");
    // 120 base + 30 large + 2 x 25 shots
    assert!((cart.items[1].total_price - 200.0).abs() < f64::EPSILON);
    // Plain card quantity only tracks the uncustomised line.
    assert_eq!(cart.quantity_of("m-1"), 1);
}

#[test]
fn add_same_customisation_twice_merges() {
    let mut cart = CartState::default();
    for _ in 0..2 {
        cart.apply(CartAction::Add {
            item: make_item("m-1", "Latte", 120.0),
            quantity: 1,
            variation: Some(large()),
            add_ons: vec![shot(1)],
        });
    }
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 2);
}

#[test]
fn add_on_quantity_changes_line_identity() {
    let one = line_id("m-1", None, &[shot(1)]);
    let two = line_id("m-1", None, &[shot(2)]);
    assert_ne!(one, two);
}

fn oat_milk() -> SelectedAddOn {
    let add_on = AddOn {
        id: "a-oat".to_owned(),
        name: "Oat Milk".to_owned(),
        price: 20.0,
        category: "milk".to_owned(),
    };
    SelectedAddOn::new(&add_on, 1)
}

#[test]
fn add_on_order_does_not_change_line_identity() {
    assert_eq!(
        line_id("m-1", Some(&large()), &[shot(2), oat_milk()]),
        line_id("m-1", Some(&large()), &[oat_milk(), shot(2)]),
    );
}

#[test]
fn same_add_ons_in_different_order_merge_into_one_line() {
    let mut cart = CartState::default();
    let latte = make_item("m-latte", "Latte", 120.0);
    cart.apply(CartAction::Add {
        item: latte.clone(),
        quantity: 1,
        variation: Some(large()),
        add_ons: vec![shot(1), oat_milk()],
    });
    cart.apply(CartAction::Add {
        item: latte,
        quantity: 2,
        variation: Some(large()),
        add_ons: vec![oat_milk(), shot(1)],
    });
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].quantity, 3);
}

// =============================================================
// UpdateQuantity / Remove / Clear
// =============================================================

#[test]
fn update_quantity_sets_new_value() {
    let mut cart = cart_with(&[("Latte", 120.0, 1)]);
    cart.apply(CartAction::UpdateQuantity { id: "m-Latte".to_owned(), quantity: 4 });
    assert_eq!(cart.quantity_of("m-Latte"), 4);
}

#[test]
fn update_quantity_to_zero_removes_line() {
    let mut cart = cart_with(&[("Latte", 120.0, 1), ("Mocha", 130.0, 1)]);
    cart.apply(CartAction::UpdateQuantity { id: "m-Latte".to_owned(), quantity: 0 });
    assert_eq!(cart.items.len(), 1);
    assert!(cart.line("m-Latte").is_none());
}

#[test]
fn update_quantity_negative_removes_line() {
    let mut cart = cart_with(&[("Latte", 120.0, 1)]);
    cart.apply(CartAction::UpdateQuantity { id: "m-Latte".to_owned(), quantity: -3 });
    assert!(cart.is_empty());
}

#[test]
fn update_quantity_unknown_id_is_noop() {
    let mut cart = cart_with(&[("Latte", 120.0, 1)]);
    let before = cart.clone();
    cart.apply(CartAction::UpdateQuantity { id: "missing".to_owned(), quantity: 5 });
    assert_eq!(cart, before);
}

#[test]
fn no_line_ever_holds_non_positive_quantity() {
    let mut cart = cart_with(&[("Latte", 120.0, 2), ("Mocha", 130.0, 1)]);
    for q in [1, 0, -1, 3, 0] {
        cart.apply(CartAction::UpdateQuantity { id: "m-Mocha".to_owned(), quantity: q });
        assert!(cart.items.iter().all(|l| l.quantity > 0));
    }
}

#[test]
fn remove_drops_only_target_line() {
    let mut cart = cart_with(&[("Latte", 120.0, 1), ("Mocha", 130.0, 1)]);
    cart.apply(CartAction::Remove { id: "m-Latte".to_owned() });
    assert_eq!(cart.items.len(), 1);
    assert_eq!(cart.items[0].name, "Mocha");
}

#[test]
fn clear_empties_cart() {
    let mut cart = cart_with(&[("Latte", 120.0, 1), ("Mocha", 130.0, 1)]);
    cart.apply(CartAction::Clear);
    assert!(cart.is_empty());
    assert_eq!(cart.item_count(), 0);
}

// =============================================================
// Totals
// =============================================================

#[test]
fn total_price_sums_unit_price_times_quantity() {
    let cart = cart_with(&[("Latte", 120.0, 2), ("Mocha", 135.5, 3)]);
    assert!((cart.total_price() - (240.0 + 406.5)).abs() < 1e-9);
}

#[test]
fn line_subtotal_is_unit_price_times_quantity() {
    let cart = cart_with(&[("Latte", 120.0, 2)]);
    assert!((cart.items[0].subtotal() - 240.0).abs() < f64::EPSILON);
}

#[test]
fn item_count_sums_quantities() {
    let cart = cart_with(&[("Latte", 120.0, 2), ("Mocha", 135.0, 3)]);
    assert_eq!(cart.item_count(), 5);
}

#[test]
fn empty_cart_totals_are_zero() {
    let cart = CartState::default();
    assert!(cart.total_price().abs() < f64::EPSILON);
    assert_eq!(cart.item_count(), 0);
}

// =============================================================
// Add-on labels / sanitizing
// =============================================================

#[test]
fn add_on_label_shows_multiplier_only_above_one() {
    assert_eq!(shot(1).label(), "Extra Shot");
    assert_eq!(shot(3).label(), "Extra Shot x3");
    assert!(shot(1).quantity.is_none());
}

#[test]
fn add_ons_label_joins_in_order() {
    let mut cart = CartState::default();
    let syrup = SelectedAddOn { id: "a-syrup".to_owned(), name: "Vanilla".to_owned(), price: 10.0, quantity: None };
    cart.apply(CartAction::Add {
        item: make_item("m-1", "Latte", 120.0),
        quantity: 1,
        variation: None,
        add_ons: vec![syrup, shot(2)],
    });
    assert_eq!(cart.items[0].add_ons_label().as_deref(), Some("Vanilla, Extra Shot x2"));
}

#[test]
fn sanitized_drops_zero_quantity_lines() {
    let mut cart = cart_with(&[("Latte", 120.0, 1)]);
    cart.items[0].quantity = 0;
    assert!(cart.sanitized().is_empty());
}

#[test]
fn cart_state_round_trips_through_json_snapshot() {
    let cart = cart_with(&[("Latte", 120.0, 2)]);
    let raw = serde_json::to_string(&cart).unwrap();
    let restored: CartState = serde_json::from_str(&raw).unwrap();
    assert_eq!(restored, cart);
}
