use super::*;

fn cat(id: &str) -> Category {
    Category { id: id.to_owned(), name: id.to_uppercase(), icon: "☕".to_owned(), sort_order: 0 }
}

fn item(id: &str, category: &str) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: id.to_owned(),
        description: String::new(),
        price: 100.0,
        category: category.to_owned(),
        image: None,
        popular: false,
        available: true,
        variations: Vec::new(),
        add_ons: Vec::new(),
    }
}

#[test]
fn snapshots_start_loading() {
    assert!(CatalogState::default().loading);
    assert!(PaymentMethodsState::default().loading);
    assert!(SiteState::default().loading);
}

// =============================================================
// Active category
// =============================================================

#[test]
fn default_active_prefers_dim_sum() {
    let cats = [cat("hot-coffee"), cat("dim-sum"), cat("pastries")];
    assert_eq!(default_active_category(&cats).as_deref(), Some("dim-sum"));
}

#[test]
fn default_active_falls_back_to_first() {
    let cats = [cat("hot-coffee"), cat("pastries")];
    assert_eq!(default_active_category(&cats).as_deref(), Some("hot-coffee"));
}

#[test]
fn default_active_is_none_for_empty_list() {
    assert!(default_active_category(&[]).is_none());
}

#[test]
fn reconcile_keeps_existing_active_category() {
    let cats = [cat("hot-coffee"), cat("dim-sum"), cat("pastries")];
    assert_eq!(reconcile_active_category(Some("pastries"), &cats).as_deref(), Some("pastries"));
}

#[test]
fn reconcile_resets_when_active_category_disappears() {
    let cats = [cat("hot-coffee"), cat("pastries")];
    assert_eq!(reconcile_active_category(Some("dim-sum"), &cats).as_deref(), Some("hot-coffee"));
    assert_eq!(reconcile_active_category(None, &cats).as_deref(), Some("hot-coffee"));
}

// =============================================================
// Filtering / sections
// =============================================================

#[test]
fn filter_all_keeps_every_item() {
    let items = [item("a", "x"), item("b", "y")];
    assert_eq!(filter_by_selection(&items, ALL_CATEGORY_ID).len(), 2);
}

#[test]
fn filter_by_category_keeps_matching_items() {
    let items = [item("a", "x"), item("b", "y"), item("c", "x")];
    let ids: Vec<_> = filter_by_selection(&items, "x").into_iter().map(|i| i.id).collect();
    assert_eq!(ids, vec!["a", "c"]);
}

#[test]
fn menu_sections_follow_category_order_and_skip_empty() {
    let cats = [cat("y"), cat("empty"), cat("x")];
    let items = [item("a", "x"), item("b", "y"), item("c", "x")];
    let sections = menu_sections(&cats, &items);
    let order: Vec<_> = sections.iter().map(|(c, items)| (c.id.as_str(), items.len())).collect();
    assert_eq!(order, vec![("y", 1), ("x", 2)]);
}
