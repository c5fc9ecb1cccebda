use super::*;
use crate::net::types::{Category, MenuItem};
use crate::state::catalog::menu_sections;

fn cat(id: &str) -> Category {
    Category { id: id.to_owned(), name: id.to_uppercase(), icon: "🍜".to_owned(), sort_order: 0 }
}

fn item(id: &str, category: &str) -> MenuItem {
    MenuItem {
        id: id.to_owned(),
        name: id.to_owned(),
        description: String::new(),
        price: 80.0,
        category: category.to_owned(),
        image: None,
        popular: false,
        available: true,
        variations: Vec::new(),
        add_ons: Vec::new(),
    }
}

#[test]
fn first_selection_keeps_scroll_position() {
    assert!(!should_scroll_to_top(None, ALL_CATEGORY_ID));
}

#[test]
fn changing_category_scrolls_to_top() {
    assert!(should_scroll_to_top(Some(ALL_CATEGORY_ID), "noodles"));
    assert!(should_scroll_to_top(Some("dim-sum"), "noodles"));
    assert!(should_scroll_to_top(Some("noodles"), ALL_CATEGORY_ID));
}

#[test]
fn reselecting_same_category_keeps_scroll_position() {
    assert!(!should_scroll_to_top(Some("noodles"), "noodles"));
}

#[test]
fn selecting_category_leaves_single_section_at_top() {
    let cats = [cat("dim-sum"), cat("noodles"), cat("drinks")];
    let items = [item("siomai", "dim-sum"), item("ramen", "noodles"), item("latte", "drinks")];

    let all = menu_sections(&cats, &filter_by_selection(&items, ALL_CATEGORY_ID));
    assert_eq!(all.len(), 3);

    let narrowed = menu_sections(&cats, &filter_by_selection(&items, "noodles"));
    assert_eq!(narrowed.len(), 1);
    assert_eq!(narrowed[0].0.id, "noodles");
    assert!(should_scroll_to_top(Some(ALL_CATEGORY_ID), "noodles"));
}
