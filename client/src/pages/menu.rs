//! Menu route: category strip plus the sectioned menu.
//!
//! A SubNav click narrows the menu to one category ("all" restores the full
//! list). The page returns to the top once the narrowed menu has rendered;
//! scrolling before that would target offsets from the layout being replaced.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;

use crate::components::menu::Menu;
use crate::components::sub_nav::SubNav;
use crate::state::catalog::{ALL_CATEGORY_ID, CatalogState, filter_by_selection};
use crate::util::scroll::scroll_to_top;

/// Whether a selection change should reset the scroll position. The first
/// run (no previous selection) and repeated clicks on the same pill leave the
/// page where it is.
pub fn should_scroll_to_top(previous: Option<&str>, current: &str) -> bool {
    previous.is_some_and(|p| p != current)
}

#[component]
pub fn MenuPage() -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let selected = RwSignal::new(ALL_CATEGORY_ID.to_owned());

    let menu_items = Signal::derive(move || {
        let selected = selected.get();
        catalog.with(|c| filter_by_selection(&c.menu_items, &selected))
    });

    Effect::new(move |previous: Option<String>| {
        let current = selected.get();
        if should_scroll_to_top(previous.as_deref(), &current) {
            scroll_to_top();
        }
        current
    });

    let on_category_click = Callback::new(move |id: String| selected.set(id));

    view! {
        <SubNav selected_category=selected on_category_click=on_category_click/>
        <Menu menu_items=menu_items/>
    }
}
