//! Category quick-navigation strip below the header.

#[cfg(test)]
#[path = "sub_nav_test.rs"]
mod sub_nav_test;

use leptos::prelude::*;

use crate::net::types::Category;
use crate::state::catalog::{ALL_CATEGORY_ID, CatalogState};

const PLACEHOLDER_PILLS: usize = 5;

/// One button in the strip.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
    pub icon: Option<String>,
}

/// "All Items" first, then categories in source order.
pub fn nav_entries(categories: &[Category]) -> Vec<NavEntry> {
    std::iter::once(NavEntry { id: ALL_CATEGORY_ID.to_owned(), label: "All Items".to_owned(), icon: None })
        .chain(categories.iter().map(|c| NavEntry {
            id: c.id.clone(),
            label: c.name.clone(),
            icon: Some(c.icon.clone()),
        }))
        .collect()
}

pub fn pill_class(selected: bool) -> &'static str {
    if selected { "sub-nav__pill sub-nav__pill--active" } else { "sub-nav__pill" }
}

/// Controlled category strip: the parent owns the selection.
#[component]
pub fn SubNav(#[prop(into)] selected_category: Signal<String>, on_category_click: Callback<String>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();

    view! {
        <nav class="sub-nav">
            <div class="container-minimal sub-nav__strip">
                <Show
                    when=move || !catalog.get().loading
                    fallback=|| {
                        view! {
                            <div class="sub-nav__placeholders">
                                {(0..PLACEHOLDER_PILLS)
                                    .map(|_| view! { <div class="skeleton skeleton--pill"></div> })
                                    .collect::<Vec<_>>()}
                            </div>
                        }
                    }
                >
                    {move || {
                        catalog
                            .with(|c| nav_entries(&c.categories))
                            .into_iter()
                            .map(|entry| {
                                let id = entry.id.clone();
                                let selected_id = entry.id;
                                view! {
                                    <button
                                        class=move || pill_class(selected_category.with(|s| *s == selected_id))
                                        on:click=move |_| on_category_click.run(id.clone())
                                    >
                                        {entry.icon.map(|icon| view! { <span class="sub-nav__icon">{icon}</span> })}
                                        <span>{entry.label}</span>
                                    </button>
                                }
                            })
                            .collect_view()
                    }}
                </Show>
            </div>
        </nav>
    }
}
