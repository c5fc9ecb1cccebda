//! Menu body: hero plus one section per non-empty category.
//!
//! SYSTEM CONTEXT
//! ==============
//! Categories come from the `CatalogState` context; the item list is passed in
//! already narrowed by the SubNav selection. Quantities and add actions go
//! through the shared `CartStore`.
//!
//! The active category drives image warming. It starts at the preferred
//! default and then follows the section in view: an `IntersectionObserver`
//! feeds a [`SectionSpy`], and when no section intersects the last section
//! whose top passed the header line wins.
//!
//! Browser handles (observer and deferred preload timer) live in local stored
//! values and are released on cleanup.

#[cfg(test)]
#[path = "menu_test.rs"]
mod menu_test;

use leptos::prelude::*;

use crate::components::menu_item_card::MenuItemCard;
use crate::net::types::MenuItem;
use crate::state::cart::{CartAction, CartStore};
use crate::state::catalog::{CatalogState, menu_sections, reconcile_active_category};
use crate::util::images::HERO_IMAGE_PATH;
use crate::util::section_spy::{SectionSpy, topmost_passed_section};

pub const HERO_TITLE: &str = "Secure your Coins, Secure your Future";

/// Section in view: the spy's most visible section, else the offset heuristic.
pub fn section_in_view(spy: &SectionSpy, offsets: &[(String, f64)], scroll_y: f64) -> Option<String> {
    spy.most_visible()
        .map(str::to_owned)
        .or_else(|| topmost_passed_section(offsets, scroll_y))
}

#[component]
pub fn Menu(#[prop(into)] menu_items: Signal<Vec<MenuItem>>) -> impl IntoView {
    let catalog = expect_context::<RwSignal<CatalogState>>();
    let cart = expect_context::<CartStore>();
    let active_category = RwSignal::new(None::<String>);

    let sections = Memo::new(move |_| catalog.with(|c| menu_sections(&c.categories, &menu_items.get())));

    Effect::new(move || {
        let next = catalog.with(|c| reconcile_active_category(active_category.get_untracked().as_deref(), &c.categories));
        if next != active_category.get_untracked() {
            active_category.set(next);
        }
    });

    #[cfg(feature = "hydrate")]
    {
        use crate::util::images::{plan_preload, schedule_preload};
        use crate::util::section_spy::{SectionObserver, scroll_y, section_offsets};

        let preload_timer = StoredValue::new_local(None::<gloo_timers::callback::Timeout>);
        Effect::new(move || {
            let items = menu_items.get();
            if items.is_empty() {
                return;
            }
            let plan = active_category.with(|active| plan_preload(&items, active.as_deref()));
            // Replacing the handle drops (cancels) any pending deferred tier.
            preload_timer.set_value(schedule_preload(plan));
        });

        let observer = StoredValue::new_local(None::<SectionObserver>);
        Effect::new(move || {
            let ids: Vec<String> = sections.with(|s| s.iter().map(|(c, _)| c.id.clone()).collect());
            observer.set_value(None);
            if ids.is_empty() {
                return;
            }
            let mut spy = SectionSpy::new(ids.clone());
            let watched = ids.clone();
            let handle = SectionObserver::observe(&ids, move |updates| {
                for (id, ratio) in updates {
                    spy.observe(&id, ratio);
                }
                let next = section_in_view(&spy, &section_offsets(&watched), scroll_y());
                if next.is_some() && next != active_category.get_untracked() {
                    active_category.set(next);
                }
            });
            if handle.is_none() {
                leptos::logging::warn!("section observer unavailable; active category will not follow scroll");
            }
            observer.set_value(handle);
        });

        on_cleanup(move || {
            preload_timer.set_value(None);
            observer.set_value(None);
        });
    }

    let on_action = Callback::new(move |action: CartAction| cart.dispatch(action));

    view! {
        <main class="menu">
            <section class="section-spacing">
                <div class="container-minimal hero">
                    <h2 class="hero__title">{HERO_TITLE}</h2>
                    <div class="hero__image-frame">
                        <img
                            class="hero__image"
                            src=HERO_IMAGE_PATH
                            alt="Saving coins for a secure future"
                            loading="eager"
                        />
                    </div>
                </div>
            </section>

            <div class="menu__sections container-minimal">
                {move || {
                    sections
                        .get()
                        .into_iter()
                        .map(|(category, items)| {
                            view! {
                                <section id=category.id.clone() class="menu-section">
                                    <div class="menu-section__heading">
                                        <span class="menu-section__icon">{category.icon.clone()}</span>
                                        <h3 class="menu-section__title">{category.name.clone()}</h3>
                                    </div>
                                    <div class="menu-section__grid">
                                        {items
                                            .into_iter()
                                            .map(|item| {
                                                let id = item.id.clone();
                                                let quantity = Signal::derive(move || cart.state().with(|c| c.quantity_of(&id)));
                                                view! { <MenuItemCard item=item quantity=quantity on_action=on_action/> }
                                            })
                                            .collect_view()}
                                    </div>
                                </section>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </main>
    }
}
