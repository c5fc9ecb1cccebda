//! Menu item card with quick add, quantity controls and a customisation panel.
//!
//! DESIGN
//! ======
//! The card never touches the cart directly; every click becomes a
//! [`CartAction`] passed to `on_action`. Plain items show "Add" or -/+
//! controls on their plain line. Items with variations or add-ons open an
//! inline panel whose state lives in a [`Customization`] so the price preview
//! and the dispatched action come from the same value.

#[cfg(test)]
#[path = "menu_item_card_test.rs"]
mod menu_item_card_test;

use leptos::prelude::*;

use crate::net::types::MenuItem;
use crate::state::cart::{CartAction, SelectedAddOn, SelectedVariation, unit_price};
use crate::util::format::peso;
use crate::util::images::LOGO_PATH;

/// Price line under the item name: `"from ₱x"` when variations change the price.
pub fn price_label(item: &MenuItem) -> String {
    let cheapest = item
        .variations
        .iter()
        .map(|v| v.price)
        .fold(None, |acc: Option<f64>, p| Some(acc.map_or(p, |a| a.min(p))));
    match cheapest {
        Some(delta) => format!("from {}", peso(item.price + delta)),
        None => peso(item.price),
    }
}

/// In-progress selection inside the customisation panel.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Customization {
    pub variation_id: Option<String>,
    /// `(add_on_id, units)` in the item's add-on order; zero means not selected.
    pub add_ons: Vec<(String, u32)>,
}

impl Customization {
    /// Fresh panel state: first variation preselected, no add-ons.
    pub fn for_item(item: &MenuItem) -> Self {
        Self {
            variation_id: item.variations.first().map(|v| v.id.clone()),
            add_ons: item.add_ons.iter().map(|a| (a.id.clone(), 0)).collect(),
        }
    }

    pub fn select_variation(&mut self, id: &str) {
        self.variation_id = Some(id.to_owned());
    }

    pub fn add_on_units(&self, id: &str) -> u32 {
        self.add_ons.iter().find(|(a, _)| a == id).map_or(0, |(_, n)| *n)
    }

    pub fn increment_add_on(&mut self, id: &str) {
        if let Some((_, n)) = self.add_ons.iter_mut().find(|(a, _)| a == id) {
            *n = n.saturating_add(1);
        }
    }

    pub fn decrement_add_on(&mut self, id: &str) {
        if let Some((_, n)) = self.add_ons.iter_mut().find(|(a, _)| a == id) {
            *n = n.saturating_sub(1);
        }
    }

    fn selected_variation(&self, item: &MenuItem) -> Option<SelectedVariation> {
        let id = self.variation_id.as_deref()?;
        item.variations.iter().find(|v| v.id == id).map(SelectedVariation::from)
    }

    fn selected_add_ons(&self, item: &MenuItem) -> Vec<SelectedAddOn> {
        item.add_ons
            .iter()
            .filter_map(|a| {
                let units = self.add_on_units(&a.id);
                (units > 0).then(|| SelectedAddOn::new(a, units))
            })
            .collect()
    }

    /// Per-unit price preview for the current selection.
    pub fn unit_price(&self, item: &MenuItem) -> f64 {
        unit_price(item.price, self.selected_variation(item).as_ref(), &self.selected_add_ons(item))
    }

    /// Action that adds one unit of this selection.
    pub fn to_action(&self, item: &MenuItem) -> CartAction {
        CartAction::Add {
            item: item.clone(),
            quantity: 1,
            variation: self.selected_variation(item),
            add_ons: self.selected_add_ons(item),
        }
    }
}

/// `UpdateQuantity` for the plain line of `item_id`, offset from `current`.
pub fn step_quantity(item_id: &str, current: u32, delta: i64) -> CartAction {
    CartAction::UpdateQuantity { id: item_id.to_owned(), quantity: i64::from(current) + delta }
}

#[component]
pub fn MenuItemCard(
    item: MenuItem,
    /// Quantity of this item's plain cart line.
    #[prop(into)]
    quantity: Signal<u32>,
    on_action: Callback<CartAction>,
) -> impl IntoView {
    let item = StoredValue::new(item);
    let customizing = RwSignal::new(false);
    let selection = RwSignal::new(item.with_value(Customization::for_item));

    let available = item.with_value(|i| i.available);
    let customizable = item.with_value(MenuItem::is_customizable);
    let image = item.with_value(|i| i.image.clone().filter(|s| !s.is_empty()));
    let card_class = if available { "menu-card" } else { "menu-card menu-card--unavailable" };

    let on_add = move |_| {
        if customizable {
            selection.set(item.with_value(Customization::for_item));
            customizing.set(true);
        } else {
            on_action.run(item.with_value(|i| CartAction::add_one(i.clone())));
        }
    };
    let on_decrement = move |_| on_action.run(item.with_value(|i| step_quantity(&i.id, quantity.get(), -1)));
    let on_increment = move |_| on_action.run(item.with_value(|i| step_quantity(&i.id, quantity.get(), 1)));
    let on_confirm = move |_| {
        let action = selection.with(|s| item.with_value(|i| s.to_action(i)));
        on_action.run(action);
        customizing.set(false);
    };

    view! {
        <article class=card_class>
            <div class="menu-card__media">
                {match image {
                    Some(src) => view! {
                        <img
                            class="menu-card__image"
                            src=src
                            alt=item.with_value(|i| i.name.clone())
                            loading="lazy"
                            on:error=move |ev| crate::util::images::swap_to_fallback(&ev, LOGO_PATH)
                        />
                    }
                    .into_any(),
                    None => view! { <div class="menu-card__image menu-card__image--empty">"☕"</div> }.into_any(),
                }}
                {item.with_value(|i| i.popular).then(|| view! { <span class="menu-card__badge">"⭐ Popular"</span> })}
                {(!available).then(|| view! { <span class="menu-card__badge menu-card__badge--muted">"Unavailable"</span> })}
            </div>

            <div class="menu-card__body">
                <h4 class="menu-card__name">{item.with_value(|i| i.name.clone())}</h4>
                <p class="menu-card__description">{item.with_value(|i| i.description.clone())}</p>

                <div class="menu-card__footer">
                    <span class="menu-card__price">{item.with_value(price_label)}</span>
                    <Show
                        when=move || customizable || quantity.get() == 0
                        fallback=move || {
                            view! {
                                <div class="qty-control">
                                    <button class="qty-control__btn" on:click=on_decrement>"−"</button>
                                    <span class="qty-control__value">{move || quantity.get()}</span>
                                    <button class="qty-control__btn" on:click=on_increment>"+"</button>
                                </div>
                            }
                        }
                    >
                        <button class="btn-primary menu-card__add" disabled=!available on:click=on_add>
                            {if customizable { "Customize" } else { "Add" }}
                        </button>
                    </Show>
                </div>

                <Show when=move || customizing.get()>
                    <div class="customize-panel">
                        {(!item.with_value(|i| i.variations.is_empty())).then(|| view! {
                            <fieldset class="customize-panel__group">
                                <legend>"Size"</legend>
                                {item.with_value(|i| i.variations.clone()).into_iter().map(|v| {
                                    let (id, checked_id) = (v.id.clone(), v.id.clone());
                                    let option_price = item.with_value(|i| peso(i.price + v.price));
                                    view! {
                                        <label class="customize-panel__option">
                                            <input
                                                type="radio"
                                                name=move || item.with_value(|i| format!("variation-{}", i.id))
                                                prop:checked=move || selection.with(|s| s.variation_id.as_deref() == Some(checked_id.as_str()))
                                                on:change=move |_| selection.update(|s| s.select_variation(&id))
                                            />
                                            <span>{v.name}</span>
                                            <span class="customize-panel__delta">{option_price}</span>
                                        </label>
                                    }
                                }).collect::<Vec<_>>()}
                            </fieldset>
                        })}

                        {(!item.with_value(|i| i.add_ons.is_empty())).then(|| view! {
                            <fieldset class="customize-panel__group">
                                <legend>"Add-ons"</legend>
                                {item.with_value(|i| i.add_ons.clone()).into_iter().map(|a| {
                                    let (dec_id, inc_id, units_id) = (a.id.clone(), a.id.clone(), a.id);
                                    let label = format!("{} +{}", a.name, peso(a.price));
                                    view! {
                                        <div class="customize-panel__option">
                                            <span>{label}</span>
                                            <div class="qty-control qty-control--small">
                                                <button class="qty-control__btn" on:click=move |_| selection.update(|s| s.decrement_add_on(&dec_id))>"−"</button>
                                                <span class="qty-control__value">{move || selection.with(|s| s.add_on_units(&units_id))}</span>
                                                <button class="qty-control__btn" on:click=move |_| selection.update(|s| s.increment_add_on(&inc_id))>"+"</button>
                                            </div>
                                        </div>
                                    }
                                }).collect::<Vec<_>>()}
                            </fieldset>
                        })}

                        <div class="customize-panel__actions">
                            <button class="btn-secondary" on:click=move |_| customizing.set(false)>"Cancel"</button>
                            <button class="btn-primary" on:click=on_confirm>
                                {move || format!("Add to Cart - {}", selection.with(|s| item.with_value(|i| peso(s.unit_price(i)))))}
                            </button>
                        </div>
                    </div>
                </Show>
            </div>
        </article>
    }
}
