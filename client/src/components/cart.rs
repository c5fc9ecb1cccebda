//! Cart page body: line rows with quantity controls plus an order summary.
//!
//! The view holds no state of its own. It renders a [`CartView`] derived from
//! the shared `CartStore` and turns clicks into `CartAction`s. Quantity
//! controls are not clamped here; the reducer drops lines that reach zero.

#[cfg(test)]
#[path = "cart_test.rs"]
mod cart_test;

use leptos::prelude::*;

use crate::state::cart::{CartAction, CartItem, CartState, CartStore};
use crate::util::format::{displayed_total, item_count_label, peso};

/// Display-ready cart line.
#[derive(Clone, Debug, PartialEq)]
pub struct CartRow {
    pub id: String,
    pub name: String,
    pub quantity: u32,
    /// `"Size: Large"`
    pub variation: Option<String>,
    /// `"Add-ons: Extra Shot x2, Oat Milk"`
    pub add_ons: Option<String>,
    /// `"₱120.00 each"`
    pub unit_price: String,
    pub subtotal: String,
}

impl From<&CartItem> for CartRow {
    fn from(line: &CartItem) -> Self {
        Self {
            id: line.id.clone(),
            name: line.name.clone(),
            quantity: line.quantity,
            variation: line.selected_variation.as_ref().map(|v| format!("Size: {}", v.name)),
            add_ons: line.add_ons_label().map(|l| format!("Add-ons: {l}")),
            unit_price: format!("{} each", peso(line.total_price)),
            subtotal: peso(line.subtotal()),
        }
    }
}

/// What the cart page shows.
#[derive(Clone, Debug, PartialEq)]
pub enum CartView {
    Empty,
    Populated { rows: Vec<CartRow>, count_label: String, total: String },
}

impl CartView {
    pub fn from_state(cart: &CartState) -> Self {
        if cart.is_empty() {
            return Self::Empty;
        }
        Self::Populated {
            rows: cart.items.iter().map(CartRow::from).collect(),
            count_label: item_count_label(cart.items.len()),
            total: peso(displayed_total(cart.total_price())),
        }
    }
}

pub fn decrement_action(row: &CartRow) -> CartAction {
    CartAction::UpdateQuantity { id: row.id.clone(), quantity: i64::from(row.quantity) - 1 }
}

pub fn increment_action(row: &CartRow) -> CartAction {
    CartAction::UpdateQuantity { id: row.id.clone(), quantity: i64::from(row.quantity) + 1 }
}

#[component]
pub fn Cart(on_continue_shopping: Callback<()>, on_checkout: Callback<()>) -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let view_model = Memo::new(move |_| cart.state().with(CartView::from_state));

    move || match view_model.get() {
        CartView::Empty => view! {
            <div class="cart cart--empty container-minimal">
                <div class="cart__empty-icon">"🛒"</div>
                <h2 class="cart__empty-title">"Your cart is empty"</h2>
                <p class="cart__empty-text">
                    "Discover our premium selection and add some delicious items to get started."
                </p>
                <button class="btn-primary" on:click=move |_| on_continue_shopping.run(())>
                    "Browse Menu"
                </button>
            </div>
        }
        .into_any(),
        CartView::Populated { rows, count_label, total } => {
            let summary_rows = rows.clone();
            view! {
                <div class="cart container-minimal">
                    <div class="cart__header">
                        <button class="cart__back" on:click=move |_| on_continue_shopping.run(())>
                            "← Continue Shopping"
                        </button>
                        <div class="cart__title">
                            <h1>"Your Cart"</h1>
                            <p>{count_label}</p>
                        </div>
                        <button class="cart__clear" on:click=move |_| cart.dispatch(CartAction::Clear)>
                            "Clear All"
                        </button>
                    </div>

                    <div class="cart__layout">
                        <div class="cart__lines card-elevated">
                            {rows
                                .into_iter()
                                .map(|row| {
                                    let dec = decrement_action(&row);
                                    let inc = increment_action(&row);
                                    let remove = CartAction::Remove { id: row.id.clone() };
                                    view! {
                                        <div class="cart-row">
                                            <div class="cart-row__info">
                                                <h3 class="cart-row__name">{row.name}</h3>
                                                {row.variation.map(|v| view! { <p class="cart-row__meta">{v}</p> })}
                                                {row.add_ons.map(|a| view! { <p class="cart-row__meta">{a}</p> })}
                                                <p class="cart-row__unit">{row.unit_price}</p>
                                            </div>
                                            <div class="cart-row__controls">
                                                <div class="qty-control">
                                                    <button class="qty-control__btn" on:click=move |_| cart.dispatch(dec.clone())>"−"</button>
                                                    <span class="qty-control__value">{row.quantity}</span>
                                                    <button class="qty-control__btn" on:click=move |_| cart.dispatch(inc.clone())>"+"</button>
                                                </div>
                                                <p class="cart-row__subtotal">{row.subtotal}</p>
                                                <button class="cart-row__remove" title="Remove" on:click=move |_| cart.dispatch(remove.clone())>
                                                    "🗑"
                                                </button>
                                            </div>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </div>

                        <aside class="cart__summary card-elevated">
                            <h3>"Order Summary"</h3>
                            <div class="cart__breakdown">
                                {summary_rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <div class="cart__breakdown-row">
                                            <span>{format!("{} x{}", row.name, row.quantity)}</span>
                                            <span>{row.subtotal}</span>
                                        </div>
                                    })
                                    .collect_view()}
                            </div>
                            <div class="cart__total">
                                <span>"Total:"</span>
                                <span class="cart__total-amount">{total}</span>
                            </div>
                            <button class="btn-primary cart__checkout" on:click=move |_| on_checkout.run(())>
                                "Proceed to Checkout"
                            </button>
                            <p class="cart__fineprint">"Secure checkout powered by trusted payment methods"</p>
                        </aside>
                    </div>
                </div>
            }
            .into_any()
        }
    }
}
