//! Mobile-only floating cart shortcut.

#[cfg(test)]
#[path = "floating_cart_button_test.rs"]
mod floating_cart_button_test;

use leptos::prelude::*;

/// Badge text for `item_count`, or `None` when the cart is empty.
pub fn badge_label(item_count: u32) -> Option<String> {
    (item_count > 0).then(|| item_count.to_string())
}

/// Floating cart button; renders nothing while the cart is empty.
#[component]
pub fn FloatingCartButton(#[prop(into)] item_count: Signal<u32>, on_cart_click: Callback<()>) -> impl IntoView {
    move || {
        badge_label(item_count.get()).map(|label| {
            view! {
                <button
                    class="floating-cart"
                    title="View cart"
                    on:click=move |_| on_cart_click.run(())
                >
                    <span class="floating-cart__icon" aria-hidden="true">"🛒"</span>
                    <span class="floating-cart__badge">{label}</span>
                </button>
            }
        })
    }
}
