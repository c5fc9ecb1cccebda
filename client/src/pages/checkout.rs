//! Checkout route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::checkout::Checkout;

#[component]
pub fn CheckoutPage() -> impl IntoView {
    let navigate = use_navigate();
    let to_cart = Callback::new(move |()| navigate("/cart", NavigateOptions::default()));

    view! { <Checkout on_back=to_cart/> }
}
