//! Cart route.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::cart::Cart;

#[component]
pub fn CartPage() -> impl IntoView {
    let navigate = use_navigate();
    let to_menu = {
        let navigate = navigate.clone();
        Callback::new(move |()| navigate("/", NavigateOptions::default()))
    };
    let to_checkout = Callback::new(move |()| navigate("/checkout", NavigateOptions::default()));

    view! { <Cart on_continue_shopping=to_menu on_checkout=to_checkout/> }
}
