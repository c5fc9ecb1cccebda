//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `App` provides every shared state handle the components read: the cart
//! store, catalog / payment-method / site snapshots, and the order submitter.
//! After hydration it loads the catalog sources and restores
//! the cart saved for this browser session.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    NavigateOptions, StaticSegment,
    components::{Route, Router, Routes},
    hooks::{use_location, use_navigate},
};

use crate::components::{floating_cart_button::FloatingCartButton, footer::Footer, header::Header};
use crate::order::submit::{MessengerHandoff, SharedSubmitter};
use crate::pages::{cart::CartPage, checkout::CheckoutPage, menu::MenuPage};
use crate::state::cart::{CartState, CartStore};
use crate::state::catalog::{CatalogState, PaymentMethodsState, SiteState};

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let cart = CartStore::new(CartState::default());
    let catalog = RwSignal::new(CatalogState::default());
    let payment_methods = RwSignal::new(PaymentMethodsState::default());
    let site = RwSignal::new(SiteState::default());
    let submitter: SharedSubmitter = Arc::new(MessengerHandoff::default());

    provide_context(cart);
    provide_context(catalog);
    provide_context(payment_methods);
    provide_context(site);
    provide_context(submitter);

    #[cfg(feature = "hydrate")]
    {
        load_catalog(catalog, payment_methods, site);
        persist_cart(cart);
    }

    view! {
        <Stylesheet id="leptos" href="/pkg/storefront.css"/>
        <Title text="Coin Bank"/>

        <Router>
            <Layout>
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=MenuPage/>
                    <Route path=StaticSegment("cart") view=CartPage/>
                    <Route path=StaticSegment("checkout") view=CheckoutPage/>
                </Routes>
            </Layout>
        </Router>
    }
}

/// Header, footer and the floating cart button around the routed page.
#[component]
fn Layout(children: Children) -> impl IntoView {
    let cart = expect_context::<CartStore>();
    let navigate = use_navigate();
    let location = use_location();

    let item_count = Signal::derive(move || cart.item_count());
    let pathname = location.pathname;
    let on_cart_click = {
        let navigate = navigate.clone();
        Callback::new(move |()| navigate("/cart", NavigateOptions::default()))
    };
    let on_menu_click = Callback::new(move |()| navigate("/", NavigateOptions::default()));

    view! {
        <div class="app">
            <Header cart_items_count=item_count on_cart_click=on_cart_click on_menu_click=on_menu_click/>
            {children()}
            <Show when=move || pathname.with(|p| p == "/")>
                <FloatingCartButton item_count=item_count on_cart_click=on_cart_click/>
            </Show>
            <Footer/>
        </div>
    }
}

/// Fetch the catalog sources in three independent tasks. Each failure clears its
/// `loading` flag and leaves the data empty.
#[cfg(feature = "hydrate")]
fn load_catalog(catalog: RwSignal<CatalogState>, payment_methods: RwSignal<PaymentMethodsState>, site: RwSignal<SiteState>) {
    use crate::net::api;
    use leptos::logging::warn;

    leptos::task::spawn_local(async move {
        // Sections need both lists, so they land in a single state write.
        let categories = api::fetch_categories().await.unwrap_or_else(|e| {
            warn!("{e}");
            Vec::new()
        });
        let menu_items = api::fetch_menu_items().await.unwrap_or_else(|e| {
            warn!("{e}");
            Vec::new()
        });
        catalog.set(CatalogState { categories, menu_items, loading: false });
    });

    leptos::task::spawn_local(async move {
        let methods = api::fetch_payment_methods().await.unwrap_or_else(|e| {
            warn!("{e}");
            Vec::new()
        });
        payment_methods.set(PaymentMethodsState { methods, loading: false });
    });

    leptos::task::spawn_local(async move {
        let settings = match api::fetch_site_settings().await {
            Ok(settings) => Some(settings),
            Err(e) => {
                warn!("{e}");
                None
            }
        };
        site.set(SiteState { settings, loading: false });
    });
}

/// Restore the session cart once mounted, then save it on every change.
#[cfg(feature = "hydrate")]
fn persist_cart(cart: CartStore) {
    use crate::util::storage::{CART_STORAGE_KEY, load_json, save_json};

    let restored = RwSignal::new(false);
    Effect::new(move || {
        if restored.get_untracked() {
            return;
        }
        if let Some(saved) = load_json::<CartState>(CART_STORAGE_KEY) {
            cart.restore(saved);
        }
        restored.set(true);
    });

    Effect::new(move || {
        let snapshot = cart.state().get();
        if restored.get() {
            save_json(CART_STORAGE_KEY, &snapshot);
        }
    });
}
