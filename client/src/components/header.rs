//! Sticky top bar with merchant branding and the cart button.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;

use crate::components::floating_cart_button::badge_label;
use crate::net::types::SiteSettings;
use crate::state::catalog::SiteState;
use crate::util::images::{LOGO_PATH, swap_to_fallback};

pub const DEFAULT_SITE_NAME: &str = "Beracah Cafe";
const TAGLINE: &str = "SAVINGS";

/// Site name, or the default when settings are missing or blank.
pub fn brand_name(settings: Option<&SiteSettings>) -> String {
    settings
        .map(|s| s.site_name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or(DEFAULT_SITE_NAME)
        .to_owned()
}

/// Logo URL, or the bundled logo when none is configured.
pub fn brand_logo(settings: Option<&SiteSettings>) -> String {
    settings
        .and_then(|s| s.site_logo.as_deref())
        .filter(|l| !l.is_empty())
        .unwrap_or(LOGO_PATH)
        .to_owned()
}

/// Header bar. Branding comes from the `SiteState` context and shows pulsing
/// placeholders until it resolves.
#[component]
pub fn Header(
    #[prop(into)] cart_items_count: Signal<u32>,
    on_cart_click: Callback<()>,
    on_menu_click: Callback<()>,
) -> impl IntoView {
    let site = expect_context::<RwSignal<SiteState>>();
    let loading = move || site.get().loading;
    let name = move || site.with(|s| brand_name(s.settings.as_ref()));
    let logo = move || site.with(|s| brand_logo(s.settings.as_ref()));

    view! {
        <header class="site-header">
            <div class="container-minimal site-header__inner">
                <button class="site-header__brand" on:click=move |_| on_menu_click.run(())>
                    <Show
                        when=move || !loading()
                        fallback=|| view! { <div class="skeleton skeleton--avatar"></div> }
                    >
                        <img
                            class="site-header__logo"
                            src=logo
                            alt=name
                            on:error=move |ev| swap_to_fallback(&ev, LOGO_PATH)
                        />
                    </Show>
                    <div class="site-header__titles">
                        <Show
                            when=move || !loading()
                            fallback=|| {
                                view! {
                                    <div class="skeleton skeleton--title"></div>
                                    <div class="skeleton skeleton--subtitle"></div>
                                }
                            }
                        >
                            <h1 class="site-header__name">{name}</h1>
                            <p class="site-header__tagline">{TAGLINE}</p>
                        </Show>
                    </div>
                </button>

                <button class="site-header__cart" title="View cart" on:click=move |_| on_cart_click.run(())>
                    <span aria-hidden="true">"🛒"</span>
                    {move || {
                        badge_label(cart_items_count.get())
                            .map(|label| view! { <span class="site-header__badge">{label}</span> })
                    }}
                </button>
            </div>
        </header>
    }
}
