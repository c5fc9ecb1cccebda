//! Image assets: fixed paths, load-error fallbacks and cache warming.
//!
//! Warming is two-tier: images of the active category are requested right
//! away, everything else after [`DEFERRED_PRELOAD_MS`]. It only primes the
//! browser cache; nothing is evicted or tracked.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

use crate::net::types::MenuItem;

pub const LOGO_PATH: &str = "/logo.jpg";
pub const HERO_IMAGE_PATH: &str = "/hero-image.jpg";
pub const QR_FALLBACK_URL: &str =
    "https://images.pexels.com/photos/8867482/pexels-photo-8867482.jpeg?auto=compress&cs=tinysrgb&w=300&h=300&fit=crop";

/// Delay before warming images outside the active category.
pub const DEFERRED_PRELOAD_MS: u32 = 1000;

/// Image URLs split by warming priority.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PreloadPlan {
    pub immediate: Vec<String>,
    pub deferred: Vec<String>,
}

/// Split item images into the active category (immediate) and the rest
/// (deferred). Items without an image are skipped; duplicates are requested
/// once.
pub fn plan_preload(items: &[MenuItem], active_category: Option<&str>) -> PreloadPlan {
    let mut plan = PreloadPlan::default();
    let mut seen = std::collections::HashSet::new();
    for item in items {
        let Some(url) = item.image.as_deref().filter(|u| !u.is_empty()) else {
            continue;
        };
        if !seen.insert(url) {
            continue;
        }
        if Some(item.category.as_str()) == active_category {
            plan.immediate.push(url.to_owned());
        } else {
            plan.deferred.push(url.to_owned());
        }
    }
    plan
}

/// Ask the browser to fetch each URL into its image cache.
pub fn preload_images(urls: &[String]) {
    #[cfg(feature = "hydrate")]
    {
        for url in urls {
            if let Ok(img) = web_sys::HtmlImageElement::new() {
                img.set_src(url);
            }
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = urls;
    }
}

/// Warm the immediate tier now and the deferred tier after a delay. Dropping
/// the returned timer cancels the deferred tier.
#[cfg(feature = "hydrate")]
pub fn schedule_preload(plan: PreloadPlan) -> Option<gloo_timers::callback::Timeout> {
    preload_images(&plan.immediate);
    if plan.deferred.is_empty() {
        return None;
    }
    let deferred = plan.deferred;
    Some(gloo_timers::callback::Timeout::new(DEFERRED_PRELOAD_MS, move || {
        preload_images(&deferred);
    }))
}

/// `on:error` handler body: point the failing `<img>` at `fallback` once.
pub fn swap_to_fallback(ev: &leptos::ev::Event, fallback: &str) {
    #[cfg(feature = "hydrate")]
    {
        use wasm_bindgen::JsCast;

        let Some(img) = ev
            .target()
            .and_then(|t| t.dyn_into::<web_sys::HtmlImageElement>().ok())
        else {
            return;
        };
        if !img.src().ends_with(fallback) {
            img.set_src(fallback);
        }
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (ev, fallback);
    }
}
