//! Which menu section is currently in view.
//!
//! DESIGN
//! ======
//! An `IntersectionObserver` reports per-section visibility ratios into a
//! [`SectionSpy`], which derives the "most visible section" id. Layout code
//! never polls element offsets on scroll. When nothing intersects (e.g. the
//! viewport sits in the hero or a gap), [`topmost_passed_section`] picks the
//! last section whose top has scrolled past the sticky header.

#[cfg(test)]
#[path = "section_spy_test.rs"]
mod section_spy_test;

use std::collections::HashMap;

/// Height reserved for the sticky header + sub-nav.
pub const HEADER_OFFSET_PX: f64 = 200.0;

/// Visibility ratios per section, in document order.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SectionSpy {
    order: Vec<String>,
    ratios: HashMap<String, f64>,
}

impl SectionSpy {
    pub fn new(order: Vec<String>) -> Self {
        Self { order, ratios: HashMap::new() }
    }

    /// Record a new intersection ratio for `id`. Unknown ids are ignored.
    pub fn observe(&mut self, id: &str, ratio: f64) {
        if !self.order.iter().any(|s| s == id) {
            return;
        }
        self.ratios.insert(id.to_owned(), ratio.clamp(0.0, 1.0));
    }

    /// Section with the highest visible ratio; earlier sections win ties.
    pub fn most_visible(&self) -> Option<&str> {
        let mut best: Option<(&str, f64)> = None;
        for id in &self.order {
            let ratio = self.ratios.get(id).copied().unwrap_or(0.0);
            if ratio <= 0.0 {
                continue;
            }
            if best.map_or(true, |(_, r)| ratio > r) {
                best = Some((id.as_str(), ratio));
            }
        }
        best.map(|(id, _)| id)
    }
}

/// Last section (in document order) whose top offset is at or above
/// `scroll_y + HEADER_OFFSET_PX`.
pub fn topmost_passed_section(sections: &[(String, f64)], scroll_y: f64) -> Option<String> {
    let line = scroll_y + HEADER_OFFSET_PX;
    sections
        .iter()
        .rev()
        .find(|(_, top)| *top <= line)
        .map(|(id, _)| id.clone())
}

/// Live observer over the section elements; disconnects on drop.
#[cfg(feature = "hydrate")]
pub struct SectionObserver {
    observer: web_sys::IntersectionObserver,
    _callback: wasm_bindgen::closure::Closure<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>,
}

#[cfg(feature = "hydrate")]
impl SectionObserver {
    /// Observe every element whose id is in `ids`, forwarding
    /// `(id, intersection_ratio)` batches to `on_entries`.
    pub fn observe(ids: &[String], mut on_entries: impl FnMut(Vec<(String, f64)>) + 'static) -> Option<Self> {
        use wasm_bindgen::JsCast;
        use wasm_bindgen::closure::Closure;

        let document = web_sys::window()?.document()?;
        let callback = Closure::<dyn FnMut(js_sys::Array, web_sys::IntersectionObserver)>::new(
            move |entries: js_sys::Array, _observer: web_sys::IntersectionObserver| {
                let updates = entries
                    .iter()
                    .filter_map(|e| e.dyn_into::<web_sys::IntersectionObserverEntry>().ok())
                    .map(|e| (e.target().id(), e.intersection_ratio()))
                    .collect();
                on_entries(updates);
            },
        );

        let init = web_sys::IntersectionObserverInit::new();
        init.set_root_margin(&format!("-{HEADER_OFFSET_PX}px 0px 0px 0px"));
        let thresholds = js_sys::Array::new();
        for t in [0.0, 0.25, 0.5, 0.75, 1.0] {
            thresholds.push(&wasm_bindgen::JsValue::from_f64(t));
        }
        init.set_threshold(&thresholds);

        let observer =
            web_sys::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).ok()?;
        for id in ids {
            if let Some(el) = document.get_element_by_id(id) {
                observer.observe(&el);
            }
        }
        Some(Self { observer, _callback: callback })
    }
}

#[cfg(feature = "hydrate")]
impl Drop for SectionObserver {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

/// Current `(id, document top offset)` pairs for the given section ids.
#[cfg(feature = "hydrate")]
pub fn section_offsets(ids: &[String]) -> Vec<(String, f64)> {
    let Some(window) = web_sys::window() else {
        return Vec::new();
    };
    let Some(document) = window.document() else {
        return Vec::new();
    };
    let scroll_y = window.scroll_y().unwrap_or(0.0);
    ids.iter()
        .filter_map(|id| {
            let el = document.get_element_by_id(id)?;
            Some((id.clone(), el.get_bounding_client_rect().top() + scroll_y))
        })
        .collect()
}

/// Current vertical scroll position, `0.0` outside the browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}
