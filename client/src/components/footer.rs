//! Static contact footer.

#[cfg(test)]
#[path = "footer_test.rs"]
mod footer_test;

use leptos::prelude::*;

use crate::order::message::STORE_NAME;

const ADDRESS_LINES: [&str; 2] = ["Poblacion 1 Porok 3 Sumil Street", "Basud Camarines Norte"];
const BRANCH: &str = "Main Branch";
const PHONE_DISPLAY: &str = "09569254324";
const PHONE_TEL: &str = "tel:+639569254324";
const OWNER: &str = "Alan Nacor Cabalquinto";

pub fn copyright_line(year: i32) -> String {
    format!("© {year} {STORE_NAME}. All rights reserved.")
}

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container-minimal site-footer__grid">
                <section class="site-footer__block">
                    <h3 class="site-footer__heading">"📍 Address"</h3>
                    <p class="site-footer__text">
                        {ADDRESS_LINES[0]}<br/>
                        {ADDRESS_LINES[1]}<br/>
                        <span class="site-footer__accent">{BRANCH}</span>
                    </p>
                </section>
                <section class="site-footer__block">
                    <h3 class="site-footer__heading">"📞 Contact"</h3>
                    <p class="site-footer__text">
                        <a href=PHONE_TEL>{PHONE_DISPLAY}</a>
                    </p>
                </section>
                <section class="site-footer__block">
                    <h3 class="site-footer__heading">"👤 Owner"</h3>
                    <p class="site-footer__text">{OWNER}</p>
                </section>
            </div>
            <div class="site-footer__divider"></div>
            <p class="site-footer__copyright">{copyright_line(current_year())}</p>
        </footer>
    }
}
