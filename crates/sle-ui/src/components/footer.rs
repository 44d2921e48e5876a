//! Copyright footer

use leptos::prelude::*;
use sle_core::config::FooterConfig;

const FALLBACK_YEAR: i32 = 2026;

#[component]
pub fn Footer(footer: FooterConfig) -> impl IntoView {
    let line = footer.copyright(current_year());

    view! {
        <footer class="site-footer">
            <p>{line}</p>
        </footer>
    }
}

/// Year from the browser clock
fn current_year() -> i32 {
    let year = js_sys::Date::new_0().get_full_year();
    i32::try_from(year).unwrap_or(FALLBACK_YEAR)
}
