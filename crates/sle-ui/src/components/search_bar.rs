//! Free-text filter above the grid

use leptos::prelude::*;
use sle_core::Icon;

use crate::components::icon::IconSvg;

#[component]
pub fn SearchBar(
    #[prop(into)] value: Signal<String>,
    on_input: Callback<String>,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    view! {
        <div class="search-bar">
            <span class="search-icon">
                <IconSvg icon=Icon::Search size=20 />
            </span>
            <input
                type="search"
                class="search-input"
                placeholder=placeholder
                autocomplete="off"
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </div>
    }
}
