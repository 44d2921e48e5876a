//! Top bar: brand mark, status pill, theme toggle

use leptos::prelude::*;
use sle_core::config::BrandConfig;
use sle_core::{Icon, Theme};

use crate::components::icon::IconSvg;
use crate::state::theme::{toggle_icon, toggle_label};

#[component]
pub fn Header(
    brand: BrandConfig,
    #[prop(into)] theme: Signal<Theme>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    let BrandConfig {
        name,
        accent,
        status_label,
    } = brand;

    let status = (!status_label.is_empty()).then(|| {
        view! {
            <div class="status-pill">
                <span class="status-dot"></span>
                <span class="status-label">{status_label}</span>
            </div>
        }
    });

    view! {
        <header class="site-header">
            <div class="brand">
                <div class="brand-mark">
                    <IconSvg icon=Icon::Truck size=24 />
                </div>
                <div class="brand-text">
                    <h1 class="brand-name">
                        <span class="brand-name-primary">{name}</span>
                        <span class="brand-name-accent">{accent}</span>
                    </h1>
                    <div class="brand-rule"></div>
                </div>
            </div>

            <div class="header-actions">
                {status}
                <button
                    type="button"
                    class="theme-toggle"
                    aria-label=move || toggle_label(theme.get())
                    on:click=move |_| on_toggle.run(())
                >
                    {move || view! { <IconSvg icon=toggle_icon(theme.get()) size=20 /> }}
                </button>
            </div>
        </header>
    }
}
