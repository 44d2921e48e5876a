//! Page title block

use leptos::prelude::*;
use sle_core::config::HeroConfig;

#[component]
pub fn Hero(hero: HeroConfig) -> impl IntoView {
    let HeroConfig {
        badge,
        title,
        highlight,
        subtitle,
    } = hero;

    let badge = (!badge.is_empty()).then(|| {
        view! {
            <div class="hero-badge">
                <span>{badge}</span>
            </div>
        }
    });
    let subtitle = (!subtitle.is_empty()).then(|| view! { <p class="hero-subtitle">{subtitle}</p> });

    view! {
        <section class="hero">
            {badge}
            <h2 class="hero-title">
                {title} " " <span class="hero-highlight">{highlight}</span>
            </h2>
            {subtitle}
        </section>
    }
}
