//! Decorative speed lines and floating lights
//!
//! The field is drawn once when the component is created. Leptos never
//! re-runs a component body, so the layout and timings stay fixed for the
//! component's lifetime and only the color follows the theme.

use leptos::prelude::*;
use rand::SeedableRng;
use rand::rngs::SmallRng;
use sle_core::Theme;
use sle_core::particles::{ParticleConfig, ParticleField};

#[component]
pub fn MovingParticles(#[prop(into)] theme: Signal<Theme>) -> impl IntoView {
    let field = ParticleField::generate(&mut browser_rng(), &ParticleConfig::default());
    log::debug!("particle field generated with {} particles", field.len());

    let lines = field
        .speed_lines
        .iter()
        .map(|line| view! { <div class="speed-line" style=line.style()></div> })
        .collect_view();

    let lights = field
        .floating_lights
        .iter()
        .map(|light| view! { <div class="floating-light" style=light.style()></div> })
        .collect_view();

    view! {
        <div
            class="particles"
            class:particles-light=move || !theme.get().is_dark()
            aria-hidden="true"
        >
            <div class="speed-lines">{lines}</div>
            {lights}
        </div>
    }
}

/// Seeded from the browser's Math.random; the field is cosmetic only
fn browser_rng() -> SmallRng {
    // 2^53, the integer range an f64 represents exactly
    const SCALE: f64 = 9_007_199_254_740_992.0;
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let seed = (js_sys::Math::random() * SCALE) as u64;
    SmallRng::seed_from_u64(seed)
}
