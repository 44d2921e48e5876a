//! Background stack: fallback gradient, video, theme overlays, particles

use leptos::prelude::*;
use sle_core::Theme;
use url::Url;

use crate::components::particles::MovingParticles;

/// Layered, non-interactive backdrop.
///
/// The gradient is always present underneath and only fades once the video
/// reports `loadeddata`. A video that never loads leaves the gradient up.
#[component]
pub fn Background(
    #[prop(into)] theme: Signal<Theme>,
    video_url: Option<Url>,
    #[prop(into)] ready: Signal<bool>,
    on_ready: Callback<()>,
) -> impl IntoView {
    let video = video_url.map(|url| {
        let src = url.to_string();
        view! {
            <video
                class="background-video"
                class:is-ready=move || ready.get()
                autoplay=true
                loop=true
                muted=true
                prop:muted=true
                playsinline=true
                on:loadeddata=move |_| {
                    log::debug!("background video loaded");
                    on_ready.run(());
                }
            >
                // Load failures are reported on the source element, not the video
                <source
                    src=src
                    type="video/mp4"
                    on:error=move |_| log::warn!("background video failed to load, keeping fallback")
                />
            </video>
        }
    });

    view! {
        <div class="background" aria-hidden="true">
            <div class="background-fallback" class:is-hidden=move || ready.get()></div>
            {video}
            <div
                class="background-overlay background-overlay-dark"
                class:is-visible=move || theme.get().is_dark()
            ></div>
            <div
                class="background-overlay background-overlay-light"
                class:is-visible=move || !theme.get().is_dark()
            ></div>
            <div class="background-particles">
                <MovingParticles theme=theme />
            </div>
        </div>
    }
}
