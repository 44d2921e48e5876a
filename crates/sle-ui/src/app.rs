//! Main application component
//!
//! The page root owns the only page-wide state: the theme, whether the
//! background video is ready, and the search text. Children get read-only
//! signals and callbacks.

use std::sync::Arc;

use leptos::prelude::*;
use sle_core::SiteConfig;

use crate::components::{Background, CardGrid, Footer, Header, Hero, SearchBar};
use crate::error::UiError;
use crate::state::ThemeController;

#[component]
pub fn App() -> impl IntoView {
    match SiteConfig::builtin().map_err(UiError::from) {
        Ok(site) => view! { <Page site=site /> }.into_any(),
        Err(err) => {
            log::error!("{err}");
            view! { <ConfigNotice message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
fn Page(site: SiteConfig) -> impl IntoView {
    let SiteConfig {
        brand,
        hero,
        search,
        cards,
        background,
        footer,
        catalog,
    } = site;
    log::info!("rendering {} dashboards", catalog.len());

    let theme = ThemeController::new();
    theme.sync_document_root();

    let (video_ready, set_video_ready) = signal(false);
    let (query, set_query) = signal(String::new());

    let page_class = move || format!("page page-{}", theme.theme().get().name());
    let page_style = move || theme.theme().get().palette().css_variables();

    view! {
        <div class=page_class style=page_style>
            <Background
                theme=theme.theme()
                video_url=background.video_url
                ready=video_ready
                on_ready=Callback::new(move |()| set_video_ready.set(true))
            />

            <div class="page-content">
                <Header brand=brand theme=theme.theme() on_toggle=theme.callback() />

                <main class="page-main">
                    <Hero hero=hero />
                    <SearchBar
                        value=query
                        on_input=Callback::new(move |text: String| set_query.set(text))
                        placeholder=search.placeholder
                    />
                    <CardGrid
                        catalog=Arc::new(catalog)
                        query=query
                        cta=cards.cta
                        empty_message=search.empty_message
                    />
                </main>

                <Footer footer=footer />
            </div>
        </div>
    }
}

/// Shown in place of the grid when the embedded configuration is broken
#[component]
fn ConfigNotice(message: String) -> impl IntoView {
    view! {
        <div class="page page-dark">
            <main class="page-main config-notice">
                <p>{message}</p>
            </main>
        </div>
    }
}
