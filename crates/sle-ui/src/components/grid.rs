//! Card grid

use std::sync::Arc;

use leptos::prelude::*;
use sle_core::{Catalog, LinkEntry};

use crate::components::card::ProjectCard;

/// Entries to render for `query`, each paired with its position in the grid
pub fn visible_entries(catalog: &Catalog, query: &str) -> Vec<(usize, LinkEntry)> {
    catalog
        .search(query)
        .into_iter()
        .cloned()
        .enumerate()
        .collect()
}

/// One card per visible entry, always in catalog order
#[component]
pub fn CardGrid(
    catalog: Arc<Catalog>,
    #[prop(into)] query: Signal<String>,
    #[prop(into)] cta: String,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    let visible = Memo::new(move |_| query.with(|q| visible_entries(&catalog, q)));

    let empty = move || {
        visible
            .with(Vec::is_empty)
            .then(|| view! { <p class="grid-empty">{empty_message.clone()}</p> })
    };

    view! {
        <div class="card-grid">
            <For
                each=move || visible.get()
                key=|item: &(usize, LinkEntry)| item.1.id.clone()
                children=move |(index, entry): (usize, LinkEntry)| {
                    view! { <ProjectCard entry=entry index=index cta=cta.clone() /> }
                }
            />
        </div>
        {empty}
    }
}
