//! Interactive project card
//!
//! The card is a plain anchor: activation navigates to the entry's URL in a
//! new browsing context and nothing in here can intercept or fail that.
//! Hover, tilt, tooltip, and ripples are cosmetic state kept in a
//! [`CardState`] signal local to the card.
//!
//! Every ripple is removed by its own [`Timeout`]. The handles live in a
//! store owned by the card, so tearing the card down drops them and the
//! browser never fires a callback for a card that no longer exists.

use std::collections::HashMap;

use gloo_timers::callback::Timeout;
use leptos::prelude::*;
use sle_core::card::entrance_delay;
use sle_core::catalog::{LINK_REL, LINK_TARGET};
use sle_core::ripple::{RIPPLE_LIFETIME_MS, Ripple, RippleId};
use sle_core::tilt::{Point, Size};
use sle_core::{CardState, ColorTag, Icon, LinkEntry, ResultExt};
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;

use crate::components::icon::IconSvg;

/// Pending ripple removals, keyed by ripple
type RippleTimers = StoredValue<HashMap<RippleId, Timeout>, LocalStorage>;

/// Inline style for the card's current state
pub fn card_style(state: &CardState, index: usize) -> String {
    let tilt = state.tilt();
    format!(
        "transform: {}; --glare-x: {:.1}%; --glare-y: {:.1}%; animation-delay: {:.1}s;",
        state.transform(),
        tilt.glare_x,
        tilt.glare_y,
        entrance_delay(index)
    )
}

/// Icon badge filled with the entry's accent color
pub fn icon_badge_style(color: ColorTag) -> String {
    let accent = color.accent();
    format!(
        "background: {}; box-shadow: 0 10px 15px -3px {};",
        accent.to_css(),
        accent.to_css_alpha(0.3)
    )
}

pub fn ripple_style(ripple: &Ripple) -> String {
    format!(
        "left: {:.0}px; top: {:.0}px;",
        ripple.origin.x, ripple.origin.y
    )
}

/// Pointer position relative to the element the listener is attached to
fn local_pointer(ev: &MouseEvent) -> Option<(Point, Size)> {
    let element = ev.current_target()?.dyn_into::<web_sys::Element>().ok()?;
    let rect = element.get_bounding_client_rect();
    let point = Point::new(
        f64::from(ev.client_x()) - rect.left(),
        f64::from(ev.client_y()) - rect.top(),
    );
    Some((point, Size::new(rect.width(), rect.height())))
}

fn schedule_expiry(state: RwSignal<CardState>, timers: RippleTimers, id: RippleId) {
    let handle = Timeout::new(RIPPLE_LIFETIME_MS, move || {
        // The card may already be gone; a disposed signal makes this a no-op
        state.try_update(|s| s.expire_ripple(id));
    });

    timers.update_value(|pending| {
        // Handles of ripples that already expired are dropped here
        pending.retain(|live, _| state.with_untracked(|s| s.ripples().iter().any(|r| r.id == *live)));
        pending.insert(id, handle);
    });
}

#[component]
pub fn ProjectCard(entry: LinkEntry, index: usize, #[prop(into)] cta: String) -> impl IntoView {
    let state = RwSignal::new(CardState::new());
    let timers: RippleTimers = StoredValue::new_local(HashMap::new());

    on_cleanup(move || {
        let cancelled = timers.try_update_value(|pending| {
            let count = pending.len();
            pending.clear();
            count
        });
        if let Some(count) = cancelled.filter(|c| *c > 0) {
            log::debug!("card torn down, cancelled {count} pending ripple timers");
        }
    });

    let on_move = move |ev: MouseEvent| {
        let Some((point, size)) = local_pointer(&ev) else {
            return;
        };
        // Degenerate geometry keeps the previous tilt
        state.update(|s| s.pointer_move(point, size).or_default_logged(()));
    };

    let on_click = move |ev: MouseEvent| {
        let origin = local_pointer(&ev).map_or(Point::new(0.0, 0.0), |(point, _)| point);
        if let Some(id) = state.try_update(|s| s.spawn_ripple(origin)) {
            schedule_expiry(state, timers, id);
        }
    };

    let LinkEntry {
        id,
        name,
        description,
        details,
        url,
        icon,
        color,
    } = entry;

    let tooltip = move || {
        state
            .with(CardState::is_hovered)
            .then(|| details.clone())
            .filter(|text| !text.is_empty())
            .map(|text| {
                view! {
                    <div class="card-tooltip" role="tooltip">
                        <p>{text}</p>
                    </div>
                }
            })
    };

    view! {
        <a
            class="project-card"
            href=url.to_string()
            target=LINK_TARGET
            rel=LINK_REL
            data-entry=id
            style=move || state.with(|s| card_style(s, index))
            on:mouseenter=move |_| state.update(CardState::pointer_enter)
            on:mousemove=on_move
            on:mouseleave=move |_| state.update(CardState::pointer_leave)
            on:click=on_click
        >
            {tooltip}

            <div class="card-body">
                <div class="card-icon" style=icon_badge_style(color)>
                    <IconSvg icon=icon size=24 />
                </div>
                <h3 class="card-title">{name}</h3>
                <p class="card-description">{description}</p>
            </div>

            <div class="card-footer">
                <span class="card-cta">{cta}</span>
                <IconSvg icon=Icon::ArrowRight size=18 class="card-arrow" />
            </div>

            <div class="card-glare"></div>
            <For
                each=move || state.with(|s| s.ripples().to_vec())
                key=|ripple: &Ripple| ripple.id
                children=move |ripple: Ripple| {
                    view! { <span class="ripple" style=ripple_style(&ripple)></span> }
                }
            />
        </a>
    }
}
