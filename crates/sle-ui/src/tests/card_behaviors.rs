//! Behavioral tests for card styling and interaction state

use sle_core::tilt::{Point, Size};
use sle_core::{CardState, ColorTag, Result};

const STYLESHEET: &str = include_str!("../../style/main.css");

/// Body of the first top-level block whose header starts with `header`
fn css_block(header: &str) -> &'static str {
    STYLESHEET
        .split_once(&format!("\n{header} {{"))
        .and_then(|(_, rest)| rest.split_once("\n}"))
        .map_or("", |(body, _)| body)
}

use crate::components::card::{card_style, icon_badge_style, ripple_style};
use crate::components::icon::svg_body;

#[test]
fn given_idle_card_when_styled_then_transform_is_neutral() {
    let state = CardState::new();

    let style = card_style(&state, 0);

    assert_eq!(
        style,
        "transform: perspective(1000px) rotateX(0deg) rotateY(0deg); --glare-x: 50.0%; --glare-y: 50.0%; animation-delay: 0.0s;"
    );
}

#[test]
fn given_third_card_when_styled_then_entrance_is_staggered() {
    let style = card_style(&CardState::new(), 2);
    assert!(style.ends_with("animation-delay: 0.2s;"));
}

#[test]
fn given_hovered_card_when_pointer_at_corner_then_transform_tilts() -> Result<()> {
    let mut state = CardState::new();
    state.pointer_enter();
    state.pointer_move(Point::new(0.0, 0.0), Size::new(320.0, 340.0))?;

    let style = card_style(&state, 0);

    assert!(style.contains("rotateX(8.00deg) rotateY(-8.00deg)"));
    assert!(style.contains("--glare-x: 0.0%; --glare-y: 0.0%;"));
    Ok(())
}

#[test]
fn given_tilted_card_when_pointer_leaves_then_style_resets() -> Result<()> {
    let mut state = CardState::new();
    state.pointer_enter();
    state.pointer_move(Point::new(10.0, 300.0), Size::new(320.0, 340.0))?;

    state.pointer_leave();

    assert_eq!(card_style(&state, 0), card_style(&CardState::new(), 0));
    Ok(())
}

#[test]
fn given_click_when_ripple_spawned_then_positioned_at_click() {
    let mut state = CardState::new();
    state.spawn_ripple(Point::new(42.4, 17.6));

    let styles: Vec<String> = state.ripples().iter().map(ripple_style).collect();

    assert_eq!(styles, ["left: 42px; top: 18px;"]);
}

#[test]
fn given_every_icon_when_rendered_then_has_svg_markup() {
    use sle_core::Icon;
    let icons = [
        Icon::FileText,
        Icon::ClipboardList,
        Icon::Users,
        Icon::TrendingUp,
        Icon::PackageCheck,
        Icon::Truck,
        Icon::Sun,
        Icon::Moon,
        Icon::ArrowRight,
        Icon::Search,
    ];
    for icon in icons {
        let body = svg_body(icon);
        assert!(body.starts_with('<') && body.ends_with("/>"), "{} markup", icon.name());
    }
}

#[test]
fn given_red_entry_when_badge_styled_then_uses_brand_red() {
    let style = icon_badge_style(ColorTag::Red);
    assert!(style.starts_with("background: rgb(227, 6, 19);"), "{style}");
    assert_ne!(style, icon_badge_style(ColorTag::Blue));
}

#[test]
fn given_stylesheet_when_card_enters_then_transform_is_left_to_tilt() {
    let card_rule = css_block(".project-card");
    assert!(card_rule.contains("animation: card-enter"), "{card_rule}");
    // A forwards fill would pin the last keyframe over the inline tilt
    assert!(card_rule.contains("backwards"), "{card_rule}");

    let keyframes = css_block("@keyframes card-enter");
    assert!(!keyframes.is_empty());
    assert!(!keyframes.contains("transform"), "{keyframes}");
}

#[test]
fn given_stylesheet_when_overlays_painted_then_each_has_its_own_wash() {
    assert!(css_block(".background-overlay-dark").contains("var(--overlay-dark)"));
    assert!(css_block(".background-overlay-light").contains("var(--overlay-light)"));
    assert!(!STYLESHEET.contains("--page-overlay"));
}
