//! Page-wide theme state
//!
//! The page root owns one [`ThemeController`]. Children get a read-only
//! signal and a toggle callback; nothing else can change the theme.

use leptos::prelude::*;
use sle_core::Theme;
use sle_core::theme::DARK_ROOT_CLASS;

use crate::error::{Result, UiError};

#[derive(Debug, Clone, Copy)]
pub struct ThemeController {
    theme: RwSignal<Theme>,
}

impl ThemeController {
    /// Start in the default (dark) theme. Nothing is restored from storage.
    pub fn new() -> Self {
        Self {
            theme: RwSignal::new(Theme::default()),
        }
    }

    /// Read-only view handed to children
    pub fn theme(&self) -> Signal<Theme> {
        self.theme.read_only().into()
    }

    pub fn toggle(&self) {
        self.theme.update(|theme| *theme = theme.toggled());
        log::debug!("theme switched to {}", self.theme.get_untracked());
    }

    /// Toggle callback for child components
    pub fn callback(self) -> Callback<()> {
        Callback::new(move |()| self.toggle())
    }

    /// Keep the document root's `dark` class in step with the theme
    pub fn sync_document_root(self) {
        Effect::new(move || {
            let theme = self.theme.get();
            if let Err(err) = apply_root_class(theme) {
                log::warn!("could not tag document root for {theme} theme: {err}");
            }
        });
    }
}

impl Default for ThemeController {
    fn default() -> Self {
        Self::new()
    }
}

/// Add or remove the root class so global style rules pick the palette.
///
/// # Errors
///
/// Returns an error when there is no document root or the class list
/// rejects the update.
pub fn apply_root_class(theme: Theme) -> Result<()> {
    let window = web_sys::window().ok_or(UiError::WindowNotAvailable)?;
    let document = window.document().ok_or(UiError::DocumentNotAvailable)?;
    let root = document
        .document_element()
        .ok_or(UiError::RootElementMissing)?;

    let classes = root.class_list();
    match theme.root_class() {
        Some(class) => classes.add_1(class),
        None => classes.remove_1(DARK_ROOT_CLASS),
    }
    .map_err(|e| UiError::ClassListFailed(format!("{e:?}")))
}

/// Icon shown on the toggle: the theme a click switches to
pub const fn toggle_icon(theme: Theme) -> sle_core::Icon {
    match theme {
        Theme::Dark => sle_core::Icon::Sun,
        Theme::Light => sle_core::Icon::Moon,
    }
}

pub const fn toggle_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Dark => "Ativar tema claro",
        Theme::Light => "Ativar tema escuro",
    }
}
