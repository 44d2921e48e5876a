//! Light/dark theme and the two fixed palettes it selects between

use crate::colors::{RgbColor, brand};

/// Class placed on the document root while the dark theme is active
pub const DARK_ROOT_CLASS: &str = "dark";

/// Page theme. Defaults to dark on every load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

/// Visual root scheme for one theme
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub background: RgbColor,
    pub overlay: RgbColor,
    pub overlay_opacity: f32,
    pub text: RgbColor,
    pub text_muted_opacity: f32,
    pub particle: RgbColor,
    pub particle_opacity: f32,
}

const DARK_PALETTE: Palette = Palette {
    background: brand::DARK,
    overlay: brand::DARK,
    overlay_opacity: 0.70,
    text: brand::WHITE,
    text_muted_opacity: 0.60,
    particle: brand::WHITE,
    particle_opacity: 0.05,
};

const LIGHT_PALETTE: Palette = Palette {
    background: brand::LIGHT_BG,
    overlay: brand::LIGHT_BG,
    overlay_opacity: 0.95,
    text: brand::PRIMARY_DARK,
    text_muted_opacity: 0.60,
    particle: brand::PRIMARY,
    particle_opacity: 0.10,
};

impl Theme {
    /// The opposite theme
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn palette(self) -> &'static Palette {
        match self {
            Self::Dark => &DARK_PALETTE,
            Self::Light => &LIGHT_PALETTE,
        }
    }

    /// Class the document root must carry, if any
    #[must_use]
    pub const fn root_class(self) -> Option<&'static str> {
        match self {
            Self::Dark => Some(DARK_ROOT_CLASS),
            Self::Light => None,
        }
    }

    /// Short name used for page-level CSS modifiers (`page-dark`)
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }
}

impl Palette {
    /// Overlay wash painted over the background video
    pub fn overlay_css(&self) -> String {
        self.overlay.to_css_alpha(self.overlay_opacity)
    }

    /// CSS custom properties applied to the page root element.
    ///
    /// Both overlays are always emitted, each in its own theme's color, so
    /// the theme switch cross-fades between two distinct washes.
    pub fn css_variables(&self) -> String {
        format!(
            "--page-bg: {}; --overlay-dark: {}; --overlay-light: {}; --page-text: {}; --page-text-muted: {}; --particle-color: {};",
            self.background.to_css(),
            DARK_PALETTE.overlay_css(),
            LIGHT_PALETTE.overlay_css(),
            self.text.to_css(),
            self.text.to_css_alpha(self.text_muted_opacity),
            self.particle.to_css_alpha(self.particle_opacity),
        )
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
