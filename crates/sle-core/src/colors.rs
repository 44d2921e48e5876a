//! Brand colors and CSS conversion

use serde::{Deserialize, Serialize};

/// RGB color representation (0-255 per channel)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RgbColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl RgbColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert to CSS rgb() string
    pub fn to_css(&self) -> String {
        format!("rgb({}, {}, {})", self.r, self.g, self.b)
    }

    /// Convert to CSS rgba() string, alpha clamped to 0.0..=1.0
    pub fn to_css_alpha(&self, alpha: f32) -> String {
        let alpha = if alpha.is_finite() {
            alpha.clamp(0.0, 1.0)
        } else {
            1.0
        };
        format!("rgba({}, {}, {}, {alpha:.2})", self.r, self.g, self.b)
    }
}

/// Brand palette
pub mod brand {
    use super::RgbColor;

    pub const DARK: RgbColor = RgbColor::new(5, 12, 28);
    pub const PRIMARY: RgbColor = RgbColor::new(0, 61, 130);
    pub const PRIMARY_DARK: RgbColor = RgbColor::new(0, 32, 74);
    pub const SECONDARY: RgbColor = RgbColor::new(227, 6, 19);
    pub const LIGHT_BG: RgbColor = RgbColor::new(241, 245, 250);
    pub const WHITE: RgbColor = RgbColor::new(255, 255, 255);
}

/// Styling category of a catalog entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColorTag {
    Blue,
    Red,
}

impl ColorTag {
    /// Accent color for the entry's icon badge
    pub const fn accent(self) -> RgbColor {
        match self {
            Self::Blue => brand::PRIMARY,
            Self::Red => brand::SECONDARY,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn test_css_output() {
        let color = RgbColor::new(52, 152, 219);
        assert_eq!(color.to_css(), "rgb(52, 152, 219)");
    }

    #[test]
    fn test_alpha_is_clamped() {
        let color = RgbColor::new(1, 2, 3);
        assert_eq!(color.to_css_alpha(0.7), "rgba(1, 2, 3, 0.70)");
        assert_eq!(color.to_css_alpha(4.0), "rgba(1, 2, 3, 1.00)");
        assert_eq!(color.to_css_alpha(-1.0), "rgba(1, 2, 3, 0.00)");
        assert_eq!(color.to_css_alpha(f32::NAN), "rgba(1, 2, 3, 1.00)");
    }

    #[test]
    fn test_color_tags_have_distinct_accents() {
        assert_ne!(ColorTag::Blue.accent(), ColorTag::Red.accent());
        assert_eq!(ColorTag::Red.accent(), brand::SECONDARY);
    }

    #[test]
    fn test_color_tag_deserializes_lowercase() {
        let tag: ColorTag = serde_json::from_str("\"red\"").expect("valid tag");
        assert_eq!(tag, ColorTag::Red);
        assert!(serde_json::from_str::<ColorTag>("\"green\"").is_err());
    }
}
