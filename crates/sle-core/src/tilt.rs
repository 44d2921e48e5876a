//! Pointer-driven card tilt
//!
//! Pure geometry: the card reports where the pointer sits inside its own
//! bounding box and gets back a rotation to apply. A pointer outside the
//! box is clamped to the nearest edge.

use crate::error::Error;
use crate::result::Result;

/// Maximum rotation per axis, in degrees
pub const MAX_TILT_DEG: f64 = 8.0;

const PERSPECTIVE_PX: u32 = 1000;
const HOVER_SCALE: f64 = 1.02;
const HOVER_LIFT_PX: f64 = -5.0;

/// Point in card-local pixels (origin at the card's top-left corner)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Card size in pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    fn validate(self) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if valid(self.width) && valid(self.height) {
            Ok(self)
        } else {
            Err(Error::invalid_geometry(format!(
                "card size must be positive and finite, got {}x{}",
                self.width, self.height
            )))
        }
    }
}

/// Rotation applied to a hovered card
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    /// Rotation around the horizontal axis (pointer near top tips the top back)
    pub rotate_x: f64,
    /// Rotation around the vertical axis
    pub rotate_y: f64,
    /// Pointer position as percentages of the card, drives the glare highlight
    pub glare_x: f64,
    pub glare_y: f64,
}

impl Tilt {
    pub const NEUTRAL: Self = Self {
        rotate_x: 0.0,
        rotate_y: 0.0,
        glare_x: 50.0,
        glare_y: 50.0,
    };

    /// Derive the tilt for a pointer at `point` inside a card of `size`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidGeometry`] for a non-positive or non-finite
    /// size, or a non-finite point.
    pub fn from_pointer(point: Point, size: Size) -> Result<Self> {
        let size = size.validate()?;
        if !point.x.is_finite() || !point.y.is_finite() {
            return Err(Error::invalid_geometry(format!(
                "pointer must be finite, got ({}, {})",
                point.x, point.y
            )));
        }

        // 0.0..=1.0 across the card
        let fx = (point.x / size.width).clamp(0.0, 1.0);
        let fy = (point.y / size.height).clamp(0.0, 1.0);

        Ok(Self {
            rotate_x: (0.5 - fy) * 2.0 * MAX_TILT_DEG,
            rotate_y: (fx - 0.5) * 2.0 * MAX_TILT_DEG,
            glare_x: fx * 100.0,
            glare_y: fy * 100.0,
        })
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    /// CSS `transform` value. Hovered cards also lift and scale slightly.
    pub fn to_css_transform(&self, hovered: bool) -> String {
        if hovered {
            format!(
                "perspective({PERSPECTIVE_PX}px) rotateX({:.2}deg) rotateY({:.2}deg) translateY({HOVER_LIFT_PX}px) scale({HOVER_SCALE})",
                self.rotate_x, self.rotate_y
            )
        } else {
            format!("perspective({PERSPECTIVE_PX}px) rotateX(0deg) rotateY(0deg)")
        }
    }
}

impl Default for Tilt {
    fn default() -> Self {
        Self::NEUTRAL
    }
}
