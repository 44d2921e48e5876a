//! Local interaction state of one project card
//!
//! Hover, tilt, and ripples live here. None of it leaves the card and
//! none of it affects navigation, which the anchor performs on its own.

use crate::catalog::LinkEntry;
use crate::result::Result;
use crate::ripple::{Ripple, RippleBoard, RippleId};
use crate::tilt::{Point, Size, Tilt};

/// Delay between consecutive cards' entrance animations, in seconds
pub const ENTRANCE_STAGGER_S: f64 = 0.1;

/// Entrance animation delay for the card at `index`
pub fn entrance_delay(index: usize) -> f64 {
    #[allow(clippy::cast_precision_loss)]
    let index = index as f64;
    index * ENTRANCE_STAGGER_S
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CardState {
    hovered: bool,
    tilt: Tilt,
    ripples: RippleBoard,
}

impl CardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pointer_enter(&mut self) {
        self.hovered = true;
    }

    /// Track the pointer while hovered.
    ///
    /// Moves outside a hover are ignored so a late event cannot leave the
    /// card tilted after the pointer left.
    ///
    /// # Errors
    ///
    /// Returns an error for degenerate geometry; the tilt is left unchanged.
    pub fn pointer_move(&mut self, point: Point, size: Size) -> Result<()> {
        if !self.hovered {
            return Ok(());
        }
        self.tilt = Tilt::from_pointer(point, size)?;
        Ok(())
    }

    /// End the hover and reset the transform immediately
    pub fn pointer_leave(&mut self) {
        self.hovered = false;
        self.tilt = Tilt::NEUTRAL;
    }

    pub const fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub const fn tilt(&self) -> Tilt {
        self.tilt
    }

    /// CSS transform for the current state
    pub fn transform(&self) -> String {
        self.tilt.to_css_transform(self.hovered)
    }

    /// Tooltip text to display, verbatim from the entry, only while hovered
    pub fn tooltip<'a>(&self, entry: &'a LinkEntry) -> Option<&'a str> {
        (self.hovered && !entry.details.is_empty()).then_some(entry.details.as_str())
    }

    pub fn spawn_ripple(&mut self, origin: Point) -> RippleId {
        self.ripples.spawn(origin)
    }

    pub fn expire_ripple(&mut self, id: RippleId) -> bool {
        self.ripples.expire(id)
    }

    pub fn ripples(&self) -> &[Ripple] {
        self.ripples.live()
    }
}
