//! Transient click markers
//!
//! A [`RippleBoard`] only tracks which markers are live. Removing them 600ms
//! later is the job of whoever owns the clock; the board accepts expiry in
//! any order and ignores ids it no longer holds.

use crate::tilt::Point;

/// How long a ripple stays on screen, in milliseconds
pub const RIPPLE_LIFETIME_MS: u32 = 600;

/// Identifier of one ripple, unique within its board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RippleId(u64);

/// One live marker at card-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ripple {
    pub id: RippleId,
    pub origin: Point,
}

/// Live ripples for a single card, in spawn order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RippleBoard {
    next_id: u64,
    live: Vec<Ripple>,
}

impl RippleBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a marker and return its id
    pub fn spawn(&mut self, origin: Point) -> RippleId {
        let id = RippleId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        self.live.push(Ripple { id, origin });
        tracing::trace!(ripple = id.0, live = self.live.len(), "ripple spawned");
        id
    }

    /// Remove a marker. Returns `false` if it was already gone.
    pub fn expire(&mut self, id: RippleId) -> bool {
        let before = self.live.len();
        self.live.retain(|ripple| ripple.id != id);
        let removed = self.live.len() != before;
        if removed {
            tracing::trace!(ripple = id.0, live = self.live.len(), "ripple expired");
        }
        removed
    }

    pub fn live(&self) -> &[Ripple] {
        &self.live
    }

    pub fn len(&self) -> usize {
        self.live.len()
    }

    pub fn is_empty(&self) -> bool {
        self.live.is_empty()
    }
}
