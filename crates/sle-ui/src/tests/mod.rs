//! Behavioral tests for UI components
//!
//! BDD-style tests using given-when-then naming. They exercise the pure
//! helpers and reactive state behind each component; nothing here needs a
//! DOM.

pub mod card_behaviors;
pub mod grid_behaviors;
