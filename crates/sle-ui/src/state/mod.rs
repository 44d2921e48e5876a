//! Application state owned by the page root

pub mod theme;

pub use theme::{ThemeController, apply_root_class};
