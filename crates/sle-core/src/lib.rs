//! Core types for the SLE results hub
//!
//! Everything here is platform independent and free of DOM access, so it
//! builds and tests natively. The `sle-ui` crate renders these values.
//!
//! ## Module Structure
//! - `catalog`: the ordered list of external dashboards and search
//! - `config`: embedded site configuration (copy + catalog)
//! - `theme`: light/dark theme and palettes
//! - `card`: per-card hover, tilt, and ripple state
//! - `particles`: one-shot particle field generation

#![forbid(unsafe_code)]

pub mod card;
pub mod catalog;
pub mod colors;
pub mod config;
pub mod error;
pub mod icon;
pub mod particles;
pub mod result;
pub mod ripple;
pub mod theme;
pub mod tilt;

pub use card::CardState;
pub use catalog::{Catalog, LinkEntry};
pub use colors::ColorTag;
pub use config::SiteConfig;
pub use error::Error;
pub use icon::Icon;
pub use result::{Result, ResultExt};
pub use theme::{Palette, Theme};
