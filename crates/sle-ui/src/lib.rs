//! Leptos 0.7 CSR frontend for the SLE results hub
//!
//! A single landing page linking out to the company's hosted dashboards.
//!
//! ## Architecture
//! - Pure CSR (Client-Side Rendering) with Leptos 0.7
//! - WASM compilation target (wasm32-unknown-unknown), bundled by Trunk
//! - Domain logic lives in `sle-core`; this crate only renders it
//!
//! ## Module Structure
//! - `app`: page root and the state it owns
//! - `components`: header, background, particles, search, grid, cards
//! - `state`: theme controller and document-root tagging
//! - `error`: DOM error types

#![forbid(unsafe_code)]

pub mod app;
pub mod components;
pub mod error;
pub mod state;

pub use app::App;

#[cfg(test)]
mod tests;
