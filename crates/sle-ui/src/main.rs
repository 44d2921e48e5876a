//! WASM entry point for Leptos CSR app
//!
//! This is the main entry point that Trunk compiles to WASM.
//! It mounts the Leptos App component to the document body.

use leptos::prelude::*;
use sle_ui::App;

fn main() {
    // Set up panic hook for better error messages in browser console
    console_error_panic_hook::set_once();
    // A second init only fails if a logger is already installed
    _ = console_log::init_with_level(log::Level::Debug);

    mount_to_body(|| {
        view! {
            <App />
        }
    })
}
