use wasm_bindgen::prelude::*;

pub mod app;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod presentation;
pub mod view_state;

pub use config::StorefrontConfig;

/// Panic hook only. The page mounts the storefront itself through
/// `mountStorefront` so it can pass its configuration.
#[wasm_bindgen(start)]
pub fn initialize() {
    console_error_panic_hook::set_once();
}
