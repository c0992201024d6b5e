use std::cell::RefCell;

use leptos::*;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

use crate::app::App;
use crate::config::StorefrontConfig;
use crate::domain::{
    catalog::ProductId,
    logging::{self, LogComponent, get_logger},
};
use crate::infrastructure::services::ConsoleLogger;
use crate::presentation::interactions::StorefrontHandle;

// Handle of the mounted storefront, for the JS-facing helpers below
thread_local! {
    static MOUNTED: RefCell<Option<StorefrontHandle>> = const { RefCell::new(None) };
}

fn mounted() -> Option<StorefrontHandle> {
    MOUNTED.with(|slot| *slot.borrow())
}

/// Mount the storefront. `config` may be `undefined` to take every default.
#[wasm_bindgen(js_name = mountStorefront)]
pub fn mount_storefront(config: JsValue) -> Result<(), JsValue> {
    let config = StorefrontConfig::from_js(&config).map_err(|e| JsValue::from_str(&e.to_string()))?;

    let console_logger = if config.verbose {
        ConsoleLogger::new_development()
    } else {
        ConsoleLogger::new_production()
    };
    logging::init_logger(Box::new(console_logger));

    if mounted().is_some() {
        get_logger().warn(LogComponent::Presentation("WasmApi"), "Storefront already mounted");
        return Ok(());
    }

    let parent = match config.mount_selector.as_deref() {
        Some(selector) => gloo::utils::document()
            .query_selector(selector)?
            .ok_or_else(|| JsValue::from_str(&format!("No element matches {}", selector)))?
            .dyn_into::<web_sys::HtmlElement>()?,
        None => gloo::utils::body(),
    };

    let handle = StorefrontHandle::new(config);
    MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle));
    mount_to(parent, move || view! { <App handle=handle /> });

    get_logger().info(LogComponent::Presentation("WasmApi"), "🛍️ Storefront mounted");
    Ok(())
}

/// Add a product by its textual id. Returns false for an unparsable id or
/// when nothing is mounted.
#[wasm_bindgen(js_name = addToCart)]
pub fn add_to_cart(id: &str) -> bool {
    let Some(handle) = mounted() else { return false };
    match ProductId::parse(id) {
        Ok(id) => {
            handle.add_to_cart(id);
            true
        }
        Err(e) => {
            get_logger().warn(LogComponent::Presentation("WasmApi"), &e.to_string());
            false
        }
    }
}

#[wasm_bindgen(js_name = openCart)]
pub fn open_cart() {
    if let Some(handle) = mounted() {
        handle.open_cart();
    }
}

/// Formatted cart total, `"$0.00"` before mounting.
#[wasm_bindgen(js_name = cartTotal)]
pub fn cart_total() -> String {
    mounted()
        .map(|handle| handle.store.with_untracked(|store| store.cart().total().to_string()))
        .unwrap_or_else(|| crate::domain::catalog::Price::ZERO.to_string())
}
