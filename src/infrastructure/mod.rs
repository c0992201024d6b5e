pub mod http;
pub mod services;
pub mod storage;

pub use http::CatalogHttpClient;
pub use storage::{LocalStorageCart, MemoryCartStorage};

/// Browser side effects that sit outside the reactive view
pub mod ui {
    use crate::domain::logging::{LogComponent, get_logger};

    /// Lock or release page scrolling behind the overlays.
    pub fn set_scroll_locked(locked: bool) {
        let style = gloo::utils::body().style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            get_logger().warn(LogComponent::Infrastructure("UI"), "Failed to update body overflow");
        }
    }

    /// Blocking confirmation prompt for destructive actions.
    pub fn confirm(message: &str) -> bool {
        gloo::dialogs::confirm(message)
    }

    pub fn alert(message: &str) {
        gloo::dialogs::alert(message);
    }

    /// Open `url` in a new browsing context.
    pub fn open_in_new_tab(url: &str) {
        match gloo::utils::window().open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => {}
            Ok(None) => get_logger().warn(LogComponent::Infrastructure("UI"), "Popup blocked by the browser"),
            Err(e) => get_logger().error(
                LogComponent::Infrastructure("UI"),
                &format!("Failed to open {}: {:?}", url, e),
            ),
        }
    }

    /// Full page reload, the retry path after a failed catalog fetch.
    pub fn reload_page() {
        if let Err(e) = gloo::utils::window().location().reload() {
            get_logger().error(LogComponent::Infrastructure("UI"), &format!("Reload failed: {:?}", e));
        }
    }
}
