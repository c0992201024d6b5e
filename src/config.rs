use gloo::utils::format::JsValueSerdeExt;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsValue;

use crate::domain::errors::ConfigError;

/// Widget settings, passed from the host page to `mount_storefront`.
/// Every field is optional on the JS side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct StorefrontConfig {
    /// Relative path of the static catalog document.
    pub catalog_url: String,
    /// Local-storage key holding the cart snapshot.
    pub storage_key: String,
    /// Shop contact for the "buy via WhatsApp" handoff.
    pub whatsapp_phone: String,
    /// How long a toast stays before fading out.
    pub notification_ms: u32,
    pub fade_ms: u32,
    /// Shown for cart lines without an image.
    pub placeholder_image: String,
    /// CSS selector of the mount point; the document body when absent.
    pub mount_selector: Option<String>,
    /// Debug-level console logging.
    pub verbose: bool,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            catalog_url: "js/products.json".to_string(),
            storage_key: "cart".to_string(),
            whatsapp_phone: "+573167699072".to_string(),
            notification_ms: 3000,
            fade_ms: 300,
            placeholder_image: "https://via.placeholder.com/100".to_string(),
            mount_selector: None,
            verbose: false,
        }
    }
}

impl StorefrontConfig {
    /// Decode the object handed over by JavaScript; `undefined` and `null`
    /// mean "all defaults".
    pub fn from_js(value: &JsValue) -> Result<Self, ConfigError> {
        if value.is_undefined() || value.is_null() {
            return Ok(Self::default());
        }
        let config: Self = value
            .into_serde()
            .map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()
    }

    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(|e| ConfigError::Malformed(e.to_string()))?;
        config.validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.catalog_url.trim().is_empty() {
            return Err(ConfigError::EmptyField("catalogUrl"));
        }
        if self.storage_key.trim().is_empty() {
            return Err(ConfigError::EmptyField("storageKey"));
        }
        if self.notification_ms == 0 {
            return Err(ConfigError::ZeroDuration("notificationMs"));
        }
        Ok(self)
    }
}
