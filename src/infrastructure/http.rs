use gloo::net::http::Request;

use crate::domain::{
    catalog::Catalog,
    errors::{LoadError, LoadResult},
    logging::{LogComponent, get_logger},
};

/// Fetches the static catalog document
#[derive(Clone, Debug)]
pub struct CatalogHttpClient {
    url: String,
}

impl CatalogHttpClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// One attempt, no retry: the caller renders a reload affordance on error.
    pub async fn load(&self) -> LoadResult<Catalog> {
        get_logger().info(
            LogComponent::Infrastructure("CatalogHttpClient"),
            &format!("📡 Fetching catalog from {}", self.url),
        );

        let response = Request::get(&self.url)
            .send()
            .await
            .map_err(|e| LoadError::Transport(e.to_string()))?;

        if !response.ok() {
            return Err(LoadError::Status {
                status: response.status(),
                text: response.status_text(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| LoadError::Transport(format!("failed to read body: {}", e)))?;

        let catalog = Catalog::from_json(&body)?;

        get_logger().info(
            LogComponent::Infrastructure("CatalogHttpClient"),
            &format!("✅ Loaded {} products", catalog.len()),
        );

        Ok(catalog)
    }
}
