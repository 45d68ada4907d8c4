//! `InventoryApi` over the browser's `fetch`, via `gloo-net`.

use dd_core::api::InventoryApi;
use dd_core::{DeepDiveError, Result};
use gloo_net::http::Request;

/// Fetches from the page's own origin unless a base URL is given.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct BrowserApi {
    base_url: String,
}

impl BrowserApi {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn url(&self, path_and_query: &str) -> String {
        format!("{}{}", self.base_url, path_and_query)
    }
}

fn network_error(error: gloo_net::Error) -> DeepDiveError {
    DeepDiveError::NetworkFailure(error.to_string())
}

impl InventoryApi for BrowserApi {
    async fn get_text(&self, path_and_query: &str) -> Result<String> {
        let url = self.url(path_and_query);
        let resp = Request::get(&url).send().await.map_err(network_error)?;
        if !resp.ok() {
            return Err(DeepDiveError::HttpStatus {
                status: resp.status(),
                url,
            });
        }
        resp.text().await.map_err(network_error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn relative_urls_by_default() {
        assert_eq!(BrowserApi::new().url("/api/low_stock"), "/api/low_stock");
    }

    #[test]
    fn base_url_drops_trailing_slash() {
        let api = BrowserApi::with_base_url("http://localhost:5000/");
        assert_eq!(
            api.url("/api/stock_levels"),
            "http://localhost:5000/api/stock_levels"
        );
    }
}
