//! Transport seam for backend requests.
//!
//! The browser build talks to the backend through `fetch` (see the
//! `dd-panel-ui` crate); the native CLI uses [`HttpApi`] behind the `api`
//! feature. Tests use in-memory fakes.

use crate::error::Result;
use serde::de::DeserializeOwned;

#[cfg(feature = "api")]
use crate::error::DeepDiveError;
#[cfg(feature = "api")]
use log::debug;

/// Issues a GET and returns the response body.
///
/// Implementations report non-2xx responses as
/// [`DeepDiveError::HttpStatus`](crate::error::DeepDiveError::HttpStatus)
/// and must not retry.
#[allow(async_fn_in_trait)]
pub trait InventoryApi {
    async fn get_text(&self, path_and_query: &str) -> Result<String>;
}

/// GET `path_and_query` and decode the body as JSON.
pub async fn get_json<A, T>(api: &A, path_and_query: &str) -> Result<T>
where
    A: InventoryApi,
    T: DeserializeOwned,
{
    let body = api.get_text(path_and_query).await?;
    Ok(serde_json::from_str(&body)?)
}

/// Native HTTP transport against an absolute base URL.
#[cfg(feature = "api")]
#[derive(Clone)]
pub struct HttpApi {
    client: reqwest::Client,
    base_url: String,
}

#[cfg(feature = "api")]
impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), base_url)
    }

    pub fn with_client(client: reqwest::Client, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { client, base_url }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[cfg(feature = "api")]
impl InventoryApi for HttpApi {
    async fn get_text(&self, path_and_query: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path_and_query);
        debug!("GET {}", url);
        let response = self.client.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(DeepDiveError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DeepDiveError;
    use futures::executor::block_on;

    struct Fixed(&'static str);

    impl InventoryApi for Fixed {
        async fn get_text(&self, _path_and_query: &str) -> Result<String> {
            Ok(self.0.to_string())
        }
    }

    #[test]
    fn decodes_json_bodies() {
        let values: Vec<u32> = block_on(get_json(&Fixed("[1, 2, 3]"), "/x")).unwrap();
        assert_eq!(values, vec![1, 2, 3]);
    }

    #[test]
    fn html_body_is_malformed() {
        let result: Result<Vec<u32>> = block_on(get_json(&Fixed("<!doctype html>"), "/x"));
        assert!(matches!(result, Err(DeepDiveError::MalformedResponse(_))));
    }

    #[cfg(feature = "api")]
    #[test]
    fn base_url_drops_trailing_slash() {
        assert_eq!(HttpApi::new("http://localhost:5000/").base_url(), "http://localhost:5000");
    }
}
