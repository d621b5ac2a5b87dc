//! Outbound HTTP plumbing shared by every provider adapter.
//!
//! [`HttpClient`] is the seam adapters are generic over; [`BasicClient`] is
//! the production implementation and [`UrlParam`] decorates any client with
//! an API key query parameter.

mod basic;
mod client;
mod url_param;

pub use basic::BasicClient;
pub use client::HttpClient;
pub use url_param::UrlParam;

use thiserror::Error;

/// Anything that prevents us from getting a body back from a provider.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("invalid endpoint '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected HTTP status {0}")]
    Status(reqwest::StatusCode),
}

/// Issues a GET to `url` with `query` appended and returns the raw body.
pub async fn fetch_bytes<C: HttpClient + ?Sized>(
    client: &C,
    url: &str,
    query: &[(&str, &str)],
) -> Result<Vec<u8>, FetchError> {
    let mut url = reqwest::Url::parse(url).map_err(|e| FetchError::InvalidUrl {
        url: url.to_string(),
        reason: e.to_string(),
    })?;
    if !query.is_empty() {
        url.query_pairs_mut().extend_pairs(query);
    }

    let req = reqwest::Request::new(reqwest::Method::GET, url);

    let resp = client.execute(req).await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }
    Ok(resp.bytes().await?.to_vec())
}

#[cfg(test)]
pub(crate) mod testing {
    use super::HttpClient;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Answers every request with the same canned status and body, and
    /// remembers the URLs it was asked for.
    pub struct CannedClient {
        status: u16,
        body: String,
        pub requested: Mutex<Vec<String>>,
    }

    impl CannedClient {
        pub fn ok(body: impl Into<String>) -> Self {
            Self::with_status(200, body)
        }

        pub fn with_status(status: u16, body: impl Into<String>) -> Self {
            Self {
                status,
                body: body.into(),
                requested: Mutex::new(Vec::new()),
            }
        }

        pub fn last_url(&self) -> String {
            self.requested.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl HttpClient for CannedClient {
        async fn execute(&self, req: reqwest::Request) -> reqwest::Result<reqwest::Response> {
            self.requested.lock().unwrap().push(req.url().to_string());
            let resp = http::Response::builder()
                .status(self.status)
                .body(self.body.clone())
                .unwrap();
            Ok(reqwest::Response::from(resp))
        }
    }
}
