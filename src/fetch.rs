//! HTTP capability used to dereference ARC3 metadata documents.
//!
//! The resolver only needs "GET this URL and give me JSON", so that is all
//! the trait exposes. [`HttpFetcher`] is the production implementation;
//! tests plug in their own.

use std::{future::Future, time::Duration};

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

/// Default per-request timeout for metadata fetches.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
/// Largest metadata body accepted before the fetch is abandoned.
pub const MAX_METADATA_BYTES: usize = 1024 * 1024;

#[derive(Debug, Error)]
pub enum FetchError {
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),
    #[error("HTTP error fetching {url}: {source}")]
    Http { url: String, source: reqwest::Error },
    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },
    #[error("metadata at {url} exceeds {limit} bytes")]
    TooLarge { url: String, limit: usize },
    #[error("metadata at {url} is not valid JSON: {source}")]
    Decode {
        url: String,
        source: serde_json::Error,
    },
}

pub trait MetadataFetcher: Send + Sync {
    /// Issue one GET against `url` and decode the body as JSON.
    fn fetch_json(&self, url: &str) -> impl Future<Output = Result<Value, FetchError>> + Send;
}

/// `reqwest`-backed fetcher. Cheap to clone; clones share a connection pool.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::Client)?;
        Ok(Self { client })
    }
}

impl MetadataFetcher for HttpFetcher {
    async fn fetch_json(&self, url: &str) -> Result<Value, FetchError> {
        debug!("fetching metadata from {}", url);

        let mut resp = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Http {
                url: url.to_string(),
                source,
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let too_large = || FetchError::TooLarge {
            url: url.to_string(),
            limit: MAX_METADATA_BYTES,
        };
        if resp
            .content_length()
            .is_some_and(|len| len > MAX_METADATA_BYTES as u64)
        {
            return Err(too_large());
        }

        let mut body = Vec::new();
        while let Some(chunk) = resp.chunk().await.map_err(|source| FetchError::Http {
            url: url.to_string(),
            source,
        })? {
            if body.len() + chunk.len() > MAX_METADATA_BYTES {
                return Err(too_large());
            }
            body.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&body).map_err(|source| FetchError::Decode {
            url: url.to_string(),
            source,
        })
    }
}
