//! Turns an asset's declared metadata URL into a fetchable HTTP(S) URL.
//!
//! Handles three URL shapes:
//! - ARC69: the URL is the resource itself (`https://` or `ipfs://`).
//! - ARC3: the URL ends in `#arc3` and points at JSON whose `image` field is
//!   the resource; one fetch is made to read it.
//! - ARC19: `template-ipfs://{ipfscid:...}` where the CID digest lives in the
//!   reserve address. Always treated as ARC3.
//!
//! Template grammar problems are not errors: the asset is probably using a
//! convention we do not speak, so the caller gets its URL back untouched.
//! Address, CID and fetch failures are returned to the caller.

use serde_json::Value;
use thiserror::Error;
use tracing::debug;

use crate::{
    address::{self, AddressError},
    content_id::{self, CidError},
    fetch::{FetchError, MetadataFetcher},
    scheme::{Scheme, split_scheme},
    template::{PLACEHOLDER_PREFIX, TEMPLATE_SCHEME, Template},
};

pub const DEFAULT_IPFS_GATEWAY: &str = "https://ipfs.algonode.dev/ipfs/";
pub const ARC3_URL_SUFFIX: &str = "#arc3";
const IPFS_PREFIX: &str = "ipfs://";

#[derive(Debug, Error)]
pub enum ResolveError {
    #[error("invalid reserve address: {0}")]
    InvalidAddress(#[from] AddressError),
    #[error("cannot derive content identifier: {0}")]
    Cid(#[from] CidError),
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("metadata at {url} has an unusable image field: {found}")]
    InvalidMetadata { url: String, found: String },
}

/// Which metadata convention the URL follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetadataStyle {
    /// URL points at a JSON document that must be dereferenced.
    Arc3,
    /// URL is the resource.
    Arc69,
}

#[derive(Debug, Clone)]
pub struct Resolver<F> {
    gateway: String,
    fetcher: F,
}

impl<F: MetadataFetcher> Resolver<F> {
    /// `gateway` is the IPFS HTTP gateway base; a trailing `/` is added if
    /// missing so CIDs can be appended directly.
    pub fn new(gateway: impl Into<String>, fetcher: F) -> Self {
        let mut gateway = gateway.into();
        if !gateway.ends_with('/') {
            gateway.push('/');
        }
        Self { gateway, fetcher }
    }

    pub fn gateway(&self) -> &str {
        &self.gateway
    }

    /// Rewrite the first `ipfs://` in `url` to the gateway.
    pub fn ipfs_to_http(&self, url: &str) -> String {
        url.replacen(IPFS_PREFIX, &self.gateway, 1)
    }

    /// Resolve `url` for an asset whose reserve address is `reserve_address`.
    ///
    /// The reserve address is only decoded for `template-ipfs` URLs.
    pub async fn resolve_protocol(
        &self,
        url: &str,
        reserve_address: &str,
    ) -> Result<String, ResolveError> {
        let (working, mut style) = match url.strip_suffix(ARC3_URL_SUFFIX) {
            Some(stripped) => (stripped, MetadataStyle::Arc3),
            None => (url, MetadataStyle::Arc69),
        };

        let Some((scheme, remainder)) = split_scheme(working) else {
            return Ok(working.to_string());
        };

        let (scheme, target) =
            if scheme == TEMPLATE_SCHEME && remainder.starts_with(PLACEHOLDER_PREFIX) {
                style = MetadataStyle::Arc3;
                let template = match Template::parse(remainder) {
                    Ok(template) => template,
                    Err(err) => {
                        debug!("unsupported ipfscid template in {}: {}", url, err);
                        return Ok(url.to_string());
                    }
                };

                let digest = address::decode(reserve_address)?;
                let cid =
                    content_id::derive_cid(&digest, template.spec.version, template.spec.codec)?;
                (Scheme::Ipfs, format!("{}/{}", cid, template.path))
            } else {
                (Scheme::classify(scheme), remainder.to_string())
            };

        let resolved = match scheme {
            Scheme::Ipfs => format!("{}{}", self.gateway, target),
            Scheme::Https => working.to_string(),
            Scheme::Unknown(other) => {
                debug!("leaving url with scheme `{}` as-is", other);
                working.to_string()
            }
        };

        match style {
            MetadataStyle::Arc69 => Ok(resolved),
            MetadataStyle::Arc3 => self.dereference(resolved).await,
        }
    }

    /// Fetch ARC3 metadata at `url` and return its image URL.
    ///
    /// A missing or empty `image` (`null`, `false`, `0`, `""`) leaves `url`
    /// as the result. Any other non-string `image`, or a `null` document,
    /// is an error.
    async fn dereference(&self, url: String) -> Result<String, ResolveError> {
        let metadata = self.fetcher.fetch_json(&url).await?;
        if metadata.is_null() {
            return Err(ResolveError::InvalidMetadata {
                url,
                found: "null document".into(),
            });
        }

        match metadata.get("image") {
            Some(Value::String(image)) if !image.is_empty() => Ok(self.ipfs_to_http(image)),
            Some(other) if is_truthy(other) => Err(ResolveError::InvalidMetadata {
                found: other.to_string(),
                url,
            }),
            _ => {
                debug!("metadata at {} has no image field", url);
                Ok(url)
            }
        }
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64() != Some(0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}
