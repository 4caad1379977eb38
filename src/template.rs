//! Parser for ARC-19 `template-ipfs://{ipfscid:...}` URLs.
//!
//! Grammar of the placeholder:
//!
//! ```text
//! {ipfscid:<version>:<codec>:<field>:<hash>}[/<path>]
//! ```
//!
//! Only `reserve` as the field and `sha2-256` as the hash are understood.
//! Anything else is reported as a typed [`TemplateError`]; the resolver
//! decides what to do with it.

use std::fmt;

use cid::Version;
use thiserror::Error;

use crate::content_id::{Codec, version_from_u64};

/// Scheme that marks a templated metadata URL.
pub const TEMPLATE_SCHEME: &str = "template-ipfs";
/// Literal opening of the CID placeholder.
pub const PLACEHOLDER_PREFIX: &str = "{ipfscid:";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemplateError {
    #[error("template does not start with `{{ipfscid:`")]
    MissingPlaceholder,
    #[error("template placeholder is not closed")]
    MissingClosingBrace,
    #[error("expected 5 placeholder fields, found {0}")]
    FieldCount(usize),
    #[error("invalid cid version `{0}`")]
    InvalidVersion(String),
    #[error("unsupported hash `{0}`")]
    UnsupportedHash(String),
    #[error("unsupported codec `{0}`")]
    UnsupportedCodec(String),
    #[error("unsupported asset field `{0}`")]
    UnsupportedField(String),
}

/// Asset field holding the digest bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceField {
    Reserve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    Sha2_256,
}

impl fmt::Display for HashAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashAlgorithm::Sha2_256 => f.write_str("sha2-256"),
        }
    }
}

/// Validated contents of an `ipfscid` placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CidSpec {
    pub version: Version,
    pub codec: Codec,
    pub field: SourceField,
    pub hash: HashAlgorithm,
}

/// A parsed template: the CID recipe plus whatever path followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    pub spec: CidSpec,
    /// Text after the first `/` following the placeholder, without the slash.
    pub path: String,
}

impl Template {
    /// Parse the part of a URL that follows `template-ipfs://`.
    pub fn parse(remainder: &str) -> Result<Self, TemplateError> {
        if !remainder.starts_with(PLACEHOLDER_PREFIX) {
            return Err(TemplateError::MissingPlaceholder);
        }
        let (inner, trailer) = remainder[1..]
            .split_once('}')
            .ok_or(TemplateError::MissingClosingBrace)?;

        let fields: Vec<&str> = inner.split(':').collect();
        let [_, version, codec, field, hash] = fields.as_slice() else {
            return Err(TemplateError::FieldCount(fields.len()));
        };

        let version = version
            .parse::<u64>()
            .ok()
            .and_then(|v| version_from_u64(v).ok())
            .ok_or_else(|| TemplateError::InvalidVersion(version.to_string()))?;

        let hash = match *hash {
            "sha2-256" => HashAlgorithm::Sha2_256,
            other => return Err(TemplateError::UnsupportedHash(other.to_string())),
        };
        let codec = codec
            .parse::<Codec>()
            .map_err(|_| TemplateError::UnsupportedCodec(codec.to_string()))?;
        let field = match *field {
            "reserve" => SourceField::Reserve,
            other => return Err(TemplateError::UnsupportedField(other.to_string())),
        };

        let path = trailer
            .split_once('/')
            .map(|(_, path)| path)
            .unwrap_or_default()
            .to_string();

        Ok(Self {
            spec: CidSpec {
                version,
                codec,
                field,
                hash,
            },
            path,
        })
    }
}
