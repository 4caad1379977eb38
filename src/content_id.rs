//! Content identifiers derived from reserve-address bytes.
//!
//! ARC-19 stores a sha2-256 digest in the 32 bytes of an asset's reserve
//! address. The bytes are wrapped as the multihash digest verbatim; nothing
//! is rehashed.

use std::{fmt, str::FromStr};

use cid::{Cid, Version};
use multihash::Multihash;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::address::{self, AddressError};

/// Multicodec code for sha2-256.
pub const SHA2_256: u64 = 0x12;
/// Multicodec code for raw binary.
pub const RAW: u64 = 0x55;
/// Multicodec code for MerkleDAG protobuf.
pub const DAG_PB: u64 = 0x70;

#[derive(Debug, Error)]
pub enum CidError {
    #[error("unsupported codec `{0}`")]
    UnsupportedCodec(String),
    #[error("unsupported cid version {0}")]
    UnsupportedVersion(u64),
    #[error(transparent)]
    Multihash(#[from] multihash::Error),
    #[error(transparent)]
    Cid(#[from] cid::Error),
    #[error(transparent)]
    Address(#[from] AddressError),
}

/// Content codecs accepted in `ipfscid` templates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Codec {
    Raw,
    DagPb,
}

impl Codec {
    pub fn code(self) -> u64 {
        match self {
            Codec::Raw => RAW,
            Codec::DagPb => DAG_PB,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Codec::Raw => "raw",
            Codec::DagPb => "dag-pb",
        }
    }
}

impl FromStr for Codec {
    type Err = CidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "raw" => Ok(Codec::Raw),
            "dag-pb" => Ok(Codec::DagPb),
            other => Err(CidError::UnsupportedCodec(other.to_string())),
        }
    }
}

impl fmt::Display for Codec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Map a numeric template version onto a CID version.
pub fn version_from_u64(version: u64) -> Result<Version, CidError> {
    match version {
        0 => Ok(Version::V0),
        1 => Ok(Version::V1),
        other => Err(CidError::UnsupportedVersion(other)),
    }
}

/// Build a CID treating `digest` as an already computed sha2-256 hash.
///
/// CIDv0 only admits `dag-pb`; asking for a raw v0 identifier fails.
pub fn derive_cid(digest: &[u8; 32], version: Version, codec: Codec) -> Result<Cid, CidError> {
    let hash = Multihash::<64>::wrap(SHA2_256, digest)?;
    Ok(Cid::new(version, codec.code(), hash)?)
}

/// Decode `address` and derive a CID from its key bytes.
pub fn derive_cid_from_address(
    address: &str,
    version: Version,
    codec: Codec,
) -> Result<Cid, CidError> {
    let digest = address::decode(address)?;
    derive_cid(&digest, version, codec)
}
