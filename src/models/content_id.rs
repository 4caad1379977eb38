//! A content identifier derived from an address.

use serde::{Deserialize, Serialize};

use crate::content_id::Codec;

/// CID computed from the 32 bytes behind an address, plus the gateway URL
/// that serves it.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct DerivedCid {
    pub address: String,
    pub version: u64,
    pub codec: Codec,
    pub cid: String,
    pub gateway_url: String,
}
