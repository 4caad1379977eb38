//! Address and CID vectors shared by the unit tests.
//!
//! `HELLO_ADDRESS` is the Algorand address whose public key is
//! `sha256("hello")`; the CIDs are that digest wrapped as sha2-256
//! multihashes.

pub(crate) const HELLO_ADDRESS: &str =
    "FTZE3OS7WCRQ4JXIHMVMLOPCTYNRMHS4D6TUEXTTAQZWFE4LTASGX4EHCY";
pub(crate) const HELLO_RAW_V1: &str = "bafkreibm6jg3ux5qumhcn2b3flc3tyu6dmlb4xa7u5bf44yegnrjhc4yeq";
pub(crate) const HELLO_PB_V1: &str = "bafybeibm6jg3ux5qumhcn2b3flc3tyu6dmlb4xa7u5bf44yegnrjhc4yeq";
pub(crate) const HELLO_PB_V0: &str = "QmRN6wdp1S2A5EtjW9A3M1vKSBuQQGcgvuhoMUoEz4iiT5";
