//! Fixtures shared by the integration tests.
//!
//! `HELLO_ADDRESS` is the Algorand address whose public key is
//! `sha256("hello")`; the CIDs below are that digest wrapped as
//! sha2-256 multihashes.
#![allow(dead_code)]

pub const HELLO_ADDRESS: &str = "FTZE3OS7WCRQ4JXIHMVMLOPCTYNRMHS4D6TUEXTTAQZWFE4LTASGX4EHCY";
pub const HELLO_RAW_V1: &str = "bafkreibm6jg3ux5qumhcn2b3flc3tyu6dmlb4xa7u5bf44yegnrjhc4yeq";
pub const HELLO_PB_V0: &str = "QmRN6wdp1S2A5EtjW9A3M1vKSBuQQGcgvuhoMUoEz4iiT5";
