//! Resolver for Algorand asset metadata URLs.
//!
//! The core is [`resolver::Resolver::resolve_protocol`], which turns an
//! asset's `url` (plain `https://`, `ipfs://`, `#arc3` metadata, or an
//! ARC-19 `template-ipfs://` template) into a fetchable HTTP(S) URL. Around it
//! sit the address and CID primitives it depends on, a SQLite cache of
//! resolutions, and an axum API.

pub mod address;
pub mod config;
pub mod content_id;
pub mod db;
pub mod errors;
pub mod fetch;
pub mod handlers;
pub mod models;
pub mod resolver;
pub mod routes;
pub mod scheme;
pub mod services;
pub mod template;

#[cfg(test)]
mod test_fixtures;
