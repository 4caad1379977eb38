//! Service layer: resolution plus caching.

pub mod resolve_service;
