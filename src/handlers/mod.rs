//! HTTP handlers.

pub mod health_handlers;
pub mod resolve_handlers;
