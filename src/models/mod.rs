//! Data models shared by the service and HTTP layers.
//!
//! Rows map to database tables via `sqlx::FromRow` and serialize as JSON via
//! `serde`.

pub mod content_id;
pub mod resolution;
