//! Defines routes for resolution, CID derivation and health probes.
//!
//! ## Structure
//! - `GET    /healthz`          — liveness
//! - `GET    /readyz`           — readiness (SQLite)
//! - `GET    /resolve`          — resolve `?url=&reserve=&refresh=`
//! - `DELETE /resolve`          — evict a cached resolution
//! - `GET    /cid/{address}`    — derive a CID from an address (`?version=&codec=`)

use crate::{
    handlers::{
        health_handlers::{healthz, readyz},
        resolve_handlers::{derive_cid, evict_resolution, resolve_url},
    },
    services::resolve_service::ResolveService,
};
use axum::{Router, routing::get};

/// Build and return the router. Handlers share a `ResolveService` as state.
pub fn routes() -> Router<ResolveService> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        .route("/resolve", get(resolve_url).delete(evict_resolution))
        .route("/cid/{address}", get(derive_cid))
}
