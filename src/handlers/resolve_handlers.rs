//! HTTP handlers for URL resolution and CID derivation.
//! Resolution and caching live in `ResolveService`; these only translate
//! query strings into service calls.

use crate::{
    errors::AppError,
    models::{content_id::DerivedCid, resolution::Resolution},
    services::resolve_service::ResolveService,
};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use serde::Deserialize;

/// Query params for `GET /resolve` and `DELETE /resolve`.
#[derive(Debug, Deserialize)]
pub struct ResolveQuery {
    pub url: String,
    /// Reserve address of the asset; only needed for `template-ipfs` URLs.
    #[serde(default)]
    pub reserve: String,
    /// Bypass the cache and resolve again.
    #[serde(default)]
    pub refresh: bool,
}

/// Query params for `GET /cid/{address}`.
#[derive(Debug, Deserialize)]
pub struct CidQuery {
    #[serde(default = "default_version")]
    pub version: u64,
    #[serde(default = "default_codec")]
    pub codec: String,
}

fn default_version() -> u64 {
    1
}

fn default_codec() -> String {
    "raw".into()
}

/// `GET /resolve?url=...&reserve=...&refresh=bool`
pub async fn resolve_url(
    State(service): State<ResolveService>,
    Query(query): Query<ResolveQuery>,
) -> Result<Json<Resolution>, AppError> {
    let resolution = service
        .resolve(&query.url, &query.reserve, query.refresh)
        .await?;
    Ok(Json(resolution))
}

/// `DELETE /resolve?url=...&reserve=...` — forget a cached resolution.
pub async fn evict_resolution(
    State(service): State<ResolveService>,
    Query(query): Query<ResolveQuery>,
) -> Result<StatusCode, AppError> {
    service.evict(&query.url, &query.reserve).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `GET /cid/{address}?version=1&codec=raw`
pub async fn derive_cid(
    State(service): State<ResolveService>,
    Path(address): Path<String>,
    Query(query): Query<CidQuery>,
) -> Result<Json<DerivedCid>, AppError> {
    let derived = service.derive_cid(&address, query.version, &query.codec)?;
    Ok(Json(derived))
}
