//! ResolveService — metadata URL resolution with a SQLite-backed cache.
//!
//! The resolver itself is stateless; this layer remembers successful
//! resolutions keyed by `(source_url, reserve_address)` so repeated lookups
//! for the same asset skip the metadata fetch. Failures are never cached.

use std::sync::Arc;

use chrono::Utc;
use sqlx::SqlitePool;
use thiserror::Error;
use tracing::debug;

use crate::{
    content_id::{self, CidError, Codec},
    fetch::HttpFetcher,
    models::{content_id::DerivedCid, resolution::Resolution},
    resolver::{ResolveError, Resolver},
};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("url must not be empty")]
    EmptyUrl,
    #[error("no cached resolution for `{0}`")]
    NotCached(String),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error(transparent)]
    Cid(#[from] CidError),
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

#[derive(Clone)]
pub struct ResolveService {
    /// Shared SQLite pool holding the `resolutions` table.
    pub db: Arc<SqlitePool>,

    pub resolver: Arc<Resolver<HttpFetcher>>,
}

impl ResolveService {
    pub fn new(db: Arc<SqlitePool>, resolver: Resolver<HttpFetcher>) -> Self {
        Self {
            db,
            resolver: Arc::new(resolver),
        }
    }

    /// Resolve `url` for the given reserve address.
    ///
    /// Returns the cached row unless `refresh` is set, in which case the URL
    /// is resolved again and the cache overwritten.
    pub async fn resolve(
        &self,
        url: &str,
        reserve_address: &str,
        refresh: bool,
    ) -> ServiceResult<Resolution> {
        if url.is_empty() {
            return Err(ServiceError::EmptyUrl);
        }

        if !refresh {
            if let Some(hit) = self.cached(url, reserve_address).await? {
                debug!("cache hit for {}", url);
                return Ok(hit);
            }
        }

        let resolved_url = self
            .resolver
            .resolve_protocol(url, reserve_address)
            .await?;

        let resolution = Resolution {
            source_url: url.to_string(),
            reserve_address: reserve_address.to_string(),
            resolved_url,
            resolved_at: Utc::now(),
        };
        self.store(&resolution).await?;

        tracing::info!("resolved {} -> {}", url, resolution.resolved_url);
        Ok(resolution)
    }

    /// Look up a cached resolution without resolving.
    pub async fn cached(
        &self,
        url: &str,
        reserve_address: &str,
    ) -> ServiceResult<Option<Resolution>> {
        let row = sqlx::query_as::<_, Resolution>(
            r#"
            SELECT source_url, reserve_address, resolved_url, resolved_at
            FROM resolutions
            WHERE source_url = ? AND reserve_address = ?
            "#,
        )
        .bind(url)
        .bind(reserve_address)
        .fetch_optional(&*self.db)
        .await?;

        Ok(row)
    }

    /// Drop a cached resolution. Returns NotCached if nothing was stored.
    pub async fn evict(&self, url: &str, reserve_address: &str) -> ServiceResult<()> {
        let result =
            sqlx::query("DELETE FROM resolutions WHERE source_url = ? AND reserve_address = ?")
                .bind(url)
                .bind(reserve_address)
                .execute(&*self.db)
                .await?;

        if result.rows_affected() == 0 {
            return Err(ServiceError::NotCached(url.to_string()));
        }
        Ok(())
    }

    /// Derive the CID stored in `address` and the gateway URL serving it.
    pub fn derive_cid(
        &self,
        address: &str,
        version: u64,
        codec: &str,
    ) -> ServiceResult<DerivedCid> {
        let codec: Codec = codec.parse()?;
        let cid_version = content_id::version_from_u64(version)?;
        let cid = content_id::derive_cid_from_address(address, cid_version, codec)?.to_string();
        let gateway_url = format!("{}{}", self.resolver.gateway(), cid);

        Ok(DerivedCid {
            address: address.to_string(),
            version,
            codec,
            cid,
            gateway_url,
        })
    }

    async fn store(&self, resolution: &Resolution) -> ServiceResult<()> {
        sqlx::query(
            r#"
            INSERT INTO resolutions (source_url, reserve_address, resolved_url, resolved_at)
            VALUES (?, ?, ?, ?)
            ON CONFLICT (source_url, reserve_address)
            DO UPDATE SET resolved_url = excluded.resolved_url,
                          resolved_at = excluded.resolved_at
            "#,
        )
        .bind(&resolution.source_url)
        .bind(&resolution.reserve_address)
        .bind(&resolution.resolved_url)
        .bind(resolution.resolved_at)
        .execute(&*self.db)
        .await?;

        Ok(())
    }
}
