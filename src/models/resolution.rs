//! A cached metadata URL resolution.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Result of resolving one asset URL, as stored in the `resolutions` table.
///
/// Rows are keyed by the pair `(source_url, reserve_address)` because the
/// same template URL resolves differently for every reserve address.
#[derive(Serialize, Deserialize, Clone, FromRow, Debug, PartialEq, Eq)]
pub struct Resolution {
    /// URL as declared on the asset, including any `#arc3` marker.
    pub source_url: String,

    /// Reserve address supplied with the request (may be empty).
    pub reserve_address: String,

    /// Final fetchable URL.
    pub resolved_url: String,

    /// When the resolution was computed.
    pub resolved_at: DateTime<Utc>,
}
