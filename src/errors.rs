use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::fmt;

use crate::{
    content_id::CidError, resolver::ResolveError, services::resolve_service::ServiceError,
};

/// A lightweight wrapper for general errors that keeps the message local.
#[derive(Debug)]
pub struct AppError {
    pub status: StatusCode,
    pub message: String,
}

impl AppError {
    /// Create a new AppError with a specific status and message.
    pub fn new(status: StatusCode, msg: impl Into<String>) -> Self {
        Self {
            status,
            message: msg.into(),
        }
    }

    /// Shortcut for a 500 Internal Server Error
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, msg)
    }

    /// Shortcut for 404 Not Found
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, msg)
    }

    /// Shortcut for 400 Bad Request
    pub fn bad_request(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, msg)
    }

    /// Shortcut for 502 Bad Gateway, used when upstream metadata is unreachable.
    pub fn bad_gateway(msg: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_GATEWAY, msg)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(json!({
            "error": self.message,
            "status": self.status.as_u16()
        }));

        (self.status, body).into_response()
    }
}

impl From<ServiceError> for AppError {
    fn from(err: ServiceError) -> Self {
        let message = err.to_string();
        match err {
            ServiceError::EmptyUrl => AppError::bad_request(message),
            ServiceError::NotCached(_) => AppError::not_found(message),
            ServiceError::Cid(CidError::Multihash(_)) => AppError::internal(message),
            ServiceError::Cid(_) => AppError::bad_request(message),
            ServiceError::Resolve(ResolveError::Fetch(_))
            | ServiceError::Resolve(ResolveError::InvalidMetadata { .. }) => {
                AppError::bad_gateway(message)
            }
            ServiceError::Resolve(_) => AppError::bad_request(message),
            ServiceError::Sqlx(err) => {
                tracing::error!("database error: {}", err);
                AppError::internal("internal database error")
            }
        }
    }
}
