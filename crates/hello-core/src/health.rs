//! Probe endpoints for the container orchestrator.
//!
//! Services here hold no connections or caches, so once the listener accepts
//! a request the process is both alive and ready.

use axum::http::StatusCode;

/// `GET /healthz`
pub async fn healthz() -> StatusCode {
    StatusCode::OK
}

/// `GET /readyz`
pub async fn readyz() -> StatusCode {
    StatusCode::OK
}
