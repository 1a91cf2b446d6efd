use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Hello service error variants.
///
/// Unknown routes and wrong methods are left to axum's defaults (404 / 405).
#[derive(Debug, thiserror::Error)]
pub enum HelloServiceError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("invalid query: {0}")]
    InvalidQuery(#[from] QueryRejection),
}

impl HelloServiceError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedLanguage(_) => "UNSUPPORTED_LANGUAGE",
            Self::InvalidQuery(_) => "INVALID_QUERY",
        }
    }
}

impl IntoResponse for HelloServiceError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::UnsupportedLanguage(_) | Self::InvalidQuery(_) => StatusCode::BAD_REQUEST,
        };
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
