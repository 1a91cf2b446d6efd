use axum::extract::{Query, rejection::QueryRejection};
use serde::Deserialize;

use crate::domain::types::Lang;
use crate::error::HelloServiceError;

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
pub struct GreetingQuery {
    pub lang: Option<String>,
}

// ── GET /greeting ────────────────────────────────────────────────────────────

pub async fn get_greeting(
    query: Result<Query<GreetingQuery>, QueryRejection>,
) -> Result<&'static str, HelloServiceError> {
    let Query(query) = query?;
    let lang = match query.lang.as_deref() {
        Some(code) => code.parse::<Lang>()?,
        None => Lang::default(),
    };
    tracing::debug!(lang = lang.code(), "greeting");
    Ok(lang.greeting())
}
