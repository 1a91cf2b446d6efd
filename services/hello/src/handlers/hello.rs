use crate::domain::types::HELLO_MESSAGE;

// ── GET / ────────────────────────────────────────────────────────────────────

/// Answers every request with the same plain-text body.
pub async fn hello() -> &'static str {
    HELLO_MESSAGE
}
