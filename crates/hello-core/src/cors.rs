//! Cross-origin policy shared by the workspace services.
//!
//! One configuration value drives the whole policy: which origins may read
//! responses, and how long a browser may cache a preflight answer.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

pub const DEFAULT_MAX_AGE: Duration = Duration::from_secs(3600);

const WILDCARD: &str = "*";

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OriginParseError {
    #[error("no origins given")]
    Empty,
    #[error("wildcard cannot be combined with explicit origins")]
    MixedWildcard,
    #[error("origin {0:?} has no scheme")]
    MissingScheme(String),
    #[error("origin {0:?} is not a valid header value")]
    InvalidHeader(String),
}

/// Origins allowed to read responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `Access-Control-Allow-Origin: *`
    Any,
    /// Exact origins, echoed back only when the request's `Origin` matches.
    List(Vec<HeaderValue>),
}

impl FromStr for AllowedOrigins {
    type Err = OriginParseError;

    /// Accepts `*` or a comma-separated list such as
    /// `http://localhost:3001, https://app.example.com`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let entries: Vec<&str> = s
            .split(',')
            .map(str::trim)
            .filter(|e| !e.is_empty())
            .collect();

        match entries.as_slice() {
            [] => Err(OriginParseError::Empty),
            [WILDCARD] => Ok(Self::Any),
            _ if entries.contains(&WILDCARD) => Err(OriginParseError::MixedWildcard),
            _ => entries
                .into_iter()
                .map(parse_origin)
                .collect::<Result<Vec<_>, _>>()
                .map(Self::List),
        }
    }
}

fn parse_origin(raw: &str) -> Result<HeaderValue, OriginParseError> {
    // Browsers send `Origin` with a lowercase scheme and host and no trailing
    // slash; the allow list is compared byte for byte.
    let origin = raw.trim_end_matches('/').to_ascii_lowercase();
    if !origin.contains("://") {
        return Err(OriginParseError::MissingScheme(raw.to_string()));
    }
    HeaderValue::from_str(&origin).map_err(|_| OriginParseError::InvalidHeader(raw.to_string()))
}

impl fmt::Display for AllowedOrigins {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Any => f.write_str(WILDCARD),
            Self::List(origins) => {
                let joined = origins
                    .iter()
                    .map(|o| o.to_str().unwrap_or("<binary>"))
                    .collect::<Vec<_>>()
                    .join(",");
                f.write_str(&joined)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origins: AllowedOrigins,
    /// `Access-Control-Max-Age` sent on preflight responses; `None` omits the header.
    pub max_age: Option<Duration>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: AllowedOrigins::Any,
            max_age: Some(DEFAULT_MAX_AGE),
        }
    }
}

/// Build the CORS layer. Apply with `.layer(cors_layer(&config))` in router.
///
/// Any `OPTIONS` request is answered here as a preflight and never reaches a
/// handler. Status and body of other responses pass through unchanged.
pub fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let allow_origin = match &config.allowed_origins {
        AllowedOrigins::Any => AllowOrigin::from(Any),
        AllowedOrigins::List(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    let layer = CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::HEAD, Method::OPTIONS])
        .allow_headers(Any);

    match config.max_age {
        Some(max_age) => layer.max_age(max_age),
        None => layer,
    }
}
