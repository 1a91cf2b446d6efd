use std::time::Duration;

use hello_core::config::{ConfigError, env_or, parse_var, process_env};
use hello_core::cors::{AllowedOrigins, CorsConfig, DEFAULT_MAX_AGE};

const DEFAULT_PORT: u16 = 8080;

/// Hello service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct HelloConfig {
    /// TCP port for the HTTP server (default 8080). Env var: `HELLO_PORT`.
    pub hello_port: u16,
    /// Cross-origin policy applied to every route.
    pub cors: CorsConfig,
}

impl HelloConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(process_env)
    }

    /// Reads:
    ///
    /// - `HELLO_PORT`: listen port, default 8080.
    /// - `CORS_ALLOWED_ORIGINS`: `*` or a comma-separated origin list, default `*`.
    /// - `CORS_MAX_AGE`: preflight cache lifetime in seconds, default 3600. An empty
    ///   value omits `Access-Control-Max-Age`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let max_age = match lookup("CORS_MAX_AGE") {
            None => Some(DEFAULT_MAX_AGE),
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(Duration::from_secs(parse_var("CORS_MAX_AGE", &raw)?)),
        };

        Ok(Self {
            hello_port: env_or(&lookup, "HELLO_PORT", DEFAULT_PORT)?,
            cors: CorsConfig {
                allowed_origins: env_or(&lookup, "CORS_ALLOWED_ORIGINS", AllowedOrigins::Any)?,
                max_age,
            },
        })
    }
}
