use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_DIRECTIVES: &str = "info,tower_http=debug";

/// Filter from `RUST_LOG`, or request-level logging from `tower-http` plus
/// `info` for everything else when it is unset or unparsable.
fn log_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the JSON stdout subscriber. A second call is a no-op.
pub fn init_tracing() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let _ = tracing_subscriber::registry()
        .with(log_filter(rust_log.as_deref()))
        .with(fmt::layer().json())
        .try_init();
}
