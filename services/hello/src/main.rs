use std::net::SocketAddr;

use anyhow::Context;
use tracing::info;

use hello_core::tracing::init_tracing;
use hello_service::config::HelloConfig;
use hello_service::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let config = HelloConfig::from_env().context("failed to load config")?;

    let router = build_router(&config.cors);
    let addr = SocketAddr::from(([0, 0, 0, 0], config.hello_port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!(
        %addr,
        allowed_origins = %config.cors.allowed_origins,
        max_age_secs = config.cors.max_age.map(|d| d.as_secs()),
        "hello service listening"
    );
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("hello service stopped");
    Ok(())
}

/// Resolves on Ctrl+C, or SIGTERM on unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!(error = %e, "failed to listen for ctrl-c");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};
        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to listen for SIGTERM");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => info!("received ctrl-c, shutting down"),
        () = terminate => info!("received SIGTERM, shutting down"),
    }
}
