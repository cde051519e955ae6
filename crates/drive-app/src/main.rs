use std::future::IntoFuture;
use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tokio::signal;
use tokio::sync::Notify;
use tracing::{info, warn};

use drive_app::presentation::{build_app_state, build_router};
use drive_infrastructure::config::AppConfig;
use drive_infrastructure::logging::init_logger;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("Invalid configuration")?;

    init_logger(&config.log_dir).context("Failed to initialize logging")?;
    info!("Starting drive v{}", env!("CARGO_PKG_VERSION"));
    info!("Log directory: {}", config.log_dir.display());

    info!("Initializing state...");
    let state = Arc::new(
        build_app_state(&config)
            .await
            .context("Failed to initialize application state")?,
    );
    let app = build_router(state.clone(), config.allowed_origin.as_deref())
        .context("Failed to build router")?;

    let address = format!("0.0.0.0:{}", config.port);
    info!("Binding to {address}");
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {address}"))?;
    info!("Server running on {address}");

    let stop = Arc::new(Notify::new());
    let server = axum::serve(listener, app)
        .with_graceful_shutdown({
            let stop = stop.clone();
            async move { stop.notified().await }
        })
        .into_future();
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => result.context("Server error")?,
        _ = shutdown_signal() => {
            stop.notify_one();
            let grace = config.timeouts.graceful_shutdown;
            match tokio::time::timeout(grace, &mut server).await {
                Ok(result) => result.context("Server error during shutdown")?,
                Err(_) => warn!("Requests still in flight after {:?}, exiting anyway", grace),
            }
        }
    }

    state.pool.close().await;
    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        match signal::ctrl_c().await {
            Ok(()) => info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                warn!("Failed to listen for Ctrl+C: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
                info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
