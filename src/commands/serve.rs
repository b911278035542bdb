//! Serve command - Starts the HTTP server.

use tokio::signal;

use crate::app::create_app;
use crate::cli::args::ServeArgs;
use crate::config::Config;
use crate::errors::{AppError, AppResult};

/// Execute the serve command
pub async fn execute(args: ServeArgs, mut config: Config) -> AppResult<()> {
    tracing::info!("Starting server...");

    if let Some(host) = args.host {
        config.server_host = host;
    }
    if let Some(port) = args.port {
        config.server_port = port;
    }

    let app = create_app(&config).await?;

    let addr = config.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| AppError::internal(format!("Failed to bind to {}: {}", addr, e)))?;

    tracing::info!("Server running on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| AppError::internal(format!("Server error: {}", e)))?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolve on Ctrl+C or SIGTERM
async fn shutdown_signal() {
    let ctrl_c = async {
        settle(signal::ctrl_c().await, "Ctrl+C").await;
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => settle(Err(e), "SIGTERM").await,
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received");
}

/// Return once a signal fired; a handler that failed to install never fires.
async fn settle(result: std::io::Result<()>, signal_name: &str) {
    if let Err(e) = result {
        tracing::error!("Failed to install {} handler: {}", signal_name, e);
        std::future::pending::<()>().await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_settle_returns_after_signal() {
        let result = tokio::time::timeout(Duration::from_millis(50), settle(Ok(()), "Ctrl+C")).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_failed_handler_never_triggers_shutdown() {
        let failure = std::io::Error::new(std::io::ErrorKind::Other, "no signal driver");
        let result =
            tokio::time::timeout(Duration::from_millis(50), settle(Err(failure), "Ctrl+C")).await;
        assert!(result.is_err());
    }
}
