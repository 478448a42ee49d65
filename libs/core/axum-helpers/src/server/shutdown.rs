use tokio::signal;
use tracing::info;

/// Wait for a shutdown signal (SIGTERM or SIGINT).
///
/// Intended for `axum::serve(..).with_graceful_shutdown(shutdown_signal())`.
/// Connection cleanup is the caller's responsibility; see
/// [`super::app::create_production_app`].
pub async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received SIGINT (Ctrl+C), initiating graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, initiating graceful shutdown");
        },
    }
}
