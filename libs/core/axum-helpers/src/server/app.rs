use super::shutdown::shutdown_signal;
use crate::envelope::endpoint_not_found;
use crate::http::cors::permissive_cors_layer;
use crate::http::security::security_headers;
use axum::{middleware, routing::get, Json, Router};
use core_config::server::ServerConfig;
use std::future::Future;
use std::io;
use std::time::Duration;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::{info, Level};
use utoipa::OpenApi;

/// Starts the Axum server with graceful shutdown.
///
/// # Errors
/// Returns an error if the TCP listener fails to bind to the configured
/// address or the server errors during operation.
pub async fn create_app(router: Router, server_config: &ServerConfig) -> io::Result<()> {
    let listener = tokio::net::TcpListener::bind(server_config.address()).await?;

    info!("Server starting on {}", listener.local_addr()?);
    axum::serve(listener, router.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .inspect_err(|e| {
            tracing::error!("Server encountered an error: {:?}", e);
        })?;

    Ok(())
}

/// Creates a configured Axum router with the common middleware stack.
///
/// This function sets up:
/// - API routes nested under `/api`
/// - The OpenAPI document at `/api-docs/openapi.json`
/// - Request tracing, security headers, permissive CORS
/// - Fallback handler answering `{msg: "Endpoint does not exist"}` with 404
///
/// Domain routers apply their own state before being passed in; this
/// function only combines them with cross-cutting concerns.
///
/// # Type Parameters
/// * `T` - A type implementing `utoipa::OpenApi` for the API document
pub fn create_router<T>(apis: Router) -> Router
where
    T: OpenApi + 'static,
{
    Router::new()
        .route(
            "/api-docs/openapi.json",
            get(|| async { Json(T::openapi()) }),
        )
        .nest("/api", apis)
        .fallback(endpoint_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .layer(middleware::from_fn(security_headers))
        .layer(permissive_cors_layer())
}

/// Production-ready server with coordinated shutdown and cleanup.
///
/// Serves until a shutdown signal arrives, then runs the supplied cleanup
/// future (closing pools and the like) bounded by `shutdown_timeout`.
///
/// # Example
/// ```ignore
/// create_production_app(app, &config.server, Duration::from_secs(30), async move {
///     db.close().await.ok();
/// })
/// .await?;
/// ```
pub async fn create_production_app<C>(
    router: Router,
    server_config: &ServerConfig,
    shutdown_timeout: Duration,
    cleanup: C,
) -> io::Result<()>
where
    C: Future<Output = ()> + Send + 'static,
{
    create_app(router, server_config).await?;

    info!("Server stopped, running cleanup");
    if tokio::time::timeout(shutdown_timeout, cleanup).await.is_err() {
        tracing::error!(
            "Cleanup did not finish within {:?}, exiting anyway",
            shutdown_timeout
        );
    }

    Ok(())
}
