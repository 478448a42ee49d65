//! # Axum Helpers
//!
//! Utilities, middleware, and server plumbing shared by the HTTP apps.
//!
//! ## Modules
//!
//! - **[`envelope`]**: the uniform `{msg?, data?}` response body and fallback handlers
//! - **[`http`]**: HTTP middleware (security headers, CORS)
//! - **[`server`]**: server setup, health endpoint, graceful shutdown

pub mod envelope;
pub mod http;
pub mod server;

// Re-export envelope types
pub use envelope::{endpoint_not_found, Envelope};

// Re-export HTTP middleware
pub use http::{permissive_cors_layer, security_headers};

// Re-export server types
pub use server::{
    create_app, create_production_app, create_router, health_router, shutdown_signal,
    HealthResponse,
};
