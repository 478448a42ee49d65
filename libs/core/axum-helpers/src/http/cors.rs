use tower_http::cors::CorsLayer;

/// Creates a permissive CORS layer.
///
/// Any origin, method, and header is accepted; the API trusts all callers
/// and carries no credentials.
pub fn permissive_cors_layer() -> CorsLayer {
    CorsLayer::permissive()
}
