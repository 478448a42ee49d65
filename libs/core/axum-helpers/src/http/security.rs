use axum::{
    extract::Request,
    http::{header, HeaderValue},
    middleware::Next,
    response::Response,
};

/// Middleware that adds the fixed security headers to all responses.
///
/// Adds the following headers before the response body is written:
/// - `x-content-type-options: nosniff`
/// - `x-frame-options: deny`
/// - `content-security-policy: default-src 'none'`
///
/// The headers are request-independent; this layer sits above every route,
/// including the 404 fallback.
pub async fn security_headers(request: Request, next: Next) -> Response {
    let mut response = next.run(request).await;

    let headers = response.headers_mut();
    headers.insert(
        header::X_CONTENT_TYPE_OPTIONS,
        HeaderValue::from_static("nosniff"),
    );
    headers.insert(header::X_FRAME_OPTIONS, HeaderValue::from_static("deny"));
    headers.insert(
        header::CONTENT_SECURITY_POLICY,
        HeaderValue::from_static("default-src 'none'"),
    );

    response
}
