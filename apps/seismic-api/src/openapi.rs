use utoipa::OpenApi;

/// Combined API documentation for the service.
///
/// Both collections expose the same five operations; the domain document
/// is nested once per mount point.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Seismic API",
        description = "CRUD API over earthquake alerts and raw sensor readings"
    ),
    nest(
        (path = "/api/earthquake-alerts", api = domain_records::handlers::ApiDoc),
        (path = "/api/raw-data", api = domain_records::handlers::ApiDoc)
    )
)]
pub struct ApiDoc;
