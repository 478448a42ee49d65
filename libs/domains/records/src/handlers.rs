use axum::{
    body::Bytes,
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use axum_helpers::Envelope;
use std::sync::Arc;
use utoipa::OpenApi;

use crate::error::{RecordError, RecordResult};
use crate::models::{FieldMap, PageQuery, Record};
use crate::repository::RecordRepository;
use crate::service::RecordService;

const TAG: &str = "records";

/// OpenAPI documentation for a record collection
#[derive(OpenApi)]
#[openapi(
    paths(list_records, create_record, get_record, update_record, delete_record),
    components(schemas(Record, Envelope)),
    tags(
        (name = TAG, description = "CRUD endpoints over a record collection")
    )
)]
pub struct ApiDoc;

/// Create the record router with all HTTP endpoints
pub fn router<R: RecordRepository + 'static>(service: RecordService<R>) -> Router {
    let shared_service = Arc::new(service);

    Router::new()
        .route("/", get(list_records).post(create_record))
        .route(
            "/{id}",
            get(get_record).put(update_record).delete(delete_record),
        )
        .with_state(shared_service)
}

// Writes demand an exact `application/json` content type before the body is
// touched; a mismatch is rejected without any store access.
fn parse_json_object(headers: &HeaderMap, body: &Bytes) -> RecordResult<FieldMap> {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok());

    if content_type != Some("application/json") {
        return Err(RecordError::InvalidContentType);
    }

    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| RecordError::InvalidBody(format!("Invalid JSON body: {e}")))?;

    match value {
        serde_json::Value::Object(fields) => Ok(fields),
        other => Err(RecordError::InvalidBody(format!(
            "Expected a JSON object, got {other}"
        ))),
    }
}

/// List one page of records
#[utoipa::path(
    get,
    path = "",
    tag = TAG,
    params(PageQuery),
    responses(
        (status = 200, description = "Page of records", body = Envelope),
        (status = 404, description = "Collection is empty", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    )
)]
async fn list_records<R: RecordRepository>(
    State(service): State<Arc<RecordService<R>>>,
    Query(page): Query<PageQuery>,
) -> RecordResult<Json<Envelope>> {
    let records = service.list(page).await?;
    Ok(Json(Envelope::data(serde_json::to_value(records)?)))
}

/// Save a new record
#[utoipa::path(
    post,
    path = "",
    tag = TAG,
    request_body = Object,
    responses(
        (status = 201, description = "Record saved; data echoes the whole collection", body = Envelope),
        (status = 400, description = "Wrong content type or malformed body", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    )
)]
async fn create_record<R: RecordRepository>(
    State(service): State<Arc<RecordService<R>>>,
    headers: HeaderMap,
    body: Bytes,
) -> RecordResult<impl IntoResponse> {
    let fields = parse_json_object(&headers, &body)?;
    let (msg, records) = service.create(fields).await?;

    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_data(msg, serde_json::to_value(records)?)),
    ))
}

/// Fetch a single record
#[utoipa::path(
    get,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "The record", body = Envelope),
        (status = 404, description = "No record with that id", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    )
)]
async fn get_record<R: RecordRepository>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<i32>,
) -> RecordResult<Json<Envelope>> {
    let record = service.get(id).await?;
    Ok(Json(Envelope::data(serde_json::to_value(record)?)))
}

/// Merge fields into an existing record
#[utoipa::path(
    put,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Record id")),
    request_body = Object,
    responses(
        (status = 200, description = "Updated record", body = Envelope),
        (status = 400, description = "Wrong content type or malformed body", body = Envelope),
        (status = 404, description = "No record with that id", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    )
)]
async fn update_record<R: RecordRepository>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<i32>,
    headers: HeaderMap,
    body: Bytes,
) -> RecordResult<Json<Envelope>> {
    let fields = parse_json_object(&headers, &body)?;
    let (msg, record) = service.update(id, fields).await?;

    Ok(Json(Envelope::with_data(msg, serde_json::to_value(record)?)))
}

/// Delete a record
#[utoipa::path(
    delete,
    path = "/{id}",
    tag = TAG,
    params(("id" = i32, Path, description = "Record id")),
    responses(
        (status = 200, description = "Record deleted", body = Envelope),
        (status = 404, description = "No record with that id", body = Envelope),
        (status = 500, description = "Store failure", body = Envelope)
    )
)]
async fn delete_record<R: RecordRepository>(
    State(service): State<Arc<RecordService<R>>>,
    Path(id): Path<i32>,
) -> RecordResult<Json<Envelope>> {
    let msg = service.delete(id).await?;
    Ok(Json(Envelope::msg(msg)))
}
