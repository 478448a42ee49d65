use axum::Router;
use domain_records::{handlers, PgRecordRepository, RecordService, Resource};

pub mod health;

/// Creates the API routes without the `/api` prefix.
/// The `/api` prefix is added by the `create_router` helper.
///
/// The two collections share one controller; each gets its own repository
/// over its own table and its own display strings.
pub fn routes(state: &crate::state::AppState) -> Router {
    use domain_records::entity::{alerts, raw_data};

    let alerts_service = RecordService::new(
        PgRecordRepository::<alerts::Entity>::new(state.db.clone()),
        Resource::ALERTS,
    );
    let raw_data_service = RecordService::new(
        PgRecordRepository::<raw_data::Entity>::new(state.db.clone()),
        Resource::RAW_DATA,
    );

    Router::new()
        .nest(
            &format!("/{}", Resource::ALERTS.slug),
            handlers::router(alerts_service),
        )
        .nest(
            &format!("/{}", Resource::RAW_DATA.slug),
            handlers::router(raw_data_service),
        )
}

/// Creates a router with the /ready endpoint that pings the database.
///
/// Has state applied, so it merges with the stateless app router from
/// `create_router`.
pub fn ready_router(state: crate::state::AppState) -> Router {
    use axum::routing::get;

    Router::new()
        .route("/ready", get(health::ready_handler))
        .with_state(state)
}
