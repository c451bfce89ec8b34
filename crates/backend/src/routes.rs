use axum::{routing::get, Router};

use crate::handlers;

/// All HTTP routes of the application
pub fn configure_routes() -> Router {
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route(
            "/api/schema-registry/subjects",
            get(handlers::schema_registry::list_subjects),
        )
        .route(
            "/api/schema-registry/subjects/:subject/versions/:version",
            get(handlers::schema_registry::get_schema_details),
        )
}
