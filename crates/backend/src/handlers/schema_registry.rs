use axum::{extract::Path, Json};
use contracts::domain::schema_registry::{ListSubjectsResponse, SchemaDetails};

use crate::shared::schema_registry::{service, RegistryError};

/// GET /api/schema-registry/subjects
pub async fn list_subjects() -> Result<Json<ListSubjectsResponse>, RegistryError> {
    let api = service::registry()?;
    service::list_subjects(api).await.map(Json)
}

/// GET /api/schema-registry/subjects/:subject/versions/:version
pub async fn get_schema_details(
    Path((subject, version)): Path<(String, String)>,
) -> Result<Json<SchemaDetails>, RegistryError> {
    let version = version.parse::<i32>().map_err(|_| {
        RegistryError::InvalidRequest(format!("version must be an integer, got '{}'", version))
    })?;
    let api = service::registry()?;
    service::get_schema_details(api.as_ref(), &subject, version)
        .await
        .map(Json)
}
