//! API client for the schema registry endpoints of the backend.

use crate::shared::api_utils::get_json;
use contracts::domain::schema_registry::{ListSubjectsResponse, SchemaDetails};

const BASE_URL: &str = "/api/schema-registry";

/// List all subjects with their latest version
pub async fn fetch_subjects() -> Result<ListSubjectsResponse, String> {
    get_json(&format!("{}/subjects", BASE_URL)).await
}

/// Get one version of a subject together with all registered versions
pub async fn fetch_schema_details(subject: &str, version: i32) -> Result<SchemaDetails, String> {
    get_json(&schema_details_path(subject, version)).await
}

pub fn schema_details_path(subject: &str, version: i32) -> String {
    format!(
        "{}/subjects/{}/versions/{}",
        BASE_URL,
        urlencoding::encode(subject),
        version
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_schema_details_path() {
        assert_eq!(
            schema_details_path("user-events", 2),
            "/api/schema-registry/subjects/user-events/versions/2"
        );
        assert_eq!(
            schema_details_path("a/b", 1),
            "/api/schema-registry/subjects/a%2Fb/versions/1"
        );
    }
}
