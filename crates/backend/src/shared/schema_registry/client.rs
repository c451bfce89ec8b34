use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

use super::error::RegistryError;
use crate::shared::config::SchemaRegistryConfig;

const REGISTRY_CONTENT_TYPE: &str = "application/vnd.schemaregistry.v1+json";

/// Schema version as returned by `GET /subjects/{subject}/versions/{version}`
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisteredSchema {
    pub subject: String,
    pub version: i32,
    pub id: i64,
    /// Schema text; JSON for Avro
    pub schema: String,
    /// Absent for Avro
    #[serde(default)]
    pub schema_type: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RegistryErrorBody {
    #[serde(default)]
    error_code: Option<i64>,
    #[serde(default)]
    message: Option<String>,
}

/// Read access to a Confluent-compatible schema registry
#[async_trait]
pub trait SchemaRegistryApi: Send + Sync {
    async fn list_subjects(&self) -> Result<Vec<String>, RegistryError>;

    async fn list_versions(&self, subject: &str) -> Result<Vec<i32>, RegistryError>;

    async fn get_version(&self, subject: &str, version: i32)
        -> Result<RegisteredSchema, RegistryError>;
}

/// HTTP client for the schema registry REST API
pub struct RegistryClient {
    client: reqwest::Client,
    base_url: String,
    username: Option<String>,
    password: Option<String>,
}

impl RegistryClient {
    pub fn new(config: &SchemaRegistryConfig) -> Result<Self, RegistryError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| RegistryError::Network(format!("cannot build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            username: config.username.clone(),
            password: config.password.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, RegistryError> {
        tracing::debug!("Schema registry: GET {}", url);

        let mut request = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, REGISTRY_CONTENT_TYPE);
        if let Some(username) = &self.username {
            request = request.basic_auth(username, self.password.as_deref());
        }

        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let parsed = serde_json::from_str::<RegistryErrorBody>(&body).ok();
            let error_code = parsed.as_ref().and_then(|b| b.error_code);
            let message = parsed
                .and_then(|b| b.message)
                .unwrap_or_else(|| format!("{} returned {}", url, status));
            return Err(RegistryError::from_status(status.as_u16(), error_code, message));
        }

        response
            .json::<T>()
            .await
            .map_err(|e| RegistryError::Decode(format!("{}: {}", url, e)))
    }
}

#[async_trait]
impl SchemaRegistryApi for RegistryClient {
    async fn list_subjects(&self) -> Result<Vec<String>, RegistryError> {
        self.get_json(&subjects_url(&self.base_url)).await
    }

    async fn list_versions(&self, subject: &str) -> Result<Vec<i32>, RegistryError> {
        self.get_json(&versions_url(&self.base_url, subject)).await
    }

    async fn get_version(
        &self,
        subject: &str,
        version: i32,
    ) -> Result<RegisteredSchema, RegistryError> {
        self.get_json(&version_url(&self.base_url, subject, version))
            .await
    }
}

pub fn subjects_url(base_url: &str) -> String {
    format!("{}/subjects", base_url)
}

pub fn versions_url(base_url: &str, subject: &str) -> String {
    format!("{}/subjects/{}/versions", base_url, urlencoding::encode(subject))
}

pub fn version_url(base_url: &str, subject: &str, version: i32) -> String {
    format!("{}/{}", versions_url(base_url, subject), version)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_urls() {
        let base = "http://localhost:8081";
        assert_eq!(subjects_url(base), "http://localhost:8081/subjects");
        assert_eq!(
            versions_url(base, "user-events"),
            "http://localhost:8081/subjects/user-events/versions"
        );
        assert_eq!(
            version_url(base, "user-events", 2),
            "http://localhost:8081/subjects/user-events/versions/2"
        );
    }

    #[test]
    fn test_subject_is_percent_encoded() {
        assert_eq!(
            versions_url("http://r", "team/orders value"),
            "http://r/subjects/team%2Forders%20value/versions"
        );
    }

    #[test]
    fn test_client_trims_trailing_slash() {
        let config = SchemaRegistryConfig {
            url: "http://localhost:8081/".to_string(),
            username: None,
            password: None,
            timeout_secs: 5,
        };
        let client = RegistryClient::new(&config).unwrap();
        assert_eq!(client.base_url(), "http://localhost:8081");
    }

    #[test]
    fn test_registered_schema_defaults_to_avro() {
        let schema: RegisteredSchema = serde_json::from_str(
            r#"{"subject":"s","version":1,"id":7,"schema":"\"string\""}"#,
        )
        .unwrap();
        assert_eq!(schema.id, 7);
        assert!(schema.schema_type.is_none());
    }
}
