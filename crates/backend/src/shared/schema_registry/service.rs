use contracts::domain::schema_registry::{ListSubjectsResponse, SchemaDetails, SubjectSummary};
use once_cell::sync::OnceCell;
use std::sync::Arc;
use tokio::task::JoinSet;

use super::avro::normalize_schema;
use super::client::{RegistryClient, SchemaRegistryApi};
use super::error::RegistryError;
use crate::shared::config::SchemaRegistryConfig;

static REGISTRY: OnceCell<Arc<dyn SchemaRegistryApi>> = OnceCell::new();

/// Create the process-wide registry client. Must be called once at startup.
pub fn initialize(config: &SchemaRegistryConfig) -> anyhow::Result<()> {
    let client = RegistryClient::new(config)?;
    tracing::info!("Schema registry: {}", client.base_url());
    REGISTRY
        .set(Arc::new(client))
        .map_err(|_| anyhow::anyhow!("schema registry client already initialized"))?;
    Ok(())
}

pub fn registry() -> Result<Arc<dyn SchemaRegistryApi>, RegistryError> {
    REGISTRY
        .get()
        .cloned()
        .ok_or_else(|| RegistryError::Network("schema registry client is not initialized".into()))
}

/// Metadata of one subject version together with all registered versions
pub async fn get_schema_details(
    api: &dyn SchemaRegistryApi,
    subject: &str,
    version: i32,
) -> Result<SchemaDetails, RegistryError> {
    if subject.trim().is_empty() {
        return Err(RegistryError::InvalidRequest("subject must not be empty".into()));
    }
    if version <= 0 {
        return Err(RegistryError::InvalidRequest(format!(
            "version must be a positive integer, got {}",
            version
        )));
    }

    let (registered, mut versions) =
        tokio::try_join!(api.get_version(subject, version), api.list_versions(subject))?;
    versions.sort_unstable();

    let schema = normalize_schema(&registered)?;

    tracing::info!(
        "Schema details: subject='{}' version={} id={} fields={}",
        registered.subject,
        registered.version,
        registered.id,
        schema.fields.len()
    );

    Ok(SchemaDetails {
        subject: registered.subject,
        version: registered.version,
        schema_id: registered.id,
        registered_versions: versions,
        schema,
    })
}

/// All subjects with their latest version, sorted by name
pub async fn list_subjects(
    api: Arc<dyn SchemaRegistryApi>,
) -> Result<ListSubjectsResponse, RegistryError> {
    let names = api.list_subjects().await?;

    let mut tasks = JoinSet::new();
    for name in names {
        let api = api.clone();
        tasks.spawn(async move {
            let versions = api.list_versions(&name).await;
            (name, versions)
        });
    }

    let mut subjects = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        let (name, versions) = match joined {
            Ok(result) => result,
            Err(e) => {
                tracing::error!("Subject version lookup task failed: {}", e);
                continue;
            }
        };
        let summary = match versions {
            Ok(versions) => SubjectSummary {
                latest_version: versions.iter().copied().max(),
                versions_count: versions.len(),
                name,
            },
            Err(e) => {
                tracing::warn!("Cannot list versions of '{}': {}", name, e);
                SubjectSummary {
                    name,
                    latest_version: None,
                    versions_count: 0,
                }
            }
        };
        subjects.push(summary);
    }
    subjects.sort_by(|a, b| a.name.cmp(&b.name));

    Ok(ListSubjectsResponse { subjects })
}
