use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Snapshot of one subject version as served by `/api/schema-registry/subjects/{subject}/versions/{version}`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaDetails {
    pub subject: String,
    pub version: i32,
    /// Global schema id assigned by the registry
    pub schema_id: i64,
    /// All versions registered under the subject, ascending
    pub registered_versions: Vec<i32>,
    pub schema: SchemaDefinition,
}

/// Top-level description of a registered schema
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaDefinition {
    #[serde(rename = "type")]
    pub schema_type: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
    #[serde(default)]
    pub fields: Vec<SchemaField>,
}

/// One entry of a record schema's `fields` list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SchemaField {
    pub name: String,
    /// Raw type expression: a type name, a union array or a nested schema object
    #[serde(rename = "type")]
    pub field_type: Value,
    /// `None` when the field declares no default; `Some(Value::Null)` for `"default": null`
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub default: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub doc: Option<String>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

impl SchemaField {
    /// Type as shown in tables and used for sorting.
    ///
    /// Plain type names are returned as is, everything else as compact JSON.
    pub fn type_label(&self) -> String {
        match &self.field_type {
            Value::String(name) => name.clone(),
            other => other.to_string(),
        }
    }

    /// Default value as compact JSON, empty when the field has no default
    pub fn default_label(&self) -> String {
        self.default
            .as_ref()
            .map(|v| v.to_string())
            .unwrap_or_default()
    }

    pub fn doc_label(&self) -> String {
        self.doc.clone().unwrap_or_default()
    }
}

impl SchemaDetails {
    pub fn latest_version(&self) -> Option<i32> {
        self.registered_versions.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample() -> Value {
        json!({
            "subject": "user-events",
            "version": 2,
            "schemaId": 42,
            "registeredVersions": [1, 2, 3],
            "schema": {
                "type": "record",
                "name": "UserEvent",
                "namespace": "com.example",
                "fields": [
                    { "name": "id", "type": "long" },
                    { "name": "email", "type": ["null", "string"], "default": null, "doc": "Contact" }
                ]
            }
        })
    }

    #[test]
    fn test_details_deserialize_camel_case() {
        let details: SchemaDetails = serde_json::from_value(sample()).unwrap();
        assert_eq!(details.schema_id, 42);
        assert_eq!(details.registered_versions, vec![1, 2, 3]);
        assert_eq!(details.schema.schema_type, "record");
        assert_eq!(details.schema.namespace.as_deref(), Some("com.example"));
        assert!(details.schema.doc.is_none());
        assert_eq!(details.latest_version(), Some(3));
    }

    #[test]
    fn test_null_default_differs_from_missing_default() {
        let details: SchemaDetails = serde_json::from_value(sample()).unwrap();
        let id = &details.schema.fields[0];
        let email = &details.schema.fields[1];

        assert_eq!(id.default, None);
        assert_eq!(id.default_label(), "");
        assert_eq!(email.default, Some(Value::Null));
        assert_eq!(email.default_label(), "null");
    }

    #[test]
    fn test_type_label() {
        let details: SchemaDetails = serde_json::from_value(sample()).unwrap();
        assert_eq!(details.schema.fields[0].type_label(), "long");
        assert_eq!(details.schema.fields[1].type_label(), r#"["null","string"]"#);
    }

    #[test]
    fn test_absent_optionals_are_not_serialized() {
        let details: SchemaDetails = serde_json::from_value(sample()).unwrap();
        let value = serde_json::to_value(&details).unwrap();
        assert!(value["schema"].get("doc").is_none());
        assert!(value["schema"]["fields"][0].get("default").is_none());
        assert!(value["schema"]["fields"][1].get("default").is_some());
    }
}
