//! Normalisation of registry schema text into `SchemaDefinition`.

use contracts::domain::schema_registry::{SchemaDefinition, SchemaField};
use serde_json::{Map, Value};

use super::client::RegisteredSchema;
use super::error::RegistryError;

/// Build the displayable definition of a registered schema.
///
/// Only Avro schemas are parsed; Protobuf and JSON Schema subjects are
/// described by their schema type alone.
pub fn normalize_schema(registered: &RegisteredSchema) -> Result<SchemaDefinition, RegistryError> {
    match registered.schema_type.as_deref() {
        None => {}
        Some(t) if t.eq_ignore_ascii_case("AVRO") => {}
        Some(other) => {
            return Ok(SchemaDefinition {
                schema_type: other.to_lowercase(),
                name: registered.subject.clone(),
                namespace: None,
                doc: None,
                fields: Vec::new(),
            })
        }
    }

    let parsed: Value = serde_json::from_str(&registered.schema).map_err(|e| {
        RegistryError::Decode(format!(
            "schema of {} v{} is not valid JSON: {}",
            registered.subject, registered.version, e
        ))
    })?;

    match parsed {
        Value::String(primitive) => Ok(SchemaDefinition {
            schema_type: primitive.clone(),
            name: primitive,
            namespace: None,
            doc: None,
            fields: Vec::new(),
        }),
        Value::Array(_) => Ok(SchemaDefinition {
            schema_type: "union".to_string(),
            name: registered.subject.clone(),
            namespace: None,
            doc: None,
            fields: Vec::new(),
        }),
        Value::Object(obj) => normalize_object(&registered.subject, obj),
        other => Err(RegistryError::Decode(format!(
            "unexpected schema of {}: {}",
            registered.subject, other
        ))),
    }
}

fn normalize_object(subject: &str, mut obj: Map<String, Value>) -> Result<SchemaDefinition, RegistryError> {
    let schema_type = match obj.get("type") {
        Some(Value::String(t)) => t.clone(),
        Some(other) => other.to_string(),
        None => {
            return Err(RegistryError::Decode(format!(
                "schema of {} has no \"type\"",
                subject
            )))
        }
    };

    let fields = match obj.remove("fields") {
        Some(fields @ Value::Array(_)) => serde_json::from_value::<Vec<SchemaField>>(fields)
            .map_err(|e| {
                RegistryError::Decode(format!("invalid fields in schema of {}: {}", subject, e))
            })?,
        _ => Vec::new(),
    };

    Ok(SchemaDefinition {
        name: string_entry(&obj, "name").unwrap_or_else(|| schema_type.clone()),
        namespace: string_entry(&obj, "namespace"),
        doc: string_entry(&obj, "doc"),
        schema_type,
        fields,
    })
}

fn string_entry(obj: &Map<String, Value>, key: &str) -> Option<String> {
    obj.get(key).and_then(Value::as_str).map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn registered(schema: &str, schema_type: Option<&str>) -> RegisteredSchema {
        RegisteredSchema {
            subject: "user-events".to_string(),
            version: 2,
            id: 42,
            schema: schema.to_string(),
            schema_type: schema_type.map(str::to_string),
        }
    }

    #[test]
    fn test_record_schema() {
        let text = json!({
            "type": "record",
            "name": "UserEvent",
            "namespace": "com.example",
            "fields": [
                { "name": "id", "type": "long" },
                { "name": "tags", "type": { "type": "array", "items": "string" }, "default": [], "doc": "Labels", "aliases": ["labels"] }
            ]
        })
        .to_string();

        let def = normalize_schema(&registered(&text, None)).unwrap();
        assert_eq!(def.schema_type, "record");
        assert_eq!(def.name, "UserEvent");
        assert_eq!(def.namespace.as_deref(), Some("com.example"));
        assert_eq!(def.doc, None);
        assert_eq!(def.fields.len(), 2);
        assert_eq!(def.fields[0].type_label(), "long");
        // keys keep the order the registry sent them in
        assert_eq!(def.fields[1].type_label(), r#"{"type":"array","items":"string"}"#);
        assert_eq!(def.fields[1].default, Some(json!([])));
        assert_eq!(def.fields[1].doc.as_deref(), Some("Labels"));
    }

    #[test]
    fn test_primitive_schema() {
        let def = normalize_schema(&registered("\"string\"", None)).unwrap();
        assert_eq!(def.schema_type, "string");
        assert_eq!(def.name, "string");
        assert!(def.fields.is_empty());
    }

    #[test]
    fn test_top_level_union() {
        let def = normalize_schema(&registered(r#"["null","string"]"#, Some("AVRO"))).unwrap();
        assert_eq!(def.schema_type, "union");
        assert_eq!(def.name, "user-events");
    }

    #[test]
    fn test_enum_without_name_falls_back_to_type() {
        let def = normalize_schema(&registered(
            r#"{"type":"enum","symbols":["A","B"],"doc":"Kinds"}"#,
            None,
        ))
        .unwrap();
        assert_eq!(def.name, "enum");
        assert_eq!(def.doc.as_deref(), Some("Kinds"));
    }

    #[test]
    fn test_protobuf_is_described_by_type() {
        let def = normalize_schema(&registered(
            "syntax = \"proto3\"; message User { int64 id = 1; }",
            Some("PROTOBUF"),
        ))
        .unwrap();
        assert_eq!(def.schema_type, "protobuf");
        assert_eq!(def.name, "user-events");
        assert!(def.fields.is_empty());
    }

    #[test]
    fn test_invalid_avro_is_decode_error() {
        let err = normalize_schema(&registered("{not json", None)).unwrap_err();
        assert!(matches!(err, RegistryError::Decode(_)));

        let err = normalize_schema(&registered(r#"{"name":"NoType"}"#, None)).unwrap_err();
        assert!(matches!(err, RegistryError::Decode(_)));
    }
}
