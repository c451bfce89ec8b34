//! Display model of the schema details page.

use crate::layout::global_context::Breadcrumb;
use crate::routes::paths::{schema_details_href, SCHEMA_REGISTRY_PATH};
use crate::shared::list_utils::{SortState, Sortable};
use contracts::domain::schema_registry::{SchemaDefinition, SchemaField};
use std::cmp::Ordering;

pub const SORT_NAME: &str = "name";
pub const SORT_TYPE: &str = "type";

/// What a change of route parameters means for the mounted page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleStep {
    /// First render or another subject: full page initialisation
    Activate,
    /// Same subject, another version
    VersionChanged,
    Unchanged,
}

pub fn lifecycle_step(previous: Option<(&str, i32)>, current: (&str, i32)) -> LifecycleStep {
    match previous {
        Some(prev) if prev == current => LifecycleStep::Unchanged,
        Some((subject, _)) if subject == current.0 => LifecycleStep::VersionChanged,
        _ => LifecycleStep::Activate,
    }
}

pub fn details_breadcrumbs(subject: &str, version: i32) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb::new("Schema Registry", SCHEMA_REGISTRY_PATH),
        Breadcrumb::new(subject, schema_details_href(subject, version)),
    ]
}

/// Label/value rows of the schema description; absent values are left out
pub fn description_rows(schema: &SchemaDefinition) -> Vec<(&'static str, String)> {
    [
        ("type", Some(&schema.schema_type)),
        ("name", Some(&schema.name)),
        ("namespace", schema.namespace.as_ref()),
        ("doc", schema.doc.as_ref()),
    ]
    .into_iter()
    .filter_map(|(label, value)| value.map(|v| (label, v.clone())))
    .collect()
}

/// `(value, label)` options of the version selector
pub fn version_options(versions: &[i32]) -> Vec<(i32, String)> {
    versions
        .iter()
        .map(|v| (*v, format!("Version {}", v)))
        .collect()
}

impl Sortable for SchemaField {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            SORT_NAME => self.name.cmp(&other.name),
            SORT_TYPE => self.type_label().cmp(&other.type_label()),
            _ => Ordering::Equal,
        }
    }
}

pub fn sorted_fields(fields: &[SchemaField], sort: &SortState) -> Vec<SchemaField> {
    let mut rows = fields.to_vec();
    sort.apply(&mut rows);
    rows
}
