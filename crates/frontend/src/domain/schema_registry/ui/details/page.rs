use super::fields_table::FieldsTable;
use super::model::description_rows;
use super::version_select::VersionSelect;
use super::view_model::SchemaDetailsVm;
use crate::domain::schema_registry::store::{use_schema_store, DetailsState, SchemaKey};
use crate::layout::global_context::use_global_context;
use crate::shared::components::{ErrorPanel, LoadingPlaceholder, StatCard};
use crate::shared::json_viewer::JsonViewer;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DETAIL;
use contracts::domain::schema_registry::{SchemaDetails, SchemaField};
use leptos::prelude::*;
use serde_json::Value;
use thaw::*;

#[component]
pub fn SchemaDetailsPage(
    #[prop(into)] subject: Signal<String>,
    #[prop(into)] version: Signal<i32>,
) -> impl IntoView {
    let vm = SchemaDetailsVm::new(subject, version, use_schema_store(), use_global_context());

    let vm_route = vm.clone();
    Effect::new(move |prev: Option<SchemaKey>| vm_route.on_route_change(prev));

    let vm_cleanup = vm.clone();
    on_cleanup(move || vm_cleanup.release());

    let vm_busy = vm.clone();
    let refreshing = move || vm_busy.is_refreshing();

    let content = move || match vm.state() {
        DetailsState::Loading => view! { <LoadingPlaceholder text="Loading schema..." /> }.into_any(),
        DetailsState::Failed(message) => {
            let vm_retry = vm.clone();
            view! {
                <ErrorPanel
                    message=message
                    on_retry=Callback::new(move |_: ()| vm_retry.refresh_data(true))
                />
            }
            .into_any()
        }
        DetailsState::Ready(details) => view! {
            <SchemaDetailsBody subject=vm.subject.get_untracked() details=details />
        }
        .into_any(),
    };

    view! {
        <PageFrame page_id="schema_registry--detail" category=PAGE_CAT_DETAIL>
            <div class="page__header">
                <Show when=refreshing>
                    <span class="page__status">"Refreshing..."</span>
                </Show>
            </div>
            <div class="page__content">{content}</div>
        </PageFrame>
    }
}

/// Everything the ready state renders, one value per view slot
#[derive(Debug, Clone, PartialEq)]
struct DetailsBody {
    subject_stat: String,
    schema_id: String,
    subject: String,
    versions: Vec<i32>,
    current: i32,
    json: Value,
    download_name: String,
    rows: Vec<(&'static str, String)>,
    fields: Vec<SchemaField>,
}

fn details_body(subject: String, details: SchemaDetails) -> DetailsBody {
    let json = serde_json::to_value(&details).unwrap_or_default();
    let rows = description_rows(&details.schema);
    let SchemaDetails {
        version,
        schema_id,
        registered_versions,
        schema,
        ..
    } = details;

    DetailsBody {
        subject_stat: subject.clone(),
        schema_id: schema_id.to_string(),
        download_name: format!("{}-v{}", subject, version),
        subject,
        versions: registered_versions,
        current: version,
        json,
        rows,
        fields: schema.fields,
    }
}

#[component]
fn SchemaDetailsBody(subject: String, details: SchemaDetails) -> impl IntoView {
    // thaw children are closures, so each value is moved into exactly one slot
    let DetailsBody {
        subject_stat,
        schema_id,
        subject,
        versions,
        current,
        json,
        download_name,
        rows,
        fields,
    } = details_body(subject, details);

    view! {
        <Flex vertical=true gap=FlexGap::Large>
            <Flex gap=FlexGap::Large class="schema-details__stats">
                <StatCard label="Subject Name" value=subject_stat icon_name="database" />
                <StatCard label="Subject ID" value=schema_id />
            </Flex>

            <Card>
                <VersionSelect subject=subject versions=versions current=current />
                <div class="schema-details__columns">
                    <div class="schema-details__json">
                        <JsonViewer value=json title="Schema" file_name=download_name />
                    </div>
                    <div class="schema-details__meta">
                        <dl class="descriptions">
                            {rows
                                .into_iter()
                                .map(|(label, value)| {
                                    view! {
                                        <div class="descriptions__item">
                                            <dt class="descriptions__label">{label}</dt>
                                            <dd class="descriptions__value">{value}</dd>
                                        </div>
                                    }
                                })
                                .collect_view()}
                        </dl>
                        <FieldsTable fields=fields />
                    </div>
                </div>
            </Card>
        </Flex>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::schema_registry::SchemaDefinition;
    use serde_json::json;

    fn user_events_v2() -> SchemaDetails {
        SchemaDetails {
            subject: "user-events".to_string(),
            version: 2,
            schema_id: 42,
            registered_versions: vec![1, 2, 3],
            schema: SchemaDefinition {
                schema_type: "record".to_string(),
                name: "UserEvent".to_string(),
                namespace: Some("com.example".to_string()),
                doc: None,
                fields: vec![SchemaField {
                    name: "id".to_string(),
                    field_type: json!("long"),
                    default: None,
                    doc: None,
                }],
            },
        }
    }

    #[test]
    fn test_details_body_for_record_schema() {
        let body = details_body("user-events".to_string(), user_events_v2());

        assert_eq!(body.subject_stat, "user-events");
        assert_eq!(body.schema_id, "42");
        assert_eq!(body.subject, "user-events");
        assert_eq!(body.versions, vec![1, 2, 3]);
        assert_eq!(body.current, 2);
        assert_eq!(body.download_name, "user-events-v2");
        assert_eq!(
            body.rows,
            vec![
                ("type", "record".to_string()),
                ("name", "UserEvent".to_string()),
                ("namespace", "com.example".to_string()),
            ]
        );

        assert_eq!(body.fields.len(), 1);
        let id = &body.fields[0];
        assert_eq!(
            (id.name.as_str(), id.type_label(), id.default_label(), id.doc_label()),
            ("id", "long".to_string(), String::new(), String::new())
        );
    }

    #[test]
    fn test_details_body_json_is_full_snapshot() {
        let body = details_body("user-events".to_string(), user_events_v2());
        assert_eq!(body.json["schemaId"], json!(42));
        assert_eq!(body.json["registeredVersions"], json!([1, 2, 3]));
        assert_eq!(body.json["schema"]["fields"][0]["type"], json!("long"));
        assert!(body.json["schema"].get("doc").is_none());
    }
}
