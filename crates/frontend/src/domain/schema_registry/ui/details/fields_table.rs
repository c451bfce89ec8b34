//! Table of record fields with sortable Name and Type columns

use super::model::{sorted_fields, SORT_NAME, SORT_TYPE};
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, SortState};
use contracts::domain::schema_registry::SchemaField;
use leptos::prelude::*;
use thaw::*;

/// Stable row identity; field names are unique within a record
pub fn row_key(field: &SchemaField) -> String {
    field.name.clone()
}

#[component]
pub fn FieldsTable(fields: Vec<SchemaField>) -> impl IntoView {
    let fields = StoredValue::new(fields);
    // source order until a header is clicked
    let sort = RwSignal::new(SortState::default());

    let rows = move || fields.with_value(|f| sorted_fields(f, &sort.get()));
    let toggle_sort = move |field: &'static str| sort.update(|s| s.toggle(field));

    let header = move |label: &'static str, field: &'static str| {
        view! {
            <TableHeaderCell>
                <span class="table__sortable-header" on:click=move |_| toggle_sort(field)>
                    {label}
                    <span class=move || sort.with(|s| get_sort_class(s.field.as_deref(), field))>
                        {move || sort.with(|s| get_sort_indicator(s.field.as_deref(), field, s.ascending))}
                    </span>
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <Table class="schema-fields">
            <TableHeader>
                <TableRow>
                    {header("Name", SORT_NAME)}
                    {header("Type", SORT_TYPE)}
                    <TableHeaderCell>"Default"</TableHeaderCell>
                    <TableHeaderCell>"Documentation"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                <For
                    each=rows
                    key=row_key
                    children=move |field| {
                        let type_label = field.type_label();
                        let default_label = field.default_label();
                        let doc_label = field.doc_label();
                        let data_key = row_key(&field);
                        view! {
                            <TableRow attr:data-row-key=data_key>
                                <TableCell>
                                    <span class="schema-fields__name">{field.name}</span>
                                </TableCell>
                                <TableCell>
                                    <code class="schema-fields__type">{type_label}</code>
                                </TableCell>
                                <TableCell>
                                    <code class="schema-fields__default">{default_label}</code>
                                </TableCell>
                                <TableCell>{doc_label}</TableCell>
                            </TableRow>
                        }
                    }
                />
            </TableBody>
        </Table>
    }
}
