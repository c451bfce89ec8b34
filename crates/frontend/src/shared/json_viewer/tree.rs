//! Collapsible tree rendering of a JSON value

use crate::shared::icons::icon;
use leptos::prelude::*;
use serde_json::Value;

/// Containers at this depth or deeper start collapsed
pub const COLLAPSE_DEPTH: usize = 3;

/// Summary shown next to a container node, `None` for scalars
pub fn node_summary(value: &Value) -> Option<String> {
    match value {
        Value::Object(map) => Some(match map.len() {
            1 => "{1 key}".to_string(),
            n => format!("{{{} keys}}", n),
        }),
        Value::Array(items) => Some(match items.len() {
            1 => "[1 item]".to_string(),
            n => format!("[{} items]", n),
        }),
        _ => None,
    }
}

/// JSON literal of a scalar
pub fn scalar_text(value: &Value) -> String {
    value.to_string()
}

/// CSS modifier of a scalar, picks its colour
pub fn scalar_class(value: &Value) -> &'static str {
    match value {
        Value::String(_) => "json-tree__value json-tree__value--string",
        Value::Number(_) => "json-tree__value json-tree__value--number",
        Value::Bool(_) => "json-tree__value json-tree__value--bool",
        Value::Null => "json-tree__value json-tree__value--null",
        _ => "json-tree__value",
    }
}

pub fn initially_collapsed(depth: usize, value: &Value) -> bool {
    depth >= COLLAPSE_DEPTH && node_summary(value).is_some()
}

/// Labelled children of a container: object keys or array indices
pub fn child_entries(value: &Value) -> Vec<(String, Value)> {
    match value {
        Value::Object(map) => map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        Value::Array(items) => items
            .iter()
            .enumerate()
            .map(|(i, v)| (i.to_string(), v.clone()))
            .collect(),
        _ => Vec::new(),
    }
}

#[component]
pub fn JsonNode(
    /// Object key or array index, `None` at the root
    #[prop(optional)]
    label: Option<String>,
    value: Value,
    depth: usize,
) -> impl IntoView {
    let summary = node_summary(&value);
    let label_view = label.map(|l| {
        view! { <span class="json-tree__key">{format!("{}: ", l)}</span> }
    });

    let Some(summary) = summary else {
        let class = scalar_class(&value);
        let text = scalar_text(&value);
        return view! {
            <div class="json-tree__node json-tree__node--leaf">
                <span class="json-tree__icon json-tree__icon--empty"></span>
                {label_view}
                <span class=class>{text}</span>
            </div>
        }
        .into_any();
    };

    let (collapsed, set_collapsed) = signal(initially_collapsed(depth, &value));
    let children = child_entries(&value);
    let is_empty = children.is_empty();

    let toggle = move |_| {
        if !is_empty {
            set_collapsed.update(|c| *c = !*c);
        }
    };

    view! {
        <div class="json-tree__node">
            <div
                class="json-tree__header"
                class:json-tree__header--clickable=!is_empty
                on:click=toggle
            >
                {move || if is_empty {
                    view! { <span class="json-tree__icon json-tree__icon--empty"></span> }.into_any()
                } else if collapsed.get() {
                    view! { <span class="json-tree__icon">{icon("chevron-right")}</span> }.into_any()
                } else {
                    view! { <span class="json-tree__icon">{icon("chevron-down")}</span> }.into_any()
                }}
                {label_view}
                <span class="json-tree__summary">{summary}</span>
            </div>
            <Show when=move || !is_empty && !collapsed.get()>
                <div class="json-tree__children">
                    {children.iter().cloned().map(|(label, child)| {
                        view! { <JsonNode label=label value=child depth=depth + 1 /> }.into_any()
                    }).collect_view()}
                </div>
            </Show>
        </div>
    }
    .into_any()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_node_summary() {
        assert_eq!(node_summary(&json!({"a": 1, "b": 2})), Some("{2 keys}".to_string()));
        assert_eq!(node_summary(&json!({"a": 1})), Some("{1 key}".to_string()));
        assert_eq!(node_summary(&json!([])), Some("[0 items]".to_string()));
        assert_eq!(node_summary(&json!([true])), Some("[1 item]".to_string()));
        assert_eq!(node_summary(&json!("x")), None);
        assert_eq!(node_summary(&Value::Null), None);
    }

    #[test]
    fn test_scalar_text_is_json_literal() {
        assert_eq!(scalar_text(&json!("user")), "\"user\"");
        assert_eq!(scalar_text(&json!(42)), "42");
        assert_eq!(scalar_text(&json!(false)), "false");
        assert_eq!(scalar_text(&Value::Null), "null");
    }

    #[test]
    fn test_initially_collapsed_by_depth() {
        let obj = json!({"k": "v"});
        assert!(!initially_collapsed(0, &obj));
        assert!(!initially_collapsed(COLLAPSE_DEPTH - 1, &obj));
        assert!(initially_collapsed(COLLAPSE_DEPTH, &obj));
        assert!(!initially_collapsed(COLLAPSE_DEPTH + 2, &json!("leaf")));
    }

    #[test]
    fn test_child_entries() {
        let entries = child_entries(&json!({"name": "id", "type": "long"}));
        let keys: Vec<_> = entries.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["name", "type"]);

        let entries = child_entries(&json!(["null", "string"]));
        assert_eq!(entries[1], ("1".to_string(), json!("string")));

        assert!(child_entries(&json!(3)).is_empty());
    }
}
