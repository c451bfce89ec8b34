use super::tree::JsonNode;
use crate::shared::clipboard::copy_to_clipboard;
use crate::shared::export::{download_text, json_file_name, JSON_MIME};
use crate::shared::icons::icon;
use leptos::prelude::*;
use serde_json::Value;

#[component]
pub fn JsonViewer(
    value: Value,
    #[prop(optional, into)] title: Option<String>,
    /// Download name without the `.json` extension
    #[prop(into)]
    file_name: String,
) -> impl IntoView {
    let (copied, set_copied) = signal(false);
    let pretty = serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string());
    let line_count = pretty.lines().count();
    let size = pretty.len();
    let pretty = StoredValue::new(pretty);
    let file_name = json_file_name(&file_name);

    let handle_copy = move |_| {
        pretty.with_value(|text| {
            copy_to_clipboard(text, move || {
                set_copied.set(true);
                leptos::task::spawn_local(async move {
                    gloo_timers::future::TimeoutFuture::new(2000).await;
                    set_copied.set(false);
                });
            })
        });
    };

    let handle_download = move |_| {
        let result = pretty.with_value(|text| download_text(text, &file_name, JSON_MIME));
        if let Err(e) = result {
            log::error!("JSON download failed: {}", e);
        }
    };

    view! {
        <div class="json-viewer">
            <div class="json-viewer__header">
                <h3 class="json-viewer__title">
                    {title.unwrap_or_else(|| "JSON".to_string())}
                </h3>
                <div class="json-viewer__actions">
                    <button
                        class="button button--secondary"
                        on:click=handle_copy
                        title="Copy to clipboard"
                    >
                        {move || if copied.get() {
                            view! { <>{icon("check")}{"Copied"}</> }.into_any()
                        } else {
                            view! { <>{icon("copy")}{"Copy"}</> }.into_any()
                        }}
                    </button>
                    <button
                        class="button button--secondary"
                        on:click=handle_download
                        title="Download as file"
                    >
                        {icon("download")}
                        {"Download"}
                    </button>
                </div>
            </div>

            <div class="json-viewer__body json-tree">
                <JsonNode value=value depth=0 />
            </div>

            <div class="json-viewer__footer">
                {"Size: "}
                <strong>{format!("{} chars", size)}</strong>
                {" | Lines: "}
                <strong>{line_count}</strong>
            </div>
        </div>
    }
}
