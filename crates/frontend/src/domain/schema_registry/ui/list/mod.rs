pub mod state;

use crate::domain::schema_registry::api::fetch_subjects;
use crate::layout::global_context::{use_global_context, Breadcrumb};
use crate::layout::refresh::RefreshToken;
use crate::routes::paths::{schema_details_href, SCHEMA_REGISTRY_PATH};
use crate::shared::components::{ErrorPanel, LoadingPlaceholder};
use crate::shared::list_utils::{get_sort_class, get_sort_indicator, highlight_matches, SearchInput};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use contracts::domain::schema_registry::SubjectSummary;
use leptos::logging::log;
use leptos::prelude::*;
use leptos_router::components::A;
use state::{create_state, visible_rows, SORT_LATEST, SORT_SUBJECT, SORT_VERSIONS};
use thaw::*;

#[component]
pub fn SubjectList() -> impl IntoView {
    let ctx = use_global_context();
    let state = create_state();
    let (items, set_items) = signal::<Vec<SubjectSummary>>(Vec::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let refresh_token = StoredValue::new(None::<RefreshToken>);

    let load = move || {
        log!("subject list: loading");
        set_error.set(None);
        leptos::task::spawn_local(async move {
            match fetch_subjects().await {
                Ok(response) => {
                    set_items.set(response.subjects);
                    state.update(|s| s.is_loaded = true);
                }
                Err(e) => {
                    log::error!("failed to load subjects: {}", e);
                    set_error.set(Some(e));
                }
            }
        });
    };

    ctx.init_page(
        "Schema Registry",
        vec![Breadcrumb::new("Schema Registry", SCHEMA_REGISTRY_PATH)],
    );
    refresh_token.set_value(Some(ctx.register_refresh("schema-registry:list", load)));
    load();

    let ctx_cleanup = ctx.clone();
    on_cleanup(move || {
        if let Some(token) = refresh_token.get_value() {
            ctx_cleanup.unregister_refresh(&token);
        }
    });

    let rows = move || {
        let current = state.get();
        items.with(|all| visible_rows(all, &current))
    };
    let search = Signal::derive(move || state.with(|s| s.search.clone()));
    let on_search = Callback::new(move |value: String| state.update(|s| s.search = value));
    let toggle_sort = move |field: &'static str| state.update(|s| s.sort.toggle(field));

    let header = move |label: &'static str, field: &'static str| {
        view! {
            <TableHeaderCell>
                <span class="table__sortable-header" on:click=move |_| toggle_sort(field)>
                    {label}
                    <span class=move || state.with(|s| get_sort_class(s.sort.field.as_deref(), field))>
                        {move || state.with(|s| {
                            get_sort_indicator(s.sort.field.as_deref(), field, s.sort.ascending)
                        })}
                    </span>
                </span>
            </TableHeaderCell>
        }
    };

    view! {
        <PageFrame page_id="schema_registry--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <SearchInput value=search on_change=on_search placeholder="Search subjects..." />
                <span class="page__counter">
                    {move || format!("{} subjects", rows().len())}
                </span>
            </div>
            <div class="page__content">
                {move || {
                    if let Some(message) = error.get() {
                        view! {
                            <ErrorPanel message=message on_retry=Callback::new(move |_: ()| load()) />
                        }
                        .into_any()
                    } else if !state.with(|s| s.is_loaded) {
                        view! { <LoadingPlaceholder text="Loading subjects..." /> }.into_any()
                    } else {
                        view! {
                            <Table class="subject-list">
                                <TableHeader>
                                    <TableRow>
                                        {header("Subject", SORT_SUBJECT)}
                                        {header("Latest version", SORT_LATEST)}
                                        {header("Versions", SORT_VERSIONS)}
                                    </TableRow>
                                </TableHeader>
                                <TableBody>
                                    <For
                                        each=rows
                                        key=move |s: &SubjectSummary| {
                                            let filter = state.with_untracked(|st| st.search.clone());
                                            (s.name.clone(), s.latest_version, s.versions_count, filter)
                                        }
                                        children=move |subject| {
                                            let filter = state.with_untracked(|s| s.search.clone());
                                            let name_view = match subject.latest_version {
                                                Some(version) => view! {
                                                    <A href=schema_details_href(&subject.name, version)>
                                                        {highlight_matches(&subject.name, &filter)}
                                                    </A>
                                                }
                                                .into_any(),
                                                None => highlight_matches(&subject.name, &filter),
                                            };
                                            let latest = subject
                                                .latest_version
                                                .map(|v| v.to_string())
                                                .unwrap_or_else(|| "-".to_string());
                                            view! {
                                                <TableRow>
                                                    <TableCell>{name_view}</TableCell>
                                                    <TableCell>{latest}</TableCell>
                                                    <TableCell>{subject.versions_count}</TableCell>
                                                </TableRow>
                                            }
                                        }
                                    />
                                </TableBody>
                            </Table>
                        }
                        .into_any()
                    }
                }}
            </div>
        </PageFrame>
    }
}
