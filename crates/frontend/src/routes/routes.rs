use super::paths::{parse_version_param, SCHEMA_REGISTRY_PATH};
use crate::domain::schema_registry::ui::details::SchemaDetailsPage;
use crate::domain::schema_registry::ui::list::SubjectList;
use crate::layout::global_context::{use_global_context, Breadcrumb};
use crate::layout::Shell;
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_SYSTEM;
use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes, A};
use leptos_router::hooks::{use_params_map, use_query_map};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path=SCHEMA_REGISTRY_PATH /> } />
                    <Route path=path!("/schema-registry") view=SubjectList />
                    <Route path=path!("/schema-registry/:subject") view=SchemaDetailsRoute />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Reads `:subject` and `?version=` and mounts the details page
#[component]
fn SchemaDetailsRoute() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();

    // path params arrive already percent-decoded
    let subject = Memo::new(move |_| params.with(|p| p.get("subject").unwrap_or_default()));
    let parsed_version = Memo::new(move |_| query.with(|q| parse_version_param(q.get("version").as_deref())));
    let is_valid = Memo::new(move |_| parsed_version.get().is_some());
    // keeps the last valid version while the page unmounts
    let version = Memo::new(move |prev: Option<&i32>| {
        parsed_version.get().or(prev.copied()).unwrap_or(1)
    });

    move || {
        if is_valid.get() {
            view! { <SchemaDetailsPage subject=subject version=version /> }.into_any()
        } else {
            view! { <InvalidVersion subject=subject.get_untracked() /> }.into_any()
        }
    }
}

#[component]
fn InvalidVersion(subject: String) -> impl IntoView {
    let ctx = use_global_context();
    ctx.init_page(
        &subject,
        vec![Breadcrumb::new("Schema Registry", SCHEMA_REGISTRY_PATH)],
    );
    log::warn!("schema details for '{}' requested without a valid version", subject);

    view! {
        <PageFrame page_id="schema_registry--invalid_version" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <div class="warning-box warning-box--warning">
                    <span class="warning-box__icon">{icon("alert")}</span>
                    <span class="warning-box__text">
                        {format!("No valid version was given for subject '{}'.", subject)}
                    </span>
                </div>
                <A href=SCHEMA_REGISTRY_PATH>"Back to the subject list"</A>
            </div>
        </PageFrame>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    use_global_context().init_page("Page not found", Vec::new());

    view! {
        <PageFrame page_id="app--not_found" category=PAGE_CAT_SYSTEM>
            <div class="page__content">
                <h2>"Page not found"</h2>
                <A href=SCHEMA_REGISTRY_PATH>"Go to Schema Registry"</A>
            </div>
        </PageFrame>
    }
}
