//! Application top bar: brand, breadcrumb trail, page title and the
//! global Refresh action of the current page.

use crate::layout::global_context::{use_global_context, APP_TITLE};
use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_global_context();

    let ctx_refresh = ctx.clone();
    let refresh = move |_| {
        if !ctx_refresh.trigger_refresh() {
            log::debug!("refresh requested but no page handler is installed");
        }
    };

    let breadcrumbs = ctx.breadcrumbs;
    let title = ctx.title;
    let refresh_available = ctx.refresh_available;

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("database")}
                <span class="top-header__title">{APP_TITLE}</span>
            </div>

            <nav class="top-header__breadcrumbs" aria-label="Breadcrumb">
                {move || {
                    let crumbs = breadcrumbs.get();
                    let last = crumbs.len().saturating_sub(1);
                    crumbs
                        .into_iter()
                        .enumerate()
                        .map(|(i, crumb)| {
                            view! {
                                <span class="top-header__crumb">
                                    <A href=crumb.href>{crumb.title}</A>
                                    {(i < last).then(|| view! {
                                        <span class="top-header__crumb-sep">{icon("chevron-right")}</span>
                                    })}
                                </span>
                            }
                        })
                        .collect_view()
                }}
            </nav>

            <h1 class="top-header__page-title">{move || title.get()}</h1>

            <div class="top-header__actions">
                <button
                    class="top-header__icon-btn"
                    on:click=refresh
                    disabled=move || !refresh_available.get()
                    title="Refresh"
                >
                    {icon("refresh")}
                </button>
            </div>
        </div>
    }
}
