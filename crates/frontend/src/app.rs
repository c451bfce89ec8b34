use crate::domain::schema_registry::store::SchemaDetailsStore;
use crate::layout::global_context::AppGlobalContext;
use crate::routes::routes::AppRoutes;
use leptos::prelude::*;
use thaw::ConfigProvider;

#[component]
pub fn App() -> impl IntoView {
    // Page chrome: title, breadcrumbs and the refresh slot
    provide_context(AppGlobalContext::new());

    // Schema details snapshot shared by all detail pages
    provide_context(SchemaDetailsStore::new());

    view! {
        <ConfigProvider>
            <AppRoutes />
        </ConfigProvider>
    }
}
