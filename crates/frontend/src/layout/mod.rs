pub mod global_context;
pub mod refresh;
pub mod top_header;

use leptos::prelude::*;
use top_header::TopHeader;

/// Application shell: top bar over the routed page.
///
/// ```text
/// +------------------------------------------+
/// |  TopHeader (brand, breadcrumbs, refresh) |
/// +------------------------------------------+
/// |                 content                  |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />
            <div class="app-body">
                <main class="app-main">{children()}</main>
            </div>
        </div>
    }
}
