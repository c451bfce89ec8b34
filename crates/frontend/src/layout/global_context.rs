use super::refresh::{RefreshRegistry, RefreshToken};
use leptos::prelude::*;

pub const APP_TITLE: &str = "Schema Registry Console";

/// Page-level chrome shared by every route: title, breadcrumb trail and
/// the global Refresh action.
#[derive(Clone)]
pub struct AppGlobalContext {
    pub title: RwSignal<String>,
    pub breadcrumbs: RwSignal<Vec<Breadcrumb>>,
    /// True while a page has a refresh handler installed
    pub refresh_available: RwSignal<bool>,
    refresh: RefreshRegistry,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breadcrumb {
    pub title: String,
    pub href: String,
}

impl Breadcrumb {
    pub fn new(title: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            href: href.into(),
        }
    }
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            title: RwSignal::new(String::new()),
            breadcrumbs: RwSignal::new(Vec::new()),
            refresh_available: RwSignal::new(false),
            refresh: RefreshRegistry::new(),
        }
    }

    /// Set the page title and replace the breadcrumb trail
    pub fn init_page(&self, title: &str, breadcrumbs: Vec<Breadcrumb>) {
        leptos::logging::log!("init_page: '{}' ({} breadcrumbs)", title, breadcrumbs.len());
        self.title.set(title.to_string());
        self.breadcrumbs.set(breadcrumbs);

        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
            document.set_title(&document_title(title));
        }
    }

    pub fn set_breadcrumbs(&self, breadcrumbs: Vec<Breadcrumb>) {
        self.breadcrumbs.set(breadcrumbs);
    }

    pub fn register_refresh(
        &self,
        owner: &str,
        handler: impl Fn() + Send + Sync + 'static,
    ) -> RefreshToken {
        let token = self.refresh.register(owner, handler);
        self.refresh_available.set(true);
        token
    }

    pub fn unregister_refresh(&self, token: &RefreshToken) {
        if self.refresh.unregister(token) {
            self.refresh_available.set(false);
        }
    }

    pub fn trigger_refresh(&self) -> bool {
        self.refresh.trigger()
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_global_context() -> AppGlobalContext {
    use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}

fn document_title(page_title: &str) -> String {
    if page_title.is_empty() {
        APP_TITLE.to_string()
    } else {
        format!("{} · {}", page_title, APP_TITLE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_title() {
        assert_eq!(document_title(""), "Schema Registry Console");
        assert_eq!(document_title("user-events"), "user-events · Schema Registry Console");
    }
}
