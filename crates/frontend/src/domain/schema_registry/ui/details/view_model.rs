//! ViewModel for the schema details page

use super::model::{details_breadcrumbs, lifecycle_step, LifecycleStep};
use crate::domain::schema_registry::store::{DetailsState, SchemaDetailsStore, SchemaKey};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::refresh::RefreshToken;
use leptos::logging::log;
use leptos::prelude::*;

#[derive(Clone)]
pub struct SchemaDetailsVm {
    /// Subject from the route path
    pub subject: Signal<String>,
    /// Version from the `version` query parameter
    pub version: Signal<i32>,
    store: SchemaDetailsStore,
    ctx: AppGlobalContext,
    refresh_token: StoredValue<Option<RefreshToken>>,
}

impl SchemaDetailsVm {
    pub fn new(
        subject: Signal<String>,
        version: Signal<i32>,
        store: SchemaDetailsStore,
        ctx: AppGlobalContext,
    ) -> Self {
        Self {
            subject,
            version,
            store,
            ctx,
            refresh_token: StoredValue::new(None),
        }
    }

    fn key_untracked(&self) -> SchemaKey {
        SchemaKey::new(self.subject.get_untracked(), self.version.get_untracked())
    }

    /// React to new route parameters. Returns the key they were handled for.
    pub fn on_route_change(&self, previous: Option<SchemaKey>) -> SchemaKey {
        let key = SchemaKey::new(self.subject.get(), self.version.get());
        let prev = previous.as_ref().map(|p| (p.subject.as_str(), p.version));

        match lifecycle_step(prev, (key.subject.as_str(), key.version)) {
            LifecycleStep::Activate => self.activate(),
            LifecycleStep::VersionChanged => self.on_version_change(),
            LifecycleStep::Unchanged => {}
        }
        key
    }

    /// Page entry: breadcrumbs, title, cached fetch and refresh handler
    pub fn activate(&self) {
        let key = self.key_untracked();
        log!("schema details: activate {} v{}", key.subject, key.version);

        self.ctx
            .init_page(&key.subject, details_breadcrumbs(&key.subject, key.version));
        self.refresh_data(false);
        self.install_refresh_handler(&key.subject);
    }

    /// Same subject, another version: always fetch fresh data
    pub fn on_version_change(&self) {
        let key = self.key_untracked();
        log!("schema details: version changed to {}", key.version);

        self.ctx
            .set_breadcrumbs(details_breadcrumbs(&key.subject, key.version));
        self.refresh_data(true);
    }

    pub fn refresh_data(&self, force: bool) {
        let key = self.key_untracked();
        self.store
            .refresh_schema_details(&key.subject, key.version, force);
    }

    fn install_refresh_handler(&self, subject: &str) {
        self.release();

        let subject_signal = self.subject;
        let version_signal = self.version;
        let store = self.store;
        let token = self.ctx.register_refresh(
            &format!("schema-details:{}", subject),
            move || {
                store.refresh_schema_details(
                    &subject_signal.get_untracked(),
                    version_signal.get_untracked(),
                    true,
                );
            },
        );
        self.refresh_token.set_value(Some(token));
    }

    /// Drop this page's refresh handler, if it is still the registered one
    pub fn release(&self) {
        if let Some(token) = self.refresh_token.get_value() {
            self.ctx.unregister_refresh(&token);
            self.refresh_token.set_value(None);
        }
    }

    /// True while a fetch started by the store is pending (reactive)
    pub fn is_refreshing(&self) -> bool {
        self.store.loading.get()
    }

    /// Current render state (reactive)
    pub fn state(&self) -> DetailsState {
        let key = SchemaKey::new(self.subject.get(), self.version.get());
        self.store.state_for(&key)
    }
}
