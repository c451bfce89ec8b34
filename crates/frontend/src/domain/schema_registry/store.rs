//! Process-wide holder of the schema details snapshot.
//!
//! Pages ask for a `(subject, version)` via `refresh_schema_details` and
//! render whatever the store holds for that key; fetching happens in the
//! background and updates the signals when done.

use super::api;
use contracts::domain::schema_registry::SchemaDetails;
use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SchemaKey {
    pub subject: String,
    pub version: i32,
}

impl SchemaKey {
    pub fn new(subject: impl Into<String>, version: i32) -> Self {
        Self {
            subject: subject.into(),
            version,
        }
    }
}

/// Details fetched for a key
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaSnapshot {
    pub key: SchemaKey,
    pub details: SchemaDetails,
}

/// Last failed fetch
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchError {
    pub key: SchemaKey,
    pub message: String,
}

/// What a page should show for its key
#[derive(Debug, Clone, PartialEq)]
pub enum DetailsState {
    Loading,
    Failed(String),
    Ready(SchemaDetails),
}

/// Numbers fetches so only the latest response is applied
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestTracker {
    latest: u64,
}

impl RequestTracker {
    pub fn begin(&mut self) -> u64 {
        self.latest += 1;
        self.latest
    }

    pub fn is_current(&self, request: u64) -> bool {
        request == self.latest
    }
}

#[derive(Clone, Copy)]
pub struct SchemaDetailsStore {
    pub snapshot: RwSignal<Option<SchemaSnapshot>>,
    pub error: RwSignal<Option<FetchError>>,
    pub loading: RwSignal<bool>,
    requests: StoredValue<RequestTracker>,
}

impl SchemaDetailsStore {
    pub fn new() -> Self {
        Self {
            snapshot: RwSignal::new(None),
            error: RwSignal::new(None),
            loading: RwSignal::new(false),
            requests: StoredValue::new(RequestTracker::default()),
        }
    }

    /// Make the store hold details for `(subject, version)`.
    ///
    /// With `force == false` a snapshot already held for the key is reused.
    pub fn refresh_schema_details(&self, subject: &str, version: i32, force: bool) {
        let key = SchemaKey::new(subject, version);
        let held = self
            .snapshot
            .with_untracked(|s| s.as_ref().map(|s| s.key.clone()));

        if !needs_fetch(held.as_ref(), &key, force) {
            log::debug!("schema details for {} v{} served from store", key.subject, key.version);
            // responses still in flight belong to keys the page has left
            self.requests.update_value(|r| {
                r.begin();
            });
            self.loading.set(false);
            self.error.set(None);
            return;
        }

        let mut request = 0;
        self.requests.update_value(|r| request = r.begin());
        log::debug!(
            "fetching schema details for {} v{} (request {}, force={})",
            key.subject,
            key.version,
            request,
            force
        );

        self.loading.set(true);
        self.error.set(None);

        let store = *self;
        spawn_local(async move {
            let result = api::fetch_schema_details(&key.subject, key.version).await;
            store.apply(request, key, result);
        });
    }

    fn apply(&self, request: u64, key: SchemaKey, result: Result<SchemaDetails, String>) {
        if !self.requests.with_value(|r| r.is_current(request)) {
            log::debug!(
                "dropping superseded response for {} v{} (request {})",
                key.subject,
                key.version,
                request
            );
            return;
        }

        self.loading.set(false);
        match result {
            Ok(details) => {
                self.error.set(None);
                self.snapshot.set(Some(SchemaSnapshot { key, details }));
            }
            Err(message) => {
                log::error!(
                    "failed to load schema details for {} v{}: {}",
                    key.subject,
                    key.version,
                    message
                );
                self.error.set(Some(FetchError { key, message }));
            }
        }
    }

    /// Reactive view of the store for `key`
    pub fn state_for(&self, key: &SchemaKey) -> DetailsState {
        self.snapshot.with(|snapshot| {
            self.error
                .with(|error| details_state(snapshot.as_ref(), error.as_ref(), key))
        })
    }
}

impl Default for SchemaDetailsStore {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_schema_store() -> SchemaDetailsStore {
    use_context::<SchemaDetailsStore>().expect("SchemaDetailsStore not found")
}

pub fn needs_fetch(held: Option<&SchemaKey>, key: &SchemaKey, force: bool) -> bool {
    force || held != Some(key)
}

pub fn details_state(
    snapshot: Option<&SchemaSnapshot>,
    error: Option<&FetchError>,
    key: &SchemaKey,
) -> DetailsState {
    if let Some(snapshot) = snapshot.filter(|s| &s.key == key) {
        return DetailsState::Ready(snapshot.details.clone());
    }
    match error.filter(|e| &e.key == key) {
        Some(error) => DetailsState::Failed(error.message.clone()),
        None => DetailsState::Loading,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::schema_registry::SchemaDefinition;

    fn details(version: i32) -> SchemaDetails {
        SchemaDetails {
            subject: "user-events".to_string(),
            version,
            schema_id: 42,
            registered_versions: vec![1, 2, 3],
            schema: SchemaDefinition {
                schema_type: "record".to_string(),
                name: "UserEvent".to_string(),
                namespace: None,
                doc: None,
                fields: Vec::new(),
            },
        }
    }

    #[test]
    fn test_needs_fetch() {
        let held = SchemaKey::new("user-events", 2);
        assert!(!needs_fetch(Some(&held), &SchemaKey::new("user-events", 2), false));
        assert!(needs_fetch(Some(&held), &SchemaKey::new("user-events", 2), true));
        assert!(needs_fetch(Some(&held), &SchemaKey::new("user-events", 3), false));
        assert!(needs_fetch(Some(&held), &SchemaKey::new("orders", 2), false));
        assert!(needs_fetch(None, &held, false));
    }

    #[test]
    fn test_request_tracker_only_latest_is_current() {
        let mut tracker = RequestTracker::default();
        let first = tracker.begin();
        let second = tracker.begin();
        assert!(!tracker.is_current(first));
        assert!(tracker.is_current(second));
    }

    #[test]
    fn test_state_without_snapshot_is_loading() {
        let key = SchemaKey::new("user-events", 2);
        assert_eq!(details_state(None, None, &key), DetailsState::Loading);
    }

    #[test]
    fn test_snapshot_for_other_key_is_loading() {
        let snapshot = SchemaSnapshot {
            key: SchemaKey::new("user-events", 1),
            details: details(1),
        };
        let key = SchemaKey::new("user-events", 2);
        assert_eq!(details_state(Some(&snapshot), None, &key), DetailsState::Loading);
    }

    #[test]
    fn test_snapshot_for_key_is_ready() {
        let key = SchemaKey::new("user-events", 2);
        let snapshot = SchemaSnapshot {
            key: key.clone(),
            details: details(2),
        };
        assert_eq!(
            details_state(Some(&snapshot), None, &key),
            DetailsState::Ready(details(2))
        );
    }

    #[test]
    fn test_error_only_applies_to_its_key() {
        let key = SchemaKey::new("user-events", 2);
        let error = FetchError {
            key: key.clone(),
            message: "Not found".to_string(),
        };
        assert_eq!(
            details_state(None, Some(&error), &key),
            DetailsState::Failed("Not found".to_string())
        );
        assert_eq!(
            details_state(None, Some(&error), &SchemaKey::new("user-events", 3)),
            DetailsState::Loading
        );
    }

    #[test]
    fn test_cache_hit_supersedes_pending_fetch() {
        let store = SchemaDetailsStore::new();
        let held = SchemaKey::new("user-events", 2);
        store.snapshot.set(Some(SchemaSnapshot {
            key: held.clone(),
            details: details(2),
        }));

        // a fetch for another subject is started, then the page returns to the held key
        let mut pending = 0;
        store.requests.update_value(|r| pending = r.begin());
        store.loading.set(true);
        store.refresh_schema_details("user-events", 2, false);

        let mut orders = details(1);
        orders.subject = "orders".to_string();
        store.apply(pending, SchemaKey::new("orders", 1), Ok(orders));

        assert_eq!(store.state_for(&held), DetailsState::Ready(details(2)));
        assert!(!store.loading.get_untracked());
    }

    #[test]
    fn test_latest_response_is_applied() {
        let store = SchemaDetailsStore::new();
        let key = SchemaKey::new("user-events", 3);
        let mut request = 0;
        store.requests.update_value(|r| request = r.begin());

        store.apply(request, key.clone(), Err("Subject not found".to_string()));

        assert_eq!(
            store.state_for(&key),
            DetailsState::Failed("Subject not found".to_string())
        );
    }

    #[test]
    fn test_held_snapshot_wins_over_error() {
        let key = SchemaKey::new("user-events", 2);
        let snapshot = SchemaSnapshot {
            key: key.clone(),
            details: details(2),
        };
        let error = FetchError {
            key: key.clone(),
            message: "timeout".to_string(),
        };
        assert!(matches!(
            details_state(Some(&snapshot), Some(&error), &key),
            DetailsState::Ready(_)
        ));
    }
}
