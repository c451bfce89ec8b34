//! Global refresh slot.
//!
//! Holds at most one handler for the header's Refresh action. Registering
//! replaces the previous handler; unregistering only clears the slot if it
//! still holds the caller's handler, so a page that unmounts after its
//! successor mounted cannot remove the successor's handler.

use std::sync::{Arc, Mutex, MutexGuard};

type Handler = Arc<dyn Fn() + Send + Sync>;

struct Entry {
    id: u64,
    owner: String,
    handler: Handler,
}

#[derive(Default)]
struct Slot {
    next_id: u64,
    entry: Option<Entry>,
}

/// Proof of a registration, needed to unregister it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshToken {
    id: u64,
}

#[derive(Clone, Default)]
pub struct RefreshRegistry {
    slot: Arc<Mutex<Slot>>,
}

impl RefreshRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // a panicking handler never runs under the lock, poison is harmless
        self.slot.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Install `handler`, replacing whatever was registered before
    pub fn register(&self, owner: &str, handler: impl Fn() + Send + Sync + 'static) -> RefreshToken {
        let mut slot = self.lock();
        slot.next_id += 1;
        let id = slot.next_id;
        if let Some(previous) = slot.entry.take() {
            log::debug!("refresh handler '{}' replaced by '{}'", previous.owner, owner);
        }
        slot.entry = Some(Entry {
            id,
            owner: owner.to_string(),
            handler: Arc::new(handler),
        });
        RefreshToken { id }
    }

    /// Remove the registration of `token`. Returns false if it was already replaced.
    pub fn unregister(&self, token: &RefreshToken) -> bool {
        let mut slot = self.lock();
        match &slot.entry {
            Some(entry) if entry.id == token.id => {
                log::debug!("refresh handler '{}' unregistered", entry.owner);
                slot.entry = None;
                true
            }
            _ => false,
        }
    }

    /// Run the current handler. Returns false if none is registered.
    pub fn trigger(&self) -> bool {
        // clone out so the handler may re-register without deadlocking
        let current = self
            .lock()
            .entry
            .as_ref()
            .map(|e| (e.owner.clone(), e.handler.clone()));
        match current {
            Some((owner, handler)) => {
                log::debug!("refresh handler '{}' triggered", owner);
                handler();
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counter() -> (Arc<AtomicUsize>, impl Fn() + Send + Sync + 'static) {
        let count = Arc::new(AtomicUsize::new(0));
        let c = count.clone();
        (count, move || {
            c.fetch_add(1, Ordering::SeqCst);
        })
    }

    #[test]
    fn test_trigger_without_handler() {
        let registry = RefreshRegistry::new();
        assert!(!registry.trigger());
    }

    #[test]
    fn test_last_registration_wins() {
        let registry = RefreshRegistry::new();
        let (first, first_handler) = counter();
        let (second, second_handler) = counter();

        registry.register("list", first_handler);
        registry.register("details", second_handler);

        assert!(registry.trigger());
        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_stale_token_does_not_unregister_successor() {
        let registry = RefreshRegistry::new();
        let (_, old_handler) = counter();
        let (current, new_handler) = counter();

        let old = registry.register("details:v1", old_handler);
        let new = registry.register("details:v2", new_handler);

        assert!(!registry.unregister(&old));
        assert!(registry.trigger());
        assert_eq!(current.load(Ordering::SeqCst), 1);

        assert!(registry.unregister(&new));
        assert!(!registry.trigger());
    }

    #[test]
    fn test_handler_may_reregister() {
        let registry = RefreshRegistry::new();
        let inner = registry.clone();
        let (count, inner_handler) = counter();
        let inner_handler = Arc::new(inner_handler);
        registry.register("outer", move || {
            let handler = inner_handler.clone();
            inner.register("inner", move || (*handler)());
        });

        assert!(registry.trigger());
        assert_eq!(count.load(Ordering::SeqCst), 0);
        assert!(registry.trigger());
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }
}
