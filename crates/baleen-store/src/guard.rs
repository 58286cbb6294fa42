//! Dispatch guard for consumers that can go away before a fetch resolves.
//!
//! A consumer holds a [`MountGuard`] while it is showing store data and
//! unmounts it when it is dismissed. Dispatches made through a
//! [`SafeDispatcher`] after that are dropped. Requests already in flight are
//! not cancelled: they still resolve and publish to the store.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use baleen_api::VocabularySource;
use tokio::task::JoinHandle;

use crate::state::{FetchEvent, FetchStatus};
use crate::store::VocabularyStore;

/// Shared "is the consumer still there" flag.
#[derive(Debug, Clone)]
pub struct MountGuard {
    mounted: Arc<AtomicBool>,
}

impl Default for MountGuard {
    fn default() -> Self {
        Self::mounted()
    }
}

impl MountGuard {
    /// A guard in the mounted state.
    #[must_use]
    pub fn mounted() -> Self {
        Self {
            mounted: Arc::new(AtomicBool::new(true)),
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.load(Ordering::Acquire)
    }

    /// Mark the consumer as gone. Affects every clone of this guard.
    pub fn unmount(&self) {
        self.mounted.store(false, Ordering::Release);
    }
}

/// Store handle that only dispatches while its guard is mounted.
pub struct SafeDispatcher<S> {
    store: Arc<VocabularyStore<S>>,
    guard: MountGuard,
}

impl<S> Clone for SafeDispatcher<S> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
            guard: self.guard.clone(),
        }
    }
}

impl<S: VocabularySource + 'static> SafeDispatcher<S> {
    #[must_use]
    pub fn new(store: Arc<VocabularyStore<S>>, guard: MountGuard) -> Self {
        Self { store, guard }
    }

    #[must_use]
    pub const fn guard(&self) -> &MountGuard {
        &self.guard
    }

    /// Dispatch `event` if still mounted. Returns whether it was dispatched.
    pub fn dispatch(&self, event: FetchEvent) -> bool {
        if !self.guard.is_mounted() {
            tracing::debug!(event = event.kind(), "dropping dispatch after unmount");
            return false;
        }
        self.store.dispatch(event);
        true
    }

    /// Start a fetch if still mounted.
    ///
    /// Returns `None` without touching the store once unmounted.
    #[must_use = "the handle reports how the request resolved"]
    pub fn request_all(&self) -> Option<JoinHandle<FetchStatus>> {
        if !self.guard.is_mounted() {
            tracing::debug!("dropping request after unmount");
            return None;
        }
        Some(self.store.spawn_request_all())
    }
}
