//! The vocabulary store: single owner of the [`FetchState`].

use std::sync::Arc;

use baleen_api::VocabularySource;
use baleen_core::vocabulary::Vocabularies;
use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::selectors::{self, DerivedView};
use crate::state::{FetchEvent, FetchState, FetchStatus};

/// Buffered events per subscriber before slow receivers start lagging.
const DEFAULT_EVENT_CAPACITY: usize = 64;

/// Holds the fetch state for one vocabulary source and publishes every
/// transition.
pub struct VocabularyStore<S> {
    source: S,
    state: watch::Sender<FetchState>,
    events: broadcast::Sender<FetchEvent>,
}

impl<S: VocabularySource> VocabularyStore<S> {
    #[must_use]
    pub fn new(source: S) -> Self {
        Self::with_event_capacity(source, DEFAULT_EVENT_CAPACITY)
    }

    /// # Panics
    ///
    /// Panics if `capacity` is zero.
    #[must_use]
    pub fn with_event_capacity(source: S, capacity: usize) -> Self {
        let (state, _) = watch::channel(FetchState::default());
        let (events, _) = broadcast::channel(capacity);
        Self {
            source,
            state,
            events,
        }
    }

    /// The source requests are sent to.
    #[must_use]
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// Copy of the current state.
    #[must_use]
    pub fn snapshot(&self) -> FetchState {
        self.state.borrow().clone()
    }

    /// Receiver of every published state.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<FetchState> {
        self.state.subscribe()
    }

    /// Receiver of every event applied from now on.
    #[must_use]
    pub fn events(&self) -> broadcast::Receiver<FetchEvent> {
        self.events.subscribe()
    }

    /// Memoized view over an arbitrary projection of the state.
    #[must_use]
    pub fn view<T>(&self, projection: fn(&FetchState) -> T) -> DerivedView<T> {
        DerivedView::new(self.subscribe(), projection)
    }

    /// View of the last fetched collection.
    #[must_use]
    pub fn data_view(&self) -> DerivedView<Option<Vocabularies>> {
        self.view(|state| selectors::current_data(state).cloned())
    }

    /// View of the loading flag.
    #[must_use]
    pub fn loading_view(&self) -> DerivedView<bool> {
        self.view(selectors::is_currently_loading)
    }

    /// View of the last failure message.
    #[must_use]
    pub fn error_view(&self) -> DerivedView<Option<String>> {
        self.view(|state| selectors::current_error(state).map(str::to_string))
    }

    /// Apply `event` to the state and publish both.
    pub fn dispatch(&self, event: FetchEvent) {
        tracing::trace!(event = event.kind(), "dispatch");
        self.state.send_modify(|state| state.apply(&event));
        // No subscribers is not an error.
        let _ = self.events.send(event);
    }

    /// Fetch the whole collection once.
    ///
    /// Publishes `RequestStarted`, then exactly one of `RequestSucceeded` or
    /// `RequestFailed`. Overlapping calls are neither merged nor ordered:
    /// each publishes its own resolution.
    pub async fn request_all(&self) -> FetchStatus {
        self.dispatch(FetchEvent::RequestStarted);
        tracing::debug!("requesting vocabularies");

        match self.source.fetch_vocabularies().await {
            Ok(payload) => {
                tracing::debug!(topics = payload.len(), "vocabularies loaded");
                self.dispatch(FetchEvent::RequestSucceeded { payload });
                FetchStatus::Loaded
            }
            Err(error) => {
                tracing::warn!(%error, "failed to fetch vocabularies");
                self.dispatch(FetchEvent::RequestFailed {
                    error: error.to_string(),
                });
                FetchStatus::Failed
            }
        }
    }
}

impl<S: VocabularySource + 'static> VocabularyStore<S> {
    /// Run [`Self::request_all`] as a detached task.
    ///
    /// The request runs to completion and publishes its result even if the
    /// handle is dropped.
    pub fn spawn_request_all(self: &Arc<Self>) -> JoinHandle<FetchStatus> {
        let store = Arc::clone(self);
        tokio::spawn(async move { store.request_all().await })
    }
}

impl<S> std::fmt::Debug for VocabularyStore<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("VocabularyStore")
            .field("state", &*self.state.borrow())
            .finish_non_exhaustive()
    }
}
