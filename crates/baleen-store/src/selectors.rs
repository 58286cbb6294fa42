//! Read views over [`FetchState`].
//!
//! The free functions are plain projections. [`DerivedView`] keeps the result
//! of one projection and recomputes it only after the store publishes a new
//! state.

use baleen_core::vocabulary::Vocabularies;
use tokio::sync::watch;

use crate::state::{FetchState, FetchStatus};

/// Last successfully fetched collection, if any.
#[must_use]
pub fn current_data(state: &FetchState) -> Option<&Vocabularies> {
    state.data.as_ref()
}

/// Whether a request is pending.
#[must_use]
pub const fn is_currently_loading(state: &FetchState) -> bool {
    state.is_loading
}

/// Message of the last failed request, cleared by the next success.
#[must_use]
pub fn current_error(state: &FetchState) -> Option<&str> {
    state.error.as_deref()
}

#[must_use]
pub const fn current_status(state: &FetchState) -> FetchStatus {
    state.status
}

/// Memoized projection of the store state.
pub struct DerivedView<T> {
    receiver: watch::Receiver<FetchState>,
    projection: fn(&FetchState) -> T,
    cached: T,
    evaluations: usize,
}

impl<T> DerivedView<T> {
    #[must_use]
    pub fn new(mut receiver: watch::Receiver<FetchState>, projection: fn(&FetchState) -> T) -> Self {
        let cached = projection(&receiver.borrow_and_update());
        Self {
            receiver,
            projection,
            cached,
            evaluations: 1,
        }
    }

    /// Current value, recomputed only if the store published since the last
    /// read.
    ///
    /// A value published right before the store was dropped is still picked
    /// up.
    pub fn get(&mut self) -> &T {
        if self.receiver.borrow().has_changed() {
            self.refresh();
        }
        &self.cached
    }

    /// Wait for the next publish and return the recomputed value.
    ///
    /// Returns `None` once the store has been dropped.
    pub async fn changed(&mut self) -> Option<&T> {
        self.receiver.changed().await.ok()?;
        self.refresh();
        Some(&self.cached)
    }

    /// How many times the projection has run.
    #[must_use]
    pub const fn evaluations(&self) -> usize {
        self.evaluations
    }

    fn refresh(&mut self) {
        self.cached = (self.projection)(&self.receiver.borrow_and_update());
        self.evaluations += 1;
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for DerivedView<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DerivedView")
            .field("cached", &self.cached)
            .field("evaluations", &self.evaluations)
            .finish_non_exhaustive()
    }
}
