//! # baleen-store
//!
//! Vocabulary fetch state machine and publish/subscribe store.
//!
//! [`VocabularyStore`] owns one [`FetchState`] and changes it only through
//! [`FetchEvent`]s:
//!
//! ```text
//! Idle | Loaded | Failed --RequestStarted--> Loading
//! Loading --RequestSucceeded--> Loaded
//! Loading --RequestFailed--> Failed
//! ```
//!
//! Every applied event is broadcast to [`VocabularyStore::events`] receivers
//! and the resulting snapshot is published on a `watch` channel, from which
//! [`DerivedView`]s project memoized read views. Stores are plain values:
//! construct one per application (or per test) and drop it to tear it down.

pub mod guard;
pub mod selectors;
pub mod state;
pub mod store;

pub use guard::{MountGuard, SafeDispatcher};
pub use selectors::DerivedView;
pub use state::{FetchEvent, FetchState, FetchStatus};
pub use store::VocabularyStore;
