//! Fetch lifecycle state and the events that drive it.

use baleen_core::vocabulary::Vocabularies;
use serde::Serialize;

/// Where the most recent fetch stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Snapshot of the vocabulary collection retrieval.
///
/// `data` only ever holds a successful payload. A failure is recorded in
/// `error` and leaves the previous `data` in place.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FetchState {
    pub data: Option<Vocabularies>,
    pub error: Option<String>,
    pub is_loading: bool,
    pub status: FetchStatus,
}

/// Events published by the store, one per transition.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchEvent {
    RequestStarted,
    RequestSucceeded { payload: Vocabularies },
    RequestFailed { error: String },
}

impl FetchEvent {
    /// Short name used in logs.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::RequestStarted => "request-start",
            Self::RequestSucceeded { .. } => "request-success",
            Self::RequestFailed { .. } => "request-error",
        }
    }
}

impl FetchState {
    /// Apply one event.
    ///
    /// Resolutions are applied whatever the current status is, so with
    /// overlapping requests the last one to complete wins.
    pub fn apply(&mut self, event: &FetchEvent) {
        match event {
            FetchEvent::RequestStarted => {
                self.is_loading = true;
                self.status = FetchStatus::Loading;
            }
            FetchEvent::RequestSucceeded { payload } => {
                self.data = Some(payload.clone());
                self.error = None;
                self.is_loading = false;
                self.status = FetchStatus::Loaded;
            }
            FetchEvent::RequestFailed { error } => {
                self.error = Some(error.clone());
                self.is_loading = false;
                self.status = FetchStatus::Failed;
            }
        }
    }

    /// Pure form of [`Self::apply`].
    #[must_use]
    pub fn reduce(&self, event: &FetchEvent) -> Self {
        let mut next = self.clone();
        next.apply(event);
        next
    }
}

#[cfg(test)]
mod tests {
    use baleen_core::vocabulary::VocabularyRecord;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn payload(topic: &str, documents: u64) -> Vocabularies {
        let mut vocabularies = Vocabularies::new();
        vocabularies.insert(
            topic.to_string(),
            VocabularyRecord {
                total_documents: documents,
                ..VocabularyRecord::default()
            },
        );
        vocabularies
    }

    #[test]
    fn initial_state_is_idle_and_empty() {
        let state = FetchState::default();
        assert_eq!(state.status, FetchStatus::Idle);
        assert!(state.data.is_none());
        assert!(state.error.is_none());
        assert!(!state.is_loading);
    }

    #[rstest]
    #[case(FetchStatus::Idle)]
    #[case(FetchStatus::Loaded)]
    #[case(FetchStatus::Failed)]
    fn request_start_enters_loading_and_keeps_data(#[case] status: FetchStatus) {
        let before = FetchState {
            data: Some(payload("french", 1)),
            error: Some("old".into()),
            is_loading: false,
            status,
        };
        let after = before.reduce(&FetchEvent::RequestStarted);
        assert_eq!(after.status, FetchStatus::Loading);
        assert!(after.is_loading);
        assert_eq!(after.data, before.data);
        assert_eq!(after.error, before.error);
    }

    #[test]
    fn success_replaces_data_wholesale() {
        let loading = FetchState {
            data: Some(payload("english", 5)),
            error: Some("previous failure".into()),
            is_loading: true,
            status: FetchStatus::Loading,
        };
        let after = loading.reduce(&FetchEvent::RequestSucceeded {
            payload: payload("french", 10),
        });

        assert_eq!(after.status, FetchStatus::Loaded);
        assert!(!after.is_loading);
        assert!(after.error.is_none());
        let data = after.data.unwrap();
        assert_eq!(data.len(), 1);
        assert_eq!(data["french"].total_documents, 10);
    }

    #[test]
    fn failure_keeps_stale_data() {
        let loading = FetchState {
            data: Some(payload("french", 10)),
            error: None,
            is_loading: true,
            status: FetchStatus::Loading,
        };
        let after = loading.reduce(&FetchEvent::RequestFailed {
            error: "Access Forbidden".into(),
        });

        assert_eq!(after.status, FetchStatus::Failed);
        assert!(!after.is_loading);
        assert_eq!(after.error.as_deref(), Some("Access Forbidden"));
        assert_eq!(after.data, loading.data);
    }

    #[test]
    fn late_resolution_still_applies() {
        let loaded = FetchState::default()
            .reduce(&FetchEvent::RequestStarted)
            .reduce(&FetchEvent::RequestStarted)
            .reduce(&FetchEvent::RequestSucceeded {
                payload: payload("french", 1),
            })
            .reduce(&FetchEvent::RequestFailed {
                error: "Invalid credentials".into(),
            });

        assert_eq!(loaded.status, FetchStatus::Failed);
        assert_eq!(loaded.error.as_deref(), Some("Invalid credentials"));
        assert_eq!(loaded.data.unwrap()["french"].total_documents, 1);
    }

    #[test]
    fn reduce_does_not_touch_input() {
        let state = FetchState::default();
        let _ = state.reduce(&FetchEvent::RequestStarted);
        assert_eq!(state, FetchState::default());
    }

    #[test]
    fn event_kinds() {
        assert_eq!(FetchEvent::RequestStarted.kind(), "request-start");
        assert_eq!(
            FetchEvent::RequestSucceeded {
                payload: Vocabularies::new()
            }
            .kind(),
            "request-success"
        );
        assert_eq!(
            FetchEvent::RequestFailed {
                error: String::new()
            }
            .kind(),
            "request-error"
        );
    }
}
