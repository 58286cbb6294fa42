//! Vocabulary collection endpoint.

use std::future::Future;

use baleen_core::vocabulary::Vocabularies;

use crate::{ApiClient, error::ApiError};

/// Path of the vocabulary collection, relative to the API endpoint.
pub const VOCABULARIES_PATH: &str = "vocabularies";

/// Something that can produce the full vocabulary collection.
///
/// One call is one read: no parameters, no pagination, no retry.
pub trait VocabularySource: Send + Sync {
    fn fetch_vocabularies(&self) -> impl Future<Output = Result<Vocabularies, ApiError>> + Send;
}

impl ApiClient {
    /// Fetch vocabulary statistics for every topic.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails, the backend returns a
    /// non-success status, or the body is not a topic -> record map.
    pub async fn get_vocabularies(&self) -> Result<Vocabularies, ApiError> {
        let resp = self.get(VOCABULARIES_PATH, &[]).await?;
        let vocabularies: Vocabularies = resp.json().await?;
        tracing::debug!(topics = vocabularies.len(), "fetched vocabularies");
        Ok(vocabularies)
    }
}

impl VocabularySource for ApiClient {
    async fn fetch_vocabularies(&self) -> Result<Vocabularies, ApiError> {
        self.get_vocabularies().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXTURE: &str = r#"{
        "french": {
            "total_documents": 10,
            "total_words": 250,
            "total_unique_words": 90,
            "words_per_document": 25.0,
            "most_common_words": {
                "le": { "count": 30, "percentage": 12.0 }
            }
        }
    }"#;

    #[tokio::test]
    async fn decodes_collection_body() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .header("content-type", "application/json")
                .body(FIXTURE)
                .unwrap(),
        );
        let data: Vocabularies = resp.json().await.unwrap();
        assert_eq!(data["french"].total_documents, 10);
        assert_eq!(data["french"].most_common_words["le"].count, 30);
    }

    #[tokio::test]
    async fn malformed_body_is_a_transport_error() {
        let resp = reqwest::Response::from(
            ::http::Response::builder()
                .status(200)
                .body(r#"["not", "a", "map"]"#)
                .unwrap(),
        );
        let err: ApiError = resp.json::<Vocabularies>().await.unwrap_err().into();
        assert!(matches!(err, ApiError::Http(_)));
    }
}
