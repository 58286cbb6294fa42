//! CLI response types returned as JSON by `baleen-admin` commands.
//!
//! These structs define the shape of JSON output for `baleen-admin vocabulary
//! list`, `baleen-admin vocabulary show`, and the `baleen-admin menu` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::menu::{ActiveMenu, MenuRow};
use crate::vocabulary::{VocabularyOverview, VocabularyRecord, WordRow};

/// Headline statistics of one topic.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct TopicSummary {
    pub topic: String,
    pub total_documents: u64,
    pub total_words: u64,
    pub total_unique_words: u64,
    pub words_per_document: f64,
}

impl TopicSummary {
    #[must_use]
    pub fn from_record(topic: &str, record: &VocabularyRecord) -> Self {
        Self {
            topic: topic.to_string(),
            total_documents: record.total_documents,
            total_words: record.total_words,
            total_unique_words: record.total_unique_words,
            words_per_document: record.words_per_document,
        }
    }
}

/// Response from `baleen-admin vocabulary list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VocabularyListResponse {
    pub overview: VocabularyOverview,
    pub topics: Vec<TopicSummary>,
}

/// Response from `baleen-admin vocabulary show`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct VocabularyShowResponse {
    pub statistics: TopicSummary,
    pub most_common_words: Vec<WordRow>,
    /// Number of distinct words the backend reported before the limit applied.
    pub total_listed: usize,
}

/// Response from `baleen-admin menu list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuListResponse {
    pub items: Vec<MenuRow>,
}

/// Response from `baleen-admin menu parents`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuParentsResponse {
    pub key: String,
    pub parents: Vec<String>,
}

/// Response from `baleen-admin menu resolve`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct MenuResolveResponse {
    pub path: String,
    pub active: ActiveMenu,
}
