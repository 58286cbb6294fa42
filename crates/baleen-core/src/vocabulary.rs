//! Vocabulary statistics as served by the Baleen backend.
//!
//! The client only transports and displays these numbers. Nothing here
//! recomputes or validates what the backend reports.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Vocabulary statistics keyed by topic (e.g. `english`, `french`).
pub type Vocabularies = BTreeMap<String, VocabularyRecord>;

/// Snapshot of the vocabulary of one corpus/topic.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyRecord {
    pub total_documents: u64,
    pub total_words: u64,
    pub total_unique_words: u64,
    pub words_per_document: f64,
    #[serde(default)]
    pub most_common_words: BTreeMap<String, WordStats>,
}

/// Per-word metadata attached to an entry of `most_common_words`.
///
/// `count` and `percentage` are the fields the admin tables show. Anything
/// else the backend sends is kept in `extra` untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordStats {
    #[serde(default)]
    pub count: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, serde_json::Value>,
}

/// One row of a most-common-words table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct WordRow {
    pub word: String,
    pub count: u64,
    pub percentage: Option<f64>,
}

impl VocabularyRecord {
    /// Most common words as table rows, highest count first.
    ///
    /// Ties are broken alphabetically so the order is stable across fetches.
    #[must_use]
    pub fn word_rows(&self) -> Vec<WordRow> {
        let mut rows: Vec<WordRow> = self
            .most_common_words
            .iter()
            .map(|(word, stats)| WordRow {
                word: word.clone(),
                count: stats.count,
                percentage: stats.percentage,
            })
            .collect();
        rows.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.word.cmp(&b.word)));
        rows
    }
}

/// Totals across every topic of a vocabulary collection.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct VocabularyOverview {
    pub topics: usize,
    pub total_documents: u64,
    pub total_words: u64,
    pub words_per_document: f64,
}

/// Sum the per-topic statistics into a dashboard overview.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn summarize(vocabularies: &Vocabularies) -> VocabularyOverview {
    let total_documents = vocabularies.values().map(|v| v.total_documents).sum::<u64>();
    let total_words = vocabularies.values().map(|v| v.total_words).sum::<u64>();
    let words_per_document = if total_documents == 0 {
        0.0
    } else {
        total_words as f64 / total_documents as f64
    };

    VocabularyOverview {
        topics: vocabularies.len(),
        total_documents,
        total_words,
        words_per_document,
    }
}
