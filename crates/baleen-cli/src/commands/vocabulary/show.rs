use baleen_core::errors::CoreError;
use baleen_core::format::{decimal_format, number_format};
use baleen_core::responses::{TopicSummary, VocabularyShowResponse};
use baleen_core::vocabulary::{Vocabularies, VocabularyRecord};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{apply_limit, effective_limit};
use crate::context::AppContext;
use crate::output::{Table, output_with_tables};

pub async fn handle(
    topic: &str,
    top: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let vocabularies = super::fetch_vocabularies(ctx).await?;
    let limit = effective_limit(top, flags.limit, ctx.config.general.default_limit);
    let response = build_response(&vocabularies, topic, limit)?;
    output_with_tables(&response, flags.format, tables)
}

/// Exact topic match first, then a case-insensitive one.
fn find_topic<'a>(
    vocabularies: &'a Vocabularies,
    topic: &str,
) -> Option<(&'a String, &'a VocabularyRecord)> {
    vocabularies.get_key_value(topic).or_else(|| {
        vocabularies
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(topic))
    })
}

fn build_response(
    vocabularies: &Vocabularies,
    topic: &str,
    limit: u32,
) -> Result<VocabularyShowResponse, CoreError> {
    let (name, record) = find_topic(vocabularies, topic).ok_or_else(|| CoreError::NotFound {
        kind: "topic".to_string(),
        key: topic.to_string(),
    })?;

    let mut most_common_words = record.word_rows();
    let total_listed = most_common_words.len();
    apply_limit(&mut most_common_words, limit);

    Ok(VocabularyShowResponse {
        statistics: TopicSummary::from_record(name, record),
        most_common_words,
        total_listed,
    })
}

fn tables(response: &VocabularyShowResponse) -> Vec<Table> {
    let stats = &response.statistics;
    let mut statistics = Table::new(["statistic", "value"]).with_title(stats.topic.clone());
    statistics.push_row(["documents".to_string(), number_format(stats.total_documents)]);
    statistics.push_row(["words".to_string(), number_format(stats.total_words)]);
    statistics.push_row(["unique words".to_string(), number_format(stats.total_unique_words)]);
    statistics.push_row([
        "words/document".to_string(),
        decimal_format(stats.words_per_document),
    ]);

    let mut words = Table::new(["word", "count", "percentage"]).with_title(format!(
        "most common words ({} of {})",
        response.most_common_words.len(),
        response.total_listed
    ));
    for row in &response.most_common_words {
        words.push_row([
            row.word.clone(),
            number_format(row.count),
            row.percentage
                .map_or_else(|| String::from("-"), |p| format!("{}%", decimal_format(p))),
        ]);
    }

    vec![statistics, words]
}
