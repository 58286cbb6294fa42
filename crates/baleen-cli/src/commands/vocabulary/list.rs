use baleen_core::format::{decimal_format, number_format};
use baleen_core::responses::{TopicSummary, VocabularyListResponse};
use baleen_core::vocabulary::{Vocabularies, summarize};

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::{Table, output_with_tables};

pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let vocabularies = super::fetch_vocabularies(ctx).await?;
    let response = build_response(&vocabularies);
    output_with_tables(&response, flags.format, tables)
}

fn build_response(vocabularies: &Vocabularies) -> VocabularyListResponse {
    VocabularyListResponse {
        overview: summarize(vocabularies),
        topics: vocabularies
            .iter()
            .map(|(topic, record)| TopicSummary::from_record(topic, record))
            .collect(),
    }
}

fn tables(response: &VocabularyListResponse) -> Vec<Table> {
    let overview = &response.overview;
    let mut table = Table::new([
        "topic",
        "documents",
        "words",
        "unique words",
        "words/document",
    ])
    .with_title(match overview.topics {
        1 => String::from("1 topic"),
        n => format!("{n} topics"),
    });

    for topic in &response.topics {
        table.push_row([
            topic.topic.clone(),
            number_format(topic.total_documents),
            number_format(topic.total_words),
            number_format(topic.total_unique_words),
            decimal_format(topic.words_per_document),
        ]);
    }

    if !response.topics.is_empty() {
        table.push_row([
            String::from("(all)"),
            number_format(overview.total_documents),
            number_format(overview.total_words),
            String::from("-"),
            decimal_format(overview.words_per_document),
        ]);
    }

    vec![table]
}
