pub mod list;
pub mod show;

use anyhow::Context;
use baleen_core::vocabulary::Vocabularies;
use baleen_store::FetchStatus;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::VocabularyCommands;
use crate::context::AppContext;
use crate::progress::Progress;

/// Handle `baleen-admin vocabulary <action>`.
pub async fn handle(
    action: &VocabularyCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        VocabularyCommands::List => list::handle(ctx, flags).await,
        VocabularyCommands::Show { topic, top } => show::handle(topic, *top, ctx, flags).await,
    }
}

/// Run one request through the store and return the loaded collection.
///
/// The spinner follows the store's loading view rather than the task
/// handle, so it reflects what any other subscriber would see.
async fn fetch_vocabularies(ctx: &AppContext) -> anyhow::Result<Vocabularies> {
    let spinner = Progress::spinner("Fetching vocabularies");
    let mut loading = ctx.store.loading_view();
    let request = ctx.store.spawn_request_all();

    while let Some(&is_loading) = loading.changed().await {
        if !is_loading {
            break;
        }
        spinner.set_message(&format!(
            "Fetching vocabularies from {}",
            ctx.config.api.endpoint
        ));
    }

    let status = request.await.context("vocabulary request task failed")?;
    let state = ctx.store.snapshot();

    match status {
        FetchStatus::Loaded => {
            spinner.finish_clear();
            state
                .data
                .context("vocabulary request succeeded without a payload")
        }
        _ => {
            let message = state
                .error
                .unwrap_or_else(|| format!("vocabulary request ended in state {status:?}"));
            spinner.finish_err(&message);
            Err(anyhow::anyhow!(message).context("failed to fetch vocabularies"))
        }
    }
}
