use clap::Subcommand;

use crate::cli::subcommands::{MenuCommands, VocabularyCommands};

/// Top-level commands.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Vocabulary statistics fetched from the Baleen backend
    Vocabulary {
        #[command(subcommand)]
        action: VocabularyCommands,
    },
    /// Dashboard navigation menu
    Menu {
        #[command(subcommand)]
        action: MenuCommands,
    },
}
