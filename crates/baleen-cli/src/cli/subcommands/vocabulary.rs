use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum VocabularyCommands {
    /// Per-topic statistics for every vocabulary
    List,
    /// One topic's statistics and its most common words
    Show {
        /// Topic name (e.g. english)
        topic: String,
        /// Number of most common words to list
        #[arg(long)]
        top: Option<u32>,
    },
}
