use clap::Subcommand;

#[derive(Clone, Debug, Subcommand)]
pub enum MenuCommands {
    /// Flattened menu tree
    List,
    /// Parent keys of a menu entry, nearest first
    Parents {
        /// Menu entry key (e.g. apps-vocab)
        key: String,
    },
    /// Active entry and expanded parents for a route
    Resolve {
        /// Route path (e.g. /vocabulary)
        path: String,
    },
}
