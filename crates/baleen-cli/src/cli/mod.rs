use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{ColorMode, GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `baleen-admin` binary.
#[derive(Debug, Parser)]
#[command(
    name = "baleen-admin",
    version,
    about = "Baleen admin - vocabulary statistics and dashboard menu"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: json, table, raw
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Max rows to return
    #[arg(short, long, global = true)]
    pub limit: Option<u32>,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Baleen backend base URL (overrides api.endpoint)
    #[arg(short, long, global = true)]
    pub endpoint: Option<String>,

    /// Table color: auto, always, never
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorMode,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            limit: self.limit,
            quiet: self.quiet,
            verbose: self.verbose,
            endpoint: self.endpoint.clone(),
            color: self.color,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, ColorMode, Commands, GlobalFlags, OutputFormat};
    use crate::cli::subcommands::{MenuCommands, VocabularyCommands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from([
            "baleen-admin",
            "--format",
            "table",
            "--limit",
            "10",
            "--verbose",
            "vocabulary",
            "list",
        ])
        .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Table);
        assert_eq!(cli.limit, Some(10));
        assert!(cli.verbose);
        assert!(matches!(
            cli.command,
            Commands::Vocabulary {
                action: VocabularyCommands::List
            }
        ));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["baleen-admin", "menu", "list", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(
            cli.command,
            Commands::Menu {
                action: MenuCommands::List
            }
        ));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["baleen-admin", "--format", "xml", "menu", "list"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn color_defaults_to_auto() {
        let cli = Cli::try_parse_from(["baleen-admin", "menu", "list"]).expect("cli should parse");
        assert_eq!(cli.color, ColorMode::Auto);

        let cli = Cli::try_parse_from(["baleen-admin", "--color", "never", "menu", "list"])
            .expect("cli should parse");
        assert_eq!(cli.color, ColorMode::Never);
    }

    #[test]
    fn show_takes_topic_and_local_limit() {
        let cli = Cli::try_parse_from(["baleen-admin", "vocabulary", "show", "english", "--top", "5"])
            .expect("cli should parse");

        match cli.command {
            Commands::Vocabulary {
                action: VocabularyCommands::Show { topic, top },
            } => {
                assert_eq!(topic, "english");
                assert_eq!(top, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn menu_subcommands_take_positional_arguments() {
        let cli = Cli::try_parse_from(["baleen-admin", "menu", "parents", "apps-vocab"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Menu { action: MenuCommands::Parents { ref key } } if key == "apps-vocab"
        ));

        let cli = Cli::try_parse_from(["baleen-admin", "menu", "resolve", "/topics/"])
            .expect("cli should parse");
        assert!(matches!(
            cli.command,
            Commands::Menu { action: MenuCommands::Resolve { ref path } } if path == "/topics/"
        ));
    }

    #[test]
    fn global_flags_extraction_copies_values() {
        let cli = Cli::try_parse_from([
            "baleen-admin",
            "--endpoint",
            "https://baleen.example.com",
            "menu",
            "list",
        ])
        .expect("cli should parse");
        let flags: GlobalFlags = cli.global_flags();
        assert_eq!(flags.endpoint.as_deref(), Some("https://baleen.example.com"));
        assert_eq!(flags.format, OutputFormat::Json);
    }
}
