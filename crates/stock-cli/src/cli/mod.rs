use clap::Parser;

pub mod global;
pub mod root_commands;
pub mod subcommands;

pub use global::{GlobalFlags, OutputFormat};
pub use root_commands::Commands;

/// Top-level CLI parser for the `stk` binary.
#[derive(Debug, Parser)]
#[command(name = "stk", version, about = "Stockpile - inventory management console")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format: table, json, raw
    #[arg(short, long, global = true, default_value = "table")]
    pub format: OutputFormat,

    /// Quiet mode (suppress non-essential output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Assume "yes" for confirmation prompts (deletes, imports)
    #[arg(short, long, global = true)]
    pub yes: bool,
}

impl Cli {
    /// Extract ergonomic global flags struct for command handlers.
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            format: self.format,
            quiet: self.quiet,
            verbose: self.verbose,
            yes: self.yes,
        }
    }
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};

    use super::{Cli, Commands, OutputFormat};
    use crate::cli::subcommands::ItemCommands;

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn global_flags_parse_before_subcommand() {
        let cli = Cli::try_parse_from(["stk", "--format", "json", "--verbose", "dashboard"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["stk", "dashboard", "--format", "raw", "--quiet"])
            .expect("cli should parse");

        assert_eq!(cli.format, OutputFormat::Raw);
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Dashboard));
    }

    #[test]
    fn output_format_rejects_invalid_value() {
        let parsed = Cli::try_parse_from(["stk", "--format", "xml", "dashboard"]);
        assert!(parsed.is_err());
    }

    #[test]
    fn item_list_accepts_page_and_search() {
        let cli = Cli::try_parse_from(["stk", "item", "list", "--page", "3", "--search", "bolt"])
            .expect("cli should parse");

        let Commands::Item { action } = cli.command else {
            panic!("expected item command");
        };
        let ItemCommands::List { page, search } = action else {
            panic!("expected list action");
        };
        assert_eq!(page, Some(3));
        assert_eq!(search.as_deref(), Some("bolt"));
    }

    #[test]
    fn delete_commands_accept_yes_flag() {
        let cli =
            Cli::try_parse_from(["stk", "item", "delete", "7", "--yes"]).expect("cli should parse");
        assert!(cli.global_flags().yes);
    }
}
