//! Command-line interface for commandbook.
//!
//! This module provides the CLI structure and command definitions for the
//! `cmdbook` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    ConfigCommand, CopyCommand, DifficultyArg, ExamplesCommand, InteractiveCommand, ListCommand,
    OutputFormat, SearchCommand, ShowCommand, StatsCommand,
};

/// cmdbook - A searchable handbook of command-line examples
///
/// Search a curated catalog of commands, inspect their syntax and examples,
/// and copy example invocations straight to the clipboard.
#[derive(Debug, Parser)]
#[command(name = "cmdbook")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Search the command catalog
    Search(SearchCommand),

    /// Show one command's full entry
    Show(ShowCommand),

    /// Copy a command's example invocation to the clipboard
    Copy(CopyCommand),

    /// List catalog entries, optionally filtered
    List(ListCommand),

    /// Browse curated example groups
    Examples(ExamplesCommand),

    /// Search interactively, one query per line from stdin
    Interactive(InteractiveCommand),

    /// Show catalog statistics
    Stats(StatsCommand),

    /// View or validate configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_verify() {
        // Verify the CLI structure is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_name() {
        let cli = Cli::command();
        assert_eq!(cli.get_name(), "cmdbook");
    }

    #[test]
    fn test_verbosity_quiet() {
        let cli = Cli::try_parse_from(["cmdbook", "-q", "stats"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Quiet);
    }

    #[test]
    fn test_verbosity_normal() {
        let cli = Cli::try_parse_from(["cmdbook", "stats"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Normal);
    }

    #[test]
    fn test_verbosity_verbose() {
        let cli = Cli::try_parse_from(["cmdbook", "-v", "stats"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Verbose);
    }

    #[test]
    fn test_verbosity_trace() {
        let cli = Cli::try_parse_from(["cmdbook", "-vv", "stats"]).unwrap();
        assert_eq!(cli.verbosity(), crate::logging::Verbosity::Trace);
    }

    #[test]
    fn test_parse_search() {
        let cli = Cli::try_parse_from(["cmdbook", "search", "disk usage"]).unwrap();
        match cli.command {
            Command::Search(cmd) => {
                assert_eq!(cmd.query, "disk usage");
                assert!(cmd.limit.is_none());
            }
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_search_with_limit() {
        let cli = Cli::try_parse_from(["cmdbook", "search", "disk", "--limit", "3"]).unwrap();
        match cli.command {
            Command::Search(cmd) => assert_eq!(cmd.limit, Some(3)),
            other => panic!("expected search command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["cmdbook", "show", "rsync"]).unwrap();
        assert!(matches!(cli.command, Command::Show(_)));
    }

    #[test]
    fn test_parse_copy() {
        let cli = Cli::try_parse_from(["cmdbook", "copy", "tar"]).unwrap();
        match cli.command {
            Command::Copy(cmd) => assert_eq!(cmd.name, "tar"),
            other => panic!("expected copy command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_list_with_filters() {
        let cli = Cli::try_parse_from([
            "cmdbook",
            "list",
            "--category",
            "networking",
            "--difficulty",
            "advanced",
        ])
        .unwrap();
        match cli.command {
            Command::List(cmd) => {
                assert_eq!(cmd.category.as_deref(), Some("networking"));
                assert_eq!(cmd.difficulty, Some(DifficultyArg::Advanced));
            }
            other => panic!("expected list command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_examples() {
        let cli = Cli::try_parse_from(["cmdbook", "examples", "--category", "backup"]).unwrap();
        assert!(matches!(cli.command, Command::Examples(_)));
    }

    #[test]
    fn test_parse_interactive() {
        let cli = Cli::try_parse_from(["cmdbook", "interactive", "-l", "3"]).unwrap();
        match cli.command {
            Command::Interactive(cmd) => assert_eq!(cmd.limit, Some(3)),
            other => panic!("expected interactive command, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_config_show() {
        let cli = Cli::try_parse_from(["cmdbook", "config", "show", "--json"]).unwrap();
        assert!(matches!(
            cli.command,
            Command::Config(ConfigCommand::Show { json: true })
        ));
    }

    #[test]
    fn test_parse_with_config_path() {
        let cli =
            Cli::try_parse_from(["cmdbook", "-c", "/custom/config.toml", "stats"]).unwrap();
        assert_eq!(cli.config, Some(PathBuf::from("/custom/config.toml")));
    }
}
