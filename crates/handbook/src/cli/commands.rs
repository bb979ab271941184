//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands.

use std::path::PathBuf;

use clap::{Args, Subcommand, ValueEnum};

/// Search command arguments.
#[derive(Debug, Args)]
pub struct SearchCommand {
    /// The search query (matched against name, description, example, syntax, and tags)
    pub query: String,

    /// Maximum number of results (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// The command name to display
    pub name: String,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Copy command arguments.
#[derive(Debug, Args)]
pub struct CopyCommand {
    /// The command whose example invocation to copy
    pub name: String,
}

/// List command arguments.
#[derive(Debug, Args)]
pub struct ListCommand {
    /// Only list commands in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only list commands at this difficulty
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Examples command arguments.
#[derive(Debug, Args)]
pub struct ExamplesCommand {
    /// Only show example groups in this category
    #[arg(long)]
    pub category: Option<String>,

    /// Only show example groups at this difficulty
    #[arg(short, long, value_enum)]
    pub difficulty: Option<DifficultyArg>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "plain")]
    pub format: OutputFormat,
}

/// Interactive command arguments.
#[derive(Debug, Args)]
pub struct InteractiveCommand {
    /// Maximum suggestions per query (defaults to the configured limit)
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Stats command arguments.
#[derive(Debug, Args)]
pub struct StatsCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,

    /// Validate configuration
    Validate {
        /// Path to configuration file to validate
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

/// Difficulty argument for filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum DifficultyArg {
    /// Beginner-friendly commands
    Beginner,
    /// Commands for regular shell users
    Intermediate,
    /// Commands that reward a careful read
    Advanced,
}

impl From<DifficultyArg> for crate::command::Difficulty {
    fn from(arg: DifficultyArg) -> Self {
        match arg {
            DifficultyArg::Beginner => Self::Beginner,
            DifficultyArg::Intermediate => Self::Intermediate,
            DifficultyArg::Advanced => Self::Advanced,
        }
    }
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Plain,
    /// Formatted table
    Table,
    /// JSON output
    Json,
}
