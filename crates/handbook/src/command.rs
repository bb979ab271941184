//! Core record types for commandbook.
//!
//! This module defines the fundamental data structures for representing
//! command reference entries in the handbook.

use serde::{Deserialize, Serialize};

/// The difficulty rating of a command entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    /// Safe for newcomers.
    Beginner,
    /// Assumes day-to-day shell familiarity.
    Intermediate,
    /// Requires careful reading before running.
    Advanced,
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Beginner => write!(f, "beginner"),
            Self::Intermediate => write!(f, "intermediate"),
            Self::Advanced => write!(f, "advanced"),
        }
    }
}

/// A single command reference entry.
///
/// Entries are loaded once at startup and never mutated; the `name` field
/// is the unique identifier within a catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandEntry {
    /// The command name (unique within the catalog).
    pub name: String,

    /// Category tag, e.g. "networking" or "filesystem".
    pub category: String,

    /// Difficulty rating.
    pub difficulty: Difficulty,

    /// Human-readable description of what the command does.
    pub description: String,

    /// A representative example invocation.
    pub example: String,

    /// Usage syntax pattern.
    pub syntax: String,

    /// Free-form tags for search.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl CommandEntry {
    /// Create a new entry with no tags.
    ///
    /// Mostly useful in tests; real entries come from the catalog loader.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        category: impl Into<String>,
        difficulty: Difficulty,
        description: impl Into<String>,
        example: impl Into<String>,
        syntax: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category: category.into(),
            difficulty,
            description: description.into(),
            example: example.into(),
            syntax: syntax.into(),
            tags: Vec::new(),
        }
    }

    /// Attach tags to the entry, replacing any existing ones.
    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_difficulty_display() {
        assert_eq!(Difficulty::Beginner.to_string(), "beginner");
        assert_eq!(Difficulty::Intermediate.to_string(), "intermediate");
        assert_eq!(Difficulty::Advanced.to_string(), "advanced");
    }

    #[test]
    fn test_difficulty_serde_lowercase() {
        let json = serde_json::to_string(&Difficulty::Advanced).unwrap();
        assert_eq!(json, "\"advanced\"");

        let parsed: Difficulty = serde_json::from_str("\"beginner\"").unwrap();
        assert_eq!(parsed, Difficulty::Beginner);
    }

    #[test]
    fn test_command_entry_new() {
        let entry = CommandEntry::new(
            "ls",
            "basic",
            Difficulty::Beginner,
            "List directory contents",
            "ls -lah /var/log",
            "ls [OPTIONS] [DIRECTORY]",
        );

        assert_eq!(entry.name, "ls");
        assert_eq!(entry.category, "basic");
        assert_eq!(entry.difficulty, Difficulty::Beginner);
        assert!(entry.tags.is_empty());
    }

    #[test]
    fn test_command_entry_with_tags() {
        let entry = CommandEntry::new(
            "ssh",
            "networking",
            Difficulty::Intermediate,
            "Secure shell login",
            "ssh user@server",
            "ssh [OPTIONS] [USER@]HOST",
        )
        .with_tags(["network", "remote", "security"]);

        assert_eq!(entry.tags, vec!["network", "remote", "security"]);
    }

    #[test]
    fn test_command_entry_serialization() {
        let entry = CommandEntry::new(
            "df",
            "filesystem",
            Difficulty::Beginner,
            "Disk space usage",
            "df -h",
            "df [OPTIONS] [FILESYSTEM...]",
        )
        .with_tags(["disk", "storage"]);

        let json = serde_json::to_string(&entry).unwrap();
        let deserialized: CommandEntry = serde_json::from_str(&json).unwrap();

        assert_eq!(entry, deserialized);
    }

    #[test]
    fn test_command_entry_deserialize_missing_tags() {
        let json = r#"{
            "name": "pwd",
            "category": "basic",
            "difficulty": "beginner",
            "description": "Print working directory",
            "example": "pwd",
            "syntax": "pwd"
        }"#;

        let entry: CommandEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.name, "pwd");
        assert!(entry.tags.is_empty());
    }
}
