//! Curated example groups.
//!
//! Alongside the flat command catalog, the handbook ships themed groups of
//! worked examples (monitoring, backup, deployment, automation). Each group
//! carries a use-case narrative and an ordered list of example commands with
//! explanations. Loaded once at startup, immutable thereafter, same loader
//! idiom as the command catalog.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::command::Difficulty;
use crate::error::{Error, Result};

/// The built-in example data set, embedded at compile time.
const BUILTIN_EXAMPLES: &str = include_str!("../data/examples.json");

/// One worked example command inside a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleCommand {
    /// Short name of the example.
    pub name: String,
    /// What the example accomplishes.
    pub description: String,
    /// The command text itself.
    pub command: String,
    /// One-line explanation of how it works.
    pub explanation: String,
}

/// A themed group of worked examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExampleGroup {
    /// Group title, e.g. "Log Monitoring & Analysis".
    pub title: String,
    /// Category tag shared with the command catalog vocabulary.
    pub category: String,
    /// Difficulty rating of the group as a whole.
    pub difficulty: Difficulty,
    /// What the group covers.
    pub description: String,
    /// When you would reach for these commands.
    pub use_case: String,
    /// The examples, in presentation order.
    pub commands: Vec<ExampleCommand>,
}

/// The ordered collection of example groups.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExampleLibrary {
    groups: Vec<ExampleGroup>,
}

impl ExampleLibrary {
    /// Load the built-in example data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails to parse; that indicates
    /// a packaging defect.
    pub fn builtin() -> Result<Self> {
        let library = Self::from_json(BUILTIN_EXAMPLES)?;
        info!("Loaded built-in example library with {} groups", library.len());
        Ok(library)
    }

    /// Parse a library from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let groups: Vec<ExampleGroup> =
            serde_json::from_str(json).map_err(Error::catalog_parse)?;
        Ok(Self { groups })
    }

    /// Load a library from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading example library from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| Error::DataFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// The number of groups in the library.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Check whether the library is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// The groups in load order.
    #[must_use]
    pub fn groups(&self) -> &[ExampleGroup] {
        &self.groups
    }

    /// Groups matching the given filters, in load order.
    ///
    /// `None` for a filter means "don't filter on that field". Category
    /// matching is exact and case-sensitive, mirroring the catalog's
    /// category vocabulary.
    #[must_use]
    pub fn filter(
        &self,
        category: Option<&str>,
        difficulty: Option<Difficulty>,
    ) -> Vec<&ExampleGroup> {
        self.groups
            .iter()
            .filter(|group| category.map_or(true, |c| group.category == c))
            .filter(|group| difficulty.map_or(true, |d| group.difficulty == d))
            .collect()
    }

    /// Distinct categories, in first-appearance order.
    #[must_use]
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for group in &self.groups {
            if !seen.contains(&group.category.as_str()) {
                seen.push(group.category.as_str());
            }
        }
        seen
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_library_loads() {
        let library = ExampleLibrary::builtin().expect("built-in data must parse");
        assert!(!library.is_empty());

        let titles: Vec<&str> = library.groups().iter().map(|g| g.title.as_str()).collect();
        assert!(titles.contains(&"System Resource Monitoring"));
        assert!(titles.contains(&"File & Directory Backup"));
    }

    #[test]
    fn test_builtin_groups_have_commands() {
        let library = ExampleLibrary::builtin().unwrap();
        for group in library.groups() {
            assert!(
                !group.commands.is_empty(),
                "group '{}' has no commands",
                group.title
            );
        }
    }

    #[test]
    fn test_filter_by_category() {
        let library = ExampleLibrary::builtin().unwrap();
        let monitoring = library.filter(Some("monitoring"), None);

        assert!(!monitoring.is_empty());
        assert!(monitoring.iter().all(|g| g.category == "monitoring"));
    }

    #[test]
    fn test_filter_by_difficulty() {
        let library = ExampleLibrary::builtin().unwrap();
        let beginner = library.filter(None, Some(Difficulty::Beginner));

        assert!(!beginner.is_empty());
        assert!(beginner.iter().all(|g| g.difficulty == Difficulty::Beginner));
    }

    #[test]
    fn test_filter_combined() {
        let library = ExampleLibrary::builtin().unwrap();
        let filtered = library.filter(Some("monitoring"), Some(Difficulty::Intermediate));

        assert!(filtered
            .iter()
            .all(|g| g.category == "monitoring" && g.difficulty == Difficulty::Intermediate));
    }

    #[test]
    fn test_filter_no_filters_returns_all() {
        let library = ExampleLibrary::builtin().unwrap();
        assert_eq!(library.filter(None, None).len(), library.len());
    }

    #[test]
    fn test_filter_unknown_category_is_empty() {
        let library = ExampleLibrary::builtin().unwrap();
        assert!(library.filter(Some("quantum"), None).is_empty());
    }

    #[test]
    fn test_categories_first_appearance_order() {
        let json = r#"[
            { "title": "A", "category": "monitoring", "difficulty": "beginner",
              "description": "d", "use_case": "u", "commands": [] },
            { "title": "B", "category": "backup", "difficulty": "beginner",
              "description": "d", "use_case": "u", "commands": [] },
            { "title": "C", "category": "monitoring", "difficulty": "advanced",
              "description": "d", "use_case": "u", "commands": [] }
        ]"#;

        let library = ExampleLibrary::from_json(json).unwrap();
        assert_eq!(library.categories(), vec!["monitoring", "backup"]);
    }

    #[test]
    fn test_from_json_malformed() {
        let result = ExampleLibrary::from_json("{ broken");
        assert!(matches!(result, Err(Error::CatalogParse { .. })));
    }

    #[test]
    fn test_from_file_missing() {
        let result = ExampleLibrary::from_file("/nonexistent/examples.json");
        assert!(matches!(result, Err(Error::DataFileRead { .. })));
    }

    #[test]
    fn test_example_group_serialization() {
        let library = ExampleLibrary::builtin().unwrap();
        let group = &library.groups()[0];

        let json = serde_json::to_string(group).unwrap();
        let deserialized: ExampleGroup = serde_json::from_str(&json).unwrap();
        assert_eq!(*group, deserialized);
    }
}
