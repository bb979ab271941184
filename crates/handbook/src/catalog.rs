//! Command catalog loading and validation.
//!
//! The catalog is the ordered, immutable collection of command entries the
//! rest of the application works from. It is loaded exactly once at startup,
//! either from the data set embedded in the binary or from a user-supplied
//! JSON file, and validated before any index is built over it.
//!
//! Well-formedness is owned here: the search layer never validates records.

use std::path::Path;

use tracing::{debug, info};

use crate::command::CommandEntry;
use crate::error::{Error, Result};

/// The built-in command data set, embedded at compile time.
const BUILTIN_COMMANDS: &str = include_str!("../data/commands.json");

/// An ordered, immutable collection of command entries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    entries: Vec<CommandEntry>,
}

impl Catalog {
    /// Load the built-in command data set.
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded data fails to parse or validate;
    /// either indicates a packaging defect.
    pub fn builtin() -> Result<Self> {
        let catalog = Self::from_json(BUILTIN_COMMANDS)?;
        info!("Loaded built-in catalog with {} entries", catalog.len());
        Ok(catalog)
    }

    /// Parse a catalog from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed or the collection fails
    /// validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<CommandEntry> =
            serde_json::from_str(json).map_err(Error::catalog_parse)?;
        let catalog = Self { entries };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load a catalog from a JSON file on disk.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed, or validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading catalog from {}", path.display());
        let json = std::fs::read_to_string(path).map_err(|source| Error::DataFileRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Validate the collection.
    ///
    /// Entry names must be non-empty and unique within the catalog.
    fn validate(&self) -> Result<()> {
        let mut seen = std::collections::HashSet::new();
        for entry in &self.entries {
            if entry.name.trim().is_empty() {
                return Err(Error::catalog_validation("entry with empty name"));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(Error::catalog_validation(format!(
                    "duplicate name: {}",
                    entry.name
                )));
            }
        }
        Ok(())
    }

    /// The number of entries in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The entries in load order.
    #[must_use]
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Consume the catalog, yielding its entries in load order.
    #[must_use]
    pub fn into_entries(self) -> Vec<CommandEntry> {
        self.entries
    }

    /// Count entries per category, in first-appearance order.
    #[must_use]
    pub fn category_counts(&self) -> Vec<(String, usize)> {
        let mut counts: Vec<(String, usize)> = Vec::new();
        for entry in &self.entries {
            match counts.iter_mut().find(|(name, _)| *name == entry.category) {
                Some((_, count)) => *count += 1,
                None => counts.push((entry.category.clone(), 1)),
            }
        }
        counts
    }
}
