//! In-memory search index over a command catalog.
//!
//! This module builds a normalized, searchable projection of an ordered
//! command collection and answers substring queries against it. The index
//! is constructed once, after the catalog is loaded, and is read-only for
//! the rest of the session.
//!
//! Matching is a case-insensitive containment test against a precomputed
//! lowercase projection of each entry. There is no tokenization and no
//! relevance ranking; results come back in catalog order, truncated to the
//! caller-supplied limit.

use tracing::debug;

use crate::command::CommandEntry;

/// One searchable entry: a command record plus its lowercase projection.
///
/// The projection is a pure function of the record (name, description,
/// example, syntax, and tags joined by single spaces) and is never exposed
/// to callers.
#[derive(Debug, Clone, PartialEq, Eq)]
struct IndexEntry {
    record: CommandEntry,
    search_text: String,
}

impl IndexEntry {
    fn from_record(record: CommandEntry) -> Self {
        let search_text = format!(
            "{} {} {} {} {}",
            record.name,
            record.description,
            record.example,
            record.syntax,
            record.tags.join(" ")
        )
        .to_lowercase();
        Self {
            record,
            search_text,
        }
    }
}

/// A read-only search index over an ordered command collection.
///
/// Built once from the catalog's records; queries are answered by a linear
/// scan, preserving the original record order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchIndex {
    entries: Vec<IndexEntry>,
}

impl SearchIndex {
    /// Build an index from an ordered sequence of records.
    ///
    /// Produces one index entry per input record, preserving input order.
    /// An empty input yields an empty index.
    #[must_use]
    pub fn build(records: impl IntoIterator<Item = CommandEntry>) -> Self {
        let entries: Vec<IndexEntry> = records.into_iter().map(IndexEntry::from_record).collect();
        debug!("Built search index with {} entries", entries.len());
        Self { entries }
    }

    /// The number of indexed records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check whether the index is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Search the index for records whose searchable text contains `query`.
    ///
    /// The query is trimmed and lowercased before matching. A query that
    /// normalizes to the empty string means "no active query" and returns
    /// an empty result, not the whole catalog.
    ///
    /// Results are returned in index order and silently truncated to at
    /// most `limit` records.
    #[must_use]
    pub fn search(&self, query: &str, limit: usize) -> Vec<&CommandEntry> {
        let normalized = query.trim().to_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        let results: Vec<&CommandEntry> = self
            .entries
            .iter()
            .filter(|entry| entry.search_text.contains(&normalized))
            .map(|entry| &entry.record)
            .take(limit)
            .collect();

        debug!(
            "Query \"{}\" matched {} record(s) (limit {})",
            normalized,
            results.len(),
            limit
        );
        results
    }

    /// Look up the record with the given name.
    ///
    /// Returns `None` when no record carries that name; not-found is not an
    /// error at this layer.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&CommandEntry> {
        self.entries
            .iter()
            .map(|entry| &entry.record)
            .find(|record| record.name == name)
    }

    /// Iterate over the indexed records in index order.
    pub fn records(&self) -> impl Iterator<Item = &CommandEntry> {
        self.entries.iter().map(|entry| &entry.record)
    }
}
