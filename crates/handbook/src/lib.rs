//! `commandbook` - A searchable handbook of command-line examples
//!
//! This library provides the core functionality for loading a curated command
//! catalog, building an in-memory search index over it, and answering
//! substring queries and name lookups against that index.

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]
#![deny(unsafe_code)]

pub mod catalog;
pub mod cli;
pub mod command;
pub mod config;
pub mod debounce;
pub mod error;
pub mod examples;
pub mod index;
pub mod logging;

pub use catalog::Catalog;
pub use command::{CommandEntry, Difficulty};
pub use config::Config;
pub use debounce::Debouncer;
pub use error::{Error, Result};
pub use examples::{ExampleCommand, ExampleGroup, ExampleLibrary};
pub use index::SearchIndex;
pub use logging::init_logging;
