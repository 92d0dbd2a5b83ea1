//! Core utilities for classprune tools.
//!
//! This crate provides the scanning primitives shared by the checks:
//! - Listing source files under a project root
//! - Reading the package declaration and import lines of a source header
//! - Building the fully-qualified class name -> file index
//! - Locating the project root (git root discovery, path normalization)

mod collector;
mod config;
mod constants;
mod error;
mod header;
mod index;
mod types;

// Re-export public API
pub use collector::{CollectorConfig, collect_source_files};
pub use config::{find_git_root, find_git_root_from, normalize_root};
pub use constants::{
    BODY_MARKER, DEFAULT_SOURCE_EXTENSION, IMPORT_KEYWORD, PACKAGE_KEYWORD, STATEMENT_TERMINATOR,
};
pub use error::ScanError;
pub use header::{HeaderLine, classify_line, parse_package_line, read_package, scan_imports};
pub use index::{build_class_index, class_name_for};
pub use types::{ClassIndex, UsedSet};
