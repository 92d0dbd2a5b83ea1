//! Constants describing the shallow source-header grammar.
//!
//! A scanned file is expected to look like:
//!
//! ```text
//! package com.example.demo;
//! import com.example.demo.util.Strings;
//! import java.util.List;
//!
//! public class Foo {
//! ```
//!
//! Only the first line (package) and the lines before the body marker
//! (imports) are ever inspected.

/// Source-file extension scanned when none is configured (without the dot)
pub const DEFAULT_SOURCE_EXTENSION: &str = "java";

/// Keyword opening the package declaration on the first line
pub const PACKAGE_KEYWORD: &str = "package ";

/// Keyword opening an import line
pub const IMPORT_KEYWORD: &str = "import ";

/// Terminator stripped from package and import statements
pub const STATEMENT_TERMINATOR: char = ';';

/// Substring marking the start of the type body; scanning stops here
pub const BODY_MARKER: &str = " class ";
