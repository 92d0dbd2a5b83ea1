//! Unused class detection for projects of package-declared source files.
//!
//! Every source file under the project root is indexed by its fully-qualified
//! class name (`package` line + file name). Starting from one or more root
//! classes, the import lines of each file are followed, restricted to names
//! carrying the project's package prefix. Indexed classes never reached are
//! reported as unused and can optionally be deleted.
//!
//! Only declared imports are followed: same-package references, inline
//! fully-qualified names and reflection are invisible to the walk.
//!
//! # Examples
//!
//! ```no_run
//! use classprune_unused::{Config, OutputFormat, run_unused_class_check};
//! use std::io::{BufWriter, Write};
//!
//! # fn main() -> anyhow::Result<()> {
//! let cfg = Config {
//!     root: Some(std::path::PathBuf::from("/path/to/project")),
//!     package_prefix: "com.example.demo".to_string(),
//!     root_classes: vec!["com.example.demo.Application".to_string()],
//!     delete: false,
//!     print_detail: true,
//!     format: OutputFormat::Text,
//!     extension: "java".to_string(),
//!     respect_ignore: false,
//! };
//!
//! let result = run_unused_class_check(cfg.clone())?;
//!
//! let mut stdout = BufWriter::new(std::io::stdout());
//! classprune_unused::print_report(&mut stdout, &result, &cfg)?;
//! stdout.flush()?;
//! # Ok(())
//! # }
//! ```

mod checker;
mod config;
mod pruner;
mod report;
mod types;
mod walker;

// Re-export public API
pub use checker::run_unused_class_check;
pub use config::{Config, OutputFormat};
pub use pruner::delete_unused;
pub use report::{
    compute_unused, print_deletions, print_detail, print_json, print_report, print_summary,
};
pub use types::{CheckResult, DeletedClass, DeletionSummary, FailedDeletion, UnusedReport};
pub use walker::{find_used_classes, visit};
