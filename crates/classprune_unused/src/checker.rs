use anyhow::{Context, Result};
use log::{debug, info, warn};

use classprune_core::{CollectorConfig, build_class_index, collect_source_files};

use crate::{
    config::Config, pruner::delete_unused, report::compute_unused, types::CheckResult,
    walker::find_used_classes,
};

/// Lists, indexes, walks, and optionally deletes.
///
/// A malformed import aborts before any report is produced or any file is
/// deleted; the underlying `ScanError` stays reachable through `downcast_ref`.
pub fn run_unused_class_check(mut cfg: Config) -> Result<CheckResult> {
    info!("Starting unused class check");

    cfg.initialize()?;
    let root = cfg.root()?.clone();

    let collector_cfg = CollectorConfig {
        root: root.clone(),
        extension: cfg.extension.clone(),
        respect_ignore: cfg.respect_ignore,
    };
    let files = collect_source_files(&collector_cfg)?;
    if files.is_empty() {
        warn!("No .{} files found under {}", cfg.extension, root.display());
    }
    info!("Found {} source files", files.len());

    let index = build_class_index(&files);

    debug!(
        "Walking from {} root classes with prefix '{}'",
        cfg.root_classes.len(),
        cfg.package_prefix
    );
    let used = find_used_classes(&cfg.root_classes, &index, &cfg.package_prefix)
        .context("Aborting: source header violates the expected format")?;

    let report = compute_unused(&index, &used);
    info!(
        "Unused class check complete: {} used, {} total, {} unused",
        report.used.len(),
        report.all.len(),
        report.unused.len()
    );

    let deletion = if cfg.delete { Some(delete_unused(&report.unused)) } else { None };

    Ok(CheckResult { root, report, deletion, files_scanned: files.len() })
}
