use std::{
    io::{self, Write},
    path::Path,
};

use colored::Colorize;
use log::{debug, trace};
use serde::Serialize;

use classprune_core::{ClassIndex, UsedSet};

use crate::{
    config::{Config, OutputFormat},
    types::{CheckResult, DeletionSummary, UnusedReport},
};

/// Copies the index and drops every used class from the copy.
pub fn compute_unused(index: &ClassIndex, used: &UsedSet) -> UnusedReport {
    let mut unused = index.clone();
    for class in used {
        unused.remove(class);
    }
    debug!("{} of {} classes are unused", unused.len(), index.len());
    UnusedReport { used: used.clone(), all: index.clone(), unused }
}

fn display_path(root: Option<&Path>, path: &Path) -> String {
    root.and_then(|r| path.strip_prefix(r).ok()).unwrap_or(path).to_string_lossy().to_string()
}

pub fn print_summary<W: Write>(writer: &mut W, report: &UnusedReport) -> io::Result<()> {
    writeln!(writer, "{}", "Class usage".bold())?;
    writeln!(writer, "  used classes:   {}", report.used.len().to_string().green().bold())?;
    writeln!(writer, "  all classes:    {}", report.all.len().to_string().cyan().bold())?;
    writeln!(writer, "  unused classes: {}", report.unused.len().to_string().yellow().bold())?;
    Ok(())
}

fn print_index<W: Write>(
    writer: &mut W,
    title: &str,
    index: &ClassIndex,
    root: Option<&Path>,
) -> io::Result<()> {
    writeln!(writer, "\n{} ({})", title.bold(), index.len())?;
    for (class, path) in index {
        writeln!(writer, "  {} {} {}", class, "→".dimmed(), display_path(root, path).blue())?;
    }
    Ok(())
}

/// Lists used names, then all and unused classes with their files.
pub fn print_detail<W: Write>(
    writer: &mut W,
    report: &UnusedReport,
    root: Option<&Path>,
) -> io::Result<()> {
    trace!("Printing detail for {} classes", report.all.len());
    writeln!(writer, "\n{} ({})", "Used classes".bold(), report.used.len())?;
    for class in &report.used {
        writeln!(writer, "  {}", class.green())?;
    }
    print_index(writer, "All classes", &report.all, root)?;
    print_index(writer, "Unused classes", &report.unused, root)?;
    Ok(())
}

pub fn print_deletions<W: Write>(
    writer: &mut W,
    summary: &DeletionSummary,
    root: Option<&Path>,
) -> io::Result<()> {
    writeln!(writer)?;
    for deleted in &summary.deleted {
        writeln!(
            writer,
            "{} Deleted {} ({})",
            "✓".green(),
            deleted.class,
            display_path(root, &deleted.path).blue()
        )?;
    }
    for failed in &summary.failed {
        writeln!(
            writer,
            "{} Failed to delete {} ({}): {}",
            "✗".red(),
            failed.class,
            display_path(root, &failed.path).blue(),
            failed.reason
        )?;
    }
    writeln!(
        writer,
        "{} {} deleted, {} failed",
        "●".bright_blue(),
        summary.deleted.len().to_string().cyan(),
        summary.failed.len().to_string().cyan()
    )?;
    Ok(())
}

#[derive(Serialize)]
struct JsonReport<'a> {
    used_count: usize,
    all_count: usize,
    unused_count: usize,
    #[serde(flatten)]
    report: &'a UnusedReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    deletion: Option<&'a DeletionSummary>,
}

pub fn print_json<W: Write>(writer: &mut W, result: &CheckResult) -> io::Result<()> {
    let json = JsonReport {
        used_count: result.report.used.len(),
        all_count: result.report.all.len(),
        unused_count: result.report.unused.len(),
        report: &result.report,
        deletion: result.deletion.as_ref(),
    };
    serde_json::to_writer_pretty(&mut *writer, &json)?;
    writeln!(writer)?;
    Ok(())
}

/// Writes the report of `result` in the format selected by `cfg`.
pub fn print_report<W: Write>(writer: &mut W, result: &CheckResult, cfg: &Config) -> io::Result<()> {
    debug!("Printing report as {:?}", cfg.format);
    match cfg.format {
        OutputFormat::Json => print_json(writer, result)?,
        OutputFormat::Text => {
            let root = Some(result.root.as_path());
            print_summary(writer, &result.report)?;
            if cfg.print_detail {
                print_detail(writer, &result.report, root)?;
            }
            if let Some(summary) = &result.deletion {
                print_deletions(writer, summary, root)?;
            }
        }
    }
    writer.flush()?;
    Ok(())
}
