use anyhow::Result;
use clap::{Parser, Subcommand};
use classprune_unused::{Config, OutputFormat};
use colored::Colorize;
use log::{debug, info};
use std::io::{BufWriter, Write};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "classprune")]
#[command(about = "Find and prune classes no entry point imports", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Report (and optionally delete) classes unreachable from the root classes
    UnusedClasses(Config),
}

fn main() -> Result<()> {
    env_logger::init();

    // stdio is blocked by LineWriter, use a BufWriter to reduce syscalls.
    // See https://github.com/rust-lang/rust/issues/60673
    let mut stdout = BufWriter::new(std::io::stdout());

    let cli = Cli::parse();
    debug!("Parsed CLI arguments: {:?}", cli.command);

    let start = Instant::now();

    match cli.command {
        Commands::UnusedClasses(cfg) => {
            info!(
                "Running unused class check from {} root classes (prefix: {})",
                cfg.root_classes.len(),
                cfg.package_prefix
            );
            debug!("Config: root={:?}, delete={}", cfg.root, cfg.delete);

            let result = classprune_unused::run_unused_class_check(cfg.clone())?;
            debug!("Found {} unused classes", result.report.unused.len());

            classprune_unused::print_report(&mut stdout, &result, &cfg)?;

            if cfg.format == OutputFormat::Text {
                let elapsed_ms = start.elapsed().as_millis();
                writeln!(
                    stdout,
                    "\n{} Finished in {}ms on {} files.",
                    "●".bright_blue(),
                    elapsed_ms.to_string().cyan(),
                    result.files_scanned.to_string().cyan()
                )?;
            }
            stdout.flush()?;

            Ok(())
        }
    }
}
