use anyhow::{Result, anyhow};
use clap::{Parser, ValueEnum};
use log::{debug, info};
use std::path::PathBuf;

use classprune_core::DEFAULT_SOURCE_EXTENSION;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Parser)]
#[command(name = "unused-classes")]
#[command(about = "Find classes that no root class reaches through project imports")]
pub struct Config {
    /// Root directory of the project (defaults to git root)
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Package prefix shared by every project class, e.g. com.example.demo
    #[arg(long)]
    pub package_prefix: String,

    /// Fully-qualified class to start the traversal from (repeatable)
    #[arg(long = "root-class", required = true)]
    pub root_classes: Vec<String>,

    /// Delete the source file of every unused class
    #[arg(long)]
    pub delete: bool,

    /// Print the used, all and unused class listings
    #[arg(long)]
    pub print_detail: bool,

    /// Report format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Source-file extension, without the dot
    #[arg(long, default_value = DEFAULT_SOURCE_EXTENSION)]
    pub extension: String,

    /// Skip files matched by .gitignore/.ignore
    #[arg(long)]
    pub respect_ignore: bool,
}

impl Config {
    /// Initialize the config by resolving the root directory
    pub fn initialize(&mut self) -> Result<()> {
        let root = if let Some(r) = self.root.take() {
            debug!("Using provided root directory: {:?}", r);
            classprune_core::normalize_root(&r)
        } else {
            debug!("No root provided, searching for git root");
            classprune_core::find_git_root()?
        };
        info!("Using root directory: {}", root.display());

        self.root = Some(root);
        Ok(())
    }

    /// Get the root directory, returning an error if not initialized
    pub fn root(&self) -> Result<&PathBuf> {
        self.root
            .as_ref()
            .ok_or_else(|| anyhow!("Config not initialized - call initialize() first"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_parse_minimal() {
        let cfg = Config::try_parse_from([
            "unused-classes",
            "--package-prefix",
            "com.example",
            "--root-class",
            "com.example.App",
        ])
        .unwrap();
        assert_eq!(cfg.package_prefix, "com.example");
        assert_eq!(cfg.root_classes, vec!["com.example.App"]);
        assert!(cfg.root.is_none());
        assert!(!cfg.delete);
        assert!(!cfg.print_detail);
        assert!(!cfg.respect_ignore);
        assert_eq!(cfg.format, OutputFormat::Text);
        assert_eq!(cfg.extension, "java");
    }

    #[test]
    fn test_parse_repeated_root_classes() {
        let cfg = Config::try_parse_from([
            "unused-classes",
            "--package-prefix",
            "p",
            "--root-class",
            "p.A",
            "--root-class",
            "p.B",
            "--delete",
            "--print-detail",
            "--format",
            "json",
        ])
        .unwrap();
        assert_eq!(cfg.root_classes, vec!["p.A", "p.B"]);
        assert!(cfg.delete);
        assert!(cfg.print_detail);
        assert_eq!(cfg.format, OutputFormat::Json);
    }

    #[test]
    fn test_root_class_is_required() {
        let result = Config::try_parse_from(["unused-classes", "--package-prefix", "p"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_package_prefix_is_required() {
        let result = Config::try_parse_from(["unused-classes", "--root-class", "p.A"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_root_before_initialize_is_error() {
        let cfg = Config::try_parse_from([
            "unused-classes",
            "--package-prefix",
            "p",
            "--root-class",
            "p.A",
        ])
        .unwrap();
        assert!(cfg.root().is_err());
    }

    #[test]
    fn test_initialize_canonicalizes_root() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("project");
        fs::create_dir_all(&nested).unwrap();

        let mut cfg = Config::try_parse_from([
            "unused-classes",
            "--package-prefix",
            "p",
            "--root-class",
            "p.A",
        ])
        .unwrap();
        cfg.root = Some(nested.join("..").join("project"));
        cfg.initialize().unwrap();
        assert_eq!(cfg.root().unwrap(), &nested.canonicalize().unwrap());
    }
}
