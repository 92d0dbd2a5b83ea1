use anyhow::Result;
use ignore::WalkBuilder;
use log::{debug, trace, warn};
use std::path::PathBuf;

use crate::error::ScanError;

pub struct CollectorConfig {
    pub root: PathBuf,
    /// Extension without the leading dot, e.g. `java`
    pub extension: String,
    /// Honor `.gitignore`/`.ignore` files while walking
    pub respect_ignore: bool,
}

/// Lists every file under `cfg.root` carrying the configured extension.
///
/// Walk order is whatever the filesystem yields. Unreadable entries are
/// logged and skipped; only an inaccessible root is an error.
pub fn collect_source_files(cfg: &CollectorConfig) -> Result<Vec<PathBuf>> {
    debug!("Collecting .{} files", cfg.extension);
    let root = &cfg.root;
    if !root.is_dir() {
        return Err(ScanError::RootNotFound { path: root.clone() }.into());
    }

    let mut files: Vec<PathBuf> = Vec::new();
    debug!("Walking directory tree from root: {}", root.display());
    let walker = WalkBuilder::new(root)
        .hidden(false)
        .parents(cfg.respect_ignore)
        .ignore(cfg.respect_ignore)
        .git_ignore(cfg.respect_ignore)
        .git_global(cfg.respect_ignore)
        .git_exclude(cfg.respect_ignore)
        .build();

    for res in walker {
        let dent = match res {
            Ok(dent) => dent,
            Err(e) => {
                warn!("Skipping unreadable entry under {}: {}", root.display(), e);
                continue;
            }
        };
        let p = dent.path();
        if !p.is_file() {
            continue;
        }

        if p.extension().and_then(|e| e.to_str()) == Some(cfg.extension.as_str()) {
            trace!("Found source file: {}", p.display());
            files.push(p.to_path_buf());
        }
    }
    debug!("Collected {} source files", files.len());
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, path::Path};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    fn config_for(root: &Path) -> CollectorConfig {
        CollectorConfig {
            root: root.to_path_buf(),
            extension: "java".to_string(),
            respect_ignore: false,
        }
    }

    #[test]
    fn test_collects_nested_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let a = create_test_file(root, "src/main/java/p/A.java", "package p;");
        let b = create_test_file(root, "src/main/java/p/q/B.java", "package p.q;");

        let mut files = collect_source_files(&config_for(root)).unwrap();
        files.sort();
        assert_eq!(files, vec![a, b]);
    }

    #[test]
    fn test_skips_other_extensions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "p/A.java", "package p;");
        create_test_file(root, "p/A.class", "binary");
        create_test_file(root, "p/notes.txt", "text");
        create_test_file(root, "p/A.java.bak", "package p;");

        let files = collect_source_files(&config_for(root)).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("p/A.java"));
    }

    #[test]
    fn test_custom_extension() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, "p/A.java", "package p;");
        create_test_file(root, "p/B.kt", "package p");

        let cfg = CollectorConfig { extension: "kt".to_string(), ..config_for(root) };
        let files = collect_source_files(&cfg).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("p/B.kt"));
    }

    #[test]
    fn test_includes_hidden_and_ignored_by_default() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".ignore", "generated/\n");
        create_test_file(root, "generated/p/Gen.java", "package p;");
        create_test_file(root, ".hidden/p/H.java", "package p;");

        let files = collect_source_files(&config_for(root)).unwrap();
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_respect_ignore_skips_ignored_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        create_test_file(root, ".ignore", "generated/\n");
        create_test_file(root, "generated/p/Gen.java", "package p;");
        create_test_file(root, "src/p/A.java", "package p;");

        let cfg = CollectorConfig { respect_ignore: true, ..config_for(root) };
        let files = collect_source_files(&cfg).unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("src/p/A.java"));
    }

    #[test]
    fn test_missing_root_is_an_error() {
        let temp_dir = TempDir::new().unwrap();
        let cfg = config_for(&temp_dir.path().join("does-not-exist"));
        let err = collect_source_files(&cfg).unwrap_err();
        assert!(matches!(err.downcast_ref::<ScanError>(), Some(ScanError::RootNotFound { .. })));
    }

    #[test]
    fn test_empty_root() {
        let temp_dir = TempDir::new().unwrap();
        let files = collect_source_files(&config_for(temp_dir.path())).unwrap();
        assert!(files.is_empty());
    }
}
