use log::{debug, info, warn};
use std::fs;

use classprune_core::ClassIndex;

use crate::types::{DeletedClass, DeletionSummary, FailedDeletion};

/// Removes the backing file of every class in `unused`.
///
/// There is no confirmation and no backup. A failed removal is logged and
/// recorded; the remaining files are still attempted.
pub fn delete_unused(unused: &ClassIndex) -> DeletionSummary {
    info!("Deleting {} unused class files", unused.len());
    let mut summary = DeletionSummary::default();

    for (class, path) in unused {
        match fs::remove_file(path) {
            Ok(()) => {
                debug!("Deleted {} at {}", class, path.display());
                summary.deleted.push(DeletedClass { class: class.clone(), path: path.clone() });
            }
            Err(e) => {
                warn!("Failed to delete {} at {}: {}", class, path.display(), e);
                summary.failed.push(FailedDeletion {
                    class: class.clone(),
                    path: path.clone(),
                    reason: e.to_string(),
                });
            }
        }
    }

    info!("Deleted {} files, {} failures", summary.deleted.len(), summary.failed.len());
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    fn create_test_file(dir: &Path, path: &str, content: &str) -> PathBuf {
        let file_path = dir.join(path);
        if let Some(parent) = file_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        fs::write(&file_path, content).expect("Failed to write test file");
        file_path
    }

    #[test]
    fn test_deletes_only_listed_files() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let keep = create_test_file(root, "p/A.java", "package p;");
        let drop = create_test_file(root, "p/C.java", "package p;");

        let unused: ClassIndex = [("p.C".to_string(), drop.clone())].into_iter().collect();
        let summary = delete_unused(&unused);

        assert!(!drop.exists());
        assert!(keep.exists());
        assert_eq!(summary.deleted.len(), 1);
        assert_eq!(summary.deleted[0].class, "p.C");
        assert!(summary.failed.is_empty());
    }

    #[test]
    fn test_failure_does_not_stop_remaining_deletions() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path();
        let gone = root.join("p/Gone.java");
        let present = create_test_file(root, "p/Z.java", "package p;");

        let unused: ClassIndex =
            [("p.Gone".to_string(), gone), ("p.Z".to_string(), present.clone())]
                .into_iter()
                .collect();
        let summary = delete_unused(&unused);

        assert!(!present.exists());
        assert_eq!(summary.deleted.len(), 1);
        assert_eq!(summary.failed.len(), 1);
        assert_eq!(summary.failed[0].class, "p.Gone");
    }

    #[test]
    fn test_nothing_to_delete() {
        let summary = delete_unused(&ClassIndex::new());
        assert!(summary.deleted.is_empty());
        assert!(summary.failed.is_empty());
    }
}
