use serde::{Serialize, Serializer, ser::SerializeMap};
use std::path::{Path, PathBuf};

use classprune_core::{ClassIndex, UsedSet};

// Paths are written lossily so a non-UTF-8 file name never fails a report
// printed after files were already deleted.
fn lossy_path<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

fn lossy_index<S: Serializer>(index: &ClassIndex, serializer: S) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(index.len()))?;
    for (class, path) in index {
        map.serialize_entry(class, &path.to_string_lossy())?;
    }
    map.end()
}

/// The three sets of one run. `unused` is `all` minus the keys in `used`.
#[derive(Debug, Clone, Default, Serialize)]
pub struct UnusedReport {
    pub used: UsedSet,
    #[serde(serialize_with = "lossy_index")]
    pub all: ClassIndex,
    #[serde(serialize_with = "lossy_index")]
    pub unused: ClassIndex,
}

#[derive(Debug, Clone, Serialize)]
pub struct DeletedClass {
    pub class: String,
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
}

#[derive(Debug, Clone, Serialize)]
pub struct FailedDeletion {
    pub class: String,
    #[serde(serialize_with = "lossy_path")]
    pub path: PathBuf,
    pub reason: String,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct DeletionSummary {
    pub deleted: Vec<DeletedClass>,
    pub failed: Vec<FailedDeletion>,
}

#[derive(Debug, Clone)]
pub struct CheckResult {
    /// Resolved project root
    pub root: PathBuf,
    pub report: UnusedReport,
    /// Present only when deletion was enabled
    pub deletion: Option<DeletionSummary>,
    pub files_scanned: usize,
}
