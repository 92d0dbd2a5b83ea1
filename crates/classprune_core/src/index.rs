use log::{debug, info, trace, warn};
use std::path::{Path, PathBuf};

use crate::{header::read_package, types::ClassIndex};

/// `package + "." + file stem`, the name a source file is indexed under.
pub fn class_name_for(path: &Path, package: &str) -> Option<String> {
    let simple_name = path.file_stem()?.to_str()?;
    Some(format!("{}.{}", package, simple_name))
}

/// Builds the class index from a list of source files.
///
/// Files that cannot be read or lack a package declaration are skipped with a
/// warning. When two files map to the same name the last one wins.
pub fn build_class_index(files: &[PathBuf]) -> ClassIndex {
    debug!("Indexing {} source files", files.len());
    let mut index = ClassIndex::new();

    for path in files {
        let package = match read_package(path) {
            Ok(package) => package,
            Err(e) => {
                warn!("Skipping {}: {}", path.display(), e);
                continue;
            }
        };

        let Some(class) = class_name_for(path, &package) else {
            warn!("Skipping {}: file name is not valid UTF-8", path.display());
            continue;
        };

        trace!("Indexed {} -> {}", class, path.display());
        if let Some(previous) = index.insert(class.clone(), path.clone()) {
            warn!(
                "Duplicate class {}: {} replaces {}",
                class,
                path.display(),
                previous.display()
            );
        }
    }

    info!("Indexed {} classes from {} files", index.len(), files.len());
    index
}
