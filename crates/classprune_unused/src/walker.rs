use log::{debug, info, trace, warn};
use std::path::Path;

use classprune_core::{ClassIndex, ScanError, UsedSet, scan_imports};

/// Marks `class` and every project class it transitively imports as used.
///
/// A class already in `used` is not scanned again, which bounds the walk on
/// cyclic imports. Names missing from `index` (library classes, wildcards)
/// end the descent. Imports of one file are all collected before any of them
/// is visited. Only a malformed import is returned as an error; unreadable
/// files are logged and contribute no children.
pub fn visit(
    class: &str,
    index: &ClassIndex,
    package_prefix: &str,
    used: &mut UsedSet,
) -> Result<(), ScanError> {
    visit_with(class, index, package_prefix, used, &mut |path: &Path| scan_imports(path))
}

/// [`visit`] with the import scanner supplied by the caller.
pub(crate) fn visit_with<F>(
    class: &str,
    index: &ClassIndex,
    package_prefix: &str,
    used: &mut UsedSet,
    scan: &mut F,
) -> Result<(), ScanError>
where
    F: FnMut(&Path) -> Result<Vec<String>, ScanError>,
{
    if used.contains(class) {
        trace!("Already visited: {}", class);
        return Ok(());
    }

    let Some(path) = index.get(class) else {
        trace!("No project file for {}, not descending", class);
        return Ok(());
    };

    used.insert(class.to_string());
    trace!("Visiting {} at {}", class, path.display());

    let imports = match scan(path) {
        Ok(imports) => imports,
        Err(e) if e.is_fatal() => return Err(e),
        Err(e) => {
            warn!("Could not scan imports of {}: {}", class, e);
            return Ok(());
        }
    };

    let children: Vec<String> = imports
        .into_iter()
        .filter(|name| name.contains(package_prefix) && !used.contains(name))
        .collect();
    trace!("{} has {} unvisited project imports", class, children.len());

    for child in &children {
        visit_with(child, index, package_prefix, used, scan)?;
    }
    Ok(())
}

/// Runs [`visit`] for every root against one shared set, so the result is
/// the union of what each root reaches.
pub fn find_used_classes(
    root_classes: &[String],
    index: &ClassIndex,
    package_prefix: &str,
) -> Result<UsedSet, ScanError> {
    let mut used = UsedSet::new();

    for root in root_classes {
        if !index.contains_key(root) {
            warn!("Root class {} is not in the class index", root);
        }
        debug!("Walking imports from root {}", root);
        let before = used.len();
        visit(root, index, package_prefix, &mut used)?;
        debug!("Root {} added {} used classes", root, used.len() - before);
    }

    info!("Found {} used classes from {} roots", used.len(), root_classes.len());
    Ok(used)
}
