use std::{
    collections::{BTreeMap, BTreeSet},
    path::PathBuf,
};

/// Fully-qualified class name -> backing source file.
///
/// Ordered so every listing derived from it is deterministic.
pub type ClassIndex = BTreeMap<String, PathBuf>;

/// Fully-qualified names of classes reached from the roots.
pub type UsedSet = BTreeSet<String>;
