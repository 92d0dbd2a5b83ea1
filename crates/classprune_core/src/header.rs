use log::{debug, trace};
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use crate::{
    constants::{BODY_MARKER, IMPORT_KEYWORD, PACKAGE_KEYWORD, STATEMENT_TERMINATOR},
    error::ScanError,
};

/// A header line, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HeaderLine<'a> {
    /// `import <name>;` with the name extracted
    Import(&'a str),
    /// An import line whose name still holds whitespace
    MalformedImport,
    /// First line of the type body; nothing after it is scanned
    BodyStart,
    Other,
}

/// Strips `keyword` and the statement terminator from a right-trimmed line.
fn strip_statement<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = line.trim_end().strip_prefix(keyword)?;
    Some(rest.strip_suffix(STATEMENT_TERMINATOR).unwrap_or(rest))
}

pub fn classify_line(line: &str) -> HeaderLine<'_> {
    if let Some(name) = strip_statement(line, IMPORT_KEYWORD) {
        if name.is_empty() || name.contains(char::is_whitespace) {
            HeaderLine::MalformedImport
        } else {
            HeaderLine::Import(name)
        }
    } else if line.contains(BODY_MARKER) {
        HeaderLine::BodyStart
    } else {
        HeaderLine::Other
    }
}

/// Extracts the package name from a `package <name>;` line.
pub fn parse_package_line(line: &str) -> Option<&str> {
    let name = strip_statement(line, PACKAGE_KEYWORD)?.trim_start();
    if name.is_empty() || name.contains(char::is_whitespace) || name.contains(STATEMENT_TERMINATOR)
    {
        return None;
    }
    Some(name)
}

fn open(path: &Path) -> Result<BufReader<File>, ScanError> {
    File::open(path).map(BufReader::new).map_err(|e| ScanError::io(path, e))
}

/// Reads the package declared on the first line of `path`.
pub fn read_package(path: &Path) -> Result<String, ScanError> {
    trace!("Reading package of {}", path.display());
    let first = match open(path)?.lines().next() {
        Some(line) => line.map_err(|e| ScanError::io(path, e))?,
        None => return Err(ScanError::MissingPackage { path: path.to_path_buf() }),
    };
    parse_package_line(&first)
        .map(str::to_string)
        .ok_or_else(|| ScanError::MissingPackage { path: path.to_path_buf() })
}

/// Collects every imported name declared before the type body of `path`.
///
/// Imports are returned in file order, external ones included; filtering is
/// left to the caller. A malformed import aborts the scan.
pub fn scan_imports(path: &Path) -> Result<Vec<String>, ScanError> {
    trace!("Scanning imports of {}", path.display());
    let mut imports = Vec::new();

    for (idx, line) in open(path)?.lines().enumerate() {
        let line = line.map_err(|e| ScanError::io(path, e))?;
        match classify_line(&line) {
            HeaderLine::Import(name) => {
                trace!("Found import '{}' in {}", name, path.display());
                imports.push(name.to_string());
            }
            HeaderLine::MalformedImport => {
                return Err(ScanError::MalformedImport {
                    path: path.to_path_buf(),
                    line_number: idx + 1,
                    line: line.trim_end().to_string(),
                });
            }
            HeaderLine::BodyStart => {
                trace!("Reached type body at line {} of {}", idx + 1, path.display());
                break;
            }
            HeaderLine::Other => {}
        }
    }

    debug!("Found {} imports in {}", imports.len(), path.display());
    Ok(imports)
}
