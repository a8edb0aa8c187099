//! Existence checking for the expected data asset
//!
//! The target path is fixed at build time and resolved against a caller
//! supplied base directory. Resolution is purely lexical: the filesystem is
//! not consulted until the existence check itself, so the reported path is
//! deterministic for a given working directory.

use std::path::{Component, Path, PathBuf};

#[cfg(test)]
mod tests;

/// Relative location of the data asset, resolved against the working
/// directory at invocation time.
pub const TARGET_PATH: &str = "./public/data/student_grades.csv";

/// Outcome of an existence check
///
/// Both variants are normal results. A missing file is reported, not raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    /// Some filesystem entry exists at the path (file, directory, or other)
    Found,
    /// No entry exists at the path
    Missing,
}

/// Resolve [`TARGET_PATH`] against a base directory into a normalized
/// absolute path.
pub fn resolve_target(base: &Path) -> PathBuf {
    normalize(&base.join(TARGET_PATH))
}

/// Query the filesystem for existence of `path`.
///
/// Existence only: the entry's type is deliberately not inspected, so a
/// directory at the target path still counts as [`CheckOutcome::Found`].
pub fn check(path: &Path) -> CheckOutcome {
    if path.exists() {
        CheckOutcome::Found
    } else {
        CheckOutcome::Missing
    }
}

/// Format the user-facing result line for an outcome.
pub fn report(outcome: CheckOutcome, path: &Path) -> String {
    match outcome {
        CheckOutcome::Found => format!("Found file: {}", path.display()),
        CheckOutcome::Missing => format!("File not found at: {}", path.display()),
    }
}

/// Strip `.` components and fold `..` onto the preceding component, without
/// touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut resolved = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // A `..` above the root of an absolute path is dropped.
                if !resolved.pop() && !resolved.has_root() {
                    resolved.push(component.as_os_str());
                }
            }
            _ => resolved.push(component.as_os_str()),
        }
    }
    resolved
}
