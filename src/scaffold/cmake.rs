//! CMake subdirectory registration.
//!
//! Generated applications and libraries are wired into the build by
//! appending `add_subdirectory(<name>)` lines to the aggregating
//! `CMakeLists.txt`. Lines already present are not appended again, so
//! re-running a command against an existing tree cannot duplicate entries.

use crate::error::{JoistError, Result};
use crate::fs::atomic_write_file;
use std::fs;
use std::path::Path;

/// Append `add_subdirectory(<name>)` for each name not already registered.
pub fn append_subdirectories<S: AsRef<str>>(cmake_file: &Path, names: &[S]) -> Result<()> {
    let existing = fs::read_to_string(cmake_file).map_err(|e| {
        JoistError::UserError(format!(
            "cannot read '{}': {} (is this a joist-generated tree?)",
            cmake_file.display(),
            e
        ))
    })?;

    let mut missing = Vec::new();
    for name in names {
        let line = format!("add_subdirectory({})", name.as_ref());
        let already = existing.lines().any(|l| l.trim() == line);
        if !already && !missing.contains(&line) {
            missing.push(line);
        }
    }

    if missing.is_empty() {
        return Ok(());
    }

    let mut content = existing;
    if !content.is_empty() && !content.ends_with('\n') {
        content.push('\n');
    }
    for line in missing {
        content.push_str(&line);
        content.push('\n');
    }

    atomic_write_file(cmake_file, &content)
}
