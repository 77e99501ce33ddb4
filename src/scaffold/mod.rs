//! Directory and file scaffolding primitives.
//!
//! Shared by the `project`, `app`, and `lib` commands: directory creation,
//! refuse-to-overwrite checks, and render-and-write of a template into the
//! generated tree.

mod cmake;

pub use cmake::append_subdirectories;

use crate::error::{JoistError, Result};
use crate::fs::atomic_write_file;
use crate::template::{Definitions, Template};
use std::fs;
use std::path::Path;

/// Create a directory (and parents) inside the generated tree.
pub fn create_directory(path: &Path) -> Result<()> {
    fs::create_dir_all(path).map_err(|e| {
        JoistError::IoError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

/// Refuse to touch a path that already exists.
///
/// Checked before any directory is created, so a failed run never leaves a
/// partially overwritten tree behind.
pub fn ensure_absent(path: &Path) -> Result<()> {
    if path.exists() {
        return Err(JoistError::UserError(format!(
            "path '{}' already exists, will not overwrite",
            path.display()
        )));
    }
    Ok(())
}

/// Render a template and atomically write the result to `dest`.
pub fn write_rendered(template: &Template, definitions: &Definitions, dest: &Path) -> Result<()> {
    let content = template.render(definitions)?;
    atomic_write_file(dest, &content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::template::{Template, TemplateRole};
    use tempfile::TempDir;

    #[test]
    fn create_directory_makes_parents() {
        let dir = TempDir::new().unwrap();
        let nested = dir.path().join("code").join("libraries").join("mylib");

        create_directory(&nested).unwrap();
        assert!(nested.is_dir());
    }

    #[test]
    fn create_directory_is_idempotent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("src");

        create_directory(&path).unwrap();
        create_directory(&path).unwrap();
        assert!(path.is_dir());
    }

    #[test]
    fn ensure_absent_accepts_missing_path() {
        let dir = TempDir::new().unwrap();
        assert!(ensure_absent(&dir.path().join("fresh")).is_ok());
    }

    #[test]
    fn ensure_absent_rejects_existing_path() {
        let dir = TempDir::new().unwrap();
        let err = ensure_absent(dir.path()).unwrap_err();
        assert!(err.to_string().contains("will not overwrite"));
    }

    #[test]
    fn write_rendered_substitutes_and_writes() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("code").join("CMakeLists.txt");

        let template = Template::builtin(TemplateRole::SubdirCmake);
        let defs = Definitions::empty().with("projectname", "demo");

        write_rendered(&template, &defs, &dest).unwrap();

        let content = std::fs::read_to_string(&dest).unwrap();
        assert_eq!(content, "# Subdirectory aggregation for demo.\n");
    }

    #[test]
    fn write_rendered_fails_on_missing_definition() {
        let dir = TempDir::new().unwrap();
        let dest = dir.path().join("CMakeLists.txt");

        let template = Template::builtin(TemplateRole::SubdirCmake);
        let err = write_rendered(&template, &Definitions::empty(), &dest).unwrap_err();

        assert!(err.to_string().contains("projectname"));
        assert!(!dest.exists());
    }
}
