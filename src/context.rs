//! Path resolution for one generator run.
//!
//! All scaffolding commands resolve a [`GeneratorContext`] first and take
//! every path from it, so the layout of a generated project is defined in
//! exactly one place:
//!
//! ```text
//! <root>/CMakeLists.txt
//! <root>/cmake/
//! <root>/code/CMakeLists.txt
//! <root>/code/applications/<app>/{src,include}
//! <root>/code/libraries/<lib>/{src,include/<lib>,test}
//! <root>/.joist/events.ndjson        (generation log, untracked state)
//! ```

use crate::error::{JoistError, Result};
use std::env;
use std::path::{Path, PathBuf};

/// Resolved absolute paths for a generator run.
#[derive(Debug, Clone)]
pub struct GeneratorContext {
    /// Absolute path to the project root.
    pub root_path: PathBuf,

    /// Template override directory, if one was given.
    pub templates_dir: Option<PathBuf>,
}

impl GeneratorContext {
    /// Resolve a context from CLI arguments.
    ///
    /// Relative paths are anchored at the current working directory. The
    /// root itself may not exist yet (`project` creates it).
    pub fn resolve(root: &Path, templates_dir: Option<&Path>) -> Result<Self> {
        let cwd = env::current_dir().map_err(|e| {
            JoistError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self {
            root_path: absolutize(&cwd, root),
            templates_dir: templates_dir.map(|dir| absolutize(&cwd, dir)),
        })
    }

    /// `<root>/CMakeLists.txt`
    pub fn root_cmake_path(&self) -> PathBuf {
        self.root_path.join("CMakeLists.txt")
    }

    /// `<root>/cmake/`
    pub fn cmake_dir(&self) -> PathBuf {
        self.root_path.join("cmake")
    }

    /// `<root>/code/`
    pub fn code_root(&self) -> PathBuf {
        self.root_path.join("code")
    }

    /// `<root>/code/CMakeLists.txt`
    pub fn code_cmake_path(&self) -> PathBuf {
        self.code_root().join("CMakeLists.txt")
    }

    /// `<root>/code/applications/`
    pub fn applications_root(&self) -> PathBuf {
        self.code_root().join("applications")
    }

    /// `<root>/code/applications/CMakeLists.txt`
    pub fn applications_cmake_path(&self) -> PathBuf {
        self.applications_root().join("CMakeLists.txt")
    }

    /// `<root>/code/applications/<name>/`
    pub fn application_root(&self, name: &str) -> PathBuf {
        self.applications_root().join(name)
    }

    /// `<root>/code/libraries/`
    pub fn libraries_root(&self) -> PathBuf {
        self.code_root().join("libraries")
    }

    /// `<root>/code/libraries/CMakeLists.txt`
    pub fn libraries_cmake_path(&self) -> PathBuf {
        self.libraries_root().join("CMakeLists.txt")
    }

    /// `<root>/code/libraries/<name>/`
    pub fn library_root(&self, name: &str) -> PathBuf {
        self.libraries_root().join(name)
    }

    /// `<root>/.joist/`
    pub fn state_dir(&self) -> PathBuf {
        self.root_path.join(".joist")
    }

    /// `<root>/.joist/events.ndjson`
    pub fn events_path(&self) -> PathBuf {
        self.state_dir().join("events.ndjson")
    }
}

fn absolutize(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
