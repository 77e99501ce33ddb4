use std::path::{Path, PathBuf};
use std::sync::{LazyLock, Mutex, MutexGuard};
use tempfile::TempDir;

static CWD_LOCK: LazyLock<Mutex<()>> = LazyLock::new(|| Mutex::new(()));

pub(crate) struct DirGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl DirGuard {
    pub(crate) fn new(new_dir: &Path) -> Self {
        // Changing the process current working directory is global and not thread-safe.
        // Lock it so tests don't race even if a #[serial] annotation is missed.
        let lock = CWD_LOCK.lock().unwrap_or_else(|poison| poison.into_inner());
        let original = std::env::current_dir().unwrap();
        std::env::set_current_dir(new_dir).unwrap();
        Self {
            original,
            _lock: lock,
        }
    }
}

impl Drop for DirGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Scaffold an empty project named `name` inside a fresh temp directory.
///
/// Returns the temp dir (keep it alive) and the project root path.
pub(crate) fn create_test_project(name: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path().join(name);

    let args = crate::cli::ProjectArgs {
        name: name.to_string(),
        path: Some(root.to_string_lossy().into_owned()),
        apps: vec![],
        libs: vec![],
        namespace: None,
        description: None,
        templates_dir: None,
        config: None,
    };
    crate::commands::dispatch(crate::cli::Command::Project(args)).unwrap();

    (temp_dir, root)
}
