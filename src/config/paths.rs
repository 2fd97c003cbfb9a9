use std::path::{Path, PathBuf};
use tracing::debug;

pub(super) const CONFIG_FILE_NAME: &str = "config.json";

/// Locate `config.json`.
///
/// Checked in order: the application root (parent of the executable's
/// directory), then the working directory. When neither exists the
/// working-directory path is returned so callers can report it.
pub(super) fn get_config_path() -> PathBuf {
    let exe_path = std::env::current_exe().ok();
    let cwd = std::env::current_dir().ok();

    for candidate in candidate_paths(exe_path.as_deref(), cwd.as_deref()) {
        debug!(path = %candidate.display(), "Looking for config");
        if candidate.exists() {
            return candidate;
        }
    }
    PathBuf::from(CONFIG_FILE_NAME)
}

fn candidate_paths(exe_path: Option<&Path>, cwd: Option<&Path>) -> Vec<PathBuf> {
    let mut candidates = Vec::new();
    if let Some(app_root) = exe_path.and_then(Path::parent).and_then(Path::parent) {
        candidates.push(app_root.join(CONFIG_FILE_NAME));
    }
    if let Some(cwd) = cwd {
        candidates.push(cwd.join(CONFIG_FILE_NAME));
    }
    candidates
}
