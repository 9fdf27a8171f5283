//! Resolution of user-supplied file paths from the configuration.

use std::path::{Path, PathBuf};

/// `~/…` is taken from the home directory, other relative paths from `base`.
pub fn resolve(path: &str, base: &Path) -> PathBuf {
    let path = path.trim();
    let expanded = match (path.strip_prefix("~/"), dirs::home_dir()) {
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(path),
    };

    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}
