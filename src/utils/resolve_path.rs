use std::fs;
use std::path::{Path, PathBuf};

/// Resolves a symlink to its target; any other path comes back unchanged.
pub fn resolve_path<P: AsRef<Path>>(path: P) -> PathBuf {
    let path = path.as_ref();
    match fs::read_link(path) {
        Ok(target) => target,
        Err(_) => path.to_path_buf(),
    }
}
