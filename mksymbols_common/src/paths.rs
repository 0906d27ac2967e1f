use anyhow::*;
use std::path::{Path, PathBuf};

pub fn path_to_string(path: &Path) -> String {
    path.to_string_lossy().replace('\\', "/")
}

/// Resolves `path` against `base` unless it is already absolute, returning an absolute path.
///
/// This does not touch the filesystem, so the target does not need to exist yet.
pub fn resolve_from(base: &Path, path: &Path) -> Result<PathBuf> {
    let joined = if path.is_absolute() { path.to_path_buf() } else { base.join(path) };
    std::path::absolute(&joined)
        .with_context(|| format!("Could not make '{}' absolute", joined.display()))
}

/// Returns the directory relative paths in a file at `path` should be resolved against.
pub fn parent_dir(path: &Path) -> Result<PathBuf> {
    let path = std::path::absolute(path)?;
    match path.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => bail!("'{}' has no parent directory", path.display()),
    }
}

/// Searches `PATH` for an executable with the given name.
pub fn find_executable(name: &str) -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    for dir in std::env::split_paths(&path_var) {
        let candidate = dir.join(name);
        if candidate.is_file() {
            return Some(candidate);
        }
        if cfg!(windows) {
            let candidate = candidate.with_extension("exe");
            if candidate.is_file() {
                return Some(candidate);
            }
        }
    }
    None
}
