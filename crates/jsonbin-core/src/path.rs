//! Command-line path resolution: `~` expansion and absolutization.

use std::env;
use std::path::{Component, Path, PathBuf};

use crate::error::{ConvertError, Result};

/// Resolve a user-supplied path to an absolute, lexically normalized path.
///
/// - `~` → the home directory
/// - `~/rest` → the home directory joined with `rest`
/// - relative paths are joined onto the current working directory
/// - `.` and `..` components are folded without touching the filesystem, so
///   the target does not need to exist yet (output paths usually don't)
///
/// `~user` forms are not expanded and are treated as relative names.
pub fn resolve_path(raw: impl AsRef<Path>) -> Result<PathBuf> {
    let raw = raw.as_ref();
    let expanded = expand_home(raw)?;
    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        let cwd = env::current_dir().map_err(|e| ConvertError::not_found(raw, e))?;
        cwd.join(expanded)
    };
    Ok(normalize(&absolute))
}

fn expand_home(raw: &Path) -> Result<PathBuf> {
    let mut components = raw.components();
    match components.next() {
        Some(Component::Normal(first)) if first == "~" => {
            let home = dirs::home_dir().ok_or_else(|| ConvertError::NotFound {
                path: raw.to_path_buf(),
                source: None,
            })?;
            Ok(home.join(components.as_path()))
        }
        _ => Ok(raw.to_path_buf()),
    }
}

/// Fold `.` and `..` lexically. `..` at the root stays at the root.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !matches!(
                    out.components().next_back(),
                    Some(Component::RootDir | Component::Prefix(_)) | None
                ) {
                    out.pop();
                }
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
