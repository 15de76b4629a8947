//! Target path resolution.
//!
//! Normalization is purely lexical: nothing here touches the filesystem, so
//! a path can be resolved (and reported) before the working directory even
//! exists. Separator handling follows `std::path` for the host, which means
//! `/` and `\` are both separators on Windows while `\` is an ordinary
//! filename character on Unix.

use crate::error::{ExecError, Result};
use std::path::{Component, Path, PathBuf};

/// Resolve `target_name` against `working_dir`.
///
/// Absolute targets are used verbatim; relative targets are joined under
/// the working directory. The result is anchored at the current directory
/// if still relative, then normalized.
///
/// Targets that climb out of the working directory (`../../x.py`) are
/// resolved like any other path.
pub fn resolve_target_path(working_dir: &Path, target_name: &str) -> Result<PathBuf> {
    if target_name.trim().is_empty() {
        return Err(ExecError::InvalidTarget(
            "target name is empty".to_string(),
        ));
    }

    if target_name.contains('\0') {
        return Err(ExecError::InvalidTarget(format!(
            "target name '{}' contains a NUL byte",
            target_name.escape_default()
        )));
    }

    let target = Path::new(target_name);
    let joined = if target.is_absolute() {
        target.to_path_buf()
    } else {
        working_dir.join(target)
    };

    let absolute = std::path::absolute(&joined).map_err(|e| {
        ExecError::InvalidTarget(format!(
            "cannot make '{}' absolute: {}",
            joined.display(),
            e
        ))
    })?;

    Ok(normalize_path(&absolute))
}

/// Lexically normalize a path.
///
/// - `.` segments and repeated separators are dropped
/// - `..` removes the preceding normal segment
/// - `..` directly under the root is absorbed
/// - leading `..` segments of a relative path are kept
///
/// An empty result becomes `.`.
pub fn normalize_path(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                Some(Component::ParentDir) | Some(Component::CurDir) | None => {
                    parts.push(component);
                }
            },
            other => parts.push(other),
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }

    parts.iter().collect()
}
