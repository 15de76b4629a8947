//! Writing source text to disk.

use crate::error::{ExecError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

/// Make sure `dir` and any missing parents exist.
///
/// Returns `true` if the directory had to be created. Calling this on an
/// existing directory is a no-op.
pub fn ensure_directory(dir: &Path) -> Result<bool> {
    if dir.is_dir() {
        return Ok(false);
    }

    fs::create_dir_all(dir).map_err(|e| ExecError::filesystem(dir, &e))?;
    Ok(true)
}

/// Write `source_text` to `path` as UTF-8, replacing any existing content.
///
/// The parent directory is not created here; callers are expected to have
/// run [`ensure_directory`] on the working directory first.
pub fn write_source(path: &Path, source_text: &str) -> Result<()> {
    let mut file = File::create(path).map_err(|e| ExecError::filesystem(path, &e))?;

    file.write_all(source_text.as_bytes())
        .map_err(|e| ExecError::filesystem(path, &e))?;

    // Sync so a full disk is reported here instead of being lost on drop.
    file.sync_all().map_err(|e| ExecError::filesystem(path, &e))?;

    Ok(())
}
