//! Atomic file writes for unit files.

use std::fs;
use std::io::Write;
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::ServiceError;

/// Write `content` to `path` through a temp file in the same directory, so a
/// crash never leaves a half-written unit behind
pub(super) fn write_file_atomic(path: &Path, content: &str) -> Result<(), ServiceError> {
    let dir = path
        .parent()
        .ok_or_else(|| ServiceError::Create(format!("{} has no parent", path.display())))?;

    let mut file = NamedTempFile::new_in(dir)
        .map_err(|e| ServiceError::Create(format!("Failed to create temp file: {e}")))?;

    file.write_all(content.as_bytes())
        .map_err(|e| ServiceError::Create(format!("Failed to write temp file: {e}")))?;

    file.as_file()
        .sync_all()
        .map_err(|e| ServiceError::Create(format!("Failed to sync temp file: {e}")))?;

    // NamedTempFile is created 0600
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(file.path(), fs::Permissions::from_mode(0o644)).map_err(|e| {
            ServiceError::Create(format!("Failed to set unit file permissions: {e}"))
        })?;
    }

    file.persist(path)
        .map_err(|e| ServiceError::Create(format!("Failed to rename temp file: {}", e.error)))?;

    Ok(())
}
