use crate::error::{Result, ShredError};
use std::fs;
use std::path::Path;

/// Check that `path` resolves to a regular file and return its length
///
/// Follows symbolic links, so a link to a regular file is accepted and
/// the returned length is the target's.
pub fn validate_target(path: &Path) -> Result<u64> {
    let meta = fs::metadata(path).map_err(|source| ShredError::Stat {
        path: path.to_path_buf(),
        source,
    })?;

    if !meta.file_type().is_file() {
        return Err(ShredError::InvalidTarget {
            path: path.to_path_buf(),
            reason: "is not a regular file".into(),
        });
    }

    Ok(meta.len())
}
