use crate::error::{Result, ShredError};
use crate::options::ShredOptions;
use crate::overwrite::overwrite_file;
use rand::rngs::OsRng;
use rand::RngCore;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Overwrites files with bytes from `R` and then unlinks them
///
/// The randomness source is owned by the shredder, so tests can run
/// side by side with different deterministic sources.
#[derive(Debug, Clone)]
pub struct Shredder<R> {
    rng: R,
    options: ShredOptions,
}

impl Shredder<OsRng> {
    /// Production configuration: OS CSPRNG, 3 passes, 64 KiB buffer
    pub fn new() -> Self {
        Self::with_rng(OsRng, ShredOptions::default())
    }
}

impl Default for Shredder<OsRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: RngCore> Shredder<R> {
    pub fn with_rng(rng: R, options: ShredOptions) -> Self {
        Self { rng, options }
    }

    pub fn options(&self) -> &ShredOptions {
        &self.options
    }

    /// Overwrite `path` for every configured pass, then remove it
    ///
    /// The directory entry is removed only after all passes were synced.
    /// When `path` is a symbolic link, the link target's bytes are
    /// overwritten but only the link itself is removed.
    pub fn shred(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let len = overwrite_file(path, &self.options, &mut self.rng)?;

        fs::remove_file(path).map_err(|source| ShredError::Remove {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = len, passes = self.options.passes, "removed");
        Ok(())
    }

    /// Overwrite `path` in place without removing it
    pub fn overwrite(&mut self, path: impl AsRef<Path>) -> Result<u64> {
        overwrite_file(path.as_ref(), &self.options, &mut self.rng)
    }
}

/// Shred a single file with the OS random generator and default options
pub fn shred(path: impl AsRef<Path>) -> Result<()> {
    Shredder::new().shred(path)
}
