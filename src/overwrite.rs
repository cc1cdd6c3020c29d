use crate::error::{Result, ShredError};
use crate::options::ShredOptions;
use crate::validate::validate_target;
use rand::RngCore;
use std::cmp;
use std::fs::{File, OpenOptions};
use std::io::{self, Seek, SeekFrom, Write};
use std::path::Path;
use tracing::debug;

/// A writable handle that can be forced to stable storage
pub(crate) trait Durable: Write + Seek {
    /// Block until everything written so far is persisted
    fn sync(&mut self) -> io::Result<()>;
}

impl Durable for File {
    fn sync(&mut self) -> io::Result<()> {
        self.sync_all()
    }
}

/// Overwrite the first `len` bytes of `target` with random data, `options.passes` times
///
/// Each pass rewinds to offset 0, writes exactly `len` bytes in chunks of at
/// most `options.buffer_size`, then syncs. The first failure aborts the run.
/// `options` must already have passed `ShredOptions::validate`.
pub(crate) fn overwrite_passes<T, R>(
    target: &mut T,
    path: &Path,
    len: u64,
    options: &ShredOptions,
    rng: &mut R,
) -> Result<()>
where
    T: Durable + ?Sized,
    R: RngCore + ?Sized,
{
    let capacity = cmp::min(options.buffer_size as u64, len) as usize;
    let mut buf = vec![0u8; capacity];

    for pass in 1..=options.passes {
        target
            .seek(SeekFrom::Start(0))
            .map_err(|source| ShredError::Seek {
                path: path.to_path_buf(),
                pass,
                source,
            })?;

        let mut written: u64 = 0;
        while written < len {
            let remaining = len - written;
            let chunk = &mut buf[..cmp::min(capacity as u64, remaining) as usize];

            rng.try_fill_bytes(chunk)
                .map_err(|source| ShredError::RandomSource {
                    path: path.to_path_buf(),
                    pass,
                    source,
                })?;

            target.write_all(chunk).map_err(|source| ShredError::Write {
                path: path.to_path_buf(),
                pass,
                source,
            })?;
            written += chunk.len() as u64;
        }

        target.sync().map_err(|source| ShredError::Sync {
            path: path.to_path_buf(),
            pass,
            source,
        })?;

        debug!(path = %path.display(), pass, bytes = written, "overwrite pass complete");
    }

    Ok(())
}

/// Validate `path` and overwrite its content in place without removing it
/// Returns the number of bytes overwritten per pass
pub fn overwrite_file<R>(path: &Path, options: &ShredOptions, rng: &mut R) -> Result<u64>
where
    R: RngCore + ?Sized,
{
    options.validate()?;
    let len = validate_target(path)?;

    // Write-only, no truncation
    let mut file = OpenOptions::new()
        .write(true)
        .open(path)
        .map_err(|source| ShredError::Open {
            path: path.to_path_buf(),
            source,
        })?;

    overwrite_passes(&mut file, path, len, options, rng)?;
    Ok(len)
}
