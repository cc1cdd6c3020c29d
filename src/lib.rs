//! Shred - overwrite files with random data before deleting them
//!
//! Ordinary deletion only removes a directory entry. This crate first
//! overwrites the file's content in place, then unlinks it:
//!
//! ```text
//! Validate → (Seek → Fill random → Write … → Sync) × passes → Remove
//! ```
//!
//! - **Validate**: follow symlinks, require a regular file, record its length
//! - **Overwrite**: every pass rewrites exactly that many bytes from offset 0,
//!   staged through a bounded buffer, then forces the data to disk
//! - **Remove**: unlink the path, only once every pass has succeeded
//!
//! Overwriting assumes the filesystem rewrites blocks in place. Copy-on-write
//! and journaling filesystems, as well as SSDs with wear levelling, may keep
//! the old data elsewhere.
//!
//! ## Example
//!
//! ```no_run
//! use shred::{Shredder, ShredOptions};
//! use rand::rngs::OsRng;
//!
//! // Default: OS random generator, 3 passes, 64 KiB buffer
//! shred::shred("secret.txt").unwrap();
//!
//! // Explicit source and options
//! let mut shredder = Shredder::with_rng(OsRng, ShredOptions { passes: 7, ..Default::default() });
//! shredder.shred("other-secret.txt").unwrap();
//! ```

pub mod cli;
pub mod error;
pub mod options;
pub mod overwrite;
pub mod shredder;
pub mod validate;

pub use error::{Result, ShredError};
pub use options::{ShredOptions, SHRED_BUF_SIZE, SHRED_PASSES};
pub use overwrite::overwrite_file;
pub use shredder::{shred, Shredder};
pub use validate::validate_target;
