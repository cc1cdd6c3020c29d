use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShredError {
    #[error("stat {}: {source}", path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("shred: {} {reason}", path.display())]
    InvalidTarget { path: PathBuf, reason: String },

    #[error("open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("seek {} (pass {pass}): {source}", path.display())]
    Seek {
        path: PathBuf,
        pass: usize,
        #[source]
        source: io::Error,
    },

    #[error("fill random for {} (pass {pass}): {source}", path.display())]
    RandomSource {
        path: PathBuf,
        pass: usize,
        #[source]
        source: rand::Error,
    },

    #[error("write {} (pass {pass}): {source}", path.display())]
    Write {
        path: PathBuf,
        pass: usize,
        #[source]
        source: io::Error,
    },

    #[error("sync {} (pass {pass}): {source}", path.display())]
    Sync {
        path: PathBuf,
        pass: usize,
        #[source]
        source: io::Error,
    },

    /// All passes completed; the file is still on disk with random content.
    #[error("remove {} (content already overwritten): {source}", path.display())]
    Remove {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid options: {0}")]
    InvalidOptions(String),
}

impl ShredError {
    /// Path the failure refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            ShredError::Stat { path, .. }
            | ShredError::InvalidTarget { path, .. }
            | ShredError::Open { path, .. }
            | ShredError::Seek { path, .. }
            | ShredError::RandomSource { path, .. }
            | ShredError::Write { path, .. }
            | ShredError::Sync { path, .. }
            | ShredError::Remove { path, .. } => Some(path),
            ShredError::InvalidOptions(_) => None,
        }
    }

    /// Pass number (1-based) for errors raised by the overwrite engine
    pub fn pass(&self) -> Option<usize> {
        match self {
            ShredError::Seek { pass, .. }
            | ShredError::RandomSource { pass, .. }
            | ShredError::Write { pass, .. }
            | ShredError::Sync { pass, .. } => Some(*pass),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, ShredError>;
