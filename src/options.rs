use crate::error::{Result, ShredError};

/// Number of overwrite passes per file
pub const SHRED_PASSES: usize = 3;

/// Staging buffer capacity in bytes (64 KiB)
pub const SHRED_BUF_SIZE: usize = 64 * 1024;

/// Tunables for a shred run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShredOptions {
    pub passes: usize,
    pub buffer_size: usize,
}

impl Default for ShredOptions {
    fn default() -> Self {
        Self {
            passes: SHRED_PASSES,
            buffer_size: SHRED_BUF_SIZE,
        }
    }
}

impl ShredOptions {
    pub fn validate(&self) -> Result<()> {
        if self.passes == 0 {
            return Err(ShredError::InvalidOptions(
                "passes must be at least 1".into(),
            ));
        }
        if self.buffer_size == 0 {
            return Err(ShredError::InvalidOptions(
                "buffer size must be at least 1 byte".into(),
            ));
        }
        Ok(())
    }
}
