use crate::shredder::Shredder;
use rand::RngCore;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Outcome of shredding a batch of paths
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShredSummary {
    pub shredded: Vec<PathBuf>,
    pub failed: Vec<PathBuf>,
}

impl ShredSummary {
    pub fn all_succeeded(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Shred each path in order, reporting progress to `out` and failures to `err`
///
/// Neither a failed shred nor a failed status write stops the remaining paths.
pub fn shred_paths<R, P, O, E>(
    shredder: &mut Shredder<R>,
    paths: &[P],
    out: &mut O,
    err: &mut E,
) -> ShredSummary
where
    R: RngCore,
    P: AsRef<Path>,
    O: Write,
    E: Write,
{
    let mut summary = ShredSummary::default();

    for path in paths {
        let path = path.as_ref();
        status(out, format_args!("Shredding {}...", path.display()));

        match shredder.shred(path) {
            Ok(()) => {
                status(out, format_args!("Shredded successfully: {}", path.display()));
                summary.shredded.push(path.to_path_buf());
            }
            Err(e) => {
                debug!(path = %path.display(), error = %e, "shred failed");
                status(err, format_args!("Error shredding {}: {}", path.display(), e));
                summary.failed.push(path.to_path_buf());
            }
        }
    }

    summary
}

fn status<W: Write>(w: &mut W, line: fmt::Arguments<'_>) {
    if let Err(e) = writeln!(w, "{}", line) {
        warn!(error = %e, "failed to write status line");
    }
}
