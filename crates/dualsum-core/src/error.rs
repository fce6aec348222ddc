//! Error type for digest computation and output.

use std::io;
use std::path::{Path, PathBuf};

/// Failure while digesting a file or writing its digest line.
/// None of these are retried; the caller terminates on the first one.
#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    /// File could not be opened (missing, permission denied, ...).
    #[error("open {}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// File opened but reading its contents failed (e.g. it is a directory).
    #[error("read {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Writing or flushing a digest line failed.
    #[error("write digest to output")]
    Output(#[source] io::Error),
}

impl DigestError {
    /// Path of the input file this error concerns, if any.
    pub fn path(&self) -> Option<&Path> {
        match self {
            DigestError::Open { path, .. } | DigestError::Read { path, .. } => Some(path),
            DigestError::Output(_) => None,
        }
    }
}
