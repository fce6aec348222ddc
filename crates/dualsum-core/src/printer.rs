//! Ordered digest output: one lowercase hex line per input path.
//!
//! Paths are processed strictly in the order given. Each line is flushed
//! before the next file is opened, so a failure on a later path leaves the
//! earlier lines on the output.

use crate::digest;
use crate::error::DigestError;
use std::io::Write;
use std::path::{Path, PathBuf};

/// The two positional inputs, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigestPair {
    pub first: PathBuf,
    pub second: PathBuf,
}

impl DigestPair {
    pub fn new(first: impl Into<PathBuf>, second: impl Into<PathBuf>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
        }
    }

    /// Print the digest of `first`, then of `second`, to `out`.
    pub fn print_to<W: Write>(&self, out: &mut W) -> Result<(), DigestError> {
        print_digests(&[&self.first, &self.second], out)?;
        Ok(())
    }
}

/// Write the MD5 of each file in `paths` to `out`, one line each, in order.
/// Stops at the first failure. Returns the number of lines written.
pub fn print_digests<P: AsRef<Path>, W: Write>(
    paths: &[P],
    out: &mut W,
) -> Result<usize, DigestError> {
    let mut written = 0;
    for path in paths {
        let path = path.as_ref();
        let digest = digest::md5_path(path)?;
        writeln!(out, "{}", digest).map_err(DigestError::Output)?;
        out.flush().map_err(DigestError::Output)?;
        written += 1;
    }
    Ok(written)
}
