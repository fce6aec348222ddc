//! MD5 digests of in-memory buffers and whole files.
//!
//! Files are read in one go: the tool targets small inputs, and each buffer
//! is dropped as soon as its digest is rendered.

use crate::error::DigestError;
use md5::{Digest, Md5};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Length of a rendered digest: two hex characters per MD5 output byte.
pub const HEX_LEN: usize = 32;

/// Compute MD5 of `bytes` and return the digest as lowercase hex.
pub fn md5_hex(bytes: &[u8]) -> String {
    hex::encode(Md5::digest(bytes))
}

/// Compute MD5 of the file at `path` and return the digest as lowercase hex.
///
/// The file handle lives only for the duration of this call and is closed on
/// every return path.
pub fn md5_path(path: &Path) -> Result<String, DigestError> {
    let mut f = File::open(path).map_err(|source| DigestError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut buf = Vec::new();
    f.read_to_end(&mut buf).map_err(|source| DigestError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    drop(f);
    tracing::debug!(path = %path.display(), bytes = buf.len(), "read file");
    Ok(md5_hex(&buf))
}
