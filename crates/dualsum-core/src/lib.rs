//! Core of `dualsum`: MD5 digests of files, printed one line per file in order.

pub mod config;
pub mod digest;
pub mod error;
pub mod logging;
pub mod printer;

pub use error::DigestError;
pub use printer::{print_digests, DigestPair};
