//! CLI for dualsum.

use anyhow::Result;
use clap::Parser;
use dualsum_core::config::{self, DualsumConfig};
use dualsum_core::{logging, DigestPair};
use std::ffi::OsString;
use std::io::{self, Write};
use std::path::PathBuf;

/// Print the MD5 digest of two files, one lowercase hex line each, in argument order.
#[derive(Debug, Parser)]
#[command(name = "dualsum", version)]
#[command(about = "Print the MD5 digest of two files, in order", long_about = None)]
pub struct Cli {
    /// First file; its digest is printed on line 1.
    #[arg(allow_hyphen_values = true)]
    pub first: PathBuf,

    /// Second file; its digest is printed on line 2.
    #[arg(allow_hyphen_values = true)]
    pub second: PathBuf,

    /// Anything after the two paths is accepted and ignored.
    #[arg(hide = true, trailing_var_arg = true, allow_hyphen_values = true)]
    pub extra: Vec<OsString>,
}

impl Cli {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config_or_default(config::load());
        if let Err(err) = logging::init_logging(cfg.log_filter.as_deref()) {
            eprintln!("dualsum: logging unavailable: {:#}", err);
        }
        tracing::debug!("loaded config: {:?}", cfg);

        let stdout = io::stdout();
        let mut out = stdout.lock();
        cli.run(&mut out)
    }

    pub fn pair(&self) -> DigestPair {
        DigestPair::new(&self.first, &self.second)
    }

    /// Print both digests to `out`. Lines already written stay written on error.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        if !self.extra.is_empty() {
            tracing::debug!(count = self.extra.len(), "ignoring extra arguments");
        }
        self.pair().print_to(out)?;
        Ok(())
    }
}

/// A broken config file only costs diagnostics settings, never the digests.
fn config_or_default(loaded: Result<DualsumConfig>) -> DualsumConfig {
    loaded.unwrap_or_else(|err| {
        eprintln!("dualsum: ignoring config: {:#}", err);
        DualsumConfig::default()
    })
}

#[cfg(test)]
mod tests;
