mod cli;

use crate::cli::Cli;

fn main() {
    // Parse CLI and dispatch.
    if let Err(err) = Cli::run_from_args() {
        eprintln!("dualsum error: {:#}", err);
        std::process::exit(1);
    }
}
