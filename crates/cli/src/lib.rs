// crates/cli/src/lib.rs
pub mod args;
pub mod config;
pub mod error;
pub mod logging;
pub mod options;
pub mod presentation;

use crate::args::Args;
use crate::config::Config;
use crate::error::Result;
use log::debug;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Compute the primes requested on the command line and print them.
///
/// # Errors
///
/// Returns engine errors (invalid range, invalid worker count, worker
/// failure) and output errors unchanged.
pub fn execute(args: &Args) -> Result<()> {
    let config = Config::try_from(args)?;
    debug!("resolved config: {config:?}");

    let result = prime_range_engine::run(&config)?;
    debug!(
        "found {} prime(s) using {} worker(s)",
        result.count(),
        result.workers
    );

    presentation::print_results(&result, &config, args.format)
}
