// crates/engine/src/lib.rs
use log::debug;

pub mod compute;
pub mod config;
pub mod error;
pub mod partition;
pub mod primality;
pub mod range;
pub mod stats;

pub use crate::compute::{Primes, compute, compute_parallel};
pub use crate::config::{Config, ConfigBuilder};
pub use crate::error::{EngineError, Result, WorkerFailure};
pub use crate::partition::partition;
pub use crate::primality::is_prime;
pub use crate::range::PrimeRange;
pub use crate::stats::RunResult;

/// Run the prime engine for a configured range.
///
/// Without `workers` the range is filtered on the calling thread; otherwise
/// it is partitioned across a pool of exactly that many workers and the
/// merged result is sorted.
///
/// # Errors
///
/// Returns an error when the range or worker count is invalid, or when a
/// parallel worker fails. No partial results are returned.
pub fn run(config: &Config) -> Result<RunResult> {
    let range = PrimeRange::new(config.low, config.high)?;

    let Some(workers) = config.workers else {
        debug!(
            "computing primes in [{}, {}] on the calling thread",
            range.low(),
            range.high()
        );
        return Ok(RunResult {
            primes: Primes::new(&range).collect(),
            workers: 1,
            partitions: 1,
        });
    };

    compute::validate_workers(workers)?;
    let plan = partition(&range, workers);
    let partitions = plan.len();
    debug!(
        "computing primes in [{}, {}] with {workers} worker(s)",
        range.low(),
        range.high()
    );
    let primes = compute::dispatch(workers, plan, is_prime)?;

    Ok(RunResult {
        primes,
        workers,
        partitions,
    })
}
