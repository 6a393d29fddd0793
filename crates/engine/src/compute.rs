use crate::error::{EngineError, Result, WorkerFailure};
use crate::partition::partition;
use crate::primality::is_prime;
use crate::range::PrimeRange;
use log::debug;
use rayon::prelude::*;
use std::any::Any;
use std::iter::FusedIterator;
use std::ops::RangeInclusive;
use std::panic::{self, AssertUnwindSafe};

/// Lazy, ascending sequence of the primes in a validated range.
///
/// Nothing is tested until the iterator is advanced. A clone is independent
/// and resumes from the original's current position, so a clone taken before
/// iterating replays the sequence from its start.
#[derive(Debug, Clone)]
pub struct Primes {
    candidates: RangeInclusive<i64>,
}

impl Primes {
    #[must_use]
    pub fn new(range: &PrimeRange) -> Self {
        Self {
            candidates: range.candidates(),
        }
    }
}

impl Iterator for Primes {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        self.candidates.find(|&n| is_prime(n))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.candidates.size_hint().1)
    }
}

impl DoubleEndedIterator for Primes {
    fn next_back(&mut self) -> Option<i64> {
        self.candidates.rfind(|&n| is_prime(n))
    }
}

impl FusedIterator for Primes {}

/// Primes in `[low, high]`, computed on the calling thread.
///
/// # Errors
///
/// Returns [`EngineError::InvalidRange`] unless `0 <= low < high`. Validation
/// happens eagerly; the returned sequence itself is lazy.
pub fn compute(low: i64, high: i64) -> Result<Primes> {
    let range = PrimeRange::new(low, high)?;
    Ok(Primes::new(&range))
}

/// Primes in `[low, high]`, computed on a pool of up to `workers` threads.
///
/// The pool never has more threads than there are partitions, so a worker
/// count larger than the range costs nothing extra. The pool lives for the
/// duration of the call. The merged result is sorted
/// ascending before it is returned.
///
/// # Errors
///
/// - [`EngineError::InvalidRange`] unless `0 <= low < high`.
/// - [`EngineError::InvalidConfiguration`] when `workers` is zero.
/// - [`EngineError::WorkerExecution`] when the pool cannot be created or a
///   worker panics. No partial results are returned.
pub fn compute_parallel(low: i64, high: i64, workers: usize) -> Result<Vec<i64>> {
    let range = PrimeRange::new(low, high)?;
    validate_workers(workers)?;
    dispatch(workers, partition(&range, workers), is_prime)
}

pub(crate) fn validate_workers(workers: usize) -> Result<()> {
    if workers == 0 {
        return Err(EngineError::InvalidConfiguration(
            "worker count must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Filter every partition on its own worker, then merge and sort.
pub(crate) fn dispatch<F>(
    workers: usize,
    plan: Vec<RangeInclusive<i64>>,
    test: F,
) -> Result<Vec<i64>>
where
    F: Fn(i64) -> bool + Sync,
{
    let threads = pool_size(workers, plan.len());
    let pool = rayon::ThreadPoolBuilder::new()
        .num_threads(threads)
        .thread_name(|index| format!("prime-worker-{index}"))
        .build()
        .map_err(WorkerFailure::from)?;

    debug!(
        "dispatching {} partition(s) to {threads} of {workers} worker(s)",
        plan.len()
    );

    // Partitions are disjoint and each worker owns its own output vector.
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
        pool.install(|| {
            plan.into_par_iter()
                .map(|part| part.filter(|&n| test(n)).collect::<Vec<_>>())
                .collect::<Vec<_>>()
        })
    }));

    let per_worker =
        outcome.map_err(|payload| WorkerFailure::Panicked(panic_message(payload.as_ref())))?;

    let mut primes: Vec<i64> = per_worker.into_iter().flatten().collect();
    // Completion order is not guaranteed; the sort is required.
    primes.sort_unstable();
    debug!("merged {} prime(s)", primes.len());
    Ok(primes)
}

/// Threads beyond the partition count would start and stop without work.
fn pool_size(workers: usize, partitions: usize) -> usize {
    workers.min(partitions).max(1)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic payload".to_string()
    }
}
