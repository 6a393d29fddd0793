use serde::Serialize;

/// Outcome of [`crate::run`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunResult {
    /// Ascending, duplicate-free.
    pub primes: Vec<i64>,
    /// Workers the run was executed with; 1 for the sequential path.
    pub workers: usize,
    /// Partitions the range was split into; 1 for the sequential path.
    pub partitions: usize,
}

impl RunResult {
    #[must_use]
    pub fn count(&self) -> usize {
        self.primes.len()
    }
}
