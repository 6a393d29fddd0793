use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("Invalid range [{low}, {high}]: bounds must satisfy 0 <= low < high")]
    InvalidRange { low: i64, high: i64 },

    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Worker execution failed: {0}")]
    WorkerExecution(#[source] WorkerFailure),
}

/// Underlying cause of a failed parallel run.
#[derive(Debug, Error)]
pub enum WorkerFailure {
    #[error("failed to create worker pool: {0}")]
    PoolCreation(#[from] rayon::ThreadPoolBuildError),

    #[error("worker panicked: {0}")]
    Panicked(String),
}

impl From<WorkerFailure> for EngineError {
    fn from(failure: WorkerFailure) -> Self {
        Self::WorkerExecution(failure)
    }
}

pub type Result<T> = std::result::Result<T, EngineError>;
