use crate::error::EngineError;
use derive_builder::Builder;

/// Parameters of a single run.
///
/// Bounds and worker count are validated by [`crate::run`], not by the
/// builder, so an invalid config surfaces the same errors as the
/// free-standing compute functions.
#[derive(Debug, Clone, PartialEq, Eq, Builder)]
#[builder(setter(into))]
pub struct Config {
    pub low: i64,
    pub high: i64,
    /// `None` runs on the calling thread.
    #[builder(default)]
    pub workers: Option<usize>,
}

impl Config {
    #[must_use]
    pub const fn sequential(low: i64, high: i64) -> Self {
        Self {
            low,
            high,
            workers: None,
        }
    }

    #[must_use]
    pub const fn parallel(low: i64, high: i64, workers: usize) -> Self {
        Self {
            low,
            high,
            workers: Some(workers),
        }
    }
}

impl From<ConfigBuilderError> for EngineError {
    fn from(err: ConfigBuilderError) -> Self {
        Self::InvalidConfiguration(err.to_string())
    }
}
