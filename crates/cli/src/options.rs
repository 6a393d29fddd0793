use clap::ValueEnum;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[value(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One prime per line
    #[default]
    Plain,
    /// Single JSON document with the run parameters and all primes
    Json,
    /// One JSON object per prime followed by a total record
    Jsonl,
    /// Number of primes only
    Count,
}
