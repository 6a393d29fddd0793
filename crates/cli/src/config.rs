// crates/cli/src/config.rs
use crate::args::Args;
use crate::error::AppError;
pub use prime_range_engine::{Config, ConfigBuilder};
use prime_range_engine::EngineError;

impl TryFrom<&Args> for Config {
    type Error = AppError;

    fn try_from(args: &Args) -> Result<Self, Self::Error> {
        // An explicit worker count wins over --parallel
        let workers = args
            .workers
            .or_else(|| args.parallel.then(num_cpus::get));

        ConfigBuilder::default()
            .low(args.low)
            .high(args.high)
            .workers(workers)
            .build()
            .map_err(|e| EngineError::from(e).into())
    }
}
