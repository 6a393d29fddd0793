// crates/cli/src/args.rs
use crate::options::OutputFormat;
use clap::Parser;

/// Top-level CLI arguments parsed via clap.
#[derive(Parser, Debug)]
#[command(
    name = "prime_range",
    version = crate::VERSION,
    about = "List the primes in an inclusive integer range"
)]
pub struct Args {
    /// Lower bound of the range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub low: i64,

    /// Upper bound of the range (inclusive)
    #[arg(allow_negative_numbers = true)]
    pub high: i64,

    /// Number of worker threads; enables parallel computation
    #[arg(short = 'j', long, help_heading = "Execution")]
    pub workers: Option<usize>,

    /// Compute in parallel with one worker per logical CPU (ignored with --workers)
    #[arg(long, help_heading = "Execution")]
    pub parallel: bool,

    /// Output format
    #[arg(long, value_enum, default_value = "plain", help_heading = "Output")]
    pub format: OutputFormat,

    /// Log engine activity to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
