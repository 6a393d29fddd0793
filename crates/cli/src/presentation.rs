// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::Result;
use crate::options::OutputFormat;
use prime_range_engine::RunResult;
use serde::Serialize;
use std::io::{self, BufWriter, Write};

#[derive(Serialize)]
struct Report<'a> {
    low: i64,
    high: i64,
    workers: usize,
    partitions: usize,
    count: usize,
    primes: &'a [i64],
}

pub fn print_results(result: &RunResult, config: &Config, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    write_results(&mut out, result, config, format)?;
    out.flush()?;
    Ok(())
}

pub fn write_results<W: Write>(
    out: &mut W,
    result: &RunResult,
    config: &Config,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Plain => write_plain(out, &result.primes),
        OutputFormat::Json => write_json(out, result, config),
        OutputFormat::Jsonl => write_jsonl(out, result),
        OutputFormat::Count => {
            writeln!(out, "{}", result.count())?;
            Ok(())
        }
    }
}

fn write_plain<W: Write>(out: &mut W, primes: &[i64]) -> Result<()> {
    for prime in primes {
        writeln!(out, "{prime}")?;
    }
    Ok(())
}

fn write_json<W: Write>(out: &mut W, result: &RunResult, config: &Config) -> Result<()> {
    let report = Report {
        low: config.low,
        high: config.high,
        workers: result.workers,
        partitions: result.partitions,
        count: result.count(),
        primes: &result.primes,
    };
    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

fn write_jsonl<W: Write>(out: &mut W, result: &RunResult) -> Result<()> {
    for prime in &result.primes {
        let line = serde_json::json!({ "type": "prime", "value": prime });
        writeln!(out, "{line}")?;
    }
    let total = serde_json::json!({
        "type": "total",
        "version": crate::VERSION,
        "count": result.count(),
        "workers": result.workers,
    });
    writeln!(out, "{total}")?;
    Ok(())
}
