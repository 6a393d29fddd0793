use tracing_subscriber::filter::LevelFilter;

/// Install the stderr subscriber.
///
/// Records emitted through the `log` facade by the engine are forwarded to
/// the same subscriber. Calling this more than once is a no-op.
pub fn init(verbose: bool) {
    let level = if verbose {
        LevelFilter::DEBUG
    } else {
        LevelFilter::WARN
    };

    let _ = tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}
