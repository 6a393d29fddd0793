use clap::Parser;
use prime_range_cli::args::Args;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();
    prime_range_cli::logging::init(args.verbose);

    match prime_range_cli::execute(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
