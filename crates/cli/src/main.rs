use clap::Parser;
use lln_cli::args::Args;
use lln_cli::config::Config;
use lln_cli::logging;
use std::process::ExitCode;

fn main() -> ExitCode {
    let args = Args::parse();

    if let Err(e) = logging::init(logging::level_for(args.debug)) {
        eprintln!("Logger Error: {e}");
    }

    match Config::try_from(args).and_then(|config| lln_cli::run(&config)) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
