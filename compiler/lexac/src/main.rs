//! `lexa` binary entry point.

use std::process::ExitCode;

use clap::Parser;
use lexac::args::CliArgs;
use lexac::{commands, logging};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    logging::init(args.verbosity());

    match commands::run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::debug!(error = ?err, "command failed");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
