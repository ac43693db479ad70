//! `premium` binary entrypoint.

use std::process::ExitCode;

use clap::Parser;
use premium_predictor::cli_app::{Cli, run};
use premium_predictor::logger;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logger::init(cli.verbose);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("premium: {err}");
            ExitCode::FAILURE
        }
    }
}
