use std::process::ExitCode;
use clap::Parser as ClapParser;
use sexpr_lang::{Config, Error};

fn main() -> ExitCode {
    let config: Config = Config::parse();

    match sexpr_lang::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        // Already printed as they were reported
        Err(Error::Diagnostics(_)) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        },
    }
}
