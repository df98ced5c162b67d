mod cli;
mod generate;
mod logging;

use std::process;

use clap::{CommandFactory, Parser};
use tracing::warn;
use weekcal::core::Error;

use crate::cli::Cli;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = generate::run(&cli) {
        if e.downcast_ref::<Error>().is_some_and(|e| e.is_config()) {
            match Cli::command().print_help() {
                Ok(()) => println!(),
                Err(help) => warn!(error = %help, "failed to print usage"),
            }
        }
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
