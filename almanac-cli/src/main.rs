//! Almanac CLI - Command-line interface for solving seed almanacs

mod cli;
mod config;
mod error;
mod input;
mod output;

use almanac_solver::{SolverError, SolverInstance};
use clap::Parser;
use cli::Args;
use config::Config;
use error::CliError;
use input::InputFile;
use output::OutputFormatter;
use std::io::Write;

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<(), CliError> {
    let config = Config::from_args(args)?;
    init_logger(config.debug)?;

    let input_file = InputFile::new(config.input);
    log::debug!("Reading {}", input_file.path().display());
    let input = input_file.read()?;
    let instance = SolverInstance::new(&input).map_err(SolverError::from)?;
    log::debug!(
        "Parsed {} seed value(s) and {} map(s)",
        instance.almanac().seeds().len(),
        instance.almanac().link_count()
    );

    let result = instance.solve(&config.options).map_err(SolverError::from)?;

    OutputFormatter::new(config.quiet).print_result(&result, instance.parse_duration());
    Ok(())
}

/// Install the logger: warnings on stderr, or the full trace on stdout with `--debug`
fn init_logger(debug: bool) -> Result<(), CliError> {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    if debug {
        builder
            .filter_level(log::LevelFilter::Debug)
            .target(env_logger::Target::Stdout)
            .format(|buf, record| writeln!(buf, "{}", record.args()));
    }

    builder
        .try_init()
        .map_err(|e| CliError::Logger(e.to_string()))
}
