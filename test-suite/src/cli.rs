//! Command-line interface of the test suite


use std::{
    io::Write,
    path::PathBuf,
};

use clap::Parser;
use log::{
    error,
    info,
};

use caravel_host_lib::Outcome;

use crate::{
    tests,
    Config,
    Error,
    Result,
    TestStand,
};


/// Runs the Caravel GPIO test suite against the firmware model
#[derive(Debug, Parser)]
#[command(name = "caravel-test-suite")]
pub struct Cli {
    /// Configuration file (defaults to `test-stand.toml`, if it exists)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// List the available tests, instead of running them
    #[arg(short, long)]
    pub list: bool,

    /// Tests to run (defaults to all tests)
    pub tests: Vec<String>,
}


/// Run the tests selected on the command line
///
/// Test names are written to `out`, if `--list` was passed. Returns whether
/// all selected tests passed. Tests that fail or abort don't stop the run, but
/// an unknown test name does, before anything runs.
pub fn run(cli: Cli, out: &mut impl Write) -> Result<bool> {
    let registry = tests()?;

    if cli.list {
        for name in registry.names() {
            // Nothing to do about a closed output, except stopping.
            if writeln!(out, "{}", name).is_err() {
                break;
            }
        }
        return Ok(true);
    }

    let config = match cli.config {
        Some(path) => Config::read_from(path)?,
        None       => Config::read()?,
    };

    let mut selected = Vec::new();
    if cli.tests.is_empty() {
        selected.extend(registry.iter());
    }
    for name in &cli.tests {
        let case = registry.find(name)
            .ok_or_else(|| Error::UnknownTest(name.clone()))?;
        selected.push(case);
    }

    let mut stand = TestStand::with_config(config)?;

    let mut failures = 0;
    for case in &selected {
        match (case.run)(&mut stand) {
            Ok(Outcome::Passed) => {
                info!("{} passed", case.name);
            }
            Ok(Outcome::Failed) => {
                error!("{} failed", case.name);
                failures += 1;
            }
            Err(err) => {
                error!("{} aborted: {:?}", case.name, err);
                failures += 1;
            }
        }
    }

    info!(
        "{} of {} tests passed",
        selected.len() - failures,
        selected.len(),
    );
    Ok(failures == 0)
}
