use std::{
    io,
    process::ExitCode,
};

use clap::Parser;
use log::error;

use caravel_test_suite::cli::{
    run,
    Cli,
};


fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info")
    )
    .init();

    let cli = Cli::parse();

    match run(cli, &mut io::stdout()) {
        Ok(true)  => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err)  => {
            error!("{:?}", err);
            ExitCode::FAILURE
        }
    }
}
