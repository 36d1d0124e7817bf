//! Entry point for cflogin.
use std::io::{stdin, stdout};
use std::process::ExitCode;

use cflogin::{
    cli::{self, LoginArgs},
    config::HomeDir,
    login::CfCliLogin,
    telemetry,
};
use clap::Parser;

fn main() -> ExitCode {
    match bootstrap() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn bootstrap() -> anyhow::Result<()> {
    telemetry::init_tracing()?;
    let args = LoginArgs::parse();
    let home = HomeDir::from_env();
    cli::run(args, &home, &CfCliLogin, stdin().lock(), stdout().lock())
}
