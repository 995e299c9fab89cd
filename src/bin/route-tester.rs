//! Run a route-test suite and print the report.
//!
//! ```text
//! route-tester routes.toml
//! route-tester routes.toml --url blog/5 --url about
//! route-tester routes.toml --loose --dump
//! ```
//!
//! Exits with status 1 when any case with expectations fails and 2 when the
//! suite cannot be loaded.

use clap::Parser;
use route_tester::cli::{exit_status, run, Args};
use route_tester::error_log;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let outcome = run(&args, &mut std::io::stdout().lock());
    if let Err(err) = &outcome {
        error_log!("{:#}", err);
        eprintln!("error: {err:#}");
    }
    ExitCode::from(exit_status(&outcome))
}
