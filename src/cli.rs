//! Command-line front end behind the `route-tester` binary.
//!
//! [`run`] loads a suite, tests its cases (or the `--url` overrides) and
//! writes the report to any [`Write`]r. [`exit_status`] maps the outcome to
//! the process exit code:
//!
//! | Code | Meaning |
//! |------|---------|
//! | [`EXIT_OK`] | no case with expectations failed |
//! | [`EXIT_FAILED`] | at least one case with expectations failed |
//! | [`EXIT_ERROR`] | the suite could not be loaded or its routes built |

use crate::dump::{dump, DumpKind};
use crate::{info_log, load_suite, render_dump, render_report};
use crate::{CompareMode, RouteTester, Summary, TestInput};
use anyhow::{Context, Result};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;

pub const EXIT_OK: u8 = 0;
pub const EXIT_FAILED: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "route-tester", version, about = "Check which route each URL matches")]
pub struct Args {
    /// Suite file with [[route]], [[case]] and optional [dump.*] tables
    pub suite: PathBuf,

    /// Test these URLs instead of the suite's cases
    #[arg(long = "url", value_name = "URL")]
    pub urls: Vec<String>,

    /// Treat numeric-looking values as numbers when comparing
    #[arg(long)]
    pub loose: bool,

    /// Also print the suite's config, i18n and message dumps
    #[arg(long)]
    pub dump: bool,
}

impl Args {
    fn mode(&self) -> CompareMode {
        if self.loose {
            CompareMode::Loose
        } else {
            CompareMode::Exact
        }
    }
}

/// Run the suite named by `args`, writing the report to `out`.
///
/// Returns whether every case with expectations passed.
pub fn run(args: &Args, out: &mut dyn Write) -> Result<bool> {
    let suite = load_suite(&args.suite)?;
    let registry = suite
        .registry()
        .with_context(|| format!("invalid routes in {}", args.suite.display()))?;
    info_log!("testing against {} routes", registry.len());

    let input = if args.urls.is_empty() {
        suite.input()
    } else {
        TestInput::from(args.urls.clone())
    };
    let mode = args.mode();

    let cases = RouteTester::new(registry).test(input);
    write!(out, "{}", render_report(&cases, mode))?;

    if args.dump {
        let source = suite.dump_source();
        for kind in [DumpKind::Config, DumpKind::I18n, DumpKind::Message] {
            let entries = suite.dump.entries(kind);
            if entries.is_empty() {
                continue;
            }
            writeln!(out)?;
            write!(out, "{}", render_dump(&dump(kind, entries, &source)))?;
        }
    }

    Ok(Summary::from_cases_with(&cases, mode).is_success())
}

/// Exit code for the outcome of [`run`].
pub fn exit_status(outcome: &Result<bool>) -> u8 {
    match outcome {
        Ok(true) => EXIT_OK,
        Ok(false) => EXIT_FAILED,
        Err(_) => EXIT_ERROR,
    }
}
