//! Command-line interface layer.
//!
//! ## Module Structure
//!
//! - `args`: clap argument definitions
//! - `commands`: `extract`, `translate` and `init` handlers
//! - `exit_status`: process exit codes
//! - `logging`: tracing subscriber setup
//! - `report`: console summaries

use anyhow::Result;

pub mod args;
pub mod commands;
pub mod exit_status;
pub mod logging;
pub mod report;
mod run;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let verbose = args.verbose();

    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    logging::init(verbose)?;

    let result = run::run(args)?;
    report::print(&result, verbose);

    Ok(result.exit_status())
}
