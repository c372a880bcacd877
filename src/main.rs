//! Binary entry point for `ccx-params`.
//!
//! Parses and validates the command line, then reports the outcome through
//! the process exit status:
//!
//! 1. `--help` / `--version` print their text and exit with the help code.
//! 2. Any [`ParamsError`] is printed on stderr and mapped through
//!    [`ParamsError::exit_code`].
//! 3. A valid configuration exits with 0; at display level 3 and above the
//!    finalized configuration is dumped on stderr first.

use anyhow::Context;

use ccx_params::cli::args::{parse_args, Outcome};
use ccx_params::cli::constants::{display_level, set_display_level};
use ccx_params::cli::help::{print_usage, version_report};
use ccx_params::error::ExitCode;
use ccx_params::options::{DebugFlags, MessagesTarget, Options};
use ccx_params::{display, displaylevel, displayout, ParamsError};

fn show_version() -> anyhow::Result<()> {
    let exe = std::env::current_exe().context("could not locate the running executable")?;
    displayout!("{}", version_report(&exe));
    Ok(())
}

fn report(opts: &Options) {
    if opts.messages_target == MessagesTarget::Quiet {
        set_display_level(0);
    } else if opts.debug.contains(DebugFlags::VERBOSE) && display_level() < 4 {
        set_display_level(4);
    }
    displaylevel!(3, "{opts:#?}\n");
}

fn fail(err: &ParamsError) -> i32 {
    displaylevel!(1, "Error: {err}\n");
    err.exit_code().code()
}

fn run() -> i32 {
    match parse_args() {
        Ok(Outcome::ShowHelp) => {
            print_usage();
            ExitCode::WithHelp.code()
        }
        Ok(Outcome::ShowVersion) => {
            if let Err(e) = show_version() {
                display!("{e:#}\n");
            }
            ExitCode::WithHelp.code()
        }
        Ok(Outcome::Run(opts)) => {
            report(&opts);
            ExitCode::Ok.code()
        }
        Err(e) => fail(&e),
    }
}

fn main() {
    std::process::exit(run());
}
