//! Main application entry point.
//!
//! Parses the command line, handles help and version early, then loads the
//! configuration and hands the query to the matching command:
//!
//! 1. Argument parsing and early exit for help/version
//! 2. Optional file logging (`--log <file>`)
//! 3. Configuration loading from the default or `--config` directory
//! 4. Command dispatch, with errors reported in the log tree

use anyhow::Result;
use chrono::Utc;

use suntimes::args::{self, CliAction, Command, ParsedArgs, QueryOptions};
use suntimes::constants::{EXIT_FAILURE, EXIT_SUCCESS};
use suntimes::logger::Log;
use suntimes::{commands, config, log_end, log_error, log_error_exit, log_indented, log_pipe};

fn main() {
    let parsed = ParsedArgs::from_env();

    let code = match parsed.action {
        CliAction::ShowVersion => {
            args::display_version_info();
            EXIT_SUCCESS
        }
        CliAction::ShowHelp => {
            args::display_help();
            EXIT_SUCCESS
        }
        CliAction::ShowHelpDueToError => {
            args::display_help();
            EXIT_FAILURE
        }
        CliAction::Run { command, options } => run(command, &options),
    };

    std::process::exit(code);
}

/// Run a command and turn its outcome into an exit code.
///
/// The file logger guard lives in this frame so the log is flushed before
/// `main` exits the process.
fn run(command: Command, options: &QueryOptions) -> i32 {
    let _log_guard = match options.log_file {
        Some(ref path) => match Log::start_file_logging(path.clone()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                log_error_exit!("Failed to start file logging: {e:#}");
                return EXIT_FAILURE;
            }
        },
        None => None,
    };

    // JSON goes through write_output; keep the decorated log out of it
    if options.json {
        Log::set_enabled(false);
    }

    match execute(command, options) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            Log::set_enabled(true);
            log_pipe!();
            log_error!("{e}");
            for cause in e.chain().skip(1) {
                log_indented!("{cause}");
            }
            log_end!();
            EXIT_FAILURE
        }
    }
}

fn execute(command: Command, options: &QueryOptions) -> Result<()> {
    config::set_config_dir(options.config_dir.clone())?;
    let config = config::load()?;
    commands::run_command(command, options, &config, Utc::now())
}
