//! Command-line argument parsing and processing.
//!
//! Parses the subcommand, the location and date overrides, and the output
//! switches into a [`CliAction`] for `main` to dispatch. Unknown options and
//! malformed values never abort parsing halfway: they are reported as warnings
//! and the action becomes [`CliAction::ShowHelpDueToError`].

use chrono::NaiveDate;

/// Which report to print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Sunrise, sunset, solar noon and day length.
    #[default]
    Times,
    /// Civil, nautical and astronomical dawn and dusk.
    Twilight,
    /// Sunrise and sunset for consecutive days.
    Range { days: Option<u32> },
    /// Current azimuth and altitude of the sun.
    Position,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Times => "times",
            Command::Twilight => "twilight",
            Command::Range { .. } => "range",
            Command::Position => "position",
        }
    }
}

/// Settings shared by every command. `None` means "use the config file".
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub date: Option<NaiveDate>,
    pub timezone: Option<String>,
    pub json: bool,
    /// `--24h`: force the 24-hour clock.
    pub hour24: bool,
    pub debug_enabled: bool,
    pub config_dir: Option<String>,
    pub log_file: Option<String>,
}

/// Represents the parsed command-line arguments and their intended actions.
#[derive(Debug, PartialEq)]
pub enum CliAction {
    /// Run a command with these settings
    Run {
        command: Command,
        options: QueryOptions,
    },
    /// Display help information and exit
    ShowHelp,
    /// Display version information and exit
    ShowVersion,
    /// Show help due to unknown arguments and exit
    ShowHelpDueToError,
}

/// Result of parsing command-line arguments.
pub struct ParsedArgs {
    pub action: CliAction,
}

/// Take the value following a flag, warning when it is missing.
fn take_value<'a>(args: &'a [String], i: &mut usize, flag: &str) -> Option<&'a str> {
    match args.get(*i + 1) {
        Some(value) => {
            *i += 1;
            Some(value.as_str())
        }
        None => {
            log_warning!("Missing value for {flag}");
            None
        }
    }
}

fn parse_degrees(value: &str, flag: &str) -> Option<f64> {
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => {
            log_warning!("Invalid value for {flag}: '{value}' (expected decimal degrees)");
            None
        }
    }
}

impl ParsedArgs {
    /// Parse command-line arguments into a structured result.
    ///
    /// The first element is the program name and is skipped. Flags may appear
    /// before or after the command; `--version` takes precedence over `--help`,
    /// which takes precedence over errors.
    pub fn parse<I, S>(args: I) -> ParsedArgs
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let args_vec: Vec<String> = args
            .into_iter()
            .skip(1)
            .map(|s| s.as_ref().to_string())
            .collect();

        let mut options = QueryOptions::default();
        let mut command: Option<Command> = None;
        let mut display_help = false;
        let mut display_version = false;
        let mut error_found = false;

        let mut i = 0;
        while i < args_vec.len() {
            let arg_str = args_vec[i].as_str();
            match arg_str {
                "--help" | "-h" => display_help = true,
                "--version" | "-V" | "-v" => display_version = true,
                "--debug" | "-d" => options.debug_enabled = true,
                "--json" | "-j" => options.json = true,
                "--24h" => options.hour24 = true,
                "--lat" | "-l" => {
                    match take_value(&args_vec, &mut i, arg_str)
                        .and_then(|v| parse_degrees(v, "--lat"))
                    {
                        Some(lat) => options.latitude = Some(lat),
                        None => error_found = true,
                    }
                }
                "--lon" | "-L" => {
                    match take_value(&args_vec, &mut i, arg_str)
                        .and_then(|v| parse_degrees(v, "--lon"))
                    {
                        Some(lon) => options.longitude = Some(lon),
                        None => error_found = true,
                    }
                }
                "--date" | "-D" => match take_value(&args_vec, &mut i, arg_str) {
                    Some(value) => match NaiveDate::parse_from_str(value, "%Y-%m-%d") {
                        Ok(date) => options.date = Some(date),
                        Err(_) => {
                            log_warning!("Invalid date: '{value}' (expected YYYY-MM-DD)");
                            error_found = true;
                        }
                    },
                    None => error_found = true,
                },
                "--tz" | "-z" => match take_value(&args_vec, &mut i, arg_str) {
                    Some(value) => options.timezone = Some(value.to_string()),
                    None => error_found = true,
                },
                "--config" | "-c" => match take_value(&args_vec, &mut i, arg_str) {
                    Some(value) => options.config_dir = Some(value.to_string()),
                    None => error_found = true,
                },
                "--log" => match take_value(&args_vec, &mut i, arg_str) {
                    Some(value) => options.log_file = Some(value.to_string()),
                    None => error_found = true,
                },
                _ if arg_str.starts_with('-') => {
                    log_warning!("Unknown option: {arg_str}");
                    error_found = true;
                }
                _ => match command {
                    None => match arg_str {
                        "times" | "t" => command = Some(Command::Times),
                        "twilight" | "tw" => command = Some(Command::Twilight),
                        "range" | "r" => command = Some(Command::Range { days: None }),
                        "position" | "pos" | "p" => command = Some(Command::Position),
                        "help" => display_help = true,
                        _ => {
                            log_warning!("Unknown command: {arg_str}");
                            error_found = true;
                        }
                    },
                    Some(Command::Range { days: None }) => match arg_str.parse::<u32>() {
                        Ok(days) => command = Some(Command::Range { days: Some(days) }),
                        Err(_) => {
                            log_warning!("Invalid day count: '{arg_str}'");
                            error_found = true;
                        }
                    },
                    Some(other) => {
                        log_warning!("Unexpected argument '{arg_str}' for '{}'", other.as_str());
                        error_found = true;
                    }
                },
            }
            i += 1;
        }

        let action = if display_version {
            CliAction::ShowVersion
        } else if display_help {
            CliAction::ShowHelp
        } else if error_found {
            CliAction::ShowHelpDueToError
        } else {
            CliAction::Run {
                command: command.unwrap_or_default(),
                options,
            }
        };

        ParsedArgs { action }
    }

    /// Convenience method to parse from std::env::args()
    pub fn from_env() -> ParsedArgs {
        Self::parse(std::env::args())
    }
}

/// Displays version information using custom logging style.
pub fn display_version_info() {
    log_version!();
    log_pipe!();
    crate::logger::write_output(&format!("┗ {}\n", env!("CARGO_PKG_DESCRIPTION")));
}

/// Displays custom help message using logger methods.
pub fn display_help() {
    log_version!();
    log_block_start!(env!("CARGO_PKG_DESCRIPTION"));
    log_block_start!("Usage:");
    log_indented!("suntimes [OPTIONS] [COMMAND]");
    log_block_start!("Options:");
    log_indented!("-l, --lat <deg>        Latitude in decimal degrees (north positive)");
    log_indented!("-L, --lon <deg>        Longitude in decimal degrees (east positive)");
    log_indented!("-D, --date <date>      Calendar date as YYYY-MM-DD (default: today)");
    log_indented!("-z, --tz <zone>        IANA timezone (default: config or detected)");
    log_indented!("-j, --json             Print the JSON payload instead of a report");
    log_indented!("    --24h              Use the 24-hour clock");
    log_indented!("-c, --config <dir>     Use custom configuration directory");
    log_indented!("-d, --debug            Show solar calculation details");
    log_indented!("    --log <file>       Write output to a file instead of stdout");
    log_indented!("-h, --help             Print help information");
    log_indented!("-V, --version          Print version information");
    log_block_start!("Commands:");
    log_indented!("times, t               Sunrise, sunset, solar noon (default)");
    log_indented!("twilight, tw           Civil, nautical and astronomical twilight");
    log_indented!("range, r [days]        Sunrise and sunset for several days");
    log_indented!("position, p            Current position of the sun");
    log_indented!("help                   Print help information");
    log_end!();
}
