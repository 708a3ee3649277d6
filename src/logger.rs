//! Structured logging system with visual formatting.
//!
//! This module provides the box-drawing log output used by every suntimes command.
//! Messages are grouped into blocks with Unicode pipes so a multi-part report
//! (sun times, twilight tables, debug diagnostics) reads as one connected tree.
//!
//! Output normally goes to stdout with ANSI colors. When `--log <file>` is given,
//! output is routed through a channel to a writer thread and colors are stripped.

use std::fmt;
use std::io::Write;
use std::sync::OnceLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Sender, channel};

static LOGGING_ENABLED: AtomicBool = AtomicBool::new(true);

// Channel for routing output to file when --log is active
static LOG_CHANNEL: OnceLock<Sender<LogMessage>> = OnceLock::new();

enum LogMessage {
    Formatted(String),
    Shutdown,
}

/// Main logging interface.
///
/// ## Logging Conventions
///
/// - **`log_version!`**: the `┏ suntimes vX.Y.Z ━━╸` header, once per command.
/// - **`log_block_start!`**: opens a new block (`┃` spacer, then `┣ message`).
/// - **`log_decorated!`**: `┣ message`, continuing the current block.
/// - **`log_indented!`**: `┃   message`, for rows and details under a block.
/// - **`log_pipe!`**: a bare `┃` spacer, used before level-prefixed messages.
/// - **`log_end!`**: the closing `╹`.
/// - **`log_info!`, `log_warning!`, `log_error!`, `log_debug!`**: `┣[LEVEL] message`.
/// - **`log_warning_standalone!`**: `[WARNING] message` without box drawing, for
///   output that happens before a header has been printed.
/// - **`log_error_exit!`**: `┗[ERROR] message`, terminating the tree.
pub struct Log;

impl Log {
    /// Enable or disable logging.
    ///
    /// JSON output bypasses this switch; it only silences the decorated log.
    pub fn set_enabled(enabled: bool) {
        LOGGING_ENABLED.store(enabled, Ordering::SeqCst);
    }

    /// Check if logging is currently enabled.
    pub fn is_enabled() -> bool {
        LOGGING_ENABLED.load(Ordering::SeqCst)
    }

    /// Start file logging to the specified path.
    ///
    /// Can be called once per process; the returned guard flushes the file on drop.
    pub fn start_file_logging(file_path: String) -> anyhow::Result<LoggerGuard> {
        let (tx, rx) = channel();

        LOG_CHANNEL
            .set(tx.clone())
            .map_err(|_| anyhow::anyhow!("Logger channel already initialized"))?;

        let handle = std::thread::spawn(move || {
            let mut file = std::fs::File::create(&file_path)?;

            loop {
                match rx.recv() {
                    Ok(LogMessage::Formatted(text)) => {
                        file.write_all(text.as_bytes())?;
                    }
                    Ok(LogMessage::Shutdown) | Err(_) => {
                        file.flush()?;
                        break;
                    }
                }
            }

            Ok::<(), anyhow::Error>(())
        });

        Ok(LoggerGuard {
            tx,
            handle: Some(handle),
        })
    }

    /// Format one log line with the given box-drawing lead and route it.
    ///
    /// Public for macro access.
    pub fn emit(lead: &str, message: fmt::Arguments<'_>) {
        if Self::is_enabled() {
            write_output(&format!("{lead}{message}\n"));
        }
    }
}

/// Guard for file logging that ensures clean shutdown.
pub struct LoggerGuard {
    tx: Sender<LogMessage>,
    handle: Option<std::thread::JoinHandle<anyhow::Result<()>>>,
}

impl Drop for LoggerGuard {
    fn drop(&mut self) {
        let _ = self.tx.send(LogMessage::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

/// Remove ANSI color sequences (`ESC [ ... m`) from text.
fn strip_ansi_codes(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\x1b' && chars.peek() == Some(&'[') {
            chars.next();
            for ch in chars.by_ref() {
                if ch == 'm' {
                    break;
                }
            }
        } else {
            result.push(ch);
        }
    }

    result
}

/// Route text to the log file if one is active, otherwise to stdout.
pub fn write_output(text: &str) {
    if let Some(tx) = LOG_CHANNEL.get() {
        let _ = tx.send(LogMessage::Formatted(strip_ansi_codes(text)));
    } else {
        print!("{text}");
        let _ = std::io::stdout().flush();
    }
}

// # Logging Macros

/// Log a decorated message as part of the current block.
#[macro_export]
macro_rules! log_decorated {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┣ ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┣ ", format_args!("{}", $expr))
    };
}

/// Log an indented message for rows and details within a block.
#[macro_export]
macro_rules! log_indented {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┃   ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┃   ", format_args!("{}", $expr))
    };
}

/// Log a visual pipe separator for vertical spacing.
#[macro_export]
macro_rules! log_pipe {
    () => {
        $crate::logger::Log::emit("┃", format_args!(""))
    };
}

/// Log a block start message, initiating a new conceptual block.
#[macro_export]
macro_rules! log_block_start {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┃\n┣ ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┃\n┣ ", format_args!("{}", $expr))
    };
}

/// Log the application version header.
#[macro_export]
macro_rules! log_version {
    () => {
        $crate::logger::Log::emit(
            "┏ ",
            format_args!("suntimes v{} ━━╸", env!("CARGO_PKG_VERSION")),
        )
    };
}

/// Log the final termination marker.
#[macro_export]
macro_rules! log_end {
    () => {
        $crate::logger::Log::emit("╹", format_args!(""))
    };
}

/// Log a warning message with yellow level prefix.
#[macro_export]
macro_rules! log_warning {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┣[\x1b[33mWARNING\x1b[0m] ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┣[\x1b[33mWARNING\x1b[0m] ", format_args!("{}", $expr))
    };
}

/// Log a warning without box drawing, for output before a header exists.
#[macro_export]
macro_rules! log_warning_standalone {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("[\x1b[33mWARNING\x1b[0m] ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("[\x1b[33mWARNING\x1b[0m] ", format_args!("{}", $expr))
    };
}

/// Log an error message with red level prefix.
#[macro_export]
macro_rules! log_error {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┣[\x1b[31mERROR\x1b[0m] ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┣[\x1b[31mERROR\x1b[0m] ", format_args!("{}", $expr))
    };
}

/// Log an error that terminates the output tree.
#[macro_export]
macro_rules! log_error_exit {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┃\n┗[\x1b[31mERROR\x1b[0m] ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┃\n┗[\x1b[31mERROR\x1b[0m] ", format_args!("{}", $expr))
    };
}

/// Log an informational message with green level prefix.
#[macro_export]
macro_rules! log_info {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┣[\x1b[32mINFO\x1b[0m] ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┣[\x1b[32mINFO\x1b[0m] ", format_args!("{}", $expr))
    };
}

/// Log a debug message with green level prefix.
#[macro_export]
macro_rules! log_debug {
    ($fmt:literal $($arg:tt)*) => {
        $crate::logger::Log::emit("┣[\x1b[32mDEBUG\x1b[0m] ", format_args!($fmt $($arg)*))
    };
    ($expr:expr) => {
        $crate::logger::Log::emit("┣[\x1b[32mDEBUG\x1b[0m] ", format_args!("{}", $expr))
    };
}
