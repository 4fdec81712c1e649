//! User-Friendly Error Formatting
//!
//! Turns the binary's `anyhow` errors into a boxed message with a short list
//! of likely causes.

use std::fmt::Write;

const RULE: &str = "━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━";

/// Error category used to pick troubleshooting hints
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Config file missing, unreadable or invalid
    Config,
    /// Trace file missing, malformed or out of order
    Trace,
    /// Log file could not be opened
    Logging,
    /// Anything else
    Other,
}

/// Pick a category from the error chain
pub fn classify_error(error: &anyhow::Error) -> ErrorKind {
    let chain = format!("{:#}", error).to_lowercase();

    if chain.contains("trace") {
        ErrorKind::Trace
    } else if chain.contains("config") {
        ErrorKind::Config
    } else if chain.contains("log file") || chain.contains("log directory") {
        ErrorKind::Logging
    } else {
        ErrorKind::Other
    }
}

/// Format error for user consumption
pub fn format_user_error(error: &anyhow::Error) -> String {
    let mut output = String::new();

    writeln!(output).ok();
    writeln!(
        output,
        "╔════════════════════════════════════════════════════════════╗"
    )
    .ok();
    writeln!(
        output,
        "║                     ERROR                                  ║"
    )
    .ok();
    writeln!(
        output,
        "╚════════════════════════════════════════════════════════════╝"
    )
    .ok();
    writeln!(output).ok();

    let (title, hints): (&str, &[&str]) = match classify_error(error) {
        ErrorKind::Config => (
            "Configuration Error",
            &[
                "Check the TOML syntax of the config file",
                "log level must be trace, debug, info, warn or error",
                "log format must be pretty, compact or json",
                "input.max_touch_slots must be between 1 and 64",
                "replay.speed must be greater than zero",
            ],
        ),
        ErrorKind::Trace => (
            "Trace Error",
            &[
                "The trace must be a JSON object with a \"steps\" array",
                "Each step needs \"at_ms\" and an \"event\" with a \"type\" tag",
                "Step offsets (at_ms) must never decrease",
            ],
        ),
        ErrorKind::Logging => (
            "Logging Error",
            &[
                "Check that the log directory exists and is writable",
                "Omit --log-file to log to the console only",
            ],
        ),
        ErrorKind::Other => ("Unexpected Error", &[]),
    };

    writeln!(output, "{}", title).ok();
    if !hints.is_empty() {
        writeln!(output).ok();
        writeln!(output, "Things to check:").ok();
        for hint in hints {
            writeln!(output, "  → {}", hint).ok();
        }
    }

    writeln!(output).ok();
    writeln!(output, "{}", RULE).ok();
    writeln!(output, "Technical Details:").ok();
    writeln!(output).ok();
    writeln!(output, "{:#}", error).ok();
    writeln!(output).ok();
    writeln!(output, "{}", RULE).ok();
    writeln!(output, "Run with -vv for detailed logs").ok();

    output
}
