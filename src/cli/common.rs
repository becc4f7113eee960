//! Shared CLI error handling and exit codes.

use std::fmt;

/// Process exit codes used by CLI commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed successfully
    Success = 0,
    /// Input was rejected (bad arguments, invalid configuration values)
    ValidationError = 1,
    /// File system or serialization failure
    IoError = 2,
}

impl ExitCode {
    /// Numeric process exit code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying the exit code to use.
#[derive(Debug)]
pub struct CliError {
    /// Human-readable message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Creates a validation error (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// Creates an I/O error (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Prints a value as pretty JSON to stdout.
pub fn print_json<T: serde::Serialize>(value: &T) -> CliResult<()> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))?;
    println!("{text}");
    Ok(())
}
