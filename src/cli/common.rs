//! Error and exit code types shared by CLI commands.

use std::fmt;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Unexpected failure
    General = 1,
    /// Bad input: arguments, indices, configuration values
    Validation = 2,
    /// Reading or writing files failed
    Io = 3,
}

impl ExitCode {
    /// Numeric code passed to `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// A CLI failure with the exit code it maps to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code
    pub code: ExitCode,
}

impl CliError {
    /// Creates an error with an explicit code.
    pub fn new(message: impl Into<String>, code: ExitCode) -> Self {
        Self {
            message: message.into(),
            code,
        }
    }

    /// Unexpected failure.
    pub fn general(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::General)
    }

    /// Invalid input.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::Validation)
    }

    /// File system failure.
    pub fn io(message: impl Into<String>) -> Self {
        Self::new(message, ExitCode::Io)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        Self::general(format!("{err:#}"))
    }
}

/// Result type of CLI commands.
pub type CliResult<T> = Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(ExitCode::Success.code(), 0);
        assert_eq!(CliError::general("x").code.code(), 1);
        assert_eq!(CliError::validation("x").code.code(), 2);
        assert_eq!(CliError::io("x").code.code(), 3);
    }

    #[test]
    fn test_anyhow_error_keeps_context_chain() {
        let err = anyhow::anyhow!("disk full").context("Failed to save");
        let cli: CliError = err.into();
        assert_eq!(cli.code, ExitCode::General);
        assert_eq!(cli.to_string(), "Failed to save: disk full");
    }
}
