use std::path::PathBuf;

/// junit-to-ctrf error types
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Configuration file not found or invalid
    #[error("config error: {message}")]
    Config {
        message: String,
        path: Option<PathBuf>,
    },

    /// Invalid command-line arguments
    #[error("argument error: {0}")]
    Argument(String),

    /// Glob pattern could not be compiled
    #[error("invalid pattern '{pattern}': {message}")]
    Pattern { pattern: String, message: String },

    /// File I/O error
    #[error("io error: {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Report file is not well-formed XML.
    #[error("xml error: {}: {message}", .path.display())]
    Xml { path: PathBuf, message: String },

    /// Report could not be serialized.
    #[error("serialize error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Result type using junit-to-ctrf Error
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Report written, or nothing to convert
    Success = 0,
    /// A matched file could not be read, parsed, or written
    ConversionFailed = 1,
    /// Configuration or argument error
    ConfigError = 2,
    /// Unexpected failure outside the conversion itself
    InternalError = 3,
}

impl From<&Error> for ExitCode {
    fn from(err: &Error) -> Self {
        match err {
            Error::Config { .. } | Error::Argument(_) | Error::Pattern { .. } => {
                ExitCode::ConfigError
            }
            Error::Io { .. } | Error::Xml { .. } | Error::Serialize(_) => {
                ExitCode::ConversionFailed
            }
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
