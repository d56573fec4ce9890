//! Error handling for codebase-capture
//!
//! Every fatal failure of a capture run is represented by [`CaptureError`].
//! Per-file read failures during the content phase are not errors at this
//! level; they are written inline into the output.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Error type for capture operations
#[derive(Error, Debug)]
pub enum CaptureError {
    /// Root directory could not be resolved
    #[error("Root directory not found: {}: {source}", .path.display())]
    RootNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Output file could not be created
    #[error("Failed to open output file {}: {source}", .path.display())]
    OutputFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory listing failed while rendering the tree
    #[error("Failed to list directory {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Tree recursion went deeper than the configured limit
    #[error("Directory nesting exceeds {limit} levels at {} (symlink cycle?)", .path.display())]
    DepthLimitExceeded { path: PathBuf, limit: usize },

    /// File system errors
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}

/// Specialized Result type for capture operations
pub type Result<T> = std::result::Result<T, CaptureError>;

/// Creates a CaptureError with a formatted message
#[macro_export]
macro_rules! error {
    ($error_type:ident, $($arg:tt)*) => {
        $crate::error::CaptureError::$error_type(format!($($arg)*))
    };
}

/// Returns an error result with a formatted message
#[macro_export]
macro_rules! bail {
    ($error_type:ident, $($arg:tt)*) => {
        return Err($crate::error!($error_type, $($arg)*))
    };
}

/// Ensures a condition is true, otherwise returns an error
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $error_type:ident, $($arg:tt)*) => {
        if !($cond) {
            $crate::bail!($error_type, $($arg)*)
        }
    };
}

// Lets callers that work in io::Result use `?` on capture operations
impl From<CaptureError> for io::Error {
    fn from(err: CaptureError) -> Self {
        match err {
            CaptureError::Io(e) => e,
            other => io::Error::new(io::ErrorKind::Other, other.to_string()),
        }
    }
}
