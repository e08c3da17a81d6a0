//! Error types and exit codes for astkit.
//!
//! `AstkitError` is the single error type surfaced by processors and the CLI.
//! Errors from the tree crate, the filesystem, JSON decoding and config
//! loading are bridged into it with `From` impls so `?` works everywhere.
//!
//! ## Exit Code Mapping
//!
//! - `2`: Invalid arguments (bad flag values, unparsable config or tree)
//! - `3`: Input not found
//! - `4`: Render errors (node kind outside the dialect, malformed node)
//! - `5`: Processor failures
//! - `10`: Internal errors (unexpected I/O or serialization failures)

use std::fmt;
use std::io;
use std::path::PathBuf;

use astkit_ast::{RenderError, VersionParseError};
use thiserror::Error;

// ============================================================================
// Output Error Codes
// ============================================================================

/// Stable process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OutputErrorCode {
    /// Invalid arguments from caller (bad input, malformed request).
    InvalidArguments = 2,
    /// A named input file does not exist.
    NotFound = 3,
    /// The tree could not be rendered.
    RenderFailed = 4,
    /// A processor rejected the tree.
    ProcessorFailed = 5,
    /// Internal errors (bugs, unexpected state).
    InternalError = 10,
}

impl OutputErrorCode {
    /// Get the numeric code value.
    pub fn code(&self) -> u8 {
        *self as u8
    }
}

impl fmt::Display for OutputErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ============================================================================
// Unified Error Type
// ============================================================================

/// Unified error type for processors and CLI output.
#[derive(Debug, Error)]
pub enum AstkitError {
    /// Invalid arguments from caller.
    #[error("invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Input file not found.
    #[error("file not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// Rendering failed.
    #[error("render error: {0}")]
    Render(#[from] RenderError),

    /// Unparsable Python version string.
    #[error(transparent)]
    Version(#[from] VersionParseError),

    /// Config file could not be decoded.
    #[error("invalid config {}: {source}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Tree JSON could not be decoded or encoded.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A processor refused the tree.
    #[error("processor '{name}' failed: {message}")]
    Processor { name: String, message: String },

    /// I/O failure.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Internal error (bug or unexpected state).
    #[error("internal error: {message}")]
    InternalError { message: String },
}

// ============================================================================
// Error Code Mapping
// ============================================================================

impl From<&AstkitError> for OutputErrorCode {
    fn from(err: &AstkitError) -> Self {
        match err {
            AstkitError::InvalidArguments { .. } => OutputErrorCode::InvalidArguments,
            AstkitError::Version(_) => OutputErrorCode::InvalidArguments,
            AstkitError::Config { .. } => OutputErrorCode::InvalidArguments,
            AstkitError::Json(_) => OutputErrorCode::InvalidArguments,
            AstkitError::FileNotFound { .. } => OutputErrorCode::NotFound,
            AstkitError::Render(_) => OutputErrorCode::RenderFailed,
            AstkitError::Processor { .. } => OutputErrorCode::ProcessorFailed,
            AstkitError::Io(_) => OutputErrorCode::InternalError,
            AstkitError::InternalError { .. } => OutputErrorCode::InternalError,
        }
    }
}

impl From<AstkitError> for OutputErrorCode {
    fn from(err: AstkitError) -> Self {
        OutputErrorCode::from(&err)
    }
}

// ============================================================================
// Convenience Constructors
// ============================================================================

impl AstkitError {
    /// Create an invalid arguments error.
    pub fn invalid_args(message: impl Into<String>) -> Self {
        AstkitError::InvalidArguments {
            message: message.into(),
        }
    }

    /// Create a processor failure.
    pub fn processor(name: impl Into<String>, message: impl Into<String>) -> Self {
        AstkitError::Processor {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Create an internal error.
    pub fn internal(message: impl Into<String>) -> Self {
        AstkitError::InternalError {
            message: message.into(),
        }
    }

    /// Map an I/O error on `path`, turning a missing file into
    /// [`AstkitError::FileNotFound`].
    pub fn from_io(path: impl Into<PathBuf>, err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::NotFound {
            AstkitError::FileNotFound { path: path.into() }
        } else {
            AstkitError::Io(err)
        }
    }
}

/// Result type for astkit operations.
pub type AstkitResult<T> = Result<T, AstkitError>;
