//! Error types for pocketsync.
//!
//! Uses `thiserror` for structured error types that map to exit codes.
//!
//! The taxonomy mirrors the failure modes of a single retrieval call:
//! - **Retrieval**: the provider answered with a non-200 status
//! - **Transport**: connection failures and timeouts from the HTTP layer
//! - **Parse**: a 200 response whose body could not be decoded
//! - **Configuration**: missing or unreadable consumer-key configuration
//!
//! No error is retried or suppressed internally; a failed call is always
//! surfaced to the caller.

use thiserror::Error;

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// Unexpected failure
    GeneralError = 1,
    /// Missing or invalid configuration
    ConfigError = 2,
    /// Response could not be decoded
    ParseError = 3,
    /// Timeout
    Timeout = 4,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> Self {
        code as i32
    }
}

/// Main error type for pocketsync operations.
#[derive(Error, Debug)]
pub enum PocketError {
    // ==========================================================================
    // Retrieval errors (provider answered, but not with 200)
    // ==========================================================================
    /// The provider returned a non-200 status. Carries the status code and
    /// the raw response body as diagnostic payload.
    #[error("could not retrieve: {status}: {body}")]
    Retrieval {
        status: u16,
        body: String,
    },

    // ==========================================================================
    // Transport errors
    // ==========================================================================
    /// Request timed out after the client's configured duration.
    #[error("request timeout after {0} seconds")]
    Timeout(u64),

    /// Connection-level failure (DNS, refused, reset, TLS).
    #[error("network error: {0}")]
    Network(String),

    // ==========================================================================
    // Parse errors
    // ==========================================================================
    /// A 200 response whose body was not the expected JSON shape.
    #[error("failed to parse response: {0}")]
    ParseResponse(String),

    // ==========================================================================
    // Configuration errors
    // ==========================================================================
    /// No consumer key found in flag, environment, or config file.
    #[error(
        "no consumer key configured (set --consumer-key, POCKETSYNC_CONSUMER_KEY, or add consumer_key to config.toml)"
    )]
    MissingConsumerKey,

    /// Error parsing the configuration file.
    #[error("config parse error at {path}: {message}")]
    ConfigParse {
        path: String,
        message: String,
    },

    // ==========================================================================
    // Wrapped errors
    // ==========================================================================
    /// I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Catch-all for other errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PocketError {
    /// Map error to process exit code.
    #[must_use]
    pub const fn exit_code(&self) -> ExitCode {
        match self {
            Self::MissingConsumerKey | Self::ConfigParse { .. } => ExitCode::ConfigError,

            Self::ParseResponse(_) | Self::Json(_) => ExitCode::ParseError,

            Self::Timeout(_) => ExitCode::Timeout,

            Self::Retrieval { .. } | Self::Network(_) | Self::Io(_) | Self::Other(_) => {
                ExitCode::GeneralError
            }
        }
    }

    /// Returns the HTTP status code if this error carries one.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Retrieval { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for pocketsync operations.
pub type Result<T> = std::result::Result<T, PocketError>;
