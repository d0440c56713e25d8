//! Error types for the kuji draw tool
//!
//! Draw and session errors are reported to the user as display text; the
//! root error only travels up to the binary.

use std::fmt;

/// Rejection of a draw's parameters. Always detected before a draw is scheduled.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DrawError {
    #[error("Range bound '{input}' is not an integer")]
    InvalidBound { input: String },

    #[error("Range is empty: min {min} is greater than max {max}")]
    EmptyRange { min: i64, max: i64 },

    #[error("A die needs at least one side, got {sides}")]
    InvalidSides { sides: u32 },
}

impl DrawError {
    /// True for the two range validation failures.
    pub fn is_range_error(&self) -> bool {
        matches!(self, DrawError::InvalidBound { .. } | DrawError::EmptyRange { .. })
    }
}

/// Errors returned when asking a session to start a draw
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("A draw is already in progress")]
    Busy,

    #[error(transparent)]
    Draw(#[from] DrawError),
}

/// Root error type for the binary
#[derive(Debug)]
pub enum KujiError {
    /// Configuration loading and validation errors
    Configuration(ConfigurationError),

    /// A draw that could not be started
    Session(SessionError),

    /// Console input/output failures
    Io(String),

    /// A command used in the wrong place
    Usage(String),
}

/// Configuration and validation errors
#[derive(Debug)]
pub enum ConfigurationError {
    ValidationFailed(String),
    InvalidValue { field: String, value: String, reason: String },
    LoadFailed(String),
}

impl fmt::Display for KujiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KujiError::Configuration(e) => write!(f, "Configuration error: {}", e),
            KujiError::Session(e) => write!(f, "Draw error: {}", e),
            KujiError::Io(msg) => write!(f, "I/O error: {}", msg),
            KujiError::Usage(msg) => write!(f, "Usage error: {}", msg),
        }
    }
}

impl fmt::Display for ConfigurationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigurationError::ValidationFailed(msg) => write!(f, "Validation failed: {}", msg),
            ConfigurationError::InvalidValue { field, value, reason } => {
                write!(f, "Invalid value for {}: '{}' ({})", field, value, reason)
            }
            ConfigurationError::LoadFailed(msg) => write!(f, "Failed to load configuration: {}", msg),
        }
    }
}

impl std::error::Error for KujiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            KujiError::Configuration(e) => Some(e),
            KujiError::Session(e) => Some(e),
            KujiError::Io(_) | KujiError::Usage(_) => None,
        }
    }
}

impl std::error::Error for ConfigurationError {}

impl From<ConfigurationError> for KujiError {
    fn from(e: ConfigurationError) -> Self {
        KujiError::Configuration(e)
    }
}

impl From<SessionError> for KujiError {
    fn from(e: SessionError) -> Self {
        KujiError::Session(e)
    }
}

impl From<DrawError> for KujiError {
    fn from(e: DrawError) -> Self {
        KujiError::Session(SessionError::Draw(e))
    }
}

impl From<std::io::Error> for KujiError {
    fn from(e: std::io::Error) -> Self {
        KujiError::Io(e.to_string())
    }
}

impl From<serde_json::Error> for KujiError {
    fn from(e: serde_json::Error) -> Self {
        KujiError::Io(format!("JSON output failed: {}", e))
    }
}

// Convenience type alias for Results
pub type KujiResult<T> = Result<T, KujiError>;
