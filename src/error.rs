//! Error handling for stemsplit
//!
//! Every pipeline stage surfaces the first error it encounters to its
//! caller; there are no retries and no partial recovery.

use thiserror::Error;

/// Result type alias for stemsplit operations
pub type Result<T> = std::result::Result<T, SplitError>;

/// Main error type for stemsplit operations
#[derive(Error, Debug)]
pub enum SplitError {
    // Input contract errors
    #[error("Unsupported input format: {details} (expected 44.1kHz stereo)")]
    UnsupportedFormat { details: String },

    #[error("Invalid audio data: {reason}")]
    InvalidAudio {
        reason: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // Engine errors
    #[error("Failed to initialize separation engine: {reason}")]
    ModelInitialization { reason: String },

    #[error("Separation failed: {reason}")]
    Separation { reason: String },

    #[error("Separation engine contract violation for '{variant}': {detail}")]
    EngineContract { variant: String, detail: String },

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SplitError {
    /// Get the error code for this error type
    pub fn error_code(&self) -> &'static str {
        match self {
            SplitError::UnsupportedFormat { .. } => "UNSUPPORTED_FORMAT",
            SplitError::InvalidAudio { .. } => "INVALID_AUDIO",
            SplitError::FileNotFound { .. } => "FILE_NOT_FOUND",
            SplitError::ModelInitialization { .. } => "MODEL_INITIALIZATION",
            SplitError::Separation { .. } => "SEPARATION_FAILED",
            SplitError::EngineContract { .. } => "ENGINE_CONTRACT",
            SplitError::Io(_) => "IO_ERROR",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        let err = SplitError::UnsupportedFormat {
            details: "1 channel".to_string(),
        };
        assert_eq!(err.error_code(), "UNSUPPORTED_FORMAT");

        let err = SplitError::EngineContract {
            variant: "4stems".to_string(),
            detail: "expected 4 stems, engine returned 3".to_string(),
        };
        assert_eq!(err.error_code(), "ENGINE_CONTRACT");
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: SplitError = io.into();
        assert_eq!(err.error_code(), "IO_ERROR");
    }
}
