//! Result and error types for Cubrir.

use thiserror::Error;

/// Result type for Cubrir operations
pub type CubrirResult<T> = Result<T, CubrirError>;

/// Errors that can occur in Cubrir
#[derive(Debug, Error)]
pub enum CubrirError {
    /// A percentage was requested over zero total statements
    #[error("coverage percentage is undefined over zero statements ({context})")]
    ZeroStatements {
        /// What was being measured when the zero total was hit
        context: String,
    },

    /// Image encoding error
    #[error("image processing failed: {message}")]
    ImageProcessing {
        /// Error message
        message: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CubrirError {
    /// Shorthand for the zero-statements condition
    #[must_use]
    pub fn zero_statements(context: &str) -> Self {
        Self::ZeroStatements {
            context: context.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_statements_message() {
        let err = CubrirError::zero_statements("global coverage");
        assert!(err.to_string().contains("zero statements"));
        assert!(err.to_string().contains("global coverage"));
    }

    #[test]
    fn test_io_error_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err: CubrirError = io.into();
        assert!(matches!(err, CubrirError::Io(_)));
    }
}
