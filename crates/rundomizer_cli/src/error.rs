//! Error types for the rundomizer CLI.

use rundomizer_core::dictionary::DictionaryError;
use rundomizer_core::generators::GeneratorError;
use rundomizer_core::types::SampleError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Dictionary loading error
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] DictionaryError),

    /// Generator rejected its parameters or failed to draw
    #[error(transparent)]
    Generator(#[from] GeneratorError),

    /// Sampler error outside a generator
    #[error(transparent)]
    Sample(#[from] SampleError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// JSON rendering failed
    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),

    /// Uniformity self-test rejected the entropy source
    #[error(
        "Uniformity check failed: chi-square {statistic:.3} exceeds critical value {critical:.3}"
    )]
    CheckFailed {
        /// Observed chi-square statistic
        statistic: f64,
        /// Critical value at the 0.1% level
        critical: f64,
    },
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generator_error_is_transparent() {
        let err = CliError::from(GeneratorError::Sample(SampleError::EmptyList));
        assert_eq!(err.to_string(), SampleError::EmptyList.to_string());
    }

    #[test]
    fn test_check_failed_display() {
        let err = CliError::CheckFailed {
            statistic: 40.5,
            critical: 27.877,
        };
        let display = err.to_string();
        assert!(display.contains("40.500"));
        assert!(display.contains("27.877"));
    }
}
