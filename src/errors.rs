//! Error types for rapid_textsum
//!
//! Only failures the caller can act on are errors. An empty document, a
//! degenerate similarity and a ranking that runs out of iterations are all
//! handled locally and never surface here.

use thiserror::Error;

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, SummaryError>;

/// Main error type for rapid_textsum
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SummaryError {
    /// Sentence segmentation failed (for example, the input is not valid UTF-8)
    #[error("Segmentation failed: {message}")]
    Segmentation { message: String },

    /// Configuration validation failed
    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    /// The requested summary fraction is negative or not a finite number
    #[error("Invalid target fraction: {fraction}")]
    InvalidFraction { fraction: f64 },

    /// A line of a lemmatization list could not be parsed
    #[error("Lemma list line {line}: {message}")]
    LemmaParse { line: usize, message: String },

    /// Reading an external resource failed
    #[error("I/O error: {message}")]
    Io { message: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl SummaryError {
    /// Create a segmentation error
    pub fn segmentation(message: impl Into<String>) -> Self {
        Self::Segmentation {
            message: message.into(),
        }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid fraction error
    pub fn invalid_fraction(fraction: f64) -> Self {
        Self::InvalidFraction { fraction }
    }

    /// Create a lemma list parse error (1-indexed line number)
    pub fn lemma_parse(line: usize, message: impl Into<String>) -> Self {
        Self::LemmaParse {
            line,
            message: message.into(),
        }
    }

    /// Create a serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::Serialization {
            message: message.into(),
        }
    }

    /// Check if this error came from the segmentation collaborator
    pub fn is_segmentation_failure(&self) -> bool {
        matches!(self, Self::Segmentation { .. })
    }
}

impl From<serde_json::Error> for SummaryError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(err.to_string())
    }
}

impl From<std::io::Error> for SummaryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: err.to_string(),
        }
    }
}

impl From<std::str::Utf8Error> for SummaryError {
    fn from(err: std::str::Utf8Error) -> Self {
        Self::segmentation(format!("input is not valid UTF-8: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = SummaryError::segmentation("bad bytes");
        assert!(err.to_string().contains("Segmentation failed"));
        assert!(err.to_string().contains("bad bytes"));

        let err = SummaryError::lemma_parse(12, "missing tab");
        assert!(err.to_string().contains("line 12"));
        assert!(err.to_string().contains("missing tab"));

        let err = SummaryError::invalid_fraction(-0.5);
        assert!(err.to_string().contains("-0.5"));
    }

    #[test]
    fn test_is_segmentation_failure() {
        let bytes = [0x66, 0x6f, 0xff];
        let err: SummaryError = std::str::from_utf8(&bytes).unwrap_err().into();
        assert!(err.is_segmentation_failure());

        let err = SummaryError::invalid_config("test");
        assert!(!err.is_segmentation_failure());
    }

    #[test]
    fn test_from_serde_json() {
        let err: SummaryError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, SummaryError::Serialization { .. }));
    }
}
