//! Error types for trajectory extraction

use thiserror::Error;

/// Result type alias for extraction operations
pub type TrajResult<T> = Result<T, TrajError>;

/// Main error type for trajectory extraction
///
/// Every variant raised while reading an input carries the 1-based line
/// number so the operator can jump straight to the offending line.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrajError {
    /// A parameter-space data line that names an identifier but no original name
    #[error("Malformed parameter file at line {line}: expected `<id> <name>`, got {content:?}")]
    MalformedParameterFile { line: usize, content: String },

    /// A configuration identifier with no entry in the name mapping
    #[error("Unmapped parameter identifier '{identifier}' at line {line}")]
    UnmappedIdentifier { line: usize, identifier: String },

    /// A marker line whose trailing field is not a number
    #[error("Invalid numeric field for '{marker}' at line {line}: {value:?}")]
    NumericField {
        line: usize,
        marker: String,
        value: String,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        path: Option<String>,
    },

    /// Configuration related errors
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Report serialization errors
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl TrajError {
    /// Create a new malformed parameter file error
    pub fn malformed_parameter_file(line: usize, content: impl Into<String>) -> Self {
        Self::MalformedParameterFile {
            line,
            content: content.into(),
        }
    }

    /// Create a new unmapped identifier error
    pub fn unmapped_identifier(line: usize, identifier: impl Into<String>) -> Self {
        Self::UnmappedIdentifier {
            line,
            identifier: identifier.into(),
        }
    }

    /// Create a new numeric field error
    pub fn numeric_field(
        line: usize,
        marker: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self::NumericField {
            line,
            marker: marker.into(),
            value: value.into(),
        }
    }

    /// Create a new IO error tied to a path
    pub fn io_with_path(message: impl Into<String>, path: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
            path: Some(path.into()),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Line number of the input that caused this error, if any
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::MalformedParameterFile { line, .. }
            | Self::UnmappedIdentifier { line, .. }
            | Self::NumericField { line, .. } => Some(*line),
            _ => None,
        }
    }
}

impl From<std::io::Error> for TrajError {
    fn from(error: std::io::Error) -> Self {
        Self::Io {
            message: error.to_string(),
            path: None,
        }
    }
}

impl From<serde_json::Error> for TrajError {
    fn from(error: serde_json::Error) -> Self {
        Self::Serialization {
            message: error.to_string(),
        }
    }
}
