//! Error types for tile key parsing, document loading and file operations

use std::fmt;
use std::path::PathBuf;

/// Main error type for all rule extraction and query operations
#[derive(Debug)]
pub enum RulesError {
    /// Tile key text does not follow the `<base>` or `<base>:<flags>` grammar
    MalformedKey {
        /// The offending key text
        key: String,
        /// Which part of the grammar was violated
        reason: String,
    },

    /// Persisted ruleset document failed schema validation
    ///
    /// Raised for wrong shapes, negative counts, unknown directions and
    /// malformed keys anywhere in the document. Fatal to that load.
    MalformedDocument {
        /// Path of the document, when loaded from disk
        path: Option<PathBuf>,
        /// Description of the structural defect
        reason: String,
    },

    /// Grid dimensions disagree with the supplied cell data
    InvalidGrid {
        /// Description of the mismatch
        reason: String,
    },

    /// Parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Failed to encode a document or read a JSON input file
    Serialization {
        /// Path involved in the operation
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MalformedKey { key, reason } => {
                write!(f, "Malformed tile key '{key}': {reason}")
            }
            Self::MalformedDocument { path, reason } => match path {
                Some(path) => write!(
                    f,
                    "Malformed ruleset document '{}': {reason}",
                    path.display()
                ),
                None => write!(f, "Malformed ruleset document: {reason}"),
            },
            Self::InvalidGrid { reason } => {
                write!(f, "Invalid grid: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Serialization { path, source } => {
                write!(f, "JSON error for '{}': {source}", path.display())
            }
        }
    }
}

impl std::error::Error for RulesError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Serialization { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for rule operation results
pub type Result<T> = std::result::Result<T, RulesError>;

impl From<std::io::Error> for RulesError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for RulesError {
    fn from(err: serde_json::Error) -> Self {
        Self::MalformedDocument {
            path: None,
            reason: err.to_string(),
        }
    }
}

/// Attaches a path to errors raised while handling a file
pub trait WithPath<T> {
    /// Record the file path and operation on an I/O failure
    ///
    /// # Errors
    ///
    /// Propagates the original error with the path attached
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T>;
}

impl<T> WithPath<T> for std::result::Result<T, std::io::Error> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Result<T> {
        self.map_err(|source| RulesError::FileSystem {
            path: path.into(),
            operation,
            source,
        })
    }
}

impl<T> WithPath<T> for Result<T> {
    fn with_path(self, path: impl Into<PathBuf>, operation: &'static str) -> Self {
        self.map_err(|error| match error {
            RulesError::MalformedDocument { path: None, reason } => RulesError::MalformedDocument {
                path: Some(path.into()),
                reason,
            },
            RulesError::FileSystem { source, .. } => RulesError::FileSystem {
                path: path.into(),
                operation,
                source,
            },
            other => other,
        })
    }
}

/// Create a malformed key error
pub fn malformed_key(key: &str, reason: impl fmt::Display) -> RulesError {
    RulesError::MalformedKey {
        key: key.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a malformed document error without a path
pub fn malformed_document(reason: &impl ToString) -> RulesError {
    RulesError::MalformedDocument {
        path: None,
        reason: reason.to_string(),
    }
}

/// Create an invalid grid error
pub fn invalid_grid(reason: &impl ToString) -> RulesError {
    RulesError::InvalidGrid {
        reason: reason.to_string(),
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> RulesError {
    RulesError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
