#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// Specifies a cause classification of the error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required identifier is missing for the declared or resolved source kind.
    Configuration,
    /// Connection failure, timeout or non-success status from registry or url fetch.
    Network,
    /// Local file is absent or cannot be read.
    NotFound,
    /// A format which parser actively rejects.
    Parse,
    /// A format does not match an explicitly requested expectation.
    Validation,
    /// A requested capability is not implemented by the problem.
    Unsupported,
    /// An event is not applicable to the current problem state.
    InvalidTransition,
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            ErrorKind::Configuration => "configuration error",
            ErrorKind::Network => "network error",
            ErrorKind::NotFound => "not found error",
            ErrorKind::Parse => "parse error",
            ErrorKind::Validation => "validation error",
            ErrorKind::Unsupported => "unsupported error",
            ErrorKind::InvalidTransition => "invalid transition error",
        };

        write!(f, "{name}")
    }
}

/// A basic error type which, essentially, a wrapper on String type with cause classification.
#[derive(Clone, Debug)]
pub struct DatasetError {
    kind: ErrorKind,
    message: String,
}

/// A type alias for result type with `DatasetError`.
pub type DatasetResult<T> = Result<T, DatasetError>;

impl DatasetError {
    /// Creates a new instance of `DatasetError`.
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    /// Creates a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Configuration, message)
    }

    /// Creates a network error.
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Network, message)
    }

    /// Creates a not found error.
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotFound, message)
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, message)
    }

    /// Creates an unsupported capability error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Unsupported, message)
    }

    /// Returns error cause classification.
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns error message.
    pub fn message(&self) -> &str {
        self.message.as_str()
    }
}

impl Display for DatasetError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for DatasetError {}

impl From<String> for DatasetError {
    fn from(msg: String) -> Self {
        Self::parse(msg)
    }
}

impl<'a> From<&'a str> for DatasetError {
    fn from(value: &'a str) -> Self {
        Self::parse(value)
    }
}

impl From<std::io::Error> for DatasetError {
    fn from(value: std::io::Error) -> Self {
        match value.kind() {
            std::io::ErrorKind::InvalidData => Self::parse(value.to_string()),
            _ => Self::not_found(value.to_string()),
        }
    }
}

impl From<serde_json::Error> for DatasetError {
    fn from(value: serde_json::Error) -> Self {
        Self::parse(value.to_string())
    }
}

impl PartialEq<Self> for DatasetError {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.message.eq(&other.message)
    }
}

impl Eq for DatasetError {}

impl Hash for DatasetError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.message.hash(state);
    }
}
