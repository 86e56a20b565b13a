#[cfg(test)]
#[path = "../../tests/unit/utils/error_test.rs"]
mod error_test;

use std::fmt::{Display, Formatter};
use std::hash::{Hash, Hasher};

/// A basic error type which, essentially, a wrapper on String type.
#[derive(Clone, Debug)]
pub struct GenericError(String);

/// A type alias for result type with `GenericError`.
pub type GenericResult<T> = Result<T, GenericError>;

impl GenericError {
    /// Joins many errors with separator.
    pub fn join_many(errs: &[GenericError], separator: &str) -> String {
        errs.iter().map(|err| err.0.as_str()).collect::<Vec<_>>().join(separator)
    }
}

impl Display for GenericError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::error::Error for GenericError {}

impl From<String> for GenericError {
    fn from(msg: String) -> Self {
        Self(msg)
    }
}

impl<'a> From<&'a str> for GenericError {
    fn from(value: &'a str) -> Self {
        Self(value.to_string())
    }
}

impl From<std::io::Error> for GenericError {
    fn from(value: std::io::Error) -> Self {
        Self(value.to_string())
    }
}

impl From<CheckError> for GenericError {
    fn from(value: CheckError) -> Self {
        Self(value.to_string())
    }
}

impl PartialEq<Self> for GenericError {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq(&other.0)
    }
}

impl Eq for GenericError {}

impl Hash for GenericError {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

/// Specifies a category of a check failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A required header field is malformed: missing colon, unknown type tag or non-geometric edge weights.
    MalformedHeader,
    /// Section content does not follow its declared structure: numbering, field count or delimiters.
    StructuralMismatch,
    /// A file ended before the reader reached its terminal state.
    PrematureEof,
    /// Parsed data violates a clustering, permutation or tour length rule.
    Validation,
    /// The underlying source cannot be opened or read.
    Io,
}

impl ErrorKind {
    /// Returns a short human readable name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::MalformedHeader => "malformed header",
            ErrorKind::StructuralMismatch => "structural mismatch",
            ErrorKind::PrematureEof => "premature end of file",
            ErrorKind::Validation => "validation",
            ErrorKind::Io => "io",
        }
    }
}

impl Display for ErrorKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An error raised while reading, validating or evaluating a problem and its tour.
/// All such errors are fatal for the current invocation.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CheckError {
    /// An error category.
    pub kind: ErrorKind,
    /// A human readable cause which identifies offending line, index or state.
    pub cause: String,
}

/// A type alias for result type with `CheckError`.
pub type CheckResult<T> = Result<T, CheckError>;

impl CheckError {
    /// Creates a new instance of `CheckError`.
    pub fn new(kind: ErrorKind, cause: impl Into<String>) -> Self {
        Self { kind, cause: cause.into() }
    }

    /// Creates a malformed header error.
    pub fn malformed_header(cause: impl Into<String>) -> Self {
        Self::new(ErrorKind::MalformedHeader, cause)
    }

    /// Creates a structural mismatch error.
    pub fn structural(cause: impl Into<String>) -> Self {
        Self::new(ErrorKind::StructuralMismatch, cause)
    }

    /// Creates a premature end of file error.
    pub fn premature_eof(cause: impl Into<String>) -> Self {
        Self::new(ErrorKind::PrematureEof, cause)
    }

    /// Creates a validation error.
    pub fn validation(cause: impl Into<String>) -> Self {
        Self::new(ErrorKind::Validation, cause)
    }
}

impl Display for CheckError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} error: {}", self.kind, self.cause)
    }
}

impl std::error::Error for CheckError {}

impl From<std::io::Error> for CheckError {
    fn from(value: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, value.to_string())
    }
}
