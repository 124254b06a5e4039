//! Error types for the external (JSON) representation of a set.
//!
//! Every in-memory set operation is total. Only converting from or to the
//! external representation can fail:
//!
//! - [`DecodeError`]: the input is not a well-formed array of elements
//! - [`EncodeError`]: an element's `Serialize` implementation reported an error

use std::fmt;

/// The kind of problem that made a decode fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DecodeErrorCategory {
    /// The input is not syntactically valid JSON.
    Syntax,
    /// The input is valid JSON but not an array of the element type.
    Data,
    /// The input ended before the array was complete.
    Eof,
    /// Reading the input failed.
    Io,
}

impl fmt::Display for DecodeErrorCategory {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Syntax => "syntax",
            Self::Data => "data",
            Self::Eof => "eof",
            Self::Io => "io",
        };
        formatter.write_str(name)
    }
}

impl From<serde_json::error::Category> for DecodeErrorCategory {
    fn from(category: serde_json::error::Category) -> Self {
        match category {
            serde_json::error::Category::Syntax => Self::Syntax,
            serde_json::error::Category::Data => Self::Data,
            serde_json::error::Category::Eof => Self::Eof,
            serde_json::error::Category::Io => Self::Io,
        }
    }
}

/// Represents a failure to decode a set from its external representation.
///
/// Returned when the input is malformed or when an element cannot be parsed
/// as the set's element type. A failed decode never leaves a half-populated
/// set behind.
///
/// # Examples
///
/// ```rust
/// use setwise::collection::Set;
/// use setwise::error::DecodeErrorCategory;
///
/// let error = Set::<i32>::from_json(r#"{"not": "an array"}"#).unwrap_err();
/// assert_eq!(error.category(), DecodeErrorCategory::Data);
/// assert_eq!(error.line(), 1);
/// ```
#[derive(Debug)]
pub struct DecodeError {
    source: serde_json::Error,
}

impl DecodeError {
    pub(crate) const fn new(source: serde_json::Error) -> Self {
        Self { source }
    }

    /// The kind of problem that made the decode fail.
    #[must_use]
    pub fn category(&self) -> DecodeErrorCategory {
        self.source.classify().into()
    }

    /// One-based line of the input at which the error was detected.
    #[must_use]
    pub fn line(&self) -> usize {
        self.source.line()
    }

    /// One-based column of the input at which the error was detected.
    #[must_use]
    pub fn column(&self) -> usize {
        self.source.column()
    }
}

impl fmt::Display for DecodeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "failed to decode set: {}", self.source)
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(source: serde_json::Error) -> Self {
        Self::new(source)
    }
}

/// Represents a failure to encode a set into its external representation.
#[derive(Debug)]
pub struct EncodeError {
    source: serde_json::Error,
}

impl EncodeError {
    pub(crate) const fn new(source: serde_json::Error) -> Self {
        Self { source }
    }
}

impl fmt::Display for EncodeError {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "failed to encode set: {}", self.source)
    }
}

impl std::error::Error for EncodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}
