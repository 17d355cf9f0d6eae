//! Parse error contracts.

use std::fmt;

/// Stable parse failure categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    /// No input was supplied at all.
    MissingInput,
    /// Input was supplied but holds zero bytes.
    EmptyInput,
    /// A double-quoted span reached end of input before its closing quote.
    UnterminatedDoubleQuote,
    /// A single-quoted span reached end of input before its closing quote.
    UnterminatedSingleQuote,
}

impl ParseErrorKind {
    /// Returns the stable numeric code reported for this category.
    pub const fn code(self) -> u8 {
        match self {
            Self::MissingInput => 1,
            Self::EmptyInput => 2,
            Self::UnterminatedDoubleQuote => 3,
            Self::UnterminatedSingleQuote => 4,
        }
    }
}

/// Parse error payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Error category.
    pub kind: ParseErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// One-based input column, set for unterminated-quote errors.
    pub column: Option<usize>,
}

impl ParseError {
    /// Creates a parse error.
    pub fn new(kind: ParseErrorKind, message: impl Into<String>, column: Option<usize>) -> Self {
        Self {
            kind,
            message: message.into(),
            column,
        }
    }

    /// Creates a `MissingInput` error.
    pub fn missing_input() -> Self {
        Self::new(
            ParseErrorKind::MissingInput,
            "cannot parse missing input",
            None,
        )
    }

    /// Creates an `EmptyInput` error.
    pub fn empty_input() -> Self {
        Self::new(ParseErrorKind::EmptyInput, "cannot parse empty input", None)
    }

    /// Creates an `UnterminatedDoubleQuote` error at a one-based column.
    pub fn unterminated_double_quote(column: usize) -> Self {
        Self::new(
            ParseErrorKind::UnterminatedDoubleQuote,
            "unterminated double quote",
            Some(column),
        )
    }

    /// Creates an `UnterminatedSingleQuote` error at a one-based column.
    pub fn unterminated_single_quote(column: usize) -> Self {
        Self::new(
            ParseErrorKind::UnterminatedSingleQuote,
            "unterminated single quote",
            Some(column),
        )
    }

    /// Returns the stable numeric code for this error.
    pub const fn code(&self) -> u8 {
        self.kind.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.column {
            Some(column) => write!(f, "{} at input column {column}", self.message),
            None => write!(f, "{}", self.message),
        }
    }
}

impl std::error::Error for ParseError {}
