//! Error types for JSON parsing.
//!
//! These errors are produced by the parser in [`crate::de`]. They carry line
//! and column information for callers that use the parser directly; the
//! classification pipeline in [`crate::classify`] treats any parse error as
//! "not structured data" and never surfaces it.
//!
//! ## Examples
//!
//! ```rust
//! use jsonsift::{from_str, Error, Value};
//!
//! let result: Result<Value, Error> = from_str("{\"unterminated\": ");
//! assert!(result.is_err());
//!
//! if let Err(err) = result {
//!     eprintln!("Parse error: {}", err);
//! }
//! ```

use thiserror::Error;

/// Represents all possible errors that can occur while parsing JSON text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Syntax error with position information
    #[error("syntax error at line {line}, column {col}: {msg}")]
    Syntax {
        line: usize,
        col: usize,
        msg: String,
    },

    /// Input ended in the middle of a value
    #[error("unexpected end of input at line {line}, column {col}: expected {expected}")]
    UnexpectedEof {
        line: usize,
        col: usize,
        expected: String,
    },

    /// A complete value was parsed but non-whitespace input remained
    #[error("trailing characters after value at line {line}, column {col}")]
    TrailingCharacters { line: usize, col: usize },

    /// Nesting exceeded the parser's depth limit
    #[error("recursion limit of {0} exceeded")]
    RecursionLimit(usize),
}

impl Error {
    /// Creates a syntax error with line and column information.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use jsonsift::Error;
    ///
    /// let err = Error::syntax(10, 5, "unexpected token");
    /// assert!(err.to_string().contains("line 10"));
    /// ```
    pub fn syntax(line: usize, col: usize, msg: &str) -> Self {
        Error::Syntax {
            line,
            col,
            msg: msg.to_string(),
        }
    }

    /// Creates an unexpected end-of-input error.
    pub fn unexpected_eof(line: usize, col: usize, expected: &str) -> Self {
        Error::UnexpectedEof {
            line,
            col,
            expected: expected.to_string(),
        }
    }

    /// Creates a trailing-characters error.
    pub fn trailing_characters(line: usize, col: usize) -> Self {
        Error::TrailingCharacters { line, col }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
