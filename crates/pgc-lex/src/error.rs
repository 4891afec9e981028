//! Scanner error types.
//!
//! [`SourceError`] is fatal and returned before any token is produced.
//! [`LexError`] describes malformed input inside a source; the lexer reports
//! it as a diagnostic and keeps going. Most are errors, but a string literal
//! that survived malformed UTF-8 is only a warning.

use std::io;
use std::path::PathBuf;

use pgc_util::{DiagnosticCode, Level};
use thiserror::Error;

/// Failure to set up a source for scanning.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source file could not be opened.
    #[error("cannot open source file `{}`", .path.display())]
    Open {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
}

/// Malformed input found while scanning.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that starts no token.
    #[error("unrecognized character {0:?}")]
    UnrecognizedCharacter(char),

    /// A digit outside the radix of the literal being scanned.
    #[error("invalid digit {digit:?} in base-{radix} literal")]
    InvalidDigit {
        /// Offending digit.
        digit: char,
        /// Radix of the literal.
        radix: u32,
    },

    /// A string literal cut off by a newline or end of input.
    #[error("unterminated string literal \"{0}\"")]
    UnterminatedString(String),

    /// Malformed UTF-8 inside a closed string literal, kept as U+FFFD.
    #[error("invalid UTF-8 in string literal replaced with U+FFFD")]
    InvalidUtf8InString,
}

impl LexError {
    /// Returns the diagnostic code for this error.
    pub fn code(&self) -> DiagnosticCode {
        match self {
            LexError::UnrecognizedCharacter(_) => DiagnosticCode::E_LEXER_UNEXPECTED_CHAR,
            LexError::InvalidDigit { .. } => DiagnosticCode::E_LEXER_INVALID_NUMBER,
            LexError::UnterminatedString(_) => DiagnosticCode::E_LEXER_UNTERMINATED_STRING,
            LexError::InvalidUtf8InString => DiagnosticCode::W_LEXER_INVALID_UTF8,
        }
    }

    /// Returns the severity to report this with.
    pub fn level(&self) -> Level {
        match self {
            LexError::InvalidUtf8InString => Level::Warning,
            _ => Level::Error,
        }
    }

    /// Returns a fix suggestion, if there is a useful one.
    pub fn help(&self) -> Option<&'static str> {
        match self {
            LexError::UnterminatedString(_) => {
                Some("close the string with '\"' before the end of the line")
            },
            LexError::InvalidDigit { .. } => {
                Some("every digit must be smaller than the base of the literal")
            },
            LexError::UnrecognizedCharacter(_) | LexError::InvalidUtf8InString => None,
        }
    }
}
