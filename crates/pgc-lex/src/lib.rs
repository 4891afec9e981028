//! pgc-lex - Lexical Analyzer for the playground language
//!
//! This crate turns a UTF-8 byte stream into a sequence of classified
//! tokens: identifiers, keywords, integer and float literals, string
//! literals, operators and delimiters, followed by an explicit end-of-input
//! marker.
//!
//! # Example Usage
//!
//! ```
//! use pgc_lex::{Lexer, Token, TokenKind};
//! use pgc_util::Handler;
//!
//! let handler = Handler::new();
//! let mut lexer = Lexer::new("var x := 12;".as_bytes(), &handler);
//!
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Var, "var"));
//! assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
//!
//! // The rest, up to end of input
//! let rest: Vec<_> = lexer.map(|t| t.kind()).collect();
//! assert_eq!(rest, [TokenKind::Define, TokenKind::Integer, TokenKind::Semicolon]);
//! assert!(!handler.has_errors());
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, tokens and the keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Character cursor over a byte stream
//! - [`unicode`] - Character classes
//! - [`error`] - Fatal and recoverable error types
//!
//! # Token Categories
//!
//! **Keywords**: `var`, `begin`, `end`, `integer`, `float`, `string`
//!
//! **Literals**: identifiers (`x`, `αβ`), integers (`12`), floats (`3.14`,
//! `.5`, `5.`), strings (`"abc"`, no escapes, single line)
//!
//! **Operators and delimiters**: `+`, `-`, `*`, `/`, `%`, `:=`, `:`, `.`,
//! `;`, `,`
//!
//! # Errors
//!
//! Opening a missing file fails with [`SourceError`]. Everything else is
//! recoverable: an unrecognized character or an unterminated string yields
//! an [`Illegal`](TokenKind::Illegal) token and an error diagnostic in the
//! [`Handler`](pgc_util::Handler), and scanning continues.

pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;
pub mod unicode;

mod edge_cases;

pub use cursor::{Cursor, Peek};
pub use error::{LexError, SourceError};
pub use lexer::Lexer;
pub use token::{Token, TokenKind};
