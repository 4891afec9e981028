//! pgc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the pgc scanner workspace:
//!
//! - [`span`] - Source location tracking (byte range plus line/column)
//! - [`diagnostic`] - Diagnostics, diagnostic codes and the collecting [`Handler`]
//!
//! # Example
//!
//! ```
//! use pgc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("unrecognized character '#'")
//!     .code(DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
//!     .span(Span::new(4, 5, 1, 5))
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use span::Span;
