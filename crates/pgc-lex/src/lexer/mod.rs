//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, constructors and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - Integer and float literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and delimiter lexing

mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use self::core::Lexer;
