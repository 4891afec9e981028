//! Edge case tests for pgc-lex
