//! Number literal lexing.
//!
//! A number is a run of decimal digits with at most one point, which may
//! lead (`.5`), sit after the first digit (`3.14`), or trail (`5.`). The
//! point is only recognised in those two places, so `12.5` scans as `12`
//! followed by `.5`.

use std::io::Read;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::unicode::{digit_value, is_decimal};
use crate::Lexer;

/// Radix of every number literal in source text.
const RADIX: u32 = 10;

impl<R: Read> Lexer<'_, R> {
    /// Lexes an integer or float literal.
    ///
    /// The lookahead is either a decimal digit or a `.` followed by one.
    pub(super) fn lex_number(&mut self) -> Token {
        self.lex_number_in(RADIX)
    }

    /// Lexes a number literal whose digits must be below `radix`.
    ///
    /// Digits are still collected as a decimal run; the first one outside
    /// `radix` turns the whole literal into an `Illegal` token.
    fn lex_number_in(&mut self, radix: u32) -> Token {
        let mut literal = String::new();
        let mut kind = TokenKind::Integer;

        if let Some(first) = self.cursor.current() {
            literal.push(first);
            self.cursor.advance();
            if first == '.' {
                kind = TokenKind::Float;
            } else if self.cursor.match_char('.') {
                literal.push('.');
                kind = TokenKind::Float;
            }
        }

        let leading_invalid = literal
            .chars()
            .find(|&c| c != '.' && !Self::in_radix(c, radix));
        let trailing_invalid = self.lex_digits(&mut literal, radix);
        if let Some(digit) = leading_invalid.or(trailing_invalid) {
            self.report(LexError::InvalidDigit { digit, radix });
            kind = TokenKind::Illegal;
        }

        Token::new(kind, literal)
    }

    /// Consumes a run of `0`-`9` into `literal`.
    ///
    /// Returns the first digit whose value is outside `radix`, if any.
    fn lex_digits(&mut self, literal: &mut String, radix: u32) -> Option<char> {
        let mut invalid = None;
        while let Some(c) = self.cursor.current() {
            if !is_decimal(c) {
                break;
            }
            if invalid.is_none() && !Self::in_radix(c, radix) {
                invalid = Some(c);
            }
            literal.push(c);
            self.cursor.advance();
        }
        invalid
    }

    #[inline]
    fn in_radix(c: char, radix: u32) -> bool {
        digit_value(c).is_some_and(|v| v < radix)
    }
}
