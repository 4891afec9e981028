//! Identifier and keyword lexing.

use std::io::Read;

use crate::token::{self, Token, TokenKind};
use crate::unicode::{is_digit, is_letter};
use crate::Lexer;

impl<R: Read> Lexer<'_, R> {
    /// Lexes an identifier or keyword.
    ///
    /// Consumes a letter followed by any run of letters and digits. Words of
    /// two or more characters go through the keyword table; a single
    /// character is always an identifier.
    pub(super) fn lex_identifier(&mut self) -> Token {
        let mut literal = String::new();
        while let Some(c) = self.cursor.current() {
            if !(is_letter(c) || is_digit(c)) {
                break;
            }
            literal.push(c);
            self.cursor.advance();
        }

        let kind = if literal.chars().nth(1).is_some() {
            token::lookup(&literal)
        } else {
            TokenKind::Ident
        };
        Token::new(kind, literal)
    }
}
