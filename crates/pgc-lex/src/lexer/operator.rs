//! Operator and delimiter lexing.

use std::io::Read;

use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: Read> Lexer<'_, R> {
    /// Maps a one-character operator or delimiter to its kind.
    ///
    /// `:` and `"` are not listed here since they need more than one
    /// character of context.
    pub(super) fn single_char_operator(c: char) -> Option<TokenKind> {
        let kind = match c {
            '+' => TokenKind::Add,
            '-' => TokenKind::Sub,
            '*' => TokenKind::Mul,
            '/' => TokenKind::Quo,
            '%' => TokenKind::Rem,
            '.' => TokenKind::Dot,
            ';' => TokenKind::Semicolon,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        Some(kind)
    }

    /// Lexes `:` or `:=`. The colon has already been consumed.
    pub(super) fn lex_colon(&mut self) -> Token {
        if self.cursor.match_char('=') {
            Token::new(TokenKind::Define, ":=")
        } else {
            Token::new(TokenKind::Colon, ":")
        }
    }
}
