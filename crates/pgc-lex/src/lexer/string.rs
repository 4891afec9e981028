//! String literal lexing.
//!
//! Strings are delimited by `"` and may not span lines. There are no escape
//! sequences; every character up to the closing quote is content.

use std::io::Read;

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

impl<R: Read> Lexer<'_, R> {
    /// Lexes a string literal. The opening quote has already been consumed.
    ///
    /// # Returns
    ///
    /// A `String` token holding the content without quotes, or an `Illegal`
    /// token holding the content so far if a newline or the end of input
    /// comes first. The newline is left for the next token.
    ///
    /// A closed string holding malformed UTF-8 also gets a warning.
    pub(super) fn lex_string(&mut self) -> Token {
        let mut content = String::new();
        let mut replaced = false;

        loop {
            match self.cursor.current() {
                None | Some('\n') => {
                    self.report(LexError::UnterminatedString(content.clone()));
                    return Token::new(TokenKind::Illegal, content);
                },
                Some('"') => {
                    self.cursor.advance();
                    if replaced {
                        self.report(LexError::InvalidUtf8InString);
                    }
                    return Token::new(TokenKind::String, content);
                },
                Some(c) => {
                    replaced |= self.cursor.is_replacement();
                    content.push(c);
                    self.cursor.advance();
                },
            }
        }
    }
}
