//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its constructors and the
//! dispatch that decides which sub-scanner handles the next token.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use pgc_util::{DiagnosticBuilder, Handler, Span};
use tracing::{debug, trace};

use crate::cursor::Cursor;
use crate::error::{LexError, SourceError};
use crate::token::{Token, TokenKind};
use crate::unicode::{is_decimal, is_letter};

/// Lexer for the playground language.
///
/// The lexer pulls characters from a byte stream and hands out one token
/// per call to [`next_token`](Lexer::next_token). Malformed input produces an
/// [`Illegal`](TokenKind::Illegal) token plus an error diagnostic in the
/// handler; scanning never stops early.
pub struct Lexer<'a, R> {
    /// Character cursor over the input stream.
    pub(super) cursor: Cursor<R>,

    /// Collector for lexical errors.
    handler: &'a Handler,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a, BufReader<File>> {
    /// Opens `path` for buffered reading and primes the lexer.
    ///
    /// # Errors
    ///
    /// Returns [`SourceError::Open`] if the file cannot be opened.
    pub fn open(path: impl AsRef<Path>, handler: &'a Handler) -> Result<Self, SourceError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SourceError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "opened source");
        Ok(Self::new(BufReader::new(file), handler))
    }
}

impl<'a, R: Read> Lexer<'a, R> {
    /// Creates a lexer over any byte stream.
    ///
    /// Reads exactly one character up front to prime the lookahead.
    pub fn new(reader: R, handler: &'a Handler) -> Self {
        Self {
            cursor: Cursor::new(reader),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Skips whitespace, then dispatches on the lookahead character. Once the
    /// input is exhausted every call returns [`Token::eof`].
    pub fn next_token(&mut self) -> Token {
        self.cursor.skip_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(c) = self.cursor.current() else {
            return Token::eof();
        };

        if is_letter(c) {
            return self.lex_identifier();
        }
        if is_decimal(c) || (c == '.' && self.cursor.peek().is_decimal()) {
            return self.lex_number();
        }

        self.cursor.advance();
        match c {
            '"' => self.lex_string(),
            ':' => self.lex_colon(),
            _ => match Self::single_char_operator(c) {
                Some(kind) => Token::new(kind, kind.as_str()),
                None => {
                    self.report(LexError::UnrecognizedCharacter(c));
                    Token::new(TokenKind::Illegal, c.to_string())
                },
            },
        }
    }

    /// Scans the whole input and returns every token before end of input.
    pub fn tokenize(&mut self) -> Vec<Token> {
        let tokens: Vec<Token> = self.by_ref().collect();
        debug!(
            tokens = tokens.len(),
            bytes = self.cursor.position(),
            "scan complete"
        );
        tokens
    }

    /// Records a lexical diagnostic covering the current token.
    pub(crate) fn report(&self, error: LexError) {
        trace!(%error, span = %self.token_span(), "lexical error");
        let mut builder = DiagnosticBuilder::new(error.level(), error.to_string())
            .code(error.code())
            .span(self.token_span());
        if let Some(help) = error.help() {
            builder = builder.help(help);
        }
        builder.emit(self.handler);
    }

    /// Returns the span from the start of the current token to the cursor.
    pub fn token_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }

    /// Returns the byte offset of the lookahead character.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the current line (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }
}

impl<R: Read> Iterator for Lexer<'_, R> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::io::Write;

    fn lex_all(source: &str) -> Vec<Token> {
        let handler = Handler::new();
        Lexer::new(source.as_bytes(), &handler).tokenize()
    }

    fn kinds(source: &str) -> Vec<TokenKind> {
        lex_all(source).iter().map(Token::kind).collect()
    }

    #[test]
    fn test_empty_source() {
        let handler = Handler::new_panicking();
        let mut lexer = Lexer::new("".as_bytes(), &handler);
        assert_eq!(lexer.next_token(), Token::eof());
    }

    #[test]
    fn test_eof_is_idempotent() {
        let handler = Handler::new_panicking();
        let mut lexer = Lexer::new("x".as_bytes(), &handler);
        assert_eq!(lexer.next_token(), Token::new(TokenKind::Ident, "x"));
        for _ in 0..5 {
            assert_eq!(lexer.next_token(), Token::eof());
        }
    }

    #[test]
    fn test_whitespace_only() {
        assert!(lex_all(" \t\r\n  \n").is_empty());
    }

    #[test]
    fn test_dispatch_operators() {
        assert_eq!(
            kinds("+ - * / % ; , . : :="),
            vec![
                TokenKind::Add,
                TokenKind::Sub,
                TokenKind::Mul,
                TokenKind::Quo,
                TokenKind::Rem,
                TokenKind::Semicolon,
                TokenKind::Comma,
                TokenKind::Dot,
                TokenKind::Colon,
                TokenKind::Define,
            ]
        );
    }

    #[test]
    fn test_dispatch_literals() {
        let handler = Handler::new_panicking();
        assert_eq!(
            Lexer::new("x 12 3.14 \"hi\"".as_bytes(), &handler).tokenize(),
            vec![
                Token::new(TokenKind::Ident, "x"),
                Token::new(TokenKind::Integer, "12"),
                Token::new(TokenKind::Float, "3.14"),
                Token::new(TokenKind::String, "hi"),
            ]
        );
    }

    #[test]
    fn test_unrecognized_character_recovers() {
        let handler = Handler::new();
        let tokens = Lexer::new("a # b".as_bytes(), &handler).tokenize();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::Ident, "a"),
                Token::new(TokenKind::Illegal, "#"),
                Token::new(TokenKind::Ident, "b"),
            ]
        );
        let diags = handler.diagnostics();
        assert_eq!(diags.len(), 1);
        assert_eq!(diags[0].message, "unrecognized character '#'");
        assert_eq!(diags[0].span, Span::new(2, 3, 1, 3));
        assert_eq!(
            diags[0].code,
            Some(pgc_util::DiagnosticCode::E_LEXER_UNEXPECTED_CHAR)
        );
    }

    #[test]
    fn test_position_tracking() {
        let handler = Handler::new();
        let mut lexer = Lexer::new("var\n  x".as_bytes(), &handler);
        lexer.next_token();
        assert_eq!((lexer.line(), lexer.column()), (1, 4));
        lexer.next_token();
        assert_eq!(lexer.token_span(), Span::new(6, 7, 2, 3));
        assert_eq!((lexer.line(), lexer.column()), (2, 4));
        assert_eq!(lexer.position(), 7);
    }

    #[test]
    fn test_iterator_stops_at_eof() {
        let handler = Handler::new();
        let lexer = Lexer::new("a b c".as_bytes(), &handler);
        assert_eq!(lexer.count(), 3);
    }

    #[test]
    fn test_open_file() {
        let dir = std::env::temp_dir().join(format!("pgc-lex-open-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("prog.pg");
        let mut file = File::create(&path).unwrap();
        writeln!(file, "begin x := 1 end").unwrap();
        drop(file);

        let handler = Handler::new_panicking();
        let tokens = Lexer::open(&path, &handler).unwrap().tokenize();
        assert_eq!(tokens.len(), 5);
        assert_eq!(tokens[0].kind(), TokenKind::Begin);
        assert_eq!(tokens[4].kind(), TokenKind::End);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_open_missing_file() {
        let handler = Handler::new();
        let err = match Lexer::open("/definitely/not/here.pg", &handler) {
            Ok(_) => panic!("expected open to fail"),
            Err(err) => err,
        };
        assert!(matches!(err, SourceError::Open { .. }));
        assert!(!handler.has_errors());
    }

    #[test]
    fn test_property_eof_idempotent() {
        proptest!(|(input in "\\PC{0,40}")| {
            let handler = Handler::new();
            let mut lexer = Lexer::new(input.as_bytes(), &handler);
            while !lexer.next_token().is_eof() {}
            prop_assert!(lexer.next_token().is_eof());
            prop_assert!(lexer.next_token().is_eof());
        });
    }

    #[test]
    fn test_property_total_coverage() {
        proptest!(|(input in "\\PC{0,60}")| {
            let handler = Handler::new();
            let mut lexer = Lexer::new(input.as_bytes(), &handler);
            let mut steps = 0;
            while !lexer.next_token().is_eof() {
                steps += 1;
                prop_assert!(steps <= input.len());
            }
            prop_assert_eq!(lexer.position(), input.len());
        });
    }

    #[test]
    fn test_property_total_coverage_raw_bytes() {
        proptest!(|(input in proptest::collection::vec(any::<u8>(), 0..64))| {
            let handler = Handler::new();
            let mut lexer = Lexer::new(&input[..], &handler);
            while !lexer.next_token().is_eof() {}
            prop_assert_eq!(lexer.position(), input.len());
        });
    }

    #[test]
    fn test_property_literal_roundtrip() {
        proptest!(|(input in "[a-z0-9_. ]{0,40}")| {
            for token in lex_all(&input) {
                if matches!(token.kind(), TokenKind::Ident | TokenKind::Integer | TokenKind::Float) {
                    let again = lex_all(token.literal());
                    prop_assert_eq!(again, vec![token.clone()]);
                }
            }
        });
    }

    #[test]
    fn test_property_keyword_precedence() {
        proptest!(|(word in "[a-z]{2,8}")| {
            let tokens = lex_all(&word);
            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind(), crate::token::lookup(&word));
        });
    }

    #[test]
    fn test_property_illegal_tokens_are_reported() {
        proptest!(|(input in "[a-z0-9 #@!?\"\n]{0,40}")| {
            let handler = Handler::new();
            let illegal = Lexer::new(input.as_bytes(), &handler)
                .filter(Token::is_illegal)
                .count();
            prop_assert_eq!(illegal, handler.error_count());
        });
    }
}
