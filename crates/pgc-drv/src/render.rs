//! Token rendering for the `pgc` command.
//!
//! Text output prints one line per token: `category:"literal"`, or
//! `literal: error, invalid lexem` for an illegal token. JSON output prints
//! an array of `{ kind, category, literal, line, column }` records.

use std::fmt;
use std::io::{self, Read, Write};

use clap::ValueEnum;
use pgc_lex::{Lexer, Token, TokenKind};
use pgc_util::Span;
use serde::Serialize;

/// Output format selected with `--format`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// One `category:"literal"` line per token
    #[default]
    Text,
    /// A JSON array of token records
    Json,
}

/// The reporting category of a token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Integer or float literal
    Number,
    /// String literal
    String,
    /// Identifier
    Ident,
    /// Keyword, operator or delimiter
    Lexem,
    /// Anything without a better name
    Unknown,
    /// Illegal token
    Error,
}

impl Category {
    /// Picks the category for a token kind.
    pub fn of(kind: TokenKind) -> Self {
        match kind {
            TokenKind::Illegal => Category::Error,
            TokenKind::Ident => Category::Ident,
            TokenKind::String => Category::String,
            k if k.is_number() => Category::Number,
            k if k.is_keyword() || k.is_operator() => Category::Lexem,
            _ => Category::Unknown,
        }
    }

    /// Returns the lowercase name of this category.
    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Number => "number",
            Category::String => "string",
            Category::Ident => "ident",
            Category::Lexem => "lexem",
            Category::Unknown => "unknown",
            Category::Error => "error",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One token as it appears in JSON output.
#[derive(Debug, Serialize)]
pub struct TokenRecord {
    /// Display name of the kind (`IDENT`, `var`, `:=`, ...)
    pub kind: &'static str,
    /// Reporting category
    pub category: Category,
    /// Source text
    pub literal: String,
    /// Line of the first character (1-based)
    pub line: u32,
    /// Column of the first character (1-based)
    pub column: u32,
}

impl TokenRecord {
    /// Builds the record for `token`, which starts at `span`.
    pub fn new(token: Token, span: Span) -> Self {
        Self {
            kind: token.kind().as_str(),
            category: Category::of(token.kind()),
            literal: token.into_literal(),
            line: span.line,
            column: span.column,
        }
    }
}

/// Formats a single token as a text line, without the newline.
pub fn text_line(token: &Token) -> String {
    match Category::of(token.kind()) {
        Category::Error => format!("{}: error, invalid lexem", token.literal()),
        category => format!("{}:\"{}\"", category, token.literal()),
    }
}

/// Writes tokens as text, one line each, as they arrive.
pub fn write_text<W, I>(out: &mut W, tokens: I) -> io::Result<()>
where
    W: Write,
    I: IntoIterator<Item = Token>,
{
    for token in tokens {
        writeln!(out, "{}", text_line(&token))?;
    }
    Ok(())
}

/// Scans the rest of `lexer` and writes its tokens as a pretty-printed JSON
/// array followed by a newline.
pub fn write_json<W, R>(out: &mut W, lexer: &mut Lexer<'_, R>) -> io::Result<()>
where
    W: Write,
    R: Read,
{
    let mut records = Vec::new();
    loop {
        let token = lexer.next_token();
        if token.is_eof() {
            break;
        }
        records.push(TokenRecord::new(token, lexer.token_span()));
    }
    serde_json::to_writer_pretty(&mut *out, &records)?;
    writeln!(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pgc_util::Handler;

    fn json_for(source: &str) -> serde_json::Value {
        let handler = Handler::new();
        let mut lexer = Lexer::new(source.as_bytes(), &handler);
        let mut out = Vec::new();
        write_json(&mut out, &mut lexer).unwrap();
        serde_json::from_slice(&out).unwrap()
    }

    #[test]
    fn test_category_of() {
        assert_eq!(Category::of(TokenKind::Integer), Category::Number);
        assert_eq!(Category::of(TokenKind::Float), Category::Number);
        assert_eq!(Category::of(TokenKind::String), Category::String);
        assert_eq!(Category::of(TokenKind::Ident), Category::Ident);
        assert_eq!(Category::of(TokenKind::Begin), Category::Lexem);
        assert_eq!(Category::of(TokenKind::Define), Category::Lexem);
        assert_eq!(Category::of(TokenKind::Eof), Category::Unknown);
        assert_eq!(Category::of(TokenKind::Illegal), Category::Error);
    }

    #[test]
    fn test_text_line() {
        assert_eq!(
            text_line(&Token::new(TokenKind::Ident, "x")),
            "ident:\"x\""
        );
        assert_eq!(
            text_line(&Token::new(TokenKind::Float, ".5")),
            "number:\".5\""
        );
        assert_eq!(
            text_line(&Token::new(TokenKind::Var, "var")),
            "lexem:\"var\""
        );
        assert_eq!(
            text_line(&Token::new(TokenKind::Illegal, "abc")),
            "abc: error, invalid lexem"
        );
    }

    #[test]
    fn test_write_text_keeps_order() {
        let tokens = vec![
            Token::new(TokenKind::Ident, "x"),
            Token::new(TokenKind::Illegal, "#"),
            Token::new(TokenKind::Semicolon, ";"),
        ];
        let mut out = Vec::new();
        write_text(&mut out, tokens).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "ident:\"x\"\n#: error, invalid lexem\nlexem:\";\"\n"
        );
    }

    #[test]
    fn test_write_json() {
        assert_eq!(
            json_for(":= \"abc"),
            serde_json::json!([
                {
                    "kind": ":=",
                    "category": "lexem",
                    "literal": ":=",
                    "line": 1,
                    "column": 1,
                },
                {
                    "kind": "ILLEGAL",
                    "category": "error",
                    "literal": "abc",
                    "line": 1,
                    "column": 4,
                },
            ])
        );
    }

    #[test]
    fn test_write_json_positions_after_newline() {
        let value = json_for("var\n  x");
        assert_eq!(value[1]["literal"], "x");
        assert_eq!(value[1]["line"], 2);
        assert_eq!(value[1]["column"], 3);
    }

    #[test]
    fn test_write_json_empty() {
        let handler = Handler::new();
        let mut lexer = Lexer::new(" \n".as_bytes(), &handler);
        let mut out = Vec::new();
        write_json(&mut out, &mut lexer).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "[]\n");
    }
}
