//! Token definitions and the keyword table.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact source text that
//! produced it. Kinds fall into four groups: special (`Illegal`, `Eof`),
//! literals, keywords, and operators/delimiters.

use std::fmt;

use crate::unicode::{is_digit, is_letter};

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenKind {
    // Special
    /// Malformed input; the literal holds the offending text.
    Illegal,
    /// End of input.
    Eof,

    // Literals
    /// Identifier (`x`, `total`, `αβ`).
    Ident,
    /// Integer literal (`12`).
    Integer,
    /// Float literal (`3.14`, `.5`, `5.`).
    Float,
    /// String literal content, without the quotes.
    String,

    // Keywords
    /// `var`
    Var,
    /// `begin`
    Begin,
    /// `end`
    End,
    /// `integer`
    IntegerType,
    /// `float`
    FloatType,
    /// `string`
    StringType,

    // Operators and delimiters
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Quo,
    /// `%`
    Rem,
    /// `:=`
    Define,
    /// `:`
    Colon,
    /// `.`
    Dot,
    /// `;`
    Semicolon,
    /// `,`
    Comma,
}

impl TokenKind {
    /// Returns the display text of this kind.
    ///
    /// Keywords and operators show their source spelling; every other kind
    /// shows an upper-case name.
    pub const fn as_str(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::Eof => "EOF",
            TokenKind::Ident => "IDENT",
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::String => "STRING",
            TokenKind::Var => "var",
            TokenKind::Begin => "begin",
            TokenKind::End => "end",
            TokenKind::IntegerType => "integer",
            TokenKind::FloatType => "float",
            TokenKind::StringType => "string",
            TokenKind::Add => "+",
            TokenKind::Sub => "-",
            TokenKind::Mul => "*",
            TokenKind::Quo => "/",
            TokenKind::Rem => "%",
            TokenKind::Define => ":=",
            TokenKind::Colon => ":",
            TokenKind::Dot => ".",
            TokenKind::Semicolon => ";",
            TokenKind::Comma => ",",
        }
    }

    /// Returns true for identifiers and literal values.
    #[inline]
    pub const fn is_literal(self) -> bool {
        matches!(
            self,
            TokenKind::Ident | TokenKind::Integer | TokenKind::Float | TokenKind::String
        )
    }

    /// Returns true for integer and float literals.
    #[inline]
    pub const fn is_number(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::Float)
    }

    /// Returns true for reserved words.
    #[inline]
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Var
                | TokenKind::Begin
                | TokenKind::End
                | TokenKind::IntegerType
                | TokenKind::FloatType
                | TokenKind::StringType
        )
    }

    /// Returns true for operators and delimiters.
    #[inline]
    pub const fn is_operator(self) -> bool {
        matches!(
            self,
            TokenKind::Add
                | TokenKind::Sub
                | TokenKind::Mul
                | TokenKind::Quo
                | TokenKind::Rem
                | TokenKind::Define
                | TokenKind::Colon
                | TokenKind::Dot
                | TokenKind::Semicolon
                | TokenKind::Comma
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Every reserved word, in declaration order.
pub const KEYWORDS: [TokenKind; 6] = [
    TokenKind::Var,
    TokenKind::Begin,
    TokenKind::End,
    TokenKind::IntegerType,
    TokenKind::FloatType,
    TokenKind::StringType,
];

/// Maps a reserved word to its kind.
///
/// # Example
///
/// ```
/// use pgc_lex::token::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident("begin"), Some(TokenKind::Begin));
/// assert_eq!(keyword_from_ident("Begin"), None);
/// ```
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    match ident {
        "var" => Some(TokenKind::Var),
        "begin" => Some(TokenKind::Begin),
        "end" => Some(TokenKind::End),
        "integer" => Some(TokenKind::IntegerType),
        "float" => Some(TokenKind::FloatType),
        "string" => Some(TokenKind::StringType),
        _ => None,
    }
}

/// Classifies an identifier-shaped word: its keyword kind, or `Ident`.
#[inline]
pub fn lookup(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Ident)
}

/// Reports whether `name` is a reserved word.
#[inline]
pub fn is_keyword(name: &str) -> bool {
    keyword_from_ident(name).is_some()
}

/// Reports whether `name` is a legal identifier that is not a keyword.
///
/// # Example
///
/// ```
/// use pgc_lex::token::is_identifier;
///
/// assert!(is_identifier("x1"));
/// assert!(is_identifier("_tmp"));
/// assert!(!is_identifier("1x"));
/// assert!(!is_identifier("var"));
/// assert!(!is_identifier(""));
/// ```
pub fn is_identifier(name: &str) -> bool {
    if name.is_empty() || is_keyword(name) {
        return false;
    }
    name.chars()
        .enumerate()
        .all(|(i, c)| is_letter(c) || (i > 0 && is_digit(c)))
}

/// A lexical token: its kind and the source text it came from.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Token {
    kind: TokenKind,
    literal: String,
}

impl Token {
    /// Creates a token.
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }

    /// The end-of-input token, with an empty literal.
    pub fn eof() -> Self {
        Self::new(TokenKind::Eof, String::new())
    }

    /// Returns the kind of this token.
    #[inline]
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Returns the source text of this token.
    #[inline]
    pub fn literal(&self) -> &str {
        &self.literal
    }

    /// Returns true if this is the end-of-input token.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }

    /// Returns true if this token marks malformed input.
    #[inline]
    pub fn is_illegal(&self) -> bool {
        self.kind == TokenKind::Illegal
    }

    /// Consumes the token, returning its literal.
    pub fn into_literal(self) -> String {
        self.literal
    }
}

/// Renders as `Kind("literal")`, e.g. `Define(":=")`.
impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}({:?})", self.kind, self.literal)
    }
}
