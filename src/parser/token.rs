//! Token values produced by the lexer

use std::fmt;

/// Classification of a token. The `Display` form (`INTEGER`, `KEYWORD`, ...)
/// is the name printed in token tables and diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Integer,
    Float,
    Binary,
    Octal,
    Hexadecimal,
    String,
    Identifier,
    Keyword,
    Operator,
    Delimiter,
    Error,
}

impl TokenKind {
    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::Integer => "INTEGER",
            TokenKind::Float => "FLOAT",
            TokenKind::Binary => "BINARY",
            TokenKind::Octal => "OCTAL",
            TokenKind::Hexadecimal => "HEXADECIMAL",
            TokenKind::String => "STRING",
            TokenKind::Identifier => "IDENTIFIER",
            TokenKind::Keyword => "KEYWORD",
            TokenKind::Operator => "OPERATOR",
            TokenKind::Delimiter => "DELIMITER",
            TokenKind::Error => "ERROR",
        }
    }

    /// Numerals of every base
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TokenKind::Integer
                | TokenKind::Float
                | TokenKind::Binary
                | TokenKind::Octal
                | TokenKind::Hexadecimal
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One classified lexeme.
///
/// Tokens are created by the lexer and never change afterwards, so the fields
/// are only reachable through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    lexeme: String,
    kind: TokenKind,
    line: usize,
    column: usize,
}

impl Token {
    pub fn new(lexeme: impl Into<String>, kind: TokenKind, line: usize, column: usize) -> Self {
        Token {
            lexeme: lexeme.into(),
            kind,
            line,
            column,
        }
    }

    /// The exact source text, including the quotes of a string literal.
    pub fn lexeme(&self) -> &str {
        &self.lexeme
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// 1-based source line
    pub fn line(&self) -> usize {
        self.line
    }

    /// 1-based column, in characters, of the lexeme's first character
    pub fn column(&self) -> usize {
        self.column
    }

    /// True when `next` starts on the same line right where this token ends.
    pub fn touches(&self, next: &Token) -> bool {
        self.line == next.line && self.column + self.lexeme.chars().count() == next.column
    }

    /// True for a keyword whose text is exactly `word`.
    pub fn is_keyword(&self, word: &str) -> bool {
        self.kind == TokenKind::Keyword && self.lexeme == word
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} '{}' (line {})", self.kind, self.lexeme, self.line)
    }
}
