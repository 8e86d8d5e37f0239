//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including the error type, the grammar [`Rule`] names, cursor helpers and
//! the top-level entry point.
//!
//! # Parser Architecture
//!
//! The Parser is a predictive recursive-descent recognizer: one method per
//! grammar rule, no tree is built. Methods are spread over several files
//! using `impl Parser` blocks:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: program, class members, methods, parameters, types
//! - `statements`: statement bodies and control flow
//! - `expressions`: the precedence ladder from `||` down to operands
//!
//! # Failure
//!
//! Every rule returns `Result<(), SyntaxError>`. The first mismatch aborts the
//! whole parse: `?` carries it straight to [`Parser::parse_program`] without
//! any further rule running, so nothing is traced after the failing check.

use crate::parser::token::{Token, TokenKind};
use crate::trace::{NoTrace, Trace};
use std::fmt;
use thiserror::Error;

/// Grammar rules, used for tracing and diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    Program,
    Methods,
    Params,
    Body,
    Variable,
    Assignment,
    CallMethod,
    ParamValues,
    Return,
    While,
    If,
    DoWhile,
    For,
    Switch,
    StatementBlock,
    Expression,
    /// `&&` level
    X,
    /// `!` prefix level
    Y,
    /// relational level
    R,
    /// additive level
    E,
    /// multiplicative level
    A,
    /// unary minus level
    B,
    /// operands
    C,
    Type,
}

impl Rule {
    /// Name printed in the parse trace
    pub fn trace_name(self) -> &'static str {
        match self {
            Rule::Program => "RULE_PROGRAM",
            Rule::Methods => "RULE_METHODS",
            Rule::Params => "RULE_PARAMS",
            Rule::Body => "RULE_BODY",
            Rule::Variable => "RULE_VARIABLE",
            Rule::Assignment => "RULE_ASSIGNMENT",
            Rule::CallMethod => "RULE_CALL_METHOD",
            Rule::ParamValues => "RULE_PARAM_VALUES",
            Rule::Return => "RULE_RETURN",
            Rule::While => "RULE_WHILE",
            Rule::If => "RULE_IF",
            Rule::DoWhile => "RULE_DO_WHILE",
            Rule::For => "RULE_FOR",
            Rule::Switch => "RULE_SWITCH",
            Rule::StatementBlock => "RULE_STATEMENT_BLOCK",
            Rule::Expression => "RULE_EXPRESSION",
            Rule::X => "RULE_X",
            Rule::Y => "RULE_Y",
            Rule::R => "RULE_R",
            Rule::E => "RULE_E",
            Rule::A => "RULE_A",
            Rule::B => "RULE_B",
            Rule::C => "RULE_C",
            Rule::Type => "RULE_TYPE",
        }
    }

    /// Indentation of this rule's trace lines, in dashes
    pub fn depth(self) -> usize {
        match self {
            Rule::Program => 1,
            Rule::Body => 2,
            Rule::Variable
            | Rule::Assignment
            | Rule::CallMethod
            | Rule::Return
            | Rule::While
            | Rule::If
            | Rule::DoWhile
            | Rule::For
            | Rule::Switch
            | Rule::Expression => 3,
            Rule::ParamValues | Rule::StatementBlock | Rule::X => 4,
            Rule::Methods | Rule::Type | Rule::Y => 5,
            Rule::Params | Rule::R => 6,
            Rule::E => 7,
            Rule::A => 8,
            Rule::B => 9,
            Rule::C => 10,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.trace_name())
    }
}

/// Fatal syntax error: the first grammar position whose expectation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Error {code} at line {line}, token: {found} ({rule}: expected {expected})")]
pub struct SyntaxError {
    /// Numbered diagnostic, unique per check site
    pub code: u16,
    pub rule: Rule,
    pub expected: String,
    /// Lexeme at the cursor, or `end of input`
    pub found: String,
    pub line: usize,
    /// Index of the offending token; the token count at end of input
    pub position: usize,
}

/// Shown as `found` when the cursor ran past the last token
pub const END_OF_INPUT: &str = "end of input";

/// Type keywords accepted by [`Rule::Type`]
pub const TYPE_NAMES: &[&str] = &["int", "float", "void", "char", "string", "boolean"];

/// Recursive descent recognizer over a token slice.
///
/// A parser is single use: construct it over one token sequence and call
/// [`parse_program`](Parser::parse_program) once.
pub struct Parser<'a, T = NoTrace> {
    pub(crate) tokens: &'a [Token],
    pub(crate) position: usize,
    pub(crate) trace: T,
}

impl<'a> Parser<'a, NoTrace> {
    pub fn new(tokens: &'a [Token]) -> Self {
        Parser::with_trace(tokens, NoTrace)
    }
}

impl<'a, T: Trace> Parser<'a, T> {
    /// Create a parser that reports rule entries and consumed tokens to
    /// `trace`.
    pub fn with_trace(tokens: &'a [Token], trace: T) -> Self {
        Parser {
            tokens,
            position: 0,
            trace,
        }
    }

    /// Parse the entire token sequence as a `Program`. Succeeds only if the
    /// program consumes every token.
    pub fn parse_program(&mut self) -> Result<(), SyntaxError> {
        self.parse_program_rule()?;

        if !self.is_at_end() {
            return Err(self.error(99, Rule::Program, "end of input after program"));
        }

        Ok(())
    }

    /// Index of the next unconsumed token
    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_trace(self) -> T {
        self.trace
    }

    // ===== Helper methods =====

    pub(crate) fn enter(&mut self, rule: Rule) {
        self.trace.enter(rule);
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&'a Token> {
        self.peek_ahead(0)
    }

    pub(crate) fn peek_ahead(&self, n: usize) -> Option<&'a Token> {
        let tokens: &'a [Token] = self.tokens;
        tokens.get(self.position + n)
    }

    /// Current token has exactly this lexeme
    pub(crate) fn check(&self, lexeme: &str) -> bool {
        self.check_ahead(0, lexeme)
    }

    pub(crate) fn check_ahead(&self, n: usize, lexeme: &str) -> bool {
        self.peek_ahead(n).is_some_and(|t| t.lexeme() == lexeme)
    }

    pub(crate) fn check_kind(&self, kind: TokenKind) -> bool {
        self.peek().is_some_and(|t| t.kind() == kind)
    }

    pub(crate) fn check_keyword(&self, word: &str) -> bool {
        self.peek().is_some_and(|t| t.is_keyword(word))
    }

    /// Current token is one of the type keywords
    pub(crate) fn is_type(&self) -> bool {
        self.peek()
            .is_some_and(|t| t.kind() == TokenKind::Keyword && TYPE_NAMES.contains(&t.lexeme()))
    }

    /// Number of tokens spelling operator `op` at offset `n`: one token with
    /// that lexeme, or one-character operator tokens with nothing between
    /// them in the source (the lexer never joins `||`, `&&`, `==`, `!=`).
    pub(crate) fn operator_width(&self, n: usize, op: &str) -> Option<usize> {
        let first = self.peek_ahead(n)?;
        if first.lexeme() == op {
            return Some(1);
        }

        let mut width = 0;
        let mut previous: Option<&Token> = None;
        for c in op.chars() {
            let token = self.peek_ahead(n + width)?;
            if token.kind() != TokenKind::Operator
                || previous.is_some_and(|p| !p.touches(token))
                || !token.lexeme().chars().eq(std::iter::once(c))
            {
                return None;
            }
            previous = Some(token);
            width += 1;
        }
        Some(width)
    }

    pub(crate) fn check_operator(&self, op: &str) -> bool {
        self.operator_width(0, op).is_some()
    }

    /// Consume operator `op` if present, tracing it under `rule`.
    pub(crate) fn match_operator(&mut self, rule: Rule, op: &str) -> bool {
        match self.operator_width(0, op) {
            Some(width) => {
                self.position += width;
                self.trace.accept(rule, op);
                true
            }
            None => false,
        }
    }

    /// Consume the current token, tracing its lexeme under `rule`.
    pub(crate) fn advance(&mut self, rule: Rule) {
        if let Some(token) = self.peek() {
            self.position += 1;
            self.trace.accept(rule, token.lexeme());
        }
    }

    /// Consume the current token, tracing it as `LABEL: lexeme`.
    pub(crate) fn advance_labeled(&mut self, rule: Rule, label: &str) {
        if let Some(token) = self.peek() {
            self.position += 1;
            self.trace.accept(rule, &format!("{}: {}", label, token.lexeme()));
        }
    }

    /// Consume the current token if its lexeme is `lexeme`.
    pub(crate) fn match_token(&mut self, rule: Rule, lexeme: &str) -> bool {
        if self.check(lexeme) {
            self.advance(rule);
            true
        } else {
            false
        }
    }

    pub(crate) fn expect_token(
        &mut self,
        code: u16,
        rule: Rule,
        lexeme: &str,
    ) -> Result<(), SyntaxError> {
        if self.match_token(rule, lexeme) {
            Ok(())
        } else {
            Err(self.error(code, rule, &format!("'{}'", lexeme)))
        }
    }

    pub(crate) fn expect_keyword(
        &mut self,
        code: u16,
        rule: Rule,
        word: &str,
    ) -> Result<(), SyntaxError> {
        if self.check_keyword(word) {
            self.advance(rule);
            Ok(())
        } else {
            Err(self.error(code, rule, &format!("keyword '{}'", word)))
        }
    }

    pub(crate) fn expect_identifier(&mut self, code: u16, rule: Rule) -> Result<(), SyntaxError> {
        if self.check_kind(TokenKind::Identifier) {
            self.advance_labeled(rule, "IDENTIFIER");
            Ok(())
        } else {
            Err(self.error(code, rule, "identifier"))
        }
    }

    /// Build the diagnostic for the token at the cursor.
    pub(crate) fn error(&self, code: u16, rule: Rule, expected: &str) -> SyntaxError {
        let (found, line) = match self.peek() {
            Some(token) => (token.lexeme().to_string(), token.line()),
            None => (
                END_OF_INPUT.to_string(),
                self.tokens.last().map_or(0, Token::line),
            ),
        };

        SyntaxError {
            code,
            rule,
            expected: expected.to_string(),
            found,
            line,
            position: self.position,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::lexer::Lexer;
    use crate::trace::TraceLog;

    fn parse(source: &str) -> Result<(), SyntaxError> {
        let tokens = Lexer::new().tokenize_str(source);
        Parser::new(&tokens).parse_program()
    }

    #[test]
    fn test_parse_simple_block() {
        assert_eq!(parse("{ int x = 5 ; }"), Ok(()));
    }

    #[test]
    fn test_parse_class_with_method() {
        assert_eq!(parse("class Foo { int bar ( ) { return 1 ; } }"), Ok(()));
    }

    #[test]
    fn test_trailing_tokens_rejected() {
        let err = parse("{ } }").unwrap_err();
        assert_eq!(err.code, 99);
        assert_eq!(err.found, "}");
    }

    #[test]
    fn test_missing_close_reports_end_of_input() {
        let err = parse("{ int x ;\n").unwrap_err();
        assert_eq!(err.code, 1);
        assert_eq!(err.found, END_OF_INPUT);
        assert_eq!(err.line, 1);
    }

    #[test]
    fn test_empty_input() {
        let err = parse("").unwrap_err();
        assert_eq!(err.code, 7);
        assert_eq!(err.line, 0);
    }

    #[test]
    fn test_error_display() {
        let err = parse("{ int = 3 ; }").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Error 22 at line 1, token: = (RULE_VARIABLE: expected identifier)"
        );
    }

    #[test]
    fn test_operator_width() {
        let tokens = Lexer::new().tokenize_str("a == b\nc =\n= d");
        let parser = Parser::new(&tokens);

        assert_eq!(parser.operator_width(1, "=="), Some(2));
        assert_eq!(parser.operator_width(1, "="), Some(1));
        assert_eq!(parser.operator_width(0, "=="), None);
        assert_eq!(parser.operator_width(2, "=="), None);
        // `=` `=` split across lines
        assert_eq!(parser.operator_width(5, "=="), None);
    }

    #[test]
    fn test_spaced_operator_characters_stay_apart() {
        let tokens = Lexer::new().tokenize_str("a = = b | | c !=d");
        let parser = Parser::new(&tokens);

        assert_eq!(parser.operator_width(1, "=="), None);
        assert_eq!(parser.operator_width(1, "="), Some(1));
        assert_eq!(parser.operator_width(4, "||"), None);
        assert_eq!(parser.operator_width(7, "!="), Some(2));
    }

    #[test]
    fn test_spaced_equals_is_assignment_then_bad_operand() {
        let err = parse("{ x = = 5 ; }").unwrap_err();
        assert_eq!(err.code, 60);
        assert_eq!(err.found, "=");
        assert_eq!(err.position, 3);
    }

    #[test]
    fn test_spaced_bars_are_not_logical_or() {
        let err = parse("{ a = b | | c ; }").unwrap_err();
        assert_eq!(err.code, 17);
        assert_eq!(err.found, "|");
    }

    #[test]
    fn test_error_position_is_the_failing_token() {
        let err = parse("{ y = ( 1 ) ) ; }").unwrap_err();
        assert_eq!(err.found, ")");
        assert_eq!(err.position, 6);

        let err = parse("{ int x ;").unwrap_err();
        assert_eq!(err.found, END_OF_INPUT);
        assert_eq!(err.position, 4);
    }

    #[test]
    fn test_trace_is_collected() {
        let tokens = Lexer::new().tokenize_str("{ }");
        let mut parser = Parser::with_trace(&tokens, TraceLog::new());
        parser.parse_program().unwrap();

        let log = parser.into_trace();
        assert_eq!(
            log.parse_lines(),
            vec!["- RULE_PROGRAM", "- {", "-- RULE_BODY", "- }"]
        );
    }
}
