//! Expression parsing implementation
//!
//! One rule per precedence level, loosest first:
//!
//! ```text
//! Expression ::= X ('||' X)*
//! X          ::= Y ('&&' Y)*
//! Y          ::= '!'* R
//! R          ::= E (('<' | '>' | '==' | '!=') E)*
//! E          ::= A (('+' | '-') A)*
//! A          ::= B (('*' | '/') B)*
//! B          ::= '-'? C
//! C          ::= CallMethod | IDENTIFIER | LITERAL | '(' Expression ')'
//! ```
//!
//! Binary levels loop rather than recurse, so chains such as `a - b - c` are
//! consumed left to right at a single level.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::parse::{Parser, Rule, SyntaxError};
use crate::parser::token::{Token, TokenKind};
use crate::trace::Trace;

/// Operators of the relational level. Two-character operators come first so
/// `!=` is never read as a lone `!`.
const RELATIONAL: &[&str] = &["==", "!=", "<", ">"];

/// Token usable as an operand on its own
fn is_literal(token: &Token) -> bool {
    match token.kind() {
        TokenKind::Integer
        | TokenKind::Float
        | TokenKind::String
        | TokenKind::Hexadecimal
        | TokenKind::Binary => true,
        TokenKind::Keyword => matches!(token.lexeme(), "true" | "false"),
        _ => false,
    }
}

impl<T: Trace> Parser<'_, T> {
    /// Parse expression (top-level entry point)
    pub(crate) fn parse_expression(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Expression);
        self.parse_and()?;

        while self.match_operator(Rule::Expression, "||") {
            self.parse_and()?;
        }

        Ok(())
    }

    /// `X`: logical and
    fn parse_and(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::X);
        self.parse_not()?;

        while self.match_operator(Rule::X, "&&") {
            self.parse_not()?;
        }

        Ok(())
    }

    /// `Y`: any number of `!` prefixes
    fn parse_not(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Y);

        while self.match_operator(Rule::Y, "!") {}

        self.parse_relational()
    }

    /// `R`: comparisons
    fn parse_relational(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::R);
        self.parse_additive()?;

        while let Some(op) = RELATIONAL.iter().find(|op| self.check_operator(op)) {
            self.match_operator(Rule::R, op);
            self.parse_additive()?;
        }

        Ok(())
    }

    /// `E`: `+` and `-`
    fn parse_additive(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::E);
        self.parse_multiplicative()?;

        while self.match_operator(Rule::E, "+") || self.match_operator(Rule::E, "-") {
            self.parse_multiplicative()?;
        }

        Ok(())
    }

    /// `A`: `*` and `/`
    fn parse_multiplicative(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::A);
        self.parse_negation()?;

        while self.match_operator(Rule::A, "*") || self.match_operator(Rule::A, "/") {
            self.parse_negation()?;
        }

        Ok(())
    }

    /// `B`: at most one unary minus
    fn parse_negation(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::B);
        self.match_operator(Rule::B, "-");
        self.parse_operand()
    }

    /// `C`: calls, identifiers, literals and parenthesized expressions
    fn parse_operand(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::C);

        let Some(token) = self.peek() else {
            return Err(self.error(60, Rule::C, "operand"));
        };

        if token.kind() == TokenKind::Identifier {
            if self.check_ahead(1, "(") {
                return self.parse_call_method();
            }
            self.advance_labeled(Rule::C, "IDENTIFIER");
            return Ok(());
        }

        if is_literal(token) {
            self.advance_labeled(Rule::C, "LITERAL");
            return Ok(());
        }

        if self.match_token(Rule::C, "(") {
            self.parse_expression()?;
            if !self.match_token(Rule::C, ")") {
                return Err(self.error(59, Rule::C, "')' closing the expression"));
            }
            return Ok(());
        }

        Err(self.error(60, Rule::C, "operand"))
    }
}

#[cfg(test)]
mod tests {
    use crate::parser::lexer::Lexer;
    use crate::parser::parse::{Parser, SyntaxError};
    use crate::trace::TraceLog;

    fn parse_expr(expr: &str) -> Result<(), SyntaxError> {
        let source = format!("{{ {} ; }}", expr);
        let tokens = Lexer::new().tokenize_str(&source);
        Parser::new(&tokens).parse_program()
    }

    #[test]
    fn test_precedence_ladder_accepts() {
        for expr in [
            "1",
            "a + b * c",
            "(a + b) * c",
            "-a / 2",
            "!a",
            "!!a && b",
            "a < b || c > d",
            "a == b && c != d",
            "2 * f(a, b + 1)",
            "g()",
            "true || false",
            "0x1F + 0b101 - 3.5",
            "\"text\" + name",
            "a - b - c",
            "!(a == 1)",
        ] {
            assert_eq!(parse_expr(expr), Ok(()), "expression: {}", expr);
        }
    }

    #[test]
    fn test_operand_errors() {
        assert_eq!(parse_expr("a +").unwrap_err().code, 60);
        assert_eq!(parse_expr("( a + b").unwrap_err().code, 59);
        assert_eq!(parse_expr("* a").unwrap_err().code, 60);
        // Only one unary minus per operand
        assert_eq!(parse_expr("- - a").unwrap_err().code, 60);
        // Octal numerals are not operands
        assert_eq!(parse_expr("017").unwrap_err().code, 60);
        // Lexical errors surface as unexpected operands
        assert_eq!(parse_expr("3.").unwrap_err().code, 60);
    }

    #[test]
    fn test_operand_error_at_end_of_input() {
        let tokens = Lexer::new().tokenize_str("{ x = ");
        let err = Parser::new(&tokens).parse_program().unwrap_err();
        assert_eq!(err.code, 60);
        assert_eq!(err.found, "end of input");
    }

    #[test]
    fn test_two_character_operators_traced_whole() {
        let tokens = Lexer::new().tokenize_str("{ a != b || c ; }");
        let mut parser = Parser::with_trace(&tokens, TraceLog::new());
        parser.parse_program().unwrap();

        let lines = parser.into_trace().parse_lines();
        assert!(lines.contains(&"------ !=".to_string()));
        assert!(lines.contains(&"--- ||".to_string()));
        assert!(!lines.contains(&"----- !".to_string()));
    }

    #[test]
    fn test_literal_labels() {
        let tokens = Lexer::new().tokenize_str("{ x = 5 ; }");
        let mut parser = Parser::with_trace(&tokens, TraceLog::new());
        parser.parse_program().unwrap();

        let lines = parser.into_trace().parse_lines();
        assert!(lines.contains(&"---------- LITERAL: 5".to_string()));
        assert!(lines.contains(&"--- IDENTIFIER: x".to_string()));
    }
}
