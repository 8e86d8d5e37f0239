//! Statement parsing implementation
//!
//! This module handles statement bodies and every statement form:
//!
//! - Declarations and assignments: `int x = 42;`, `x = x + 1;`
//! - Method calls: `print(x, y);`
//! - Control flow: `if`, `while`, `do-while`, `for`, `switch`
//! - `return` and `break`
//! - Expression statements
//!
//! # Grammar
//!
//! ```text
//! Body           ::= statement*            -- until '}' or 'break'
//! StatementBlock ::= '{' Body '}' | statement
//! statement      ::= Variable ';' | Assignment ';' | CallMethod ';' | Return
//!                  | While | If | DoWhile | For | Switch | 'break' ';'
//!                  | Expression ';'
//! ```
//!
//! The statement form is picked by looking at most two tokens ahead, in a
//! fixed order: type keyword, `IDENTIFIER =`, `IDENTIFIER (`, statement
//! keywords, and finally a bare expression.
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::parse::{Parser, Rule, SyntaxError};
use crate::parser::token::TokenKind;
use crate::trace::Trace;

/// Diagnostic codes for a missing `;`, which differ between a body and a
/// single-statement block.
struct TerminatorCodes {
    variable: u16,
    assignment: u16,
    call: u16,
    expression: u16,
}

const BODY_CODES: TerminatorCodes = TerminatorCodes {
    variable: 16,
    assignment: 17,
    call: 18,
    expression: 21,
};

const BLOCK_CODES: TerminatorCodes = TerminatorCodes {
    variable: 54,
    assignment: 55,
    call: 56,
    expression: 58,
};

impl<T: Trace> Parser<'_, T> {
    /// `Body`: statements until `}` or `break` (neither is consumed)
    pub(crate) fn parse_body(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Body);

        while !self.is_at_end() && !self.check("}") && !self.check("break") {
            self.parse_statement(Rule::Body, &BODY_CODES)?;
        }

        Ok(())
    }

    /// `StatementBlock`
    pub(crate) fn parse_statement_block(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::StatementBlock);

        if self.match_token(Rule::StatementBlock, "{") {
            self.parse_body()?;
            return self.expect_token(53, Rule::StatementBlock, "}");
        }

        self.parse_statement(Rule::StatementBlock, &BLOCK_CODES)
    }

    fn parse_statement(&mut self, rule: Rule, codes: &TerminatorCodes) -> Result<(), SyntaxError> {
        if self.is_type() {
            self.parse_variable()?;
            return self.expect_token(codes.variable, rule, ";");
        }

        if self.is_assignment() {
            self.parse_assignment()?;
            return self.expect_token(codes.assignment, rule, ";");
        }

        if self.is_method_call() {
            self.parse_call_method()?;
            return self.expect_token(codes.call, rule, ";");
        }

        if self.check_keyword("return") {
            return self.parse_return();
        }
        if self.check_keyword("while") {
            return self.parse_while();
        }
        if self.check_keyword("if") {
            return self.parse_if();
        }
        if self.check_keyword("do") {
            return self.parse_do_while();
        }
        if self.check_keyword("for") {
            return self.parse_for();
        }
        if self.check_keyword("switch") {
            return self.parse_switch();
        }

        // Never reached from parse_body, which stops in front of `break`
        if rule == Rule::Body && self.check_keyword("break") {
            self.advance(rule);
            return self.expect_token(20, rule, ";");
        }

        self.parse_expression()?;
        self.expect_token(codes.expression, rule, ";")
    }

    /// `IDENTIFIER =` but not `IDENTIFIER ==`
    pub(crate) fn is_assignment(&self) -> bool {
        self.check_kind(TokenKind::Identifier)
            && self.operator_width(1, "=") == Some(1)
            && self.operator_width(1, "==").is_none()
    }

    /// `IDENTIFIER (`
    pub(crate) fn is_method_call(&self) -> bool {
        self.check_kind(TokenKind::Identifier) && self.check_ahead(1, "(")
    }

    /// `Assignment`
    pub(crate) fn parse_assignment(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Assignment);
        self.expect_identifier(24, Rule::Assignment)?;

        if !self.match_token(Rule::Assignment, "=") {
            return Err(self.error(23, Rule::Assignment, "'='"));
        }
        self.parse_expression()
    }

    /// `CallMethod`
    pub(crate) fn parse_call_method(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::CallMethod);
        self.expect_identifier(27, Rule::CallMethod)?;

        if !self.match_token(Rule::CallMethod, "(") {
            return Err(self.error(26, Rule::CallMethod, "'(' after method name"));
        }
        self.parse_param_values()?;
        self.expect_token(25, Rule::CallMethod, ")")
    }

    /// Call arguments: `(Expression (',' Expression)*)?`
    fn parse_param_values(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::ParamValues);

        if !self.check(")") {
            self.parse_expression()?;
            while self.match_token(Rule::ParamValues, ",") {
                self.parse_expression()?;
            }
        }

        Ok(())
    }

    /// `Return`
    fn parse_return(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Return);
        self.expect_keyword(28, Rule::Return, "return")?;

        if !self.check(";") {
            self.parse_expression()?;
        }
        self.expect_token(19, Rule::Return, ";")
    }

    /// `While`
    fn parse_while(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::While);
        self.expect_keyword(31, Rule::While, "while")?;

        if !self.match_token(Rule::While, "(") {
            return Err(self.error(30, Rule::While, "'(' after 'while'"));
        }
        self.parse_expression()?;
        if !self.match_token(Rule::While, ")") {
            return Err(self.error(29, Rule::While, "')' after while condition"));
        }

        self.parse_statement_block()
    }

    /// `If`
    fn parse_if(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::If);
        self.expect_keyword(34, Rule::If, "if")?;

        if !self.match_token(Rule::If, "(") {
            return Err(self.error(33, Rule::If, "'(' after 'if'"));
        }
        self.parse_expression()?;
        if !self.match_token(Rule::If, ")") {
            return Err(self.error(32, Rule::If, "')' after if condition"));
        }

        self.parse_statement_block()?;

        if self.check_keyword("else") {
            self.advance(Rule::If);
            self.parse_statement_block()?;
        }

        Ok(())
    }

    /// `DoWhile`
    fn parse_do_while(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::DoWhile);
        self.expect_keyword(39, Rule::DoWhile, "do")?;
        self.parse_statement_block()?;

        if !self.check_keyword("while") {
            return Err(self.error(38, Rule::DoWhile, "'while' after do body"));
        }
        self.advance(Rule::DoWhile);

        if !self.match_token(Rule::DoWhile, "(") {
            return Err(self.error(37, Rule::DoWhile, "'(' after 'while'"));
        }
        self.parse_expression()?;
        if !self.match_token(Rule::DoWhile, ")") {
            return Err(self.error(36, Rule::DoWhile, "')' after do-while condition"));
        }
        self.expect_token(35, Rule::DoWhile, ";")
    }

    /// `For`: every clause is optional
    fn parse_for(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::For);
        self.expect_keyword(44, Rule::For, "for")?;

        if !self.match_token(Rule::For, "(") {
            return Err(self.error(43, Rule::For, "'(' after 'for'"));
        }

        if self.is_type() {
            self.parse_variable()?;
        } else if !self.check(";") {
            self.parse_expression()?;
        }
        self.expect_token(40, Rule::For, ";")?;

        if !self.check(";") {
            self.parse_expression()?;
        }
        self.expect_token(41, Rule::For, ";")?;

        if !self.check(")") {
            if self.is_assignment() {
                self.parse_assignment()?;
            } else {
                self.parse_expression()?;
            }
        }
        if !self.match_token(Rule::For, ")") {
            return Err(self.error(42, Rule::For, "')' after for clauses"));
        }

        self.parse_statement_block()
    }

    /// `Switch`
    fn parse_switch(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Switch);
        self.expect_keyword(52, Rule::Switch, "switch")?;

        if !self.match_token(Rule::Switch, "(") {
            return Err(self.error(51, Rule::Switch, "'(' after 'switch'"));
        }
        self.parse_expression()?;
        if !self.match_token(Rule::Switch, ")") {
            return Err(self.error(50, Rule::Switch, "')' after switch value"));
        }
        if !self.match_token(Rule::Switch, "{") {
            return Err(self.error(49, Rule::Switch, "'{' before switch cases"));
        }

        while !self.check("}") && !self.is_at_end() {
            if self.check_keyword("case") {
                self.advance(Rule::Switch);
                self.parse_expression()?;
                if !self.match_token(Rule::Switch, ":") {
                    return Err(self.error(45, Rule::Switch, "':' after case value"));
                }

                self.parse_body()?;
                self.expect_keyword(62, Rule::Switch, "break")?;
                self.match_token(Rule::Switch, ";");
            } else if self.check_keyword("default") {
                self.advance(Rule::Switch);
                if !self.match_token(Rule::Switch, ":") {
                    return Err(self.error(46, Rule::Switch, "':' after 'default'"));
                }

                self.parse_body()?;
                if self.check_keyword("break") {
                    self.advance(Rule::Switch);
                    self.match_token(Rule::Switch, ";");
                }
            } else {
                return Err(self.error(47, Rule::Switch, "'case' or 'default'"));
            }
        }

        self.expect_token(48, Rule::Switch, "}")
    }
}
