//! Declaration parsing implementation
//!
//! This module handles the top of the grammar and everything that introduces
//! a name:
//!
//! ```text
//! Program   ::= '{' Body '}' | 'class' IDENTIFIER '{' Member* '}'
//! Member    ::= Methods | Variable ';'
//! Methods   ::= Type IDENTIFIER '(' Params? ')' '{' Body '}'
//! Params    ::= Type IDENTIFIER (',' Type IDENTIFIER)*
//! Variable  ::= Type IDENTIFIER ('=' Expression)?
//! Type      ::= 'int' | 'float' | 'void' | 'char' | 'string' | 'boolean'
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::parser::parse::{Parser, Rule, SyntaxError};
use crate::parser::token::TokenKind;
use crate::trace::Trace;

impl<T: Trace> Parser<'_, T> {
    /// `Program`, without the trailing-token check
    pub(crate) fn parse_program_rule(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Program);

        if self.match_token(Rule::Program, "{") {
            self.parse_body()?;
            return self.expect_token(1, Rule::Program, "}");
        }

        if self.check_keyword("class") {
            self.advance(Rule::Program);
            self.expect_identifier(2, Rule::Program)?;

            if !self.match_token(Rule::Program, "{") {
                return Err(self.error(6, Rule::Program, "'{' after class name"));
            }

            while !self.check("}") && !self.is_at_end() {
                self.parse_class_member()?;
            }

            return self.expect_token(5, Rule::Program, "}");
        }

        Err(self.error(7, Rule::Program, "'{' or 'class'"))
    }

    /// One method or field inside a class body
    fn parse_class_member(&mut self) -> Result<(), SyntaxError> {
        if !self.is_type() {
            return Err(self.error(4, Rule::Program, "type of a class member"));
        }

        if self.is_method_declaration() {
            self.parse_method()
        } else {
            self.parse_variable()?;
            self.expect_token(3, Rule::Program, ";")
        }
    }

    /// Type, identifier, `(`. Looks only; the cursor does not move and
    /// nothing is traced.
    pub(crate) fn is_method_declaration(&self) -> bool {
        self.is_type()
            && self
                .peek_ahead(1)
                .is_some_and(|t| t.kind() == TokenKind::Identifier)
            && self.check_ahead(2, "(")
    }

    /// `Methods`
    pub(crate) fn parse_method(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Methods);
        self.parse_type()?;
        self.expect_identifier(8, Rule::Methods)?;

        if !self.match_token(Rule::Methods, "(") {
            return Err(self.error(12, Rule::Methods, "'(' after method name"));
        }
        self.parse_params()?;
        self.expect_token(9, Rule::Methods, ")")?;

        if !self.match_token(Rule::Methods, "{") {
            return Err(self.error(11, Rule::Methods, "'{' before method body"));
        }
        self.parse_body()?;
        self.expect_token(10, Rule::Methods, "}")
    }

    /// `Params?`: nothing at all unless the next token is a type
    fn parse_params(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Params);

        if !self.is_type() {
            return Ok(());
        }

        self.parse_type()?;
        self.expect_identifier(13, Rule::Params)?;

        while self.match_token(Rule::Params, ",") {
            if !self.is_type() {
                return Err(self.error(15, Rule::Params, "parameter type after ','"));
            }
            self.parse_type()?;
            self.expect_identifier(14, Rule::Params)?;
        }

        Ok(())
    }

    /// `Variable`
    pub(crate) fn parse_variable(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Variable);
        self.parse_type()?;
        self.expect_identifier(22, Rule::Variable)?;

        if self.match_token(Rule::Variable, "=") {
            self.parse_expression()?;
        }

        Ok(())
    }

    /// `Type`
    pub(crate) fn parse_type(&mut self) -> Result<(), SyntaxError> {
        self.enter(Rule::Type);

        if self.is_type() {
            self.advance_labeled(Rule::Type, "TYPE");
            Ok(())
        } else {
            Err(self.error(61, Rule::Type, "type name"))
        }
    }
}
