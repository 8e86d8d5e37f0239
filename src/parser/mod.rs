//! Lexer and recognizer for the toy C-like language
//!
//! This module turns source text into a verdict:
//! - [`automaton`]: Generic table-driven DFA
//! - [`lexer`]: Tokenization (source lines → tokens), driven by the DFA
//! - [`token`]: Token values and their kinds
//! - [`parse`]: Recursive descent recognizer (tokens → accept or [`SyntaxError`])
//!
//! # Language
//!
//! A program is either a bare block `{ ... }` or a `class` with fields and
//! methods. Statements cover declarations, assignments, calls, `return`,
//! `while`, `if/else`, `do/while`, `for` and `switch`. Expressions follow a
//! fixed precedence ladder from `||` down to unary minus.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent, one method per grammar rule. The parser
//! builds no tree: it validates structure and reports the first violation.
//! Lexical errors never stop the pipeline; they arrive at the parser as
//! `ERROR` tokens and fail there like any other unexpected token.

pub mod automaton;
mod declarations;
mod expressions;
pub mod lexer;
pub mod parse;
mod statements;
pub mod token;

use crate::trace::TraceLog;
use lexer::Lexer;
use parse::{Parser, SyntaxError};
use token::Token;

/// Everything one run of the pipeline produced
#[derive(Debug, Clone)]
pub struct Analysis {
    pub tokens: Vec<Token>,
    /// Lexer events first, then parser events up to the verdict
    pub trace: TraceLog,
    pub outcome: Result<(), SyntaxError>,
}

impl Analysis {
    pub fn is_accepted(&self) -> bool {
        self.outcome.is_ok()
    }
}

/// Scan and parse `source`, collecting the full trace.
pub fn analyze(source: &str) -> Analysis {
    let mut trace = TraceLog::new();
    let tokens = Lexer::new().tokenize_traced(source.lines(), &mut trace);
    let outcome = Parser::with_trace(&tokens, &mut trace).parse_program();

    Analysis {
        tokens,
        trace,
        outcome,
    }
}
