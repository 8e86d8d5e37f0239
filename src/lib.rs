//! # Introduction
//!
//! ParsTTY scans and recognizes programs written in a small C-like teaching
//! language.  A table-driven DFA splits the source into tokens, and a
//! recursive descent parser checks them against a fixed grammar, stopping at
//! the first violation with a numbered diagnostic.  Both stages can be
//! observed step by step, either printed to the console or browsed in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer (DFA) → Tokens → Parser → ACCEPTED | SyntaxError
//!                 ↘            ↘
//!                   Trace observer
//! ```
//!
//! 1. [`parser`] — the automaton, the lexer, token values, the recognizer and
//!    [`parser::analyze`], which runs the whole pipeline at once.
//! 2. [`trace`] — the observer trait both stages report to, plus the
//!    [`trace::TraceLog`] collector.
//! 3. [`ui`] — ratatui-based viewer; not part of the stable library API.
//!
//! ## Example
//!
//! ```
//! use parstty::parser::analyze;
//!
//! let analysis = analyze("{ int x = 2 * ( y + 1 ) ; }");
//! assert!(analysis.is_accepted());
//! assert_eq!(analysis.trace.parse_lines()[0], "- RULE_PROGRAM");
//! ```

pub mod parser;
pub mod trace;
pub mod ui;
