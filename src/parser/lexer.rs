//! DFA-driven lexer
//!
//! Converts source text into a flat [`Token`] stream consumed by the parser.
//! Scanning is line oriented: every line starts in [`LexState::Start`] and no
//! token ever spans two lines.
//!
//! # Scanning
//!
//! Each character is classified as an operator, a delimiter, whitespace or
//! "other". Other characters drive the [`Automaton`]; operators, delimiters
//! and whitespace end the pending lexeme and are emitted as one-character
//! tokens of their own. Three continuations bypass that interruption:
//!
//! - inside a string literal everything up to the closing quote is kept,
//! - `.` after an integer-like state continues into a fraction,
//! - `-` right after an exponent marker continues the numeral.
//!
//! When a lexeme ends in a non-accepting state (or after a missing
//! transition) it is emitted as an [`TokenKind::Error`] token and scanning
//! carries on. Lexical errors are data, never failures.

use super::automaton::Automaton;
use super::token::{Token, TokenKind};
use crate::trace::{NoTrace, Trace};
use std::io::{self, BufRead};

/// Words that classify as [`TokenKind::Keyword`], compared against the
/// lowercased lexeme.
pub const KEYWORDS: &[&str] = &[
    "int", "end", "if", "else", "while", "do", "break", "continue", "class", "return", "for",
    "switch", "case", "default", "float", "void", "char", "string", "boolean", "true", "false",
];

/// States of the scanning automaton
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LexState {
    Start,
    /// A lone `0`; prefix of binary, octal, hex and float numerals
    Zero,
    BinaryPrefix,
    Binary,
    Integer,
    Identifier,
    InString,
    StringEnd,
    HexPrefix,
    Hex,
    Octal,
    /// Integer part followed by `.`, waiting for a digit
    FloatDot,
    Fraction,
    IntExponent,
    IntExponentSign,
    IntExponentDigits,
    FloatExponent,
    FloatExponentSign,
    FloatExponentDigits,
    /// Trailing `f`/`F`
    FloatSuffix,
}

pub fn is_operator(c: char) -> bool {
    matches!(c, '=' | '+' | '-' | '*' | '/' | '<' | '>' | '!' | '&' | '|')
}

pub fn is_delimiter(c: char) -> bool {
    matches!(c, ',' | ';' | '.' | '(' | ')' | '{' | '}' | '[' | ']' | ':')
}

pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

pub fn is_keyword(word: &str) -> bool {
    let lower = word.to_lowercase();
    KEYWORDS.contains(&lower.as_str())
}

/// Lexer for the language. Construction builds the transition table; the
/// lexer is then only read, so one instance can scan any number of inputs.
pub struct Lexer {
    dfa: Automaton<LexState, TokenKind>,
}

impl Lexer {
    pub fn new() -> Self {
        Lexer {
            dfa: build_automaton(),
        }
    }

    /// Tokenize a sequence of lines. Line numbers start at 1.
    pub fn tokenize<I, S>(&self, lines: I) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.tokenize_traced(lines, NoTrace)
    }

    /// Tokenize a whole source string, split on line breaks.
    pub fn tokenize_str(&self, source: &str) -> Vec<Token> {
        self.tokenize(source.lines())
    }

    /// Tokenize everything `reader` yields, one line at a time.
    pub fn tokenize_reader<R: BufRead>(&self, reader: R) -> io::Result<Vec<Token>> {
        let mut tokens = Vec::new();
        for (index, line) in reader.lines().enumerate() {
            self.scan_line(&line?, index + 1, &mut NoTrace, &mut tokens);
        }
        Ok(tokens)
    }

    /// Tokenize `lines`, reporting each token to `trace` as it is emitted.
    pub fn tokenize_traced<I, S, T>(&self, lines: I, mut trace: T) -> Vec<Token>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        T: Trace,
    {
        let mut tokens = Vec::new();
        for (index, line) in lines.into_iter().enumerate() {
            self.scan_line(line.as_ref(), index + 1, &mut trace, &mut tokens);
        }
        tokens
    }

    /// Scan one line, appending its tokens to `out`.
    pub fn scan_line<T: Trace>(
        &self,
        line: &str,
        line_number: usize,
        trace: &mut T,
        out: &mut Vec<Token>,
    ) {
        let mut scanner = LineScanner {
            dfa: &self.dfa,
            line: line_number,
            state: Some(self.dfa.start()),
            buffer: String::new(),
            column: 0,
            start: 0,
            out,
            trace,
        };

        for (index, c) in line.chars().enumerate() {
            scanner.column = index + 1;
            scanner.step(c);
        }

        // Last word on the line
        scanner.flush();
    }
}

impl Default for Lexer {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-line scanning state. `state` is `None` once a transition was missing;
/// the dead state is never accepting.
struct LineScanner<'a, T> {
    dfa: &'a Automaton<LexState, TokenKind>,
    line: usize,
    state: Option<LexState>,
    buffer: String,
    /// Column of the character being stepped
    column: usize,
    /// Column where `buffer` began
    start: usize,
    out: &'a mut Vec<Token>,
    trace: &'a mut T,
}

impl<T: Trace> LineScanner<'_, T> {
    fn step(&mut self, c: char) {
        if self.continues_through(c) {
            self.advance(c);
            if self.state == Some(LexState::StringEnd) {
                // A closing quote ends the literal immediately
                self.flush();
            }
        } else if !(is_operator(c) || is_delimiter(c) || is_space(c)) {
            if c == '"' && !self.buffer.is_empty() {
                self.flush();
            }
            self.advance(c);
        } else {
            self.flush();
            if is_operator(c) {
                self.emit(Token::new(c, TokenKind::Operator, self.line, self.column));
            } else if is_delimiter(c) {
                self.emit(Token::new(c, TokenKind::Delimiter, self.line, self.column));
            }
        }
    }

    /// Operator, delimiter and space characters that still belong to the
    /// current lexeme.
    fn continues_through(&self, c: char) -> bool {
        match self.state {
            Some(LexState::InString) => true,
            Some(LexState::Zero | LexState::Integer | LexState::Octal) => c == '.',
            Some(LexState::IntExponent | LexState::FloatExponent) => c == '-',
            _ => false,
        }
    }

    fn advance(&mut self, c: char) {
        if self.buffer.is_empty() {
            self.start = self.column;
        }
        self.state = self.state.and_then(|state| self.dfa.next_state(state, c));
        self.buffer.push(c);
    }

    /// Emit the pending lexeme (if any) and return to the start state.
    fn flush(&mut self) {
        if !self.buffer.is_empty() {
            let lexeme = std::mem::take(&mut self.buffer);
            let kind = match self.state.and_then(|state| self.dfa.accept_kind(state)) {
                Some(TokenKind::Identifier) if is_keyword(&lexeme) => TokenKind::Keyword,
                Some(kind) => kind,
                None => TokenKind::Error,
            };
            self.emit(Token::new(lexeme, kind, self.line, self.start));
        }
        self.state = Some(self.dfa.start());
    }

    fn emit(&mut self, token: Token) {
        self.trace.token(&token);
        self.out.push(token);
    }
}

fn build_automaton() -> Automaton<LexState, TokenKind> {
    use LexState::*;

    let mut dfa = Automaton::new(Start);
    let letters = || ('a'..='z').chain('A'..='Z');
    let hex_digits = || ('0'..='9').chain('a'..='f').chain('A'..='F');

    // Binary: 0b1010
    dfa.add_transition(Start, '0', Zero);
    dfa.add_transitions(Zero, ['b', 'B'], BinaryPrefix);
    dfa.add_transitions(BinaryPrefix, ['0', '1'], Binary);
    dfa.add_transitions(Binary, ['0', '1'], Binary);
    dfa.add_accept_state(Binary, TokenKind::Binary);

    // Decimal
    dfa.add_transitions(Start, '1'..='9', Integer);
    dfa.add_transitions(Integer, '0'..='9', Integer);
    dfa.add_accept_state(Zero, TokenKind::Integer);
    dfa.add_accept_state(Integer, TokenKind::Integer);

    // Identifiers
    dfa.add_transitions(Start, letters().chain(['_', '$']), Identifier);
    dfa.add_transitions(Identifier, letters().chain('0'..='9').chain(['_', '$']), Identifier);
    dfa.add_accept_state(Identifier, TokenKind::Identifier);

    // Strings: everything up to the closing quote
    dfa.add_transition(Start, '"', InString);
    dfa.add_fallback(InString, InString);
    dfa.add_transition(InString, '"', StringEnd);
    dfa.add_accept_state(StringEnd, TokenKind::String);

    // Hexadecimal: 0x1F
    dfa.add_transitions(Zero, ['x', 'X'], HexPrefix);
    dfa.add_transitions(HexPrefix, hex_digits(), Hex);
    dfa.add_transitions(Hex, hex_digits(), Hex);
    dfa.add_accept_state(Hex, TokenKind::Hexadecimal);

    // Octal: 017; an 8 or 9 makes it a plain integer
    dfa.add_transitions(Zero, '0'..='7', Octal);
    dfa.add_transitions(Octal, '0'..='7', Octal);
    dfa.add_transitions(Zero, ['8', '9'], Integer);
    dfa.add_transitions(Octal, ['8', '9'], Integer);
    dfa.add_accept_state(Octal, TokenKind::Octal);

    // Floats; FloatDot is not accepting so "3." is an error
    for state in [Zero, Integer, Octal] {
        dfa.add_transition(state, '.', FloatDot);
    }
    dfa.add_transitions(FloatDot, '0'..='9', Fraction);
    dfa.add_transitions(Fraction, '0'..='9', Fraction);
    dfa.add_accept_state(Fraction, TokenKind::Float);

    // Exponent after an integer: 1e5, 1e-5
    dfa.add_transitions(Integer, ['e', 'E'], IntExponent);
    dfa.add_transition(IntExponent, '-', IntExponentSign);
    dfa.add_transitions(IntExponent, '1'..='9', IntExponentDigits);
    dfa.add_transitions(IntExponentSign, '1'..='9', IntExponentDigits);
    dfa.add_transitions(IntExponentDigits, '0'..='9', IntExponentDigits);
    dfa.add_accept_state(IntExponentDigits, TokenKind::Integer);

    // Exponent after a fraction: 1.5e3, 1.5e-3
    dfa.add_transitions(Fraction, ['e', 'E'], FloatExponent);
    dfa.add_transition(FloatExponent, '-', FloatExponentSign);
    dfa.add_transitions(FloatExponent, '1'..='9', FloatExponentDigits);
    dfa.add_transitions(FloatExponentSign, '1'..='9', FloatExponentDigits);
    dfa.add_transitions(FloatExponentDigits, '0'..='9', FloatExponentDigits);
    dfa.add_accept_state(FloatExponentDigits, TokenKind::Float);

    // f/F suffix forces a float
    for state in [Zero, Integer, FloatDot, Fraction, FloatExponentDigits] {
        dfa.add_transitions(state, ['f', 'F'], FloatSuffix);
    }
    dfa.add_accept_state(FloatSuffix, TokenKind::Float);

    dfa
}
