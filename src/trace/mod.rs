// Observation hooks for the lexer and parser

use crate::parser::parse::Rule;
use crate::parser::token::Token;

/// Receives progress notifications from a scan or parse.
///
/// Every method defaults to doing nothing, so an observer only overrides what
/// it cares about. Observers cannot influence control flow: the lexer and
/// parser ignore them apart from the calls below.
pub trait Trace {
    /// The lexer produced `token`.
    fn token(&mut self, _token: &Token) {}

    /// The parser entered grammar rule `rule`.
    fn enter(&mut self, _rule: Rule) {}

    /// The parser consumed a token while in `rule`. `text` is the consumed
    /// lexeme, or `LABEL: lexeme` for identifiers, types and literals.
    fn accept(&mut self, _rule: Rule, _text: &str) {}
}

/// Observer that discards everything
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTrace;

impl Trace for NoTrace {}

impl<T: Trace + ?Sized> Trace for &mut T {
    fn token(&mut self, token: &Token) {
        (**self).token(token)
    }

    fn enter(&mut self, rule: Rule) {
        (**self).enter(rule)
    }

    fn accept(&mut self, rule: Rule, text: &str) {
        (**self).accept(rule, text)
    }
}

/// A single recorded notification
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TraceEvent {
    Token(Token),
    Enter(Rule),
    Accept { rule: Rule, text: String },
}

impl TraceEvent {
    /// Console form of a parser event: the rule's nesting depth as dashes,
    /// then the rule name or the accepted text. Token events have no parse
    /// trace line.
    pub fn parse_line(&self) -> Option<String> {
        match self {
            TraceEvent::Token(_) => None,
            TraceEvent::Enter(rule) => {
                Some(format!("{} {}", dashes(rule.depth()), rule.trace_name()))
            }
            TraceEvent::Accept { rule, text } => Some(format!("{} {}", dashes(rule.depth()), text)),
        }
    }
}

fn dashes(depth: usize) -> String {
    "-".repeat(depth)
}

/// Observer that records every notification in order
#[derive(Debug, Clone, Default)]
pub struct TraceLog {
    pub events: Vec<TraceEvent>,
}

impl TraceLog {
    pub fn new() -> Self {
        TraceLog { events: Vec::new() }
    }

    /// Tokens reported by the lexer, in emission order
    pub fn tokens(&self) -> impl Iterator<Item = &Token> {
        self.events.iter().filter_map(|event| match event {
            TraceEvent::Token(token) => Some(token),
            _ => None,
        })
    }

    /// Rendered parser trace, one line per rule entry or accepted token
    pub fn parse_lines(&self) -> Vec<String> {
        self.events.iter().filter_map(TraceEvent::parse_line).collect()
    }

    /// Rules entered, in order
    pub fn rules(&self) -> Vec<Rule> {
        self.events
            .iter()
            .filter_map(|event| match event {
                TraceEvent::Enter(rule) => Some(*rule),
                _ => None,
            })
            .collect()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl Trace for TraceLog {
    fn token(&mut self, token: &Token) {
        self.events.push(TraceEvent::Token(token.clone()));
    }

    fn enter(&mut self, rule: Rule) {
        self.events.push(TraceEvent::Enter(rule));
    }

    fn accept(&mut self, rule: Rule, text: &str) {
        self.events.push(TraceEvent::Accept {
            rule,
            text: text.to_string(),
        });
    }
}
