//! Generic deterministic finite automaton
//!
//! [`Automaton`] is a plain transition table: it knows nothing about tokens or
//! source text. The [`lexer`](super::lexer) loads it with this language's
//! states once and then only reads from it.
//!
//! Each `(state, symbol)` pair maps to at most one next state. A state may
//! additionally carry a *fallback* edge, taken for every symbol that has no
//! explicit edge from that state; this keeps "any character except X" loops
//! (string bodies) out of the explicit table.

use rustc_hash::FxHashMap;
use std::hash::Hash;

/// Transition table plus accept-state bindings.
///
/// `S` is the state label, `K` the value bound to accepting states (for the
/// lexer, a token kind).
#[derive(Debug, Clone)]
pub struct Automaton<S, K> {
    start: S,
    transitions: FxHashMap<(S, char), S>,
    fallbacks: FxHashMap<S, S>,
    accept: FxHashMap<S, K>,
}

impl<S, K> Automaton<S, K>
where
    S: Copy + Eq + Hash,
    K: Copy,
{
    /// Create an empty automaton whose scans begin in `start`.
    pub fn new(start: S) -> Self {
        Automaton {
            start,
            transitions: FxHashMap::default(),
            fallbacks: FxHashMap::default(),
            accept: FxHashMap::default(),
        }
    }

    pub fn start(&self) -> S {
        self.start
    }

    /// Register `state --symbol--> next`. A later call for the same pair
    /// replaces the earlier edge.
    pub fn add_transition(&mut self, state: S, symbol: char, next: S) {
        self.transitions.insert((state, symbol), next);
    }

    /// Register one edge to `next` for every symbol in `symbols`.
    pub fn add_transitions<I>(&mut self, state: S, symbols: I, next: S)
    where
        I: IntoIterator<Item = char>,
    {
        for symbol in symbols {
            self.add_transition(state, symbol, next);
        }
    }

    /// Edge taken from `state` on any symbol without an explicit edge.
    pub fn add_fallback(&mut self, state: S, next: S) {
        self.fallbacks.insert(state, next);
    }

    /// Mark `state` as accepting and bind it to `kind`, replacing any
    /// previous binding.
    pub fn add_accept_state(&mut self, state: S, kind: K) {
        self.accept.insert(state, kind);
    }

    /// Look up the successor of `state` on `symbol`. `None` means there is no
    /// transition.
    pub fn next_state(&self, state: S, symbol: char) -> Option<S> {
        self.transitions
            .get(&(state, symbol))
            .or_else(|| self.fallbacks.get(&state))
            .copied()
    }

    pub fn is_accept_state(&self, state: S) -> bool {
        self.accept.contains_key(&state)
    }

    /// The value bound to `state`, if it is accepting.
    pub fn accept_kind(&self, state: S) -> Option<K> {
        self.accept.get(&state).copied()
    }
}
