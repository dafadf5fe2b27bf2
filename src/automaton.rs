use std::collections::{BTreeSet, VecDeque};

use self::matcher::Matcher;
use crate::error::ParseError;
use crate::parser::Builder;

mod matcher;
mod subset;


/// Stable handle of a state: its index in the owning automaton's arena.
pub type StateId = usize;

pub(crate) type StateSet = BTreeSet<StateId>;

/// A finite automaton over `char` labels: an arena of states plus the
/// entry state. Built nondeterministic by the parser; [`Automaton::to_dfa`]
/// produces an equivalent deterministic automaton in the same
/// representation, so recognition works unchanged on either.
pub struct Automaton {
    pub(crate) states: Vec<State>,
    pub(crate) start: StateId,
    pub(crate) alphabet: BTreeSet<char>,
}

impl Automaton {
    /// Parse a pattern into an NFA. Metacharacters are `(`, `)`, `|`
    /// and `*`; every other character matches itself.
    pub fn new(pattern: &str) -> Result<Automaton, ParseError> {
        Builder::build(pattern)
    }

    /// Reduce to an equivalent DFA by subset construction, over the
    /// alphabet derived from the original pattern text.
    pub fn to_dfa(&self) -> Automaton {
        subset::Builder::build(self)
    }

    /// Whole-string membership: does `input` belong to the language?
    pub fn accepts(&self, input: &str) -> bool {
        let matcher = Matcher::new(self);
        matcher.execute(input)
    }

    pub fn start(&self) -> StateId {
        self.start
    }

    /// Read-only view of every state in handle order, for external
    /// inspection and visualization tooling.
    pub fn states(&self) -> impl Iterator<Item = StateView<'_>> + '_ {
        self.states.iter().enumerate().map(|(id, state)| StateView {
            id,
            is_final: state.is_final,
            transitions: &state.transitions,
        })
    }

    /// Smallest superset of `seed` closed under epsilon transitions. The
    /// insert guard keeps the walk finite over the back-edges a star
    /// introduces.
    pub(crate) fn epsilon_closure(&self, seed: &StateSet) -> StateSet {
        let mut closure = StateSet::new();

        let mut q: VecDeque<StateId> = seed.iter().copied().collect();
        while let Some(id) = q.pop_front() {
            if !closure.insert(id) {
                continue;
            }

            for trans in self.states[id].transitions.iter() {
                if trans.label.is_none() {
                    q.push_back(trans.to);
                }
            }
        }

        closure
    }

    /// Every state reachable from `from` by consuming `symbol` once,
    /// epsilon-closed.
    pub(crate) fn move_on(&self, from: &StateSet, symbol: char) -> StateSet {
        let mut targets = StateSet::new();

        for &id in from.iter() {
            for trans in self.states[id].transitions.iter() {
                if trans.label == Some(symbol) {
                    targets.insert(trans.to);
                }
            }
        }

        self.epsilon_closure(&targets)
    }
}

pub(crate) struct State {
    pub is_final: bool,
    pub transitions: Vec<Transition>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub(crate) label: Option<char>,
    pub(crate) to: StateId,
}

impl Transition {
    /// The consumed character, or `None` for an epsilon transition.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    pub fn target(&self) -> StateId {
        self.to
    }
}

/// One row of the state enumeration: handle, acceptance flag and the
/// outgoing transitions in insertion order.
pub struct StateView<'a> {
    pub id: StateId,
    pub is_final: bool,
    pub transitions: &'a [Transition],
}
