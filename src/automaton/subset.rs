use std::collections::VecDeque;

use indexmap::IndexMap;

use super::{Automaton, State, StateId, StateSet, Transition};

/// Subset construction: each DFA state stands for the set of NFA states
/// the NFA could occupy, keyed canonically so structurally equal subsets
/// collapse onto one DFA state.
pub(crate) struct Builder<'a> {
    nfa: &'a Automaton,
    subsets: IndexMap<StateSet, StateId>,
    edges: Vec<Vec<(char, StateId)>>,
}

impl<'a> Builder<'a> {
    pub fn build(nfa: &Automaton) -> Automaton {
        let mut builder = Builder {
            nfa,
            subsets: IndexMap::new(),
            edges: Vec::new(),
        };
        builder.build_();

        let Builder { subsets, edges, .. } = builder;
        let states = subsets
            .keys()
            .zip(edges)
            .map(|(subset, edges)| State {
                is_final: subset.iter().any(|&id| nfa.states[id].is_final),
                transitions: edges
                    .into_iter()
                    .map(|(label, to)| Transition {
                        label: Some(label),
                        to,
                    })
                    .collect(),
            })
            .collect();

        Automaton {
            states,
            // the start subset is interned first
            start: 0,
            alphabet: nfa.alphabet.clone(),
        }
    }

    fn build_(&mut self) {
        let nfa = self.nfa;

        let mut seed = StateSet::new();
        seed.insert(nfa.start);
        let start = nfa.epsilon_closure(&seed);

        let mut q = VecDeque::new();
        let start_id = self.intern(start.clone());
        q.push_back((start_id, start));

        while let Some((id, subset)) = q.pop_front() {
            for &symbol in nfa.alphabet.iter() {
                let next = nfa.move_on(&subset, symbol);
                if next.is_empty() {
                    continue;
                }

                let next_id = match self.subsets.get(&next) {
                    Some(&seen) => seen,
                    None => {
                        let new_id = self.intern(next.clone());
                        q.push_back((new_id, next));
                        new_id
                    }
                };

                // one edge per (subset, symbol) pair
                self.edges[id].push((symbol, next_id));
            }
        }
    }

    fn intern(&mut self, subset: StateSet) -> StateId {
        let id = self.subsets.len();
        self.subsets.insert(subset, id);
        self.edges.push(Vec::new());
        id
    }
}
