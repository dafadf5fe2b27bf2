use super::{Automaton, StateSet};

pub(crate) struct Matcher<'a> {
    automaton: &'a Automaton,
}

impl<'a> Matcher<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Matcher { automaton }
    }

    /// Simulate the automaton over `input`, tracking the set of active
    /// states after each consumed character. The epsilon closure dedupes
    /// as it walks, so the simulation is bounded by input length times
    /// state count even when stars form epsilon cycles.
    pub fn execute(&self, input: &str) -> bool {
        let automaton = self.automaton;

        let mut seed = StateSet::new();
        seed.insert(automaton.start);

        let mut current = automaton.epsilon_closure(&seed);
        for c in input.chars() {
            current = automaton.move_on(&current, c);
            if current.is_empty() {
                return false;
            }
        }

        current.iter().any(|&id| automaton.states[id].is_final)
    }
}
