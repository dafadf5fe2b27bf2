use super::tokenizer::{Token, Tokenizer};
use crate::automaton::{Automaton, State, StateId, Transition};
use crate::error::ParseError;

pub(crate) struct Builder {
    states: Vec<State>,
}

/// A sub-automaton under construction: one entry state, one exit state.
/// Fragments only live inside the reduction passes; they are consumed as
/// soon as they are spliced into a larger fragment.
#[derive(Clone, Copy)]
struct Fragment {
    entry: StateId,
    exit: StateId,
}

enum Element {
    Fragment(Fragment),
    Star,
    Pipe,
}

impl Builder {
    pub fn build(pattern: &str) -> Result<Automaton, ParseError> {
        let mut builder = Builder { states: Vec::new() };

        let fragment = builder.build_expression(pattern)?;
        builder.states[fragment.exit].is_final = true;

        Ok(Automaton {
            states: builder.states,
            start: fragment.entry,
            alphabet: Tokenizer::alphabet(pattern),
        })
    }

    fn build_expression(&mut self, expr: &str) -> Result<Fragment, ParseError> {
        let tokens = Tokenizer::tokenize(expr)?;
        if tokens.is_empty() {
            return Err(ParseError::EmptyExpression);
        }

        let mut elements = Vec::with_capacity(tokens.len());
        for token in tokens {
            elements.push(match token {
                Token::Star => Element::Star,
                Token::Pipe => Element::Pipe,
                Token::Literal(c) => Element::Fragment(self.build_literal(c)),
                Token::Group(inner) => Element::Fragment(self.build_expression(inner)?),
            });
        }

        let elements = self.reduce_stars(elements)?;
        let fragments = self.reduce_unions(elements)?;
        self.reduce_concat(fragments)
    }

    /// Left-to-right fold: '*' wraps the fragment immediately before it.
    fn reduce_stars(&mut self, elements: Vec<Element>) -> Result<Vec<Element>, ParseError> {
        let mut reduced: Vec<Element> = Vec::with_capacity(elements.len());

        for element in elements {
            match element {
                Element::Star => match reduced.pop() {
                    Some(Element::Fragment(inner)) => {
                        let star = self.build_star(inner);
                        reduced.push(Element::Fragment(star));
                    }
                    _ => return Err(ParseError::DanglingOperator('*')),
                },
                other => reduced.push(other),
            }
        }

        Ok(reduced)
    }

    /// Single left-to-right pass: '|' joins the fragments on either side
    /// of it. Chained alternations reduce pairwise.
    fn reduce_unions(&mut self, elements: Vec<Element>) -> Result<Vec<Fragment>, ParseError> {
        let mut reduced: Vec<Fragment> = Vec::with_capacity(elements.len());
        let mut iter = elements.into_iter();

        while let Some(element) = iter.next() {
            match element {
                Element::Pipe => {
                    let lhs = reduced.pop().ok_or(ParseError::DanglingOperator('|'))?;
                    let rhs = match iter.next() {
                        Some(Element::Fragment(fragment)) => fragment,
                        _ => return Err(ParseError::DanglingOperator('|')),
                    };
                    let union = self.build_union(lhs, rhs);
                    reduced.push(union);
                }
                Element::Fragment(fragment) => reduced.push(fragment),
                // consumed by reduce_stars
                Element::Star => unreachable!(),
            }
        }

        Ok(reduced)
    }

    /// Splice the remaining fragments end to end with epsilon links.
    fn reduce_concat(&mut self, fragments: Vec<Fragment>) -> Result<Fragment, ParseError> {
        let mut iter = fragments.into_iter();
        let first = iter.next().ok_or(ParseError::EmptyExpression)?;

        let mut exit = first.exit;
        for fragment in iter {
            self.link_epsilon(exit, fragment.entry);
            exit = fragment.exit;
        }

        Ok(Fragment {
            entry: first.entry,
            exit,
        })
    }

    fn build_literal(&mut self, c: char) -> Fragment {
        let entry = self.new_state();
        let exit = self.new_state();
        self.link_symbol(entry, c, exit);

        Fragment { entry, exit }
    }

    fn build_star(&mut self, inner: Fragment) -> Fragment {
        let entry = self.new_state();
        let exit = self.new_state();

        // zero repetitions, or enter the loop
        self.link_epsilon(entry, inner.entry);
        self.link_epsilon(entry, exit);

        // leave the loop, or go around again
        self.link_epsilon(inner.exit, exit);
        self.link_epsilon(inner.exit, inner.entry);

        Fragment { entry, exit }
    }

    fn build_union(&mut self, lhs: Fragment, rhs: Fragment) -> Fragment {
        let entry = self.new_state();
        let exit = self.new_state();

        self.link_epsilon(entry, lhs.entry);
        self.link_epsilon(entry, rhs.entry);
        self.link_epsilon(lhs.exit, exit);
        self.link_epsilon(rhs.exit, exit);

        Fragment { entry, exit }
    }

    fn new_state(&mut self) -> StateId {
        self.states.push(State {
            is_final: false,
            transitions: Vec::new(),
        });
        self.states.len() - 1
    }

    fn link_epsilon(&mut self, from: StateId, to: StateId) {
        self.states[from].transitions.push(Transition { label: None, to });
    }

    fn link_symbol(&mut self, from: StateId, label: char, to: StateId) {
        self.states[from].transitions.push(Transition {
            label: Some(label),
            to,
        });
    }
}
