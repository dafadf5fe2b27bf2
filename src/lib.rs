mod automaton;
mod error;
mod parser;

pub use automaton::{Automaton, StateId, StateView, Transition};
pub use error::ParseError;
