use thiserror::Error;

/// Input-validation failures raised while tokenizing or building a pattern.
///
/// Parsing is atomic: whenever one of these is returned, no partial
/// automaton is handed out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unbalanced parentheses")]
    UnbalancedParentheses,

    #[error("operator '{0}' is missing an operand")]
    DanglingOperator(char),

    #[error("empty expression")]
    EmptyExpression,
}
