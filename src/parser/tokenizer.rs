use std::collections::BTreeSet;

use crate::error::ParseError;

const META_CHARS: [char; 4] = [
    '|', // union
    '*', // star
    '(', ')', // group brackets
];

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum Token<'a> {
    Literal(char),
    Star,
    Pipe,
    Group(&'a str),
}

pub(crate) struct Tokenizer;

impl Tokenizer {
    /// Split an expression into its top-level tokens. A balanced
    /// parenthesized run becomes one `Group` token with the outer
    /// parentheses stripped; every other character is its own token.
    pub fn tokenize(expr: &str) -> Result<Vec<Token<'_>>, ParseError> {
        let mut tokens = Vec::new();
        let mut depth = 0usize;
        let mut group_start = 0usize;

        for (offset, c) in expr.char_indices() {
            match c {
                '(' => {
                    if depth == 0 {
                        group_start = offset + 1;
                    }
                    depth += 1;
                }
                ')' => {
                    depth = depth
                        .checked_sub(1)
                        .ok_or(ParseError::UnbalancedParentheses)?;
                    if depth == 0 {
                        tokens.push(Token::Group(&expr[group_start..offset]));
                    }
                }
                _ if depth > 0 => { /* inside a group */ }
                '*' => tokens.push(Token::Star),
                '|' => tokens.push(Token::Pipe),
                _ => tokens.push(Token::Literal(c)),
            }
        }

        if depth != 0 {
            return Err(ParseError::UnbalancedParentheses);
        }

        Ok(tokens)
    }

    /// Input symbols of an expression: every distinct character of the
    /// source text that is not a metacharacter.
    pub fn alphabet(expr: &str) -> BTreeSet<char> {
        expr.chars().filter(|c| !META_CHARS.contains(c)).collect()
    }
}
