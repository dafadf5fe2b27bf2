use super::tokenizer::{Token, Tokenizer};
use crate::automaton::Automaton;
use crate::error::ParseError;

mod tokenize {
    use super::*;

    #[test]
    fn literals_and_operators() {
        let tokens = Tokenizer::tokenize("ab*c").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Literal('a'),
                Token::Literal('b'),
                Token::Star,
                Token::Literal('c'),
            ]
        );
    }

    #[test]
    fn group_is_one_token() {
        let tokens = Tokenizer::tokenize("(a|b)*abb").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Group("a|b"),
                Token::Star,
                Token::Literal('a'),
                Token::Literal('b'),
                Token::Literal('b'),
            ]
        );
    }

    #[test]
    fn nested_group_keeps_inner_parentheses() {
        let tokens = Tokenizer::tokenize("(a(b|c)d)*|ef*").unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::Group("a(b|c)d"),
                Token::Star,
                Token::Pipe,
                Token::Literal('e'),
                Token::Literal('f'),
                Token::Star,
            ]
        );
    }

    #[test]
    fn adjacent_groups() {
        let tokens = Tokenizer::tokenize("(ab)(cd)").unwrap();

        assert_eq!(tokens, vec![Token::Group("ab"), Token::Group("cd")]);
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(
            Tokenizer::tokenize("(a|b"),
            Err(ParseError::UnbalancedParentheses)
        );
        assert_eq!(
            Tokenizer::tokenize("a)b"),
            Err(ParseError::UnbalancedParentheses)
        );
        assert_eq!(
            Tokenizer::tokenize(")("),
            Err(ParseError::UnbalancedParentheses)
        );
    }
}

mod alphabet {
    use super::*;

    #[test]
    fn excludes_metacharacters() {
        let alphabet = Tokenizer::alphabet("(a|b)*abb");

        assert_eq!(alphabet.into_iter().collect::<Vec<_>>(), vec!['a', 'b']);
    }

    #[test]
    fn empty_expression() {
        assert_eq!(Tokenizer::alphabet("").len(), 0);
        assert_eq!(Tokenizer::alphabet("()|*").len(), 0);
    }
}

mod malformed {
    use super::*;

    fn run(pattern: &str) -> ParseError {
        Automaton::new(pattern).err().unwrap()
    }

    #[test]
    fn unbalanced_parentheses() {
        assert_eq!(run("(a|b"), ParseError::UnbalancedParentheses);
        assert_eq!(run("a)b("), ParseError::UnbalancedParentheses);
    }

    #[test]
    fn star_without_operand() {
        assert_eq!(run("*a"), ParseError::DanglingOperator('*'));
        assert_eq!(run("(*)"), ParseError::DanglingOperator('*'));
        assert_eq!(run("a|*b"), ParseError::DanglingOperator('*'));
    }

    #[test]
    fn union_missing_operand() {
        assert_eq!(run("a|"), ParseError::DanglingOperator('|'));
        assert_eq!(run("|a"), ParseError::DanglingOperator('|'));
        assert_eq!(run("a||b"), ParseError::DanglingOperator('|'));
        assert_eq!(run("(a|)b"), ParseError::DanglingOperator('|'));
    }

    #[test]
    fn empty_expression() {
        assert_eq!(run(""), ParseError::EmptyExpression);
        assert_eq!(run("()"), ParseError::EmptyExpression);
        assert_eq!(run("a()b"), ParseError::EmptyExpression);
    }
}

#[test]
fn build_marks_one_final_state() {
    let nfa = Automaton::new("(a|b)*abb").unwrap();

    assert_eq!(nfa.states().filter(|state| state.is_final).count(), 1);
}
