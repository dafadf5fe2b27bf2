// syntax
//
// expression = term ( '|' term ) *
// term       = factor +
// factor     = element '*' ?
// element    = '(' expression ')' | char
//
// precedence: grouping > star > union > concatenation
//
// An expression is first split into its top-level tokens (a balanced
// parenthesized run is a single token), then the token list is reduced
// in three passes: star, union, concatenation.

mod builder;
mod tokenizer;

pub(crate) use builder::Builder;

#[cfg(test)]
mod tests;
