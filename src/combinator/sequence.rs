//! `All`, `OneOrMore`, `Separated`.

use super::{Combinator, Limit, Parse, ParseResult, ParseState};
use std::sync::Arc;

/// Sequential composition: every element must succeed in order.
pub struct All(pub Vec<Parse>);

impl Combinator for All {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let mut pos = cursor;
        let mut nodes = Vec::new();
        for element in &self.0 {
            match element.parse(state, pos, limit) {
                Some((next, mut more)) => {
                    pos = next;
                    nodes.append(&mut more);
                }
                None => return None,
            }
        }
        Some((pos, nodes))
    }
}

pub fn all(elements: Vec<Parse>) -> Parse {
    Arc::new(All(elements))
}

/// Runs `f` once, failing if `f` fails, then greedily repeats while it
/// keeps succeeding.
pub struct OneOrMore(pub Parse);

impl Combinator for OneOrMore {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let (mut pos, mut nodes) = self.0.parse(state, cursor, limit)?;
        loop {
            match self.0.parse(state, pos, limit) {
                Some((next, mut more)) => {
                    pos = next;
                    nodes.append(&mut more);
                }
                None => break,
            }
        }
        Some((pos, nodes))
    }
}

pub fn one_or_more(f: Parse) -> Parse {
    Arc::new(OneOrMore(f))
}

/// One `elem`, then zero or more `sep`-then-`elem`. A trailing separator
/// without a following element is a failure.
pub struct Separated {
    pub element: Parse,
    pub separator: Parse,
}

impl Combinator for Separated {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let (mut pos, mut nodes) = self.element.parse(state, cursor, limit)?;
        loop {
            let Some((sep_next, mut sep_nodes)) = self.separator.parse(state, pos, limit) else {
                break;
            };
            match self.element.parse(state, sep_next, limit) {
                Some((next, mut more)) => {
                    nodes.append(&mut sep_nodes);
                    nodes.append(&mut more);
                    pos = next;
                }
                None => return None,
            }
        }
        Some((pos, nodes))
    }
}

pub fn separated(element: Parse, separator: Parse) -> Parse {
    Arc::new(Separated { element, separator })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::primitives::discard;
    use crate::token::{Token, TokenKind};

    fn toks(kinds: &[TokenKind]) -> Vec<Token> {
        kinds
            .iter()
            .enumerate()
            .map(|(i, k)| Token::new(*k, format!("{:?}", k), 1, i + 1))
            .collect()
    }

    #[test]
    fn separated_requires_trailing_element() {
        let tokens = toks(&[TokenKind::Comma, TokenKind::Comma]);
        let mut st = ParseState::new(&tokens);
        let combi = Separated {
            element: discard(TokenKind::Comma),
            separator: discard(TokenKind::Colon),
        };
        // first element consumes Comma at 0; no separator follows (Colon expected) -> stop at 1
        let (next, _) = combi.parse(&mut st, 0, None).unwrap();
        assert_eq!(next, 1);
    }

    #[test]
    fn separated_fails_on_dangling_separator() {
        let tokens = toks(&[TokenKind::Comma, TokenKind::Colon]);
        let mut st = ParseState::new(&tokens);
        let combi = Separated {
            element: discard(TokenKind::Comma),
            separator: discard(TokenKind::Colon),
        };
        assert!(combi.parse(&mut st, 0, None).is_none());
    }

    #[test]
    fn one_or_more_requires_at_least_one() {
        let tokens = toks(&[TokenKind::Colon]);
        let mut st = ParseState::new(&tokens);
        assert!(OneOrMore(discard(TokenKind::Comma))
            .parse(&mut st, 0, None)
            .is_none());
    }
}
