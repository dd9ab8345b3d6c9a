//! `Maybe`, `Any`, `Prefix`.

use super::{Combinator, Limit, Parse, ParseResult, ParseState};
use std::sync::Arc;

/// Runs `f`; always succeeds, producing no node if `f` fails.
pub struct Maybe(pub Parse);

impl Combinator for Maybe {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        match self.0.parse(state, cursor, limit) {
            Some(result) => Some(result),
            None => Some((cursor, Vec::new())),
        }
    }
}

pub fn maybe(f: Parse) -> Parse {
    Arc::new(Maybe(f))
}

/// First-match-wins. Fails only if every alternative fails.
pub struct Any(pub Vec<Parse>);

impl Combinator for Any {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        for alt in &self.0 {
            if let Some(result) = alt.parse(state, cursor, limit) {
                return Some(result);
            }
        }
        None
    }
}

pub fn any(alts: Vec<Parse>) -> Parse {
    Arc::new(Any(alts))
}

/// If the first element matches, every remaining element must also match.
/// If the first element fails, `Prefix` succeeds without consuming
/// anything — it is not itself rolled back to success if a later element
/// fails after the first one matched.
pub struct Prefix(pub Vec<Parse>);

impl Combinator for Prefix {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let mut elements = self.0.iter();
        let first = elements.next().expect("Prefix needs at least one element");
        let (mut pos, mut nodes) = match first.parse(state, cursor, limit) {
            Some(result) => result,
            None => return Some((cursor, Vec::new())),
        };
        for element in elements {
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

pub fn prefix(elements: Vec<Parse>) -> Parse {
    Arc::new(Prefix(elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::primitives::discard;
    use crate::token::{Token, TokenKind};

    fn state(tokens: &[Token]) -> ParseState<'_> {
        ParseState::new(tokens)
    }

    #[test]
    fn maybe_always_succeeds() {
        let tokens = vec![Token::new(TokenKind::Comma, ",".into(), 1, 1)];
        let mut st = state(&tokens);
        let (next, _) = Maybe(discard(TokenKind::Colon)).parse(&mut st, 0, None).unwrap();
        assert_eq!(next, 0);
    }

    #[test]
    fn any_tries_in_order() {
        let tokens = vec![Token::new(TokenKind::Colon, ":".into(), 1, 1)];
        let mut st = state(&tokens);
        let combi = Any(vec![discard(TokenKind::Comma), discard(TokenKind::Colon)]);
        let (next, _) = combi.parse(&mut st, 0, None).unwrap();
        assert_eq!(next, 1);
    }

    #[test]
    fn prefix_succeeds_empty_when_first_fails() {
        let tokens = vec![Token::new(TokenKind::Comma, ",".into(), 1, 1)];
        let mut st = state(&tokens);
        let combi = Prefix(vec![discard(TokenKind::Colon), discard(TokenKind::Comma)]);
        let (next, _) = combi.parse(&mut st, 0, None).unwrap();
        assert_eq!(next, 0);
    }

    #[test]
    fn prefix_fails_when_first_matches_but_rest_does_not() {
        let tokens = vec![Token::new(TokenKind::Comma, ",".into(), 1, 1)];
        let mut st = state(&tokens);
        let combi = Prefix(vec![discard(TokenKind::Comma), discard(TokenKind::Colon)]);
        assert!(combi.parse(&mut st, 0, None).is_none());
    }
}
