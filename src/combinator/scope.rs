//! `Bound`, `Group`, `BoundedGroup` — the indentation-scoping combinators.

use super::sequence::all;
use super::{at_limit, Combinator, Limit, Parse, ParseResult, ParseState};
use crate::tree::{ParseNode, Production};
use std::sync::Arc;

/// Runs `f` with the limit replaced by the current token's bound, falling
/// back to the enclosing limit when the current token has none.
pub struct Bound(pub Parse);

impl Combinator for Bound {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let bound_limit = bound_limit_at(state, cursor, limit);
        self.0.parse(state, cursor, bound_limit)
    }
}

pub fn bound(f: Parse) -> Parse {
    Arc::new(Bound(f))
}

fn bound_limit_at(state: &ParseState, cursor: usize, limit: Limit) -> Limit {
    if cursor < state.tokens().len() {
        state.tokens()[cursor].bound.or(limit)
    } else {
        limit
    }
}

/// Creates a parent node with production `P` whose children come from
/// running `f`. Fails and yields no node if `f` fails.
pub struct Group(pub Production, pub Parse);

impl Combinator for Group {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let (next, children) = self.1.parse(state, cursor, limit)?;
        Some((next, vec![ParseNode::group(self.0, children)]))
    }
}

pub fn group(production: Production, f: Parse) -> Parse {
    Arc::new(Group(production, f))
}

/// Equivalent to `Group(P, Bound(All(elements)))`, with the additional
/// requirement (always applied — see the grounding ledger for why the
/// per-call `strict` flag from the original engine was collapsed to a
/// single uniform rule) that the sequence must consume every token up to
/// the bound, or to the enclosing limit when no bound exists.
pub struct BoundedGroup {
    production: Production,
    inner: Parse,
}

impl BoundedGroup {
    pub fn new(production: Production, elements: Vec<Parse>) -> Self {
        Self {
            production,
            inner: all(elements),
        }
    }
}

impl Combinator for BoundedGroup {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let bound_limit = bound_limit_at(state, cursor, limit);
        let (next, children) = self.inner.parse(state, cursor, bound_limit)?;
        if !at_limit(next, bound_limit, state.tokens().len()) {
            state.update_furthest(next);
            return None;
        }
        Some((next, vec![ParseNode::group(self.production, children)]))
    }
}

pub fn bounded_group(production: Production, elements: Vec<Parse>) -> Parse {
    Arc::new(BoundedGroup::new(production, elements))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::combinator::primitives::discard;
    use crate::token::{Token, TokenKind};

    #[test]
    fn bounded_group_rejects_trailing_unconsumed_token_inside_bound() {
        // token 0 (Cmd) has bound -> token 2 (end marker); token 1 (Comma) is
        // inside the bound but the sequence only consumes token 0, so a
        // strict bounded group must fail rather than silently drop token 1.
        let mut tokens = vec![
            Token::new(TokenKind::Cmd, ".cmd".into(), 1, 1),
            Token::new(TokenKind::Comma, ",".into(), 2, 1),
            Token::new(TokenKind::Colon, ":".into(), 3, 1),
        ];
        tokens[0].bound = Some(2);
        let mut st = ParseState::new(&tokens);
        let combi = BoundedGroup::new(Production::DefCmdDecl, vec![discard(TokenKind::Cmd)]);
        assert!(combi.parse(&mut st, 0, None).is_none());
    }

    #[test]
    fn bounded_group_succeeds_when_sequence_reaches_bound() {
        let mut tokens = vec![
            Token::new(TokenKind::Cmd, ".cmd".into(), 1, 1),
            Token::new(TokenKind::Comma, ",".into(), 1, 6),
            Token::new(TokenKind::Colon, ":".into(), 2, 1),
        ];
        tokens[0].bound = Some(2);
        let mut st = ParseState::new(&tokens);
        let combi = BoundedGroup::new(
            Production::DefCmdDecl,
            vec![discard(TokenKind::Cmd), discard(TokenKind::Comma)],
        );
        let (next, nodes) = combi.parse(&mut st, 0, None).unwrap();
        assert_eq!(next, 2);
        assert_eq!(nodes.len(), 1);
    }
}
