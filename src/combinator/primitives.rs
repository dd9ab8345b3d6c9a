//! `Discard` and `Match`: the only two combinators that inspect a token.

use super::{at_limit, Combinator, Limit, Parse, ParseResult, ParseState};
use crate::token::TokenKind;
use crate::tree::{ParseNode, Production};
use std::sync::Arc;

/// Matches a token of kind `K`; advances the cursor but produces no node.
pub struct Discard(pub TokenKind);

impl Combinator for Discard {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        if at_limit(cursor, limit, state.tokens().len()) {
            state.update_furthest(cursor);
            return None;
        }
        if state.tokens()[cursor].kind == self.0 {
            Some((cursor + 1, Vec::new()))
        } else {
            state.update_furthest(cursor);
            None
        }
    }
}

pub fn discard(kind: TokenKind) -> Parse {
    Arc::new(Discard(kind))
}

/// Matches a token of kind `K` and produces a leaf node tagged `P`.
pub struct Match(pub Production, pub TokenKind);

impl Combinator for Match {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        if at_limit(cursor, limit, state.tokens().len()) {
            state.update_furthest(cursor);
            return None;
        }
        if state.tokens()[cursor].kind == self.1 {
            Some((cursor + 1, vec![ParseNode::leaf(self.0, cursor)]))
        } else {
            state.update_furthest(cursor);
            None
        }
    }
}

pub fn match_token(production: Production, kind: TokenKind) -> Parse {
    Arc::new(Match(production, kind))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn discard_restores_on_failure() {
        let tokens = vec![crate::token::Token::new(
            TokenKind::Comma,
            ",".into(),
            1,
            1,
        )];
        let mut state = ParseState::new(&tokens);
        let result = Discard(TokenKind::Colon).parse(&mut state, 0, None);
        assert!(result.is_none());
    }

    #[test]
    fn discard_advances_on_success() {
        let tokens = vec![crate::token::Token::new(
            TokenKind::Comma,
            ",".into(),
            1,
            1,
        )];
        let mut state = ParseState::new(&tokens);
        let (next, nodes) = Discard(TokenKind::Comma).parse(&mut state, 0, None).unwrap();
        assert_eq!(next, 1);
        assert!(nodes.is_empty());
    }
}
