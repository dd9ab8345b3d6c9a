//! The two-dimensional parser-combinator engine.
//!
//! Every combinator obeys the same contract: given a cursor and an optional
//! limit, it either succeeds — returning the cursor advanced past what it
//! consumed plus zero or more parse-tree nodes — or fails, in which case the
//! caller simply discards the cursor it passed in. Because the cursor is an
//! immutable `usize` threaded by value rather than a mutable iterator, a
//! failed combinator has nothing to restore: no explicit rollback guard is
//! needed the way the original C++ engine needed one, only the discipline of
//! not using a `None` result's (nonexistent) cursor. This mirrors how the
//! teacher library's own `Concat`/`Union` production code thread an
//! `Option<FltrPtr>` by value through `eat_fltr_ptr`.

pub mod choice;
pub mod forward;
pub mod primitives;
pub mod scope;
pub mod sequence;

use crate::token::{Token, TokenPos};
use crate::tree::ParseNode;

/// Exclusive upper bound on how far a combinator may advance the cursor.
pub type Limit = Option<TokenPos>;

/// Per-parse mutable state: the token slice and the furthest-position
/// diagnostic tracker. Shared by reference across the whole combinator
/// graph for a single `Parser::parse` call; never shared across parses.
pub struct ParseState<'t> {
    tokens: &'t [Token],
    furthest: TokenPos,
}

impl<'t> ParseState<'t> {
    pub fn new(tokens: &'t [Token]) -> Self {
        Self {
            tokens,
            furthest: 0,
        }
    }

    pub fn tokens(&self) -> &'t [Token] {
        self.tokens
    }

    pub fn furthest(&self) -> TokenPos {
        self.furthest
    }

    /// Records `cursor` as the furthest point of failure if it is later
    /// (by token line, then column) than anything seen before. End of input
    /// is always at least as far as any real token.
    pub fn update_furthest(&mut self, cursor: TokenPos) {
        if cursor >= self.tokens.len() {
            self.furthest = self.tokens.len();
            return;
        }
        if self.furthest >= self.tokens.len() {
            return;
        }
        let seen = &self.tokens[self.furthest];
        let candidate = &self.tokens[cursor];
        if (candidate.line, candidate.column) > (seen.line, seen.column) {
            self.furthest = cursor;
        }
    }
}

/// The primitive predicate every combinator checks before consuming: has
/// the cursor reached end-of-input, or the current bound?
pub fn at_limit(cursor: TokenPos, limit: Limit, len: usize) -> bool {
    cursor >= len || limit == Some(cursor)
}

pub type ParseResult = Option<(TokenPos, Vec<ParseNode>)>;

/// A parse function. Implementors compose into the grammar tree.
pub trait Combinator: Send + Sync {
    fn parse(&self, state: &mut ParseState, cursor: TokenPos, limit: Limit) -> ParseResult;
}

impl<T: Combinator + ?Sized> Combinator for std::sync::Arc<T> {
    fn parse(&self, state: &mut ParseState, cursor: TokenPos, limit: Limit) -> ParseResult {
        (**self).parse(state, cursor, limit)
    }
}

pub type Parse = std::sync::Arc<dyn Combinator>;
