//! `Forward` — indirection through a slot filled in after construction, to
//! permit mutual recursion in grammar definitions (a type expression
//! contains type expressions).
//!
//! The teacher library uses `once_cell::unsync::OnceCell` for this because
//! its grammars are single-threaded (`Rc`-based). This crate's grammar is
//! process-wide and must be safely shareable across compile jobs running on
//! different threads (see the concurrency section of the design doc), so
//! the slot is a `std::sync::OnceLock` behind an `Arc` instead.

use super::{Combinator, Limit, Parse, ParseResult, ParseState};
use std::sync::{Arc, OnceLock};

#[derive(Clone)]
pub struct Forward {
    slot: Arc<OnceLock<Parse>>,
}

impl Forward {
    pub fn new() -> Self {
        Self {
            slot: Arc::new(OnceLock::new()),
        }
    }

    /// Fills in the forward reference. Panics if called twice — a grammar
    /// construction bug, not a parse-time condition.
    pub fn set(&self, target: Parse) {
        self.slot
            .set(target)
            .unwrap_or_else(|_| panic!("Forward slot already populated"));
    }

    pub fn as_parse(&self) -> Parse {
        Arc::new(self.clone())
    }
}

impl Default for Forward {
    fn default() -> Self {
        Self::new()
    }
}

impl Combinator for Forward {
    fn parse(&self, state: &mut ParseState, cursor: usize, limit: Limit) -> ParseResult {
        let target = self
            .slot
            .get()
            .expect("Forward parsed before its target was set");
        target.parse(state, cursor, limit)
    }
}

pub fn forward() -> Forward {
    Forward::new()
}
