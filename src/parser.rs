//! The parser driver: runs the top-level combinator over a token stream and
//! renders the furthest-position diagnostic on failure.

use crate::combinator::{Combinator, Parse, ParseState};
use crate::token::Token;
use crate::tree::ParseNode;

pub struct Parser<'t> {
    tokens: &'t [Token],
    top: Parse,
}

pub struct ParseOutcome {
    pub success: bool,
    pub tree: Option<ParseNode>,
    pub final_position: usize,
    furthest: usize,
}

impl ParseOutcome {
    pub fn all_tokens_consumed(&self, len: usize) -> bool {
        self.success && self.final_position == len
    }
}

impl<'t> Parser<'t> {
    pub fn new(tokens: &'t [Token], top: Parse) -> Self {
        Self { tokens, top }
    }

    pub fn parse(&self) -> ParseOutcome {
        let mut state = ParseState::new(self.tokens);
        match self.top.parse(&mut state, 0, None) {
            Some((next, mut nodes)) => ParseOutcome {
                success: true,
                tree: nodes.pop(),
                final_position: next,
                furthest: state.furthest(),
            },
            None => ParseOutcome {
                success: false,
                tree: None,
                final_position: 0,
                furthest: state.furthest(),
            },
        }
    }

    /// `Unexpected end of input`, or `Syntax error at (L:C) unexpected
    /// token: TEXT` optionally followed by ` -> (L:C) TEXT` naming the
    /// offending token's bound.
    pub fn diagnostic(&self, outcome: &ParseOutcome) -> String {
        if outcome.furthest >= self.tokens.len() {
            return "Unexpected end of input".to_string();
        }
        let token = &self.tokens[outcome.furthest];
        let mut message = format!(
            "Syntax error at ({}:{}) unexpected token: {}",
            token.line, token.column, token.text
        );
        if let Some(bound) = token.bound {
            let bound_token = &self.tokens[bound];
            message.push_str(&format!(
                " -> ({}:{}) {}",
                bound_token.line, bound_token.column, bound_token.text
            ));
        }
        message
    }
}
