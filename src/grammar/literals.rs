//! Literals and identifiers: the grammar's terminal leaves.

use crate::combinator::choice::any;
use crate::combinator::primitives::match_token;
use crate::combinator::Parse;
use crate::token::TokenKind;
use crate::tree::Production;

pub fn literal() -> Parse {
    any(vec![
        match_token(Production::Literal, TokenKind::Decimal),
        match_token(Production::Literal, TokenKind::Hex),
        match_token(Production::Literal, TokenKind::Number),
        match_token(Production::Literal, TokenKind::StringLit),
    ])
}

pub fn identifier() -> Parse {
    match_token(Production::Identifier, TokenKind::Identifier)
}

pub fn typename() -> Parse {
    match_token(Production::Typename, TokenKind::Typename)
}
