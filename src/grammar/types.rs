//! Type expressions: named (with optional generic parameters and qualified
//! `::`-dotted names), pointer prefixes `^`, range prefixes `[…]`, and
//! command types `:<…>` / `?<…>` / `!<…>` with a per-argument `'` writeable
//! marker.

use super::literals::typename;
use crate::combinator::choice::{any, maybe};
use crate::combinator::forward::Forward;
use crate::combinator::primitives::{discard, match_token};
use crate::combinator::scope::group;
use crate::combinator::sequence::{all, one_or_more, separated};
use crate::combinator::Parse;
use crate::token::TokenKind;
use crate::tree::Production;

pub struct TypeGrammar {
    pub type_expr: Parse,
}

pub fn build() -> TypeGrammar {
    let type_expr_fwd = Forward::new();
    let type_expr_ref = type_expr_fwd.as_parse();

    let qualified_typename = separated(typename(), discard(TokenKind::DColon));

    let named = group(
        Production::TypeNameQ,
        all(vec![
            qualified_typename,
            maybe(all(vec![
                discard(TokenKind::Langle),
                separated(type_expr_ref.clone(), discard(TokenKind::Comma)),
                discard(TokenKind::Rangle),
            ])),
        ]),
    );

    let pointer = group(
        Production::TypeExprPtr,
        all(vec![
            one_or_more(match_token(Production::Operator, TokenKind::Carat)),
            type_expr_ref.clone(),
        ]),
    );

    let range = group(
        Production::TypeExprRange,
        all(vec![
            discard(TokenKind::Lbracket),
            maybe(any(vec![
                match_token(Production::Literal, TokenKind::Number),
                match_token(Production::Identifier, TokenKind::Identifier),
            ])),
            discard(TokenKind::Rbracket),
            type_expr_ref.clone(),
        ]),
    );

    let cmd_leader = any(vec![
        match_token(Production::Operator, TokenKind::ColAngle),
        match_token(Production::Operator, TokenKind::QLangle),
        match_token(Production::Operator, TokenKind::BangLangle),
    ]);
    let cmd_arg = group(
        Production::CmdArg,
        all(vec![
            maybe(match_token(Production::Operator, TokenKind::Apostrophe)),
            type_expr_ref.clone(),
        ]),
    );
    let command = group(
        Production::TypeExprCmd,
        all(vec![
            cmd_leader,
            maybe(separated(cmd_arg, discard(TokenKind::Comma))),
            discard(TokenKind::Rangle),
        ]),
    );

    let type_expr = any(vec![pointer, range, command, named]);
    type_expr_fwd.set(type_expr.clone());

    TypeGrammar { type_expr }
}
