//! Call statements, expressions, call groups, and block headers.

use super::literals::identifier;
use super::types::TypeGrammar;
use crate::combinator::choice::{any, maybe};
use crate::combinator::forward::Forward;
use crate::combinator::primitives::{discard, match_token};
use crate::combinator::scope::{bounded_group, group};
use crate::combinator::sequence::{all, one_or_more, separated};
use crate::combinator::Parse;
use crate::token::TokenKind;
use crate::tree::Production;

pub struct StatementGrammar {
    pub call_group: Parse,
    pub call_invoke: Parse,
}

fn operator() -> Parse {
    any(vec![
        match_token(Production::Operator, TokenKind::Plus),
        match_token(Production::Operator, TokenKind::Minus),
        match_token(Production::Operator, TokenKind::Asterisk),
        match_token(Production::Operator, TokenKind::Slash),
        match_token(Production::Operator, TokenKind::Percent),
        match_token(Production::Operator, TokenKind::Equals),
        match_token(Production::Operator, TokenKind::Langle),
        match_token(Production::Operator, TokenKind::Rangle),
        match_token(Production::Operator, TokenKind::Ampersand),
        match_token(Production::Operator, TokenKind::Pipe),
        match_token(Production::Operator, TokenKind::Carat),
        match_token(Production::Operator, TokenKind::QMark),
        match_token(Production::Operator, TokenKind::Bang),
    ])
}

/// Trailing suffix markers (`^`, `&`, `[…]`) become trailing identifier
/// terms in the flattened expression term list.
fn suffix() -> Parse {
    any(vec![
        match_token(Production::Identifier, TokenKind::Carat),
        match_token(Production::Identifier, TokenKind::Ampersand),
        group(
            Production::Identifier,
            all(vec![
                discard(TokenKind::Lbracket),
                maybe(match_token(Production::Literal, TokenKind::Number)),
                discard(TokenKind::Rbracket),
            ]),
        ),
    ])
}

pub fn build(types: &TypeGrammar) -> StatementGrammar {
    let call_group_fwd = Forward::new();
    let call_group_ref = call_group_fwd.as_parse();

    let identifier_expr = any(vec![
        group(
            Production::AllocIdentifier,
            all(vec![discard(TokenKind::Pound), identifier()]),
        ),
        identifier(),
    ]);

    let call_quote_body_fwd = Forward::new();
    let call_invoke_fwd = Forward::new();

    let call_parameter = any(vec![
        group(Production::CallParameterEmpty, discard(TokenKind::Underscore)),
        group(
            Production::CallParameter,
            any(vec![suffix(), identifier_expr.clone()]),
        ),
    ]);

    let term = any(vec![
        match_token(Production::Literal, TokenKind::Decimal),
        match_token(Production::Literal, TokenKind::Hex),
        match_token(Production::Literal, TokenKind::Number),
        match_token(Production::Literal, TokenKind::StringLit),
        call_quote_body_fwd.as_parse(),
        identifier_expr.clone(),
    ]);

    let call_expression = group(
        Production::CallExpression,
        all(vec![term.clone(), one_or_more(all(vec![operator(), term.clone()]))]),
    );
    let subcall_expr = group(
        Production::SubcallExpression,
        any(vec![call_expression.clone(), term.clone()]),
    );

    let call_command = bounded_group(
        Production::CallCommand,
        vec![
            identifier(),
            discard(TokenKind::Colon),
            one_or_more(call_parameter.clone()),
        ],
    );
    let call_constructor = bounded_group(
        Production::CallConstructor,
        vec![
            types.type_expr.clone(),
            discard(TokenKind::Colon),
            one_or_more(call_parameter.clone()),
        ],
    );
    let call_vcommand = bounded_group(
        Production::CallVcommand,
        vec![
            one_or_more(all(vec![identifier(), discard(TokenKind::DColon)])),
            identifier(),
            discard(TokenKind::Colon),
            one_or_more(call_parameter.clone()),
        ],
    );
    let call_invoke = any(vec![
        call_vcommand.clone(),
        call_constructor.clone(),
        call_command.clone(),
    ]);
    call_invoke_fwd.set(call_invoke.clone());

    let call_assignment = bounded_group(
        Production::CallAssignment,
        vec![
            identifier(),
            discard(TokenKind::Larrow),
            separated(subcall_expr.clone(), discard(TokenKind::Pipe)),
        ],
    );

    let call_quote = group(
        Production::CallQuote,
        all(vec![
            discard(TokenKind::Lbrace),
            maybe(any(vec![call_invoke_fwd.as_parse(), call_group_ref.clone()])),
            discard(TokenKind::Rbrace),
        ]),
    );
    call_quote_body_fwd.set(call_quote.clone());

    let cmd_literal_leader = any(vec![
        match_token(Production::Operator, TokenKind::ColAngle),
        match_token(Production::Operator, TokenKind::QLangle),
        match_token(Production::Operator, TokenKind::BangLangle),
    ]);
    let cmd_literal_param = group(
        Production::DefCmdParm,
        all(vec![types.type_expr.clone(), identifier()]),
    );
    let cmd_literal = group(
        Production::CallCmdLiteral,
        all(vec![
            cmd_literal_leader,
            maybe(separated(cmd_literal_param, discard(TokenKind::Comma))),
            discard(TokenKind::Rangle),
            discard(TokenKind::Lbrace),
            call_group_ref.clone(),
            discard(TokenKind::Rbrace),
        ]),
    );

    let recover_spec = group(
        Production::RecoverSpec,
        all(vec![
            discard(TokenKind::PipeCol),
            maybe(types.type_expr.clone()),
            maybe(identifier()),
            discard(TokenKind::Rarrow),
        ]),
    );

    // Order matters: the two-token "??" form must be tried before the
    // single "?" it begins with, and `QMinus`/`AmBang` are already their
    // own maximal-munch tokens so they never collide with `QMark`/`Amphora`.
    let block_header = any(vec![
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::QMinus)),
        group(
            Production::BlockHeader,
            all(vec![
                match_token(Production::Operator, TokenKind::QMark),
                match_token(Production::Operator, TokenKind::QMark),
            ]),
        ),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::QMark)),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::Bang)),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::Minus)),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::Percent)),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::Carat)),
        recover_spec,
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::Pipe)),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::AmBang)),
        group(Production::BlockHeader, match_token(Production::Operator, TokenKind::Amphora)),
    ]);
    let block = group(
        Production::Block,
        all(vec![block_header, call_group_ref.clone()]),
    );

    let call_statement = any(vec![
        block,
        call_assignment,
        cmd_literal,
        call_vcommand,
        call_constructor,
        call_command,
    ]);

    let call_group = bounded_group(Production::CallGroup, vec![one_or_more(call_statement)]);
    call_group_fwd.set(call_group.clone());

    StatementGrammar {
        call_group,
        call_invoke,
    }
}
