//! Command signatures: five shapes (Regular, VCommand, Constructor,
//! Destructor, FailHandler) built from receivers, a name with optional
//! `?`/`!` prefix, colon-delimited parameters, `/`-prefixed implicit
//! parameters, and a `->`-prefixed return name.

use super::literals::identifier;
use super::types::TypeGrammar;
use crate::combinator::choice::{any, maybe};
use crate::combinator::primitives::{discard, match_token};
use crate::combinator::scope::group;
use crate::combinator::sequence::{all, one_or_more, separated};
use crate::combinator::Parse;
use crate::token::TokenKind;
use crate::tree::Production;

pub struct SignatureGrammar {
    pub signature: Parse,
}

fn cmd_param(types: &TypeGrammar) -> Parse {
    group(
        Production::DefCmdParm,
        any(vec![
            group(
                Production::DefCmdParmtypeVar,
                all(vec![
                    discard(TokenKind::Lparen),
                    identifier(),
                    discard(TokenKind::Colon),
                    types.type_expr.clone(),
                    discard(TokenKind::Rparen),
                ]),
            ),
            group(
                Production::DefCmdParmtypeName,
                all(vec![types.type_expr.clone(), identifier()]),
            ),
        ]),
    )
}

fn cmd_params(types: &TypeGrammar) -> Parse {
    group(Production::DefCmdParms, one_or_more(cmd_param(types)))
}

fn cmd_name() -> Parse {
    group(
        Production::DefCmdName,
        all(vec![
            maybe(any(vec![
                match_token(Production::DefCmdMayFail, TokenKind::QMark),
                match_token(Production::DefCmdFails, TokenKind::Bang),
            ])),
            identifier(),
        ]),
    )
}

fn receiver(types: &TypeGrammar) -> Parse {
    group(
        Production::DefCmdReceiver,
        all(vec![types.type_expr.clone(), identifier()]),
    )
}

fn implicit_params(types: &TypeGrammar) -> Parse {
    group(
        Production::DefCmdImparms,
        maybe(all(vec![discard(TokenKind::Slash), cmd_params(types)])),
    )
}

fn retval() -> Parse {
    group(
        Production::DefCmdRetval,
        maybe(all(vec![discard(TokenKind::Rarrow), identifier()])),
    )
}

pub fn build(types: &TypeGrammar) -> SignatureGrammar {
    let destructor = group(
        Production::DefCmdNameSpec,
        all(vec![
            match_token(Production::Operator, TokenKind::Amphora),
            receiver(types),
            discard(TokenKind::Colon),
            maybe(cmd_params(types)),
        ]),
    );

    let fail_handler = group(
        Production::DefCmdNameSpec,
        all(vec![
            match_token(Production::Operator, TokenKind::AmBang),
            receiver(types),
            discard(TokenKind::Colon),
            maybe(cmd_params(types)),
        ]),
    );

    let vcommand = group(
        Production::DefCmdNameSpec,
        all(vec![
            group(
                Production::DefCmdReceivers,
                one_or_more(all(vec![receiver(types), discard(TokenKind::DColon)])),
            ),
            cmd_name(),
            discard(TokenKind::Colon),
            maybe(cmd_params(types)),
            implicit_params(types),
            retval(),
        ]),
    );

    let constructor = group(
        Production::DefCmdNameSpec,
        all(vec![
            receiver(types),
            discard(TokenKind::Colon),
            maybe(cmd_params(types)),
        ]),
    );

    let regular = group(
        Production::DefCmdNameSpec,
        all(vec![
            cmd_name(),
            maybe(all(vec![discard(TokenKind::Colon), cmd_params(types)])),
            implicit_params(types),
            retval(),
        ]),
    );

    let signature = any(vec![destructor, fail_handler, vcommand, constructor, regular]);

    SignatureGrammar { signature }
}
