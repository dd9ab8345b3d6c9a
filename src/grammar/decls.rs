//! Top-level declarations: `.module`, `.import`, `.alias`, `.domain`,
//! `.enum`, `.record`, `.object`, `.instance`, `.class`, `.cmd`,
//! `.intrinsic`, `.program`, `.test`.

use super::literals::{identifier, literal, typename};
use super::signatures::SignatureGrammar;
use super::statements::StatementGrammar;
use super::types::TypeGrammar;
use crate::combinator::choice::{any, maybe};
use crate::combinator::primitives::{discard, match_token};
use crate::combinator::scope::{bounded_group, group};
use crate::combinator::sequence::{one_or_more, separated};
use crate::combinator::Parse;
use crate::token::TokenKind;
use crate::tree::Production;

pub struct DeclGrammar {
    pub module: Parse,
    pub import: Parse,
    pub alias: Parse,
    pub domain: Parse,
    pub enum_decl: Parse,
    pub record_decl: Parse,
    pub object_decl: Parse,
    pub instance_decl: Parse,
    pub class_decl: Parse,
    pub cmd_member: Parse,
    pub intrinsic_decl: Parse,
    pub program_decl: Parse,
    pub test_decl: Parse,
}

fn qualified_typename() -> Parse {
    separated(typename(), discard(TokenKind::DColon))
}

fn field_decl(types: &TypeGrammar) -> Parse {
    group(
        Production::DefField,
        crate::combinator::sequence::all(vec![types.type_expr.clone(), identifier()]),
    )
}

pub fn build(types: &TypeGrammar, signatures: &SignatureGrammar, statements: &StatementGrammar) -> DeclGrammar {
    use crate::combinator::sequence::all;

    let module = bounded_group(
        Production::DefModule,
        vec![discard(TokenKind::Module), qualified_typename()],
    );

    let import_file = bounded_group(
        Production::DefImportFile,
        vec![
            discard(TokenKind::Import),
            match_token(Production::Literal, TokenKind::StringLit),
        ],
    );
    let import_std = bounded_group(
        Production::DefImportStd,
        vec![
            discard(TokenKind::Import),
            maybe(all(vec![identifier(), discard(TokenKind::Colon)])),
            identifier(),
        ],
    );
    let import = any(vec![import_file, import_std]);

    let alias = bounded_group(
        Production::DefAlias,
        vec![
            discard(TokenKind::Alias),
            typename(),
            discard(TokenKind::Equals),
            types.type_expr.clone(),
        ],
    );

    let domain = bounded_group(
        Production::DefDomain,
        vec![
            discard(TokenKind::Domain),
            typename(),
            discard(TokenKind::Colon),
            types.type_expr.clone(),
        ],
    );

    let enum_item_list = group(
        Production::DefEnumItemList,
        separated(
            all(vec![
                match_token(Production::DefEnumItemName, TokenKind::Identifier),
                discard(TokenKind::Equals),
                literal(),
            ]),
            discard(TokenKind::Comma),
        ),
    );
    let enum_name1 = match_token(Production::DefEnumName1, TokenKind::Typename);
    let enum_name2 = maybe(match_token(Production::DefEnumName2, TokenKind::Typename));
    let enum_decl = bounded_group(
        Production::DefEnum,
        vec![
            discard(TokenKind::Enum),
            enum_name1,
            enum_name2,
            discard(TokenKind::Colon),
            enum_item_list,
        ],
    );

    let record_decl = bounded_group(
        Production::DefRecord,
        vec![
            discard(TokenKind::Record),
            typename(),
            discard(TokenKind::Colon),
            group(
                Production::DefField,
                separated(field_decl(types), discard(TokenKind::Comma)),
            ),
        ],
    );
    let object_decl = bounded_group(
        Production::DefObject,
        vec![
            discard(TokenKind::Object),
            typename(),
            discard(TokenKind::Colon),
            group(
                Production::DefField,
                separated(field_decl(types), discard(TokenKind::Comma)),
            ),
        ],
    );

    let instance_type = group(
        Production::DefInstanceType,
        all(vec![
            typename(),
            maybe(all(vec![
                discard(TokenKind::Lparen),
                identifier(),
                discard(TokenKind::Rparen),
            ])),
        ]),
    );
    let instance_decl = bounded_group(
        Production::DefInstance,
        vec![
            discard(TokenKind::Instance),
            typename(),
            discard(TokenKind::Colon),
            separated(instance_type, discard(TokenKind::Comma)),
        ],
    );

    let cmd_body = any(vec![
        group(Production::DefCmdEmpty, discard(TokenKind::Underscore)),
        group(Production::DefCmdBody, statements.call_group.clone()),
    ]);
    let cmd_def = bounded_group(
        Production::DefCmdDef,
        vec![
            discard(TokenKind::Cmd),
            signatures.signature.clone(),
            discard(TokenKind::Equals),
            cmd_body,
        ],
    );
    let cmd_decl = bounded_group(
        Production::DefCmdDecl,
        vec![discard(TokenKind::Cmd), signatures.signature.clone()],
    );
    let cmd_member = any(vec![cmd_def, cmd_decl]);

    let intrinsic_decl = bounded_group(
        Production::DefIntrinsic,
        vec![discard(TokenKind::Intrinsic), signatures.signature.clone()],
    );

    let class_decl = bounded_group(
        Production::DefClass,
        vec![
            discard(TokenKind::Class),
            typename(),
            discard(TokenKind::Colon),
            one_or_more(cmd_member.clone()),
        ],
    );

    let program_decl = bounded_group(
        Production::DefProgram,
        vec![discard(TokenKind::Program), statements.call_invoke.clone()],
    );

    let test_decl = bounded_group(
        Production::DefTest,
        vec![
            discard(TokenKind::Test),
            match_token(Production::Literal, TokenKind::StringLit),
            discard(TokenKind::Colon),
            statements.call_group.clone(),
        ],
    );

    DeclGrammar {
        module,
        import,
        alias,
        domain,
        enum_decl,
        record_decl,
        object_decl,
        instance_decl,
        class_decl,
        cmd_member,
        intrinsic_decl,
        program_decl,
        test_decl,
    }
}
