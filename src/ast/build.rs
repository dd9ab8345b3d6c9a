//! Folds a parse tree rooted at a `CompilationUnit` node into the typed AST.
//!
//! Each function here mirrors one production in [`crate::tree::Production`];
//! the shape of a production's children is fixed by the grammar that built
//! it (see `src/grammar/`), so these functions index and pattern-match on
//! that shape directly rather than re-discovering it.

use crate::ast::*;
use crate::error::ImplementationError;
use crate::position::Position;
use crate::token::{Token, TokenKind};
use crate::tree::{ParseNode, Production};

type Result<T> = std::result::Result<T, ImplementationError>;

fn unexpected(what: &str, node: &ParseNode) -> ImplementationError {
    ImplementationError::new(
        what,
        format!("unexpected production {:?} with {} children", node.production, node.children.len()),
    )
}

fn node_position(tokens: &[Token], node: &ParseNode) -> Position {
    if let Some(pos) = node.token {
        return tokens[pos].position();
    }
    node.children
        .first()
        .map(|c| node_position(tokens, c))
        .unwrap_or(Position::new(0, 0))
}

fn leaf_text<'t>(tokens: &'t [Token], node: &ParseNode) -> &'t str {
    &tokens[node.token.expect("leaf node carries a token")].text
}

fn leaf_kind(tokens: &[Token], node: &ParseNode) -> TokenKind {
    tokens[node.token.expect("leaf node carries a token")].kind
}

/// Builds a compilation unit from its root parse node.
pub fn build_ast(tokens: &[Token], root: &ParseNode) -> Result<CompilationUnit> {
    if root.production != Production::CompilationUnit {
        return Err(ImplementationError::new(
            "build_ast",
            format!("root production was {:?}, expected CompilationUnit", root.production),
        ));
    }
    let mut children = root.children.iter().peekable();

    let module = if matches!(children.peek(), Some(n) if n.production == Production::DefModule) {
        Some(build_module_decl(tokens, children.next().unwrap())?)
    } else {
        None
    };

    let mut imports = Vec::new();
    while matches!(
        children.peek(),
        Some(n) if n.production == Production::DefImportFile || n.production == Production::DefImportStd
    ) {
        imports.push(build_import_decl(tokens, children.next().unwrap())?);
    }

    let mut definitions = Vec::new();
    for node in children {
        definitions.push(build_definition(tokens, node)?);
    }

    Ok(CompilationUnit {
        module,
        imports,
        definitions,
    })
}

fn qualified_typename(tokens: &[Token], names: &[ParseNode]) -> String {
    names
        .iter()
        .map(|n| leaf_text(tokens, n))
        .collect::<Vec<_>>()
        .join("::")
}

fn build_module_decl(tokens: &[Token], node: &ParseNode) -> Result<ModuleDecl> {
    Ok(ModuleDecl {
        pos: node_position(tokens, node),
        name: qualified_typename(tokens, &node.children),
    })
}

fn build_import_decl(tokens: &[Token], node: &ParseNode) -> Result<ImportDecl> {
    let pos = node_position(tokens, node);
    match node.production {
        Production::DefImportFile => Ok(ImportDecl::File {
            pos,
            path: leaf_text(tokens, &node.children[0]).to_string(),
        }),
        Production::DefImportStd => {
            if node.children.len() == 2 {
                Ok(ImportDecl::Standard {
                    pos,
                    qualifier: Some(leaf_text(tokens, &node.children[0]).to_string()),
                    name: leaf_text(tokens, &node.children[1]).to_string(),
                })
            } else {
                Ok(ImportDecl::Standard {
                    pos,
                    qualifier: None,
                    name: leaf_text(tokens, &node.children[0]).to_string(),
                })
            }
        }
        _ => Err(unexpected("build_import_decl", node)),
    }
}

fn build_definition(tokens: &[Token], node: &ParseNode) -> Result<Definition> {
    Ok(match node.production {
        Production::DefAlias => Definition::Alias(build_alias_decl(tokens, node)?),
        Production::DefDomain => Definition::Domain(build_domain_decl(tokens, node)?),
        Production::DefEnum => Definition::Enum(build_enum_decl(tokens, node)?),
        Production::DefRecord => Definition::Record(build_record_decl(tokens, node)?),
        Production::DefObject => Definition::Object(build_object_decl(tokens, node)?),
        Production::DefInstance => Definition::Instance(build_instance_decl(tokens, node)?),
        Production::DefClass => Definition::Class(build_class_decl(tokens, node)?),
        Production::DefCmdDef => Definition::Cmd(ClassMember::Def(build_cmd_def(tokens, node)?)),
        Production::DefCmdDecl => Definition::Cmd(ClassMember::Decl(build_cmd_decl(tokens, node)?)),
        Production::DefIntrinsic => Definition::Intrinsic(build_intrinsic_decl(tokens, node)?),
        Production::DefProgram => Definition::Program(build_program_decl(tokens, node)?),
        Production::DefTest => Definition::Test(build_test_decl(tokens, node)?),
        _ => return Err(unexpected("build_definition", node)),
    })
}

fn build_type_expr(tokens: &[Token], node: &ParseNode) -> Result<TypeExpr> {
    let pos = node_position(tokens, node);
    let kind = match node.production {
        Production::TypeNameQ => {
            let split = node
                .children
                .iter()
                .position(|c| c.production != Production::Typename)
                .unwrap_or(node.children.len());
            let (name_parts, arg_nodes) = node.children.split_at(split);
            let type_args = arg_nodes
                .iter()
                .map(|n| build_type_expr(tokens, n))
                .collect::<Result<Vec<_>>>()?;
            TypeExprKind::Named {
                name: qualified_typename(tokens, name_parts),
                type_args,
            }
        }
        Production::TypeExprPtr => {
            let split = node.children.len() - 1;
            TypeExprKind::Pointer {
                depth: split,
                inner: Box::new(build_type_expr(tokens, &node.children[split])?),
            }
        }
        Production::TypeExprRange => {
            if node.children.len() == 2 {
                TypeExprKind::Range {
                    size: Some(leaf_text(tokens, &node.children[0]).to_string()),
                    inner: Box::new(build_type_expr(tokens, &node.children[1])?),
                }
            } else {
                TypeExprKind::Range {
                    size: None,
                    inner: Box::new(build_type_expr(tokens, &node.children[0])?),
                }
            }
        }
        Production::TypeExprCmd => {
            let cmd_kind = match leaf_kind(tokens, &node.children[0]) {
                TokenKind::ColAngle => CmdKind::NoFail,
                TokenKind::QLangle => CmdKind::MayFail,
                TokenKind::BangLangle => CmdKind::Fails,
                other => {
                    return Err(ImplementationError::new(
                        "build_type_expr",
                        format!("unexpected command-type leader token kind {other:?}"),
                    ))
                }
            };
            let args = node.children[1..]
                .iter()
                .map(|n| build_cmd_arg(tokens, n))
                .collect::<Result<Vec<_>>>()?;
            TypeExprKind::Command { cmd_kind, args }
        }
        _ => return Err(unexpected("build_type_expr", node)),
    };
    Ok(TypeExpr { pos, kind })
}

fn build_cmd_arg(tokens: &[Token], node: &ParseNode) -> Result<CmdArg> {
    if node.children.len() == 2 {
        Ok(CmdArg {
            writeable: true,
            ty: build_type_expr(tokens, &node.children[1])?,
        })
    } else {
        Ok(CmdArg {
            writeable: false,
            ty: build_type_expr(tokens, &node.children[0])?,
        })
    }
}

fn build_alias_decl(tokens: &[Token], node: &ParseNode) -> Result<AliasDecl> {
    Ok(AliasDecl {
        pos: node_position(tokens, node),
        name: leaf_text(tokens, &node.children[0]).to_string(),
        ty: build_type_expr(tokens, &node.children[1])?,
    })
}

fn build_domain_decl(tokens: &[Token], node: &ParseNode) -> Result<DomainDecl> {
    Ok(DomainDecl {
        pos: node_position(tokens, node),
        name: leaf_text(tokens, &node.children[0]).to_string(),
        parent: build_type_expr(tokens, &node.children[1])?,
    })
}

fn build_enum_decl(tokens: &[Token], node: &ParseNode) -> Result<EnumDecl> {
    let pos = node_position(tokens, node);
    let mut rest = &node.children[1..];
    let name2 = if rest[0].production == Production::DefEnumName2 {
        let n = leaf_text(tokens, &rest[0]).to_string();
        rest = &rest[1..];
        Some(n)
    } else {
        None
    };
    let item_list = &rest[0];
    let items = item_list
        .children
        .chunks(2)
        .map(|pair| {
            Ok(EnumItem {
                pos: node_position(tokens, &pair[0]),
                name: leaf_text(tokens, &pair[0]).to_string(),
                value: leaf_text(tokens, &pair[1]).to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(EnumDecl {
        pos,
        name1: leaf_text(tokens, &node.children[0]).to_string(),
        name2,
        items,
    })
}

fn build_field_decl(tokens: &[Token], node: &ParseNode) -> Result<FieldDecl> {
    Ok(FieldDecl {
        pos: node_position(tokens, node),
        ty: build_type_expr(tokens, &node.children[0])?,
        name: leaf_text(tokens, &node.children[1]).to_string(),
    })
}

fn build_fields(tokens: &[Token], outer: &ParseNode) -> Result<Vec<FieldDecl>> {
    outer.children.iter().map(|n| build_field_decl(tokens, n)).collect()
}

fn build_record_decl(tokens: &[Token], node: &ParseNode) -> Result<RecordDecl> {
    Ok(RecordDecl {
        pos: node_position(tokens, node),
        name: leaf_text(tokens, &node.children[0]).to_string(),
        fields: build_fields(tokens, &node.children[1])?,
    })
}

fn build_object_decl(tokens: &[Token], node: &ParseNode) -> Result<ObjectDecl> {
    Ok(ObjectDecl {
        pos: node_position(tokens, node),
        name: leaf_text(tokens, &node.children[0]).to_string(),
        fields: build_fields(tokens, &node.children[1])?,
    })
}

fn build_instance_type(tokens: &[Token], node: &ParseNode) -> Result<InstanceType> {
    Ok(InstanceType {
        pos: node_position(tokens, node),
        type_name: leaf_text(tokens, &node.children[0]).to_string(),
        delegate: node.children.get(1).map(|n| leaf_text(tokens, n).to_string()),
    })
}

fn build_instance_decl(tokens: &[Token], node: &ParseNode) -> Result<InstanceDecl> {
    Ok(InstanceDecl {
        pos: node_position(tokens, node),
        name: leaf_text(tokens, &node.children[0]).to_string(),
        types: node.children[1..]
            .iter()
            .map(|n| build_instance_type(tokens, n))
            .collect::<Result<Vec<_>>>()?,
    })
}

fn build_cmd_receiver(tokens: &[Token], node: &ParseNode) -> Result<CmdReceiver> {
    Ok(CmdReceiver {
        ty: build_type_expr(tokens, &node.children[0])?,
        name: leaf_text(tokens, &node.children[1]).to_string(),
    })
}

fn build_cmd_param(tokens: &[Token], node: &ParseNode) -> Result<CmdParam> {
    let inner = &node.children[0];
    match inner.production {
        Production::DefCmdParmtypeVar => Ok(CmdParam {
            name: leaf_text(tokens, &inner.children[0]).to_string(),
            ty: Some(build_type_expr(tokens, &inner.children[1])?),
            type_var_name: Some(leaf_text(tokens, &inner.children[0]).to_string()),
        }),
        Production::DefCmdParmtypeName => Ok(CmdParam {
            ty: Some(build_type_expr(tokens, &inner.children[0])?),
            name: leaf_text(tokens, &inner.children[1]).to_string(),
            type_var_name: None,
        }),
        _ => Err(unexpected("build_cmd_param", inner)),
    }
}

fn build_cmd_params(tokens: &[Token], node: &ParseNode) -> Result<Vec<CmdParam>> {
    node.children.iter().map(|n| build_cmd_param(tokens, n)).collect()
}

fn take_optional_params<'n>(
    children: &'n [ParseNode],
) -> (Option<&'n ParseNode>, &'n [ParseNode]) {
    if matches!(children.first(), Some(n) if n.production == Production::DefCmdParms) {
        (Some(&children[0]), &children[1..])
    } else {
        (None, children)
    }
}

fn build_cmd_signature(tokens: &[Token], node: &ParseNode) -> Result<CmdSignature> {
    let inner = &node.children;
    match inner[0].production {
        Production::Operator if leaf_kind(tokens, &inner[0]) == TokenKind::Amphora => {
            let receiver = build_cmd_receiver(tokens, &inner[1])?;
            let (params, _) = take_optional_params(&inner[2..]);
            Ok(CmdSignature {
                kind: CmdSignatureKind::Destructor,
                name: String::new(),
                may_fail: false,
                fails: false,
                receivers: vec![receiver],
                params: params.map(|p| build_cmd_params(tokens, p)).transpose()?.unwrap_or_default(),
                implicit_params: Vec::new(),
                return_val: None,
            })
        }
        Production::Operator if leaf_kind(tokens, &inner[0]) == TokenKind::AmBang => {
            let receiver = build_cmd_receiver(tokens, &inner[1])?;
            let (params, _) = take_optional_params(&inner[2..]);
            Ok(CmdSignature {
                kind: CmdSignatureKind::FailHandler,
                name: String::new(),
                may_fail: false,
                fails: false,
                receivers: vec![receiver],
                params: params.map(|p| build_cmd_params(tokens, p)).transpose()?.unwrap_or_default(),
                implicit_params: Vec::new(),
                return_val: None,
            })
        }
        Production::DefCmdReceivers => {
            let receivers = inner[0]
                .children
                .iter()
                .map(|n| build_cmd_receiver(tokens, n))
                .collect::<Result<Vec<_>>>()?;
            let (name, may_fail, fails) = build_cmd_name(tokens, &inner[1])?;
            let (params, rest) = take_optional_params(&inner[2..]);
            let imparms = &rest[0];
            let retval = &rest[1];
            Ok(CmdSignature {
                kind: CmdSignatureKind::VCommand,
                name,
                may_fail,
                fails,
                receivers,
                params: params.map(|p| build_cmd_params(tokens, p)).transpose()?.unwrap_or_default(),
                implicit_params: build_implicit_params(tokens, imparms)?,
                return_val: build_retval(tokens, retval),
            })
        }
        Production::DefCmdReceiver => {
            let receiver = build_cmd_receiver(tokens, &inner[0])?;
            let (params, _) = take_optional_params(&inner[1..]);
            Ok(CmdSignature {
                kind: CmdSignatureKind::Constructor,
                name: String::new(),
                may_fail: false,
                fails: false,
                receivers: vec![receiver],
                params: params.map(|p| build_cmd_params(tokens, p)).transpose()?.unwrap_or_default(),
                implicit_params: Vec::new(),
                return_val: None,
            })
        }
        Production::DefCmdName => {
            let (name, may_fail, fails) = build_cmd_name(tokens, &inner[0])?;
            let (params, rest) = take_optional_params(&inner[1..]);
            let imparms = &rest[0];
            let retval = &rest[1];
            Ok(CmdSignature {
                kind: CmdSignatureKind::Regular,
                name,
                may_fail,
                fails,
                receivers: Vec::new(),
                params: params.map(|p| build_cmd_params(tokens, p)).transpose()?.unwrap_or_default(),
                implicit_params: build_implicit_params(tokens, imparms)?,
                return_val: build_retval(tokens, retval),
            })
        }
        _ => Err(unexpected("build_cmd_signature", &inner[0])),
    }
}

fn build_cmd_name(tokens: &[Token], node: &ParseNode) -> Result<(String, bool, bool)> {
    if node.children.len() == 2 {
        let may_fail = node.children[0].production == Production::DefCmdMayFail;
        let fails = node.children[0].production == Production::DefCmdFails;
        Ok((leaf_text(tokens, &node.children[1]).to_string(), may_fail, fails))
    } else {
        Ok((leaf_text(tokens, &node.children[0]).to_string(), false, false))
    }
}

fn build_implicit_params(tokens: &[Token], node: &ParseNode) -> Result<Vec<CmdParam>> {
    match node.children.first() {
        Some(params) => build_cmd_params(tokens, params),
        None => Ok(Vec::new()),
    }
}

fn build_retval(tokens: &[Token], node: &ParseNode) -> Option<String> {
    node.children.first().map(|n| leaf_text(tokens, n).to_string())
}

fn build_cmd_decl(tokens: &[Token], node: &ParseNode) -> Result<CmdDecl> {
    Ok(CmdDecl {
        pos: node_position(tokens, node),
        signature: build_cmd_signature(tokens, &node.children[0])?,
    })
}

fn build_intrinsic_decl(tokens: &[Token], node: &ParseNode) -> Result<IntrinsicDecl> {
    Ok(IntrinsicDecl {
        pos: node_position(tokens, node),
        signature: build_cmd_signature(tokens, &node.children[0])?,
    })
}

fn build_cmd_def(tokens: &[Token], node: &ParseNode) -> Result<CmdDef> {
    let pos = node_position(tokens, node);
    let signature = build_cmd_signature(tokens, &node.children[0])?;
    let body_node = &node.children[1];
    let body = match body_node.production {
        Production::DefCmdEmpty => CmdBody {
            pos: node_position(tokens, body_node),
            group: None,
        },
        Production::DefCmdBody => CmdBody {
            pos: node_position(tokens, body_node),
            group: Some(build_call_group(tokens, &body_node.children[0])?),
        },
        _ => return Err(unexpected("build_cmd_def", body_node)),
    };
    Ok(CmdDef { pos, signature, body })
}

fn build_class_decl(tokens: &[Token], node: &ParseNode) -> Result<ClassDecl> {
    let pos = node_position(tokens, node);
    let name = leaf_text(tokens, &node.children[0]).to_string();
    let members = node.children[1..]
        .iter()
        .map(|n| {
            Ok(match n.production {
                Production::DefCmdDef => ClassMember::Def(build_cmd_def(tokens, n)?),
                Production::DefCmdDecl => ClassMember::Decl(build_cmd_decl(tokens, n)?),
                _ => return Err(unexpected("build_class_decl", n)),
            })
        })
        .collect::<Result<Vec<_>>>()?;
    Ok(ClassDecl { pos, name, members })
}

fn build_program_decl(tokens: &[Token], node: &ParseNode) -> Result<ProgramDecl> {
    Ok(ProgramDecl {
        pos: node_position(tokens, node),
        entry_point: build_call_invoke(tokens, &node.children[0])?,
    })
}

fn build_test_decl(tokens: &[Token], node: &ParseNode) -> Result<TestDecl> {
    Ok(TestDecl {
        pos: node_position(tokens, node),
        label: leaf_text(tokens, &node.children[0]).to_string(),
        body: build_call_group(tokens, &node.children[1])?,
    })
}

fn build_call_group(tokens: &[Token], node: &ParseNode) -> Result<CallGroup> {
    let pos = node_position(tokens, node);
    let statements = node
        .children
        .iter()
        .map(|n| build_statement(tokens, n))
        .collect::<Result<Vec<_>>>()?;
    Ok(CallGroup { pos, statements })
}

fn build_statement(tokens: &[Token], node: &ParseNode) -> Result<Statement> {
    Ok(match node.production {
        Production::Block => Statement::Block(build_block(tokens, node)?),
        Production::CallAssignment => Statement::Assignment(build_call_assignment(tokens, node)?),
        Production::CallCmdLiteral => Statement::CmdLiteral(build_cmd_literal(tokens, node)?),
        Production::CallVcommand | Production::CallConstructor | Production::CallCommand => {
            Statement::Invoke(build_call_invoke(tokens, node)?)
        }
        _ => return Err(unexpected("build_statement", node)),
    })
}

fn block_kind_of(tokens: &[Token], header: &ParseNode) -> BlockKind {
    if header.production == Production::RecoverSpec {
        return BlockKind::DoRecoverSpec;
    }
    if header.children.len() == 2 {
        return BlockKind::DoWhenMulti;
    }
    match leaf_kind(tokens, &header.children[0]) {
        TokenKind::QMinus => BlockKind::DoWhenFail,
        TokenKind::QMark => BlockKind::DoWhen,
        TokenKind::Bang => BlockKind::DoElse,
        TokenKind::Minus => BlockKind::DoUnless,
        TokenKind::Percent => BlockKind::DoBlock,
        TokenKind::Carat => BlockKind::DoRewind,
        TokenKind::Pipe => BlockKind::DoRecover,
        TokenKind::Amphora => BlockKind::OnExit,
        TokenKind::AmBang => BlockKind::OnExitFail,
        other => unreachable!("block header token kind not in the closed set: {other:?}"),
    }
}

fn build_block(tokens: &[Token], node: &ParseNode) -> Result<Block> {
    let pos = node_position(tokens, node);
    let header = &node.children[0];
    let kind = block_kind_of(tokens, header);
    let (recover_type, recover_name) = if header.production == Production::RecoverSpec {
        let mut ty = None;
        let mut name = None;
        for child in &header.children {
            match child.production {
                Production::Identifier => name = Some(leaf_text(tokens, child).to_string()),
                _ => ty = Some(build_type_expr(tokens, child)?.kind_name()),
            }
        }
        (ty, name)
    } else {
        (None, None)
    };
    Ok(Block {
        pos,
        kind,
        recover_type,
        recover_name,
        body: Box::new(build_call_group(tokens, &node.children[1])?),
    })
}

fn build_call_assignment(tokens: &[Token], node: &ParseNode) -> Result<CallAssignment> {
    let pos = node_position(tokens, node);
    let target = IdentifierExpr {
        pos: node_position(tokens, &node.children[0]),
        text: leaf_text(tokens, &node.children[0]).to_string(),
        is_alloc: false,
    };
    let exprs = node.children[1..]
        .iter()
        .map(|n| build_subcall_expr(tokens, n))
        .collect::<Result<Vec<_>>>()?;
    Ok(CallAssignment { pos, target, exprs })
}

fn build_subcall_expr(tokens: &[Token], node: &ParseNode) -> Result<SubcallExpr> {
    let inner = &node.children[0];
    Ok(if inner.production == Production::CallExpression {
        SubcallExpr::Expression(build_call_expression(tokens, inner)?)
    } else {
        SubcallExpr::Term(build_term(tokens, inner)?)
    })
}

fn build_call_expression(tokens: &[Token], node: &ParseNode) -> Result<CallExpression> {
    let pos = node_position(tokens, node);
    let mut terms = Vec::new();
    let mut operators = Vec::new();
    for (i, child) in node.children.iter().enumerate() {
        if i % 2 == 0 {
            terms.push(build_term(tokens, child)?);
        } else {
            operators.push(leaf_text(tokens, child).to_string());
        }
    }
    Ok(CallExpression { pos, terms, operators })
}

fn build_term(tokens: &[Token], node: &ParseNode) -> Result<Term> {
    Ok(match node.production {
        Production::Literal => Term::Literal(Literal {
            pos: node_position(tokens, node),
            text: leaf_text(tokens, node).to_string(),
        }),
        Production::CallQuote => Term::Quote(build_call_quote(tokens, node)?),
        Production::AllocIdentifier => Term::Identifier(IdentifierExpr {
            pos: node_position(tokens, node),
            text: leaf_text(tokens, &node.children[0]).to_string(),
            is_alloc: true,
        }),
        Production::Identifier => Term::Identifier(IdentifierExpr {
            pos: node_position(tokens, node),
            text: leaf_text(tokens, node).to_string(),
            is_alloc: false,
        }),
        _ => return Err(unexpected("build_term", node)),
    })
}

fn build_call_invoke(tokens: &[Token], node: &ParseNode) -> Result<CallInvoke> {
    let pos = node_position(tokens, node);
    match node.production {
        Production::CallCommand => Ok(CallInvoke {
            pos,
            kind: CallInvokeKind::Command,
            target: leaf_text(tokens, &node.children[0]).to_string(),
            receivers: Vec::new(),
            params: build_call_parameters(tokens, &node.children[1..])?,
        }),
        Production::CallConstructor => Ok(CallInvoke {
            pos,
            kind: CallInvokeKind::Constructor,
            target: build_type_expr(tokens, &node.children[0])?.kind_name(),
            receivers: Vec::new(),
            params: build_call_parameters(tokens, &node.children[1..])?,
        }),
        Production::CallVcommand => {
            let split = node
                .children
                .iter()
                .position(|c| c.production != Production::Identifier || c.token.is_none())
                .unwrap_or(node.children.len());
            let (idents, rest) = node.children.split_at(split);
            let (name, receivers) = idents
                .split_last()
                .map(|(name, recv)| {
                    (
                        leaf_text(tokens, name).to_string(),
                        recv.iter().map(|n| leaf_text(tokens, n).to_string()).collect(),
                    )
                })
                .unwrap_or((String::new(), Vec::new()));
            Ok(CallInvoke {
                pos,
                kind: CallInvokeKind::VCommand,
                target: name,
                receivers,
                params: build_call_parameters(tokens, rest)?,
            })
        }
        _ => Err(unexpected("build_call_invoke", node)),
    }
}

fn build_call_parameters(tokens: &[Token], nodes: &[ParseNode]) -> Result<Vec<CallParameter>> {
    nodes.iter().map(|n| build_call_parameter(tokens, n)).collect()
}

fn build_call_parameter(tokens: &[Token], node: &ParseNode) -> Result<CallParameter> {
    let pos = node_position(tokens, node);
    match node.production {
        Production::CallParameterEmpty => Ok(CallParameter { pos, expr: None }),
        Production::CallParameter => Ok(CallParameter {
            pos,
            expr: Some(build_term(tokens, &node.children[0])?),
        }),
        _ => Err(unexpected("build_call_parameter", node)),
    }
}

fn build_call_quote(tokens: &[Token], node: &ParseNode) -> Result<CallQuote> {
    let pos = node_position(tokens, node);
    match node.children.first() {
        None => Ok(CallQuote {
            pos,
            kind: CallQuoteKind::Subquote,
            body: None,
        }),
        Some(child) if child.production == Production::CallGroup => Ok(CallQuote {
            pos,
            kind: CallQuoteKind::NoFail,
            body: Some(Box::new(QuoteBody::Group(build_call_group(tokens, child)?))),
        }),
        Some(child) => Ok(CallQuote {
            pos,
            kind: CallQuoteKind::Subquote,
            body: Some(Box::new(QuoteBody::Invoke(build_call_invoke(tokens, child)?))),
        }),
    }
}

fn build_cmd_literal(tokens: &[Token], node: &ParseNode) -> Result<CmdLiteral> {
    let pos = node_position(tokens, node);
    let cmd_kind = match leaf_kind(tokens, &node.children[0]) {
        TokenKind::ColAngle => CmdKind::NoFail,
        TokenKind::QLangle => CmdKind::MayFail,
        TokenKind::BangLangle => CmdKind::Fails,
        other => {
            return Err(ImplementationError::new(
                "build_cmd_literal",
                format!("unexpected command-literal leader token kind {other:?}"),
            ))
        }
    };
    let body_idx = node.children.len() - 1;
    let params = node.children[1..body_idx]
        .iter()
        .map(|n| build_cmd_param(tokens, n))
        .collect::<Result<Vec<_>>>()?;
    Ok(CmdLiteral {
        pos,
        cmd_kind,
        params,
        body: build_call_group(tokens, &node.children[body_idx])?,
    })
}

impl TypeExpr {
    /// A short display name, used where a constructor target in a call
    /// statement needs to be rendered as plain text.
    pub fn kind_name(&self) -> String {
        match &self.kind {
            TypeExprKind::Named { name, .. } => name.clone(),
            TypeExprKind::Pointer { inner, .. } => format!("^{}", inner.kind_name()),
            TypeExprKind::Range { inner, .. } => format!("[]{}", inner.kind_name()),
            TypeExprKind::Command { .. } => "<cmd>".to_string(),
        }
    }
}
