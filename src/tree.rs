//! The generic parse tree produced by the combinator engine.

use crate::token::{Token, TokenPos};

/// Grammar production tags: both terminal matches and structural
/// non-terminals live in one closed enumeration, mirroring the token kinds
/// for the terminal cases and naming every non-terminal the grammar builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Production {
    // Terminal leaves
    Literal,
    Identifier,
    Typename,
    Operator,

    // Enumerations
    DefEnum,
    DefEnumName1,
    DefEnumName2,
    DefEnumItem,
    DefEnumItemName,
    DefEnumItemList,

    // Module / import
    DefModule,
    DefImportFile,
    DefImportStd,

    // Alias / domain
    DefAlias,
    DefDomain,

    // Record / object
    DefRecord,
    DefObject,
    DefField,

    // Instance
    DefInstance,
    DefInstanceType,

    // Type expressions
    TypeNameQ,
    TypeExprPtr,
    TypeExprRange,
    TypeExpr,
    TypeExprCmd,
    CmdArg,

    // Command signatures
    DefCmdReceiver,
    DefCmdReceivers,
    DefCmdNameSpec,
    DefCmdName,
    DefCmdFails,
    DefCmdMayFail,
    DefCmdParm,
    DefCmdParmtypeName,
    DefCmdParmtypeVar,
    DefCmdParms,
    DefCmdImparms,
    DefCmdRetval,

    // Command declarations/definitions
    DefCmdDecl,
    DefCmdDef,
    DefCmdBody,
    DefCmdEmpty,
    DefIntrinsic,

    // Class / program / test
    DefClass,
    DefProgram,
    DefTest,

    // Call statements / expressions
    CallGroup,
    CallCommand,
    CallConstructor,
    CallVcommand,
    CallAssignment,
    CallExpression,
    SubcallExpression,
    CallParameter,
    CallParameterEmpty,
    CallQuote,
    CallCmdLiteral,
    AllocIdentifier,

    // Blocks
    Block,
    BlockHeader,
    RecoverSpec,

    // Top level
    CompilationUnit,
}

/// A node in the generic parse tree: a production tag, an optional token
/// (present on leaves and matches), and the children reached via `down`
/// (walking `next` within a `Vec` is the same traversal as a hand-linked
/// sibling chain, just without the per-node heap allocation).
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    pub production: Production,
    pub token: Option<TokenPos>,
    pub children: Vec<ParseNode>,
}

impl ParseNode {
    pub fn leaf(production: Production, token: TokenPos) -> Self {
        Self {
            production,
            token: Some(token),
            children: Vec::new(),
        }
    }

    pub fn group(production: Production, children: Vec<ParseNode>) -> Self {
        Self {
            production,
            token: None,
            children,
        }
    }

    /// Pairs this node with the token slice it was parsed from, yielding a
    /// `ptree::TreeItem` suitable for `ptree::print_tree`.
    pub fn view<'t>(&'t self, tokens: &'t [Token]) -> TreeView<'t> {
        TreeView { node: self, tokens }
    }
}

/// `ptree::TreeItem` adapter over a `ParseNode`, carrying the token slice
/// needed to render leaf text alongside each node's production tag.
#[derive(Clone)]
pub struct TreeView<'t> {
    node: &'t ParseNode,
    tokens: &'t [Token],
}

impl<'t> ptree::TreeItem for TreeView<'t> {
    type Child = TreeView<'t>;

    fn write_self<W: std::io::Write>(&self, f: &mut W, style: &ptree::Style) -> std::io::Result<()> {
        match self.node.token {
            Some(pos) => {
                let token = &self.tokens[pos];
                write!(
                    f,
                    "{}",
                    style.paint(format!(
                        "{:?} \"{}\" @ {}:{}",
                        self.node.production, token.text, token.line, token.column
                    ))
                )
            }
            None => write!(f, "{}", style.paint(format!("{:?}", self.node.production))),
        }
    }

    fn children(&self) -> std::borrow::Cow<[Self::Child]> {
        std::borrow::Cow::from(
            self.node
                .children
                .iter()
                .map(|child| TreeView {
                    node: child,
                    tokens: self.tokens,
                })
                .collect::<Vec<_>>(),
        )
    }
}
