//! The typed abstract syntax tree a compilation unit folds down to.

pub mod build;

use crate::position::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct TypeExpr {
    pub pos: Position,
    pub kind: TypeExprKind,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TypeExprKind {
    Named {
        name: String,
        type_args: Vec<TypeExpr>,
    },
    Pointer {
        depth: usize,
        inner: Box<TypeExpr>,
    },
    Range {
        size: Option<String>,
        inner: Box<TypeExpr>,
    },
    Command {
        cmd_kind: CmdKind,
        args: Vec<CmdArg>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdKind {
    NoFail,
    MayFail,
    Fails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdArg {
    pub writeable: bool,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleDecl {
    pub pos: Position,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ImportDecl {
    File { pos: Position, path: String },
    Standard { pos: Position, qualifier: Option<String>, name: String },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumItem {
    pub pos: Position,
    pub name: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnumDecl {
    pub pos: Position,
    pub name1: String,
    pub name2: Option<String>,
    pub items: Vec<EnumItem>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldDecl {
    pub pos: Position,
    pub ty: TypeExpr,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordDecl {
    pub pos: Position,
    pub name: String,
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDecl {
    pub pos: Position,
    pub name: String,
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceType {
    pub pos: Position,
    pub type_name: String,
    pub delegate: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstanceDecl {
    pub pos: Position,
    pub name: String,
    pub types: Vec<InstanceType>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AliasDecl {
    pub pos: Position,
    pub name: String,
    pub ty: TypeExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DomainDecl {
    pub pos: Position,
    pub name: String,
    pub parent: TypeExpr,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdParam {
    pub name: String,
    pub ty: Option<TypeExpr>,
    pub type_var_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdReceiver {
    pub ty: TypeExpr,
    pub name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CmdSignatureKind {
    Regular,
    VCommand,
    Constructor,
    Destructor,
    FailHandler,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdSignature {
    pub kind: CmdSignatureKind,
    pub name: String,
    pub may_fail: bool,
    pub fails: bool,
    pub receivers: Vec<CmdReceiver>,
    pub params: Vec<CmdParam>,
    pub implicit_params: Vec<CmdParam>,
    pub return_val: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdDecl {
    pub pos: Position,
    pub signature: CmdSignature,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntrinsicDecl {
    pub pos: Position,
    pub signature: CmdSignature,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdDef {
    pub pos: Position,
    pub signature: CmdSignature,
    pub body: CmdBody,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdBody {
    pub pos: Position,
    pub group: Option<CallGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ClassMember {
    Decl(CmdDecl),
    Def(CmdDef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecl {
    pub pos: Position,
    pub name: String,
    pub members: Vec<ClassMember>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProgramDecl {
    pub pos: Position,
    pub entry_point: CallInvoke,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TestDecl {
    pub pos: Position,
    pub label: String,
    pub body: CallGroup,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Literal {
    pub pos: Position,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IdentifierExpr {
    pub pos: Position,
    pub text: String,
    pub is_alloc: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Literal(Literal),
    Identifier(IdentifierExpr),
    Quote(CallQuote),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallParameter {
    pub pos: Position,
    pub expr: Option<Term>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallInvokeKind {
    Command,
    Constructor,
    VCommand,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallInvoke {
    pub pos: Position,
    pub kind: CallInvokeKind,
    pub target: String,
    pub receivers: Vec<String>,
    pub params: Vec<CallParameter>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallAssignment {
    pub pos: Position,
    pub target: IdentifierExpr,
    pub exprs: Vec<SubcallExpr>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallExpression {
    pub pos: Position,
    pub terms: Vec<Term>,
    pub operators: Vec<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubcallExpr {
    Expression(CallExpression),
    Term(Term),
}

#[derive(Debug, Clone, PartialEq)]
pub enum CallQuoteKind {
    Subquote,
    NoFail,
    MayFail,
    Fails,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallQuote {
    pub pos: Position,
    pub kind: CallQuoteKind,
    pub body: Option<Box<QuoteBody>>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum QuoteBody {
    Invoke(CallInvoke),
    Group(CallGroup),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CmdLiteral {
    pub pos: Position,
    pub cmd_kind: CmdKind,
    pub params: Vec<CmdParam>,
    pub body: CallGroup,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    DoWhen,
    DoWhenMulti,
    DoWhenFail,
    DoElse,
    DoUnless,
    DoBlock,
    DoRewind,
    DoRecover,
    DoRecoverSpec,
    OnExit,
    OnExitFail,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub pos: Position,
    pub kind: BlockKind,
    pub recover_type: Option<String>,
    pub recover_name: Option<String>,
    pub body: Box<CallGroup>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    Assignment(CallAssignment),
    Expression(CallExpression),
    Invoke(CallInvoke),
    CmdLiteral(CmdLiteral),
    Block(Block),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CallGroup {
    pub pos: Position,
    pub statements: Vec<Statement>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Definition {
    Alias(AliasDecl),
    Domain(DomainDecl),
    Enum(EnumDecl),
    Record(RecordDecl),
    Object(ObjectDecl),
    Instance(InstanceDecl),
    Class(ClassDecl),
    Cmd(ClassMember),
    Intrinsic(IntrinsicDecl),
    Program(ProgramDecl),
    Test(TestDecl),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct CompilationUnit {
    pub module: Option<ModuleDecl>,
    pub imports: Vec<ImportDecl>,
    pub definitions: Vec<Definition>,
}

/// Walks a compilation unit without caring about most of it; override only
/// the node kinds relevant to a given pass.
pub trait Visitor {
    fn visit_compilation_unit(&mut self, unit: &CompilationUnit) {
        if let Some(module) = &unit.module {
            self.visit_module(module);
        }
        for import in &unit.imports {
            self.visit_import(import);
        }
        for def in &unit.definitions {
            self.visit_definition(def);
        }
    }
    fn visit_module(&mut self, _module: &ModuleDecl) {}
    fn visit_import(&mut self, _import: &ImportDecl) {}
    fn visit_definition(&mut self, _def: &Definition) {}
}
