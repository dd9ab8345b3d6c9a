//! Front end for the basis language: an indentation-sensitive lexer, a
//! two-dimensional parser-combinator engine, and an AST builder.
//!
//! # Pipeline
//!
//! Source text goes through three stages, each in its own module:
//! [`lexer`] turns a source buffer into a [`token::TokenStream`], tracking
//! each token's indentation-derived `bound`; [`combinator`] and [`grammar`]
//! turn a token slice into a [`tree::ParseNode`] tree; [`ast::build`] folds
//! that tree into the typed tree in [`ast`].

pub mod ast;
pub mod combinator;
pub mod error;
pub mod field_tree;
pub mod grammar;
pub mod lexer;
pub mod log;
pub mod parser;
pub mod position;
pub mod token;
pub mod tree;

use error::{LexError, ParseError};

/// Runs the full pipeline: lex, parse, then build the AST. The convenience
/// entry point the CLI and integration tests drive.
pub fn compile(source: &str, tab_width: usize) -> Result<ast::CompilationUnit, CompileError> {
    let tokens = lexer::Lexer::new(source, tab_width).scan().map_err(CompileError::Lex)?;

    let grammar = grammar::Grammar::new();
    let parser = parser::Parser::new(&tokens, grammar.compilation_unit.clone());
    let outcome = parser.parse();
    if !outcome.all_tokens_consumed(tokens.len()) {
        return Err(CompileError::Parse(ParseError::new(parser.diagnostic(&outcome))));
    }
    let tree = outcome.tree.expect("successful parse always yields a tree");

    ast::build::build_ast(&tokens, &tree).map_err(CompileError::Build)
}

#[derive(Debug)]
pub enum CompileError {
    Lex(LexError),
    Parse(ParseError),
    Build(error::ImplementationError),
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CompileError::Lex(e) => write!(f, "{e}"),
            CompileError::Parse(e) => write!(f, "{e}"),
            CompileError::Build(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for CompileError {}
