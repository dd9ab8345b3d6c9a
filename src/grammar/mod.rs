//! Assembles the full grammar from its sub-grammars and exposes the single
//! top-level production a compilation unit is parsed against.

pub mod decls;
pub mod literals;
pub mod signatures;
pub mod statements;
pub mod types;

use crate::combinator::choice::{any, maybe};
use crate::combinator::scope::bounded_group;
use crate::combinator::sequence::one_or_more;
use crate::combinator::Parse;
use crate::tree::Production;

pub struct Grammar {
    pub compilation_unit: Parse,
}

impl Grammar {
    pub fn new() -> Self {
        let types = types::build();
        let signatures = signatures::build(&types);
        let statements = statements::build(&types);
        let decls = decls::build(&types, &signatures, &statements);

        let top_decl = any(vec![
            decls.alias.clone(),
            decls.domain.clone(),
            decls.enum_decl.clone(),
            decls.record_decl.clone(),
            decls.object_decl.clone(),
            decls.instance_decl.clone(),
            decls.class_decl.clone(),
            decls.cmd_member.clone(),
            decls.intrinsic_decl.clone(),
            decls.program_decl.clone(),
            decls.test_decl.clone(),
        ]);

        let compilation_unit = bounded_group(
            Production::CompilationUnit,
            vec![
                maybe(decls.module.clone()),
                maybe(one_or_more(decls.import.clone())),
                maybe(one_or_more(top_decl)),
            ],
        );

        Self { compilation_unit }
    }
}

impl Default for Grammar {
    fn default() -> Self {
        Self::new()
    }
}
