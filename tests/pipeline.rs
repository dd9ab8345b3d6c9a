use basis::ast::{ClassMember, Definition};
use basis::CompileError;

fn compile(src: &str) -> basis::ast::CompilationUnit {
    match basis::compile(src, 4) {
        Ok(unit) => unit,
        Err(err) => panic!("unexpected compile failure: {err}"),
    }
}

#[test]
fn enum_declaration_builds_expected_ast() {
    let unit = compile(".enum Fish: sockeye = 0, salmon = 1\n");
    assert_eq!(unit.definitions.len(), 1);
    let Definition::Enum(decl) = &unit.definitions[0] else {
        panic!("expected an enum declaration, got {:?}", unit.definitions[0]);
    };
    assert_eq!(decl.name1, "Fish");
    assert_eq!(decl.items.len(), 2);
    assert_eq!(decl.items[0].name, "sockeye");
    assert_eq!(decl.items[0].value, "0");
    assert_eq!(decl.items[1].name, "salmon");
    assert_eq!(decl.items[1].value, "1");
}

#[test]
fn class_body_is_bounded_by_its_header_indentation() {
    let src = ".class Foo:\n  .cmd bar: Int x -> r\n  .cmd baz\n";
    let unit = compile(src);
    assert_eq!(unit.definitions.len(), 1);
    let Definition::Class(class) = &unit.definitions[0] else {
        panic!("expected a class declaration, got {:?}", unit.definitions[0]);
    };
    assert_eq!(class.name, "Foo");
    assert_eq!(class.members.len(), 2);
    for (member, expected_name) in class.members.iter().zip(["bar", "baz"]) {
        let ClassMember::Decl(decl) = member else {
            panic!("expected a command declaration, got {member:?}");
        };
        assert_eq!(decl.signature.name, expected_name);
    }
}

#[test]
fn unindenting_past_the_class_bound_is_a_parse_failure() {
    let src = ".class Foo:\n  .cmd bar: Int x -> r\n.cmd baz\n";
    match basis::compile(src, 4) {
        Err(CompileError::Parse(_)) => {}
        other => panic!("expected a parse failure, got {other:?}"),
    }
}

#[test]
fn furthest_position_diagnostic_points_at_the_offending_token() {
    let src = ".enum Fish: Sockeye = 0\n";
    let err = match basis::compile(src, 4) {
        Err(CompileError::Parse(e)) => e,
        other => panic!("expected a parse failure, got {other:?}"),
    };
    assert!(
        err.message.contains("Sockeye"),
        "diagnostic should name the offending token, got: {}",
        err.message
    );
}

#[test]
fn record_and_instance_declarations_round_trip_through_the_ast() {
    let src = concat!(
        ".record Point: Int x, Int y\n",
        ".instance Shape: Point(origin)\n",
    );
    let unit = compile(src);
    assert_eq!(unit.definitions.len(), 2);
    let Definition::Record(record) = &unit.definitions[0] else {
        panic!("expected a record declaration, got {:?}", unit.definitions[0]);
    };
    assert_eq!(record.name, "Point");
    assert_eq!(record.fields.len(), 2);
    assert_eq!(record.fields[0].name, "x");
    assert_eq!(record.fields[1].name, "y");

    let Definition::Instance(instance) = &unit.definitions[1] else {
        panic!("expected an instance declaration, got {:?}", unit.definitions[1]);
    };
    assert_eq!(instance.name, "Shape");
    assert_eq!(instance.types.len(), 1);
    assert_eq!(instance.types[0].type_name, "Point");
    assert_eq!(instance.types[0].delegate.as_deref(), Some("origin"));
}

#[test]
fn module_and_import_header_attach_to_the_compilation_unit() {
    let src = ".module Fishery\n.import Stream\n.enum Fish: sockeye = 0\n";
    let unit = compile(src);
    assert_eq!(unit.module.as_ref().map(|m| m.name.as_str()), Some("Fishery"));
    assert_eq!(unit.imports.len(), 1);
    assert_eq!(unit.definitions.len(), 1);
}
