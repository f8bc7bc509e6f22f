//! Tests for rule compilation and its failure modes.
mod common;
use common::*;
use kijun::prelude::*;

#[test]
fn test_unknown_field_is_rejected() {
    let compiler = PredicateCompiler::new();
    let err = compiler
        .compile::<User>(&rule("Height", "Equal", "180"))
        .unwrap_err();
    match err {
        CompileError::UnknownField {
            type_name,
            field,
            known,
        } => {
            assert_eq!(type_name, "User");
            assert_eq!(field, "Height");
            assert_eq!(known, "Name, Age, Tags");
        }
        other => panic!("expected UnknownField, got {:?}", other),
    }
}

#[test]
fn test_field_lookup_is_case_sensitive() {
    let err = kijun::compile::<User>(&rule("age", "Equal", "13")).unwrap_err();
    assert!(matches!(err, CompileError::UnknownField { .. }));
}

#[test]
fn test_unknown_operator_is_rejected() {
    let err = kijun::compile::<User>(&rule("Age", "Approximately", "30")).unwrap_err();
    assert_eq!(
        err,
        CompileError::UnknownOperator {
            field: "Age".to_string(),
            field_type: "u32".to_string(),
            operator: "Approximately".to_string(),
        }
    );

    // Operator names are matched exactly.
    let err = kijun::compile::<User>(&rule("Age", "lessthan", "30")).unwrap_err();
    assert!(matches!(err, CompileError::UnknownOperator { .. }));
}

#[test]
fn test_capability_of_another_type_is_unknown() {
    // `Contains` exists on strings and lists, not on integers.
    let err = kijun::compile::<User>(&rule("Age", "Contains", "3")).unwrap_err();
    assert!(matches!(err, CompileError::UnknownOperator { .. }));
}

#[test]
fn test_unparseable_target_value_is_a_coercion_error() {
    let err = kijun::compile::<User>(&rule("Age", "Equal", "abc")).unwrap_err();
    match err {
        CompileError::ValueCoercionError { field, source } => {
            assert_eq!(field, "Age");
            assert_eq!(source.value, "abc");
            assert_eq!(source.target_type, "u32");
        }
        other => panic!("expected ValueCoercionError, got {:?}", other),
    }

    let err = kijun::compile::<User>(&rule("Age", "GreaterThan", "-1")).unwrap_err();
    assert!(matches!(err, CompileError::ValueCoercionError { .. }));
}

#[test]
fn test_capability_argument_is_coerced_to_parameter_type() {
    let err = kijun::compile::<User>(&rule("Age", "IsMultipleOf", "three")).unwrap_err();
    assert!(matches!(err, CompileError::ValueCoercionError { .. }));

    let err = kijun::compile::<Reading>(&rule("Status", "IsActive", "sometimes")).unwrap_err();
    match err {
        CompileError::ValueCoercionError { source, .. } => assert_eq!(source.target_type, "bool"),
        other => panic!("expected ValueCoercionError, got {:?}", other),
    }
}

#[test]
fn test_ordering_on_unordered_field_is_a_type_mismatch() {
    let err = kijun::compile::<Reading>(&rule("Online", "GreaterThan", "false")).unwrap_err();
    assert_eq!(
        err,
        CompileError::TypeMismatch {
            field: "Online".to_string(),
            field_type: "bool".to_string(),
            operator: "GreaterThan".to_string(),
            message: "has no ordering".to_string(),
        }
    );

    let err = kijun::compile::<User>(&rule("Tags", "LessThan", "a")).unwrap_err();
    assert!(matches!(err, CompileError::TypeMismatch { .. }));

    let err = kijun::compile::<Reading>(&rule("Status", "LessThanOrEqual", "Active")).unwrap_err();
    assert!(matches!(err, CompileError::TypeMismatch { .. }));
}

#[test]
fn test_type_mismatch_is_reported_before_coercion() {
    // The target value is not a boolean either, but operator resolution fails first.
    let err = kijun::compile::<Reading>(&rule("Online", "LessThan", "abc")).unwrap_err();
    assert!(matches!(err, CompileError::TypeMismatch { .. }));
}

#[test]
fn test_operator_aliases_resolve_to_builtins_and_capabilities() {
    let compiler = PredicateCompiler::builder()
        .with_operator_alias("<=", "LessThanOrEqual")
        .with_operator_alias("has", "Contains")
        .build();

    let at_most = compiler.compile::<User>(&rule("Age", "<=", "33")).unwrap();
    let results: Vec<bool> = sample_users().iter().map(|u| at_most.evaluate(u)).collect();
    assert_eq!(results, vec![true, true, false]);

    let has_ants = compiler
        .compile::<Phrase>(&rule("searchValue", "has", "ants"))
        .unwrap();
    assert!(has_ants.evaluate(&phrase("I got ants!")));

    assert_eq!(compiler.canonical_operator("<="), "LessThanOrEqual");
    assert_eq!(compiler.canonical_operator("Equal"), "Equal");
}

#[test]
fn test_alias_errors_report_the_operator_as_written() {
    let compiler = PredicateCompiler::builder()
        .with_operator_alias("has", "Contains")
        .with_operator_alias(">", "GreaterThan")
        .build();

    let err = compiler.compile::<User>(&rule("Age", "has", "3")).unwrap_err();
    assert_eq!(
        err,
        CompileError::UnknownOperator {
            field: "Age".to_string(),
            field_type: "u32".to_string(),
            operator: "has".to_string(),
        }
    );

    let err = compiler
        .compile::<Reading>(&rule("Online", ">", "true"))
        .unwrap_err();
    match err {
        CompileError::TypeMismatch { operator, .. } => assert_eq!(operator, ">"),
        other => panic!("expected TypeMismatch, got {:?}", other),
    }
}

#[test]
fn test_unaliased_compiler_rejects_symbols() {
    let err = kijun::compile::<User>(&rule("Age", "<=", "33")).unwrap_err();
    assert!(matches!(err, CompileError::UnknownOperator { .. }));
}

#[test]
fn test_disabling_capabilities_leaves_builtins_only() {
    let compiler = PredicateCompiler::builder()
        .with_capabilities(false)
        .build();
    let err = compiler
        .compile::<Phrase>(&rule("searchValue", "Contains", "ants"))
        .unwrap_err();
    assert!(matches!(err, CompileError::UnknownOperator { .. }));

    assert!(compiler.compile::<User>(&rule("Age", "Equal", "33")).is_ok());
}

#[test]
fn test_compiler_from_json_config() {
    let config = CompilerConfig::from_json(
        r#"{ "operator_aliases": { "eq": "Equal", "starts": "StartsWith" }, "capabilities": true }"#,
    )
    .unwrap();
    let compiler = PredicateCompiler::builder()
        .with_operator_alias("gt", "GreaterThan")
        .with_config(config)
        .build();

    let john = user("John", 33, &[]);
    assert!(compiler.compile::<User>(&rule("Age", "eq", "33")).unwrap().evaluate(&john));
    assert!(compiler.compile::<User>(&rule("Age", "gt", "30")).unwrap().evaluate(&john));
    assert!(
        compiler
            .compile::<User>(&rule("Name", "starts", "Jo"))
            .unwrap()
            .evaluate(&john)
    );
}

#[test]
fn test_compile_with_explicit_schema() {
    struct Point {
        x: i32,
    }

    let schema = Schema::builder("Point").field("X", |p: &Point| &p.x).build();
    let compiler = PredicateCompiler::new();

    let positive = compiler
        .compile_with(&schema, &rule("X", "GreaterThan", "0"))
        .unwrap();
    assert!(positive.evaluate(&Point { x: 4 }));
    assert!(!positive.evaluate(&Point { x: -4 }));
    assert_eq!(positive.field_type(), "i32");

    let err = compiler
        .compile_with(&schema, &rule("Y", "Equal", "0"))
        .unwrap_err();
    assert!(matches!(err, CompileError::UnknownField { type_name: "Point", .. }));
}

#[test]
fn test_compiled_predicate_keeps_its_rule() {
    let source = rule("Age", "LessThanOrEqual", "33");
    let predicate = kijun::compile::<User>(&source).unwrap();
    assert_eq!(predicate.rule(), &source);
    assert_eq!(predicate.field_type(), "u32");
}
