// tests/pipeline_tests.rs
//
// End-to-end: raw specification text in, structured specification out.

use mlspec::errors::ErrorKind;
use mlspec::SpecPipeline;

const LIST_INSERT: &str = include_str!("fixtures/list_insert.mls");

#[test]
fn test_bool_spec_yields_two_examples() {
    let source = "type bool =\n  | True\n  | False\n\nsynth bool -> bool -> bool satisfying\n\n[True,True] -> True,\n[False,True] -> False,\n";
    let spec = SpecPipeline::parse_source("bool.mls", source).unwrap();

    assert_eq!(spec.types.len(), 1);
    assert_eq!(spec.types[0].name, "bool");
    assert_eq!(
        spec.types[0].variants,
        vec!["True".to_string(), "False".to_string()]
    );
    assert_eq!(
        spec.signature.as_deref(),
        Some("synth bool -> bool -> bool satisfying")
    );

    let rendered: Vec<String> = spec.examples.iter().map(|e| e.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["[True,True] -> True", "[False,True] -> False"]
    );
}

#[test]
fn test_commented_out_example_is_dropped() {
    let source = "type bool =\n  | True\n  | False\n\nsynth bool -> bool satisfying\n\n[True] -> True,\n(*[False] -> True,*)\n";
    let spec = SpecPipeline::parse_source("bool.mls", source).unwrap();
    assert_eq!(spec.examples.len(), 1);
    assert_eq!(spec.examples[0].to_string(), "[True] -> True");
}

#[test]
fn test_missing_signature_is_not_fatal() {
    let source = "type bool =\n  | True\n  | False\n";
    let spec = SpecPipeline::parse_source("defs.mls", source).unwrap();
    assert_eq!(spec.signature, None);
    assert!(spec.examples.is_empty());
    assert_eq!(spec.types.len(), 1);
}

#[test]
fn test_list_insert_fixture_parses_fully() {
    let spec = SpecPipeline::parse_source("list_insert.mls", LIST_INSERT).unwrap();

    let type_names: Vec<&str> = spec.types.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(type_names, vec!["nat", "list", "cmp"]);
    assert_eq!(
        spec.types[1].variants,
        vec!["Nil".to_string(), "Cons of nat * list".to_string()]
    );

    assert_eq!(spec.functions.len(), 1);
    assert_eq!(spec.functions[0].name, "compare");

    assert_eq!(
        spec.signature.as_deref(),
        Some("synth list -> nat -> list satisfying")
    );

    assert_eq!(spec.examples.len(), 7);
    assert_eq!(spec.examples[0].to_string(), "[Nil,0] -> Cons(0,Nil)");
    assert_eq!(
        spec.examples[6].to_string(),
        "[Cons(0,Cons(1,Nil)),2] -> Cons(0,Cons(1,Cons(2,Nil)))"
    );
}

#[test]
fn test_shape_violation_propagates() {
    let source = "synth tree -> tree satisfying\n\n[Node(Leaf,Leaf)] -> Leaf,\n";
    let err = SpecPipeline::parse_source("bad.mls", source).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::MissingPayload { .. }));
}

#[test]
fn test_spec_serializes_to_json() {
    let spec = SpecPipeline::parse_source("list_insert.mls", LIST_INSERT).unwrap();
    let json = serde_json::to_value(&spec).unwrap();
    assert!(json.get("types").is_some());
    assert!(json.get("functions").is_some());
    assert!(json.get("signature").is_some());
    assert_eq!(json["examples"].as_array().unwrap().len(), 7);
}
