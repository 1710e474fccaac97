//! Reinterpretation of generic constructor trees into typed containers.
//!
//! A parsed term is a shapeless tree of names and tokens. This pass walks it
//! once, asks the classifier which recursive shape each node encodes, and
//! rebuilds the recognized shapes (cons chains, tree nodes) as their
//! dedicated value types. Unrecognized terms pass through as raw text.

use crate::errors::{span_within, ErrorReporting, SourceContext, SpecError};
use crate::values::classify::{self, ValueKind};
use crate::values::{ListValue, Term, TreeValue, Value};

/// Reinterpret one term into its typed value.
///
/// Total on well-formed trees: the only failure is a `Node` constructor
/// carrying no non-tree argument to serve as its payload, which is reported
/// with the offending raw text rather than silently misshaped.
pub fn reinterpret(term: &Term, context: &SourceContext) -> Result<Value, SpecError> {
    match classify::classify(term) {
        ValueKind::LinkedList => Ok(Value::List(reinterpret_list(term, context)?)),
        ValueKind::Tree => Ok(Value::Tree(reinterpret_tree(term, context)?)),
        ValueKind::Unknown => Ok(Value::Unknown(term.raw())),
    }
}

// ============================================================================
// LINKED LISTS
// ============================================================================

fn reinterpret_list(term: &Term, context: &SourceContext) -> Result<ListValue, SpecError> {
    match term {
        Term::Leaf(raw) => match classify::nil_family(raw) {
            // A nil token is the empty list of its marker-consistent family.
            Some(family) => Ok(ListValue::empty(family)),
            // A cons-prefixed token that was never descended into stays a
            // single opaque element.
            None => Ok(ListValue {
                family: "Cons".to_string(),
                elements: vec![Value::Unknown(raw.clone())],
            }),
        },
        Term::Constructor { name, args } => {
            let mut elements = Vec::new();
            if let Some(head) = args.first() {
                elements.push(reinterpret(head, context)?);
            }
            if let Some(tail) = args.get(1) {
                match reinterpret(tail, context)? {
                    Value::List(tail_list) => elements.extend(tail_list.elements),
                    // A chain that does not end in a nil token keeps its
                    // dangling tail as a trailing element.
                    other => elements.push(other),
                }
            }
            Ok(ListValue {
                family: name.clone(),
                elements,
            })
        }
    }
}

// ============================================================================
// TREES
// ============================================================================

fn reinterpret_tree(term: &Term, context: &SourceContext) -> Result<TreeValue, SpecError> {
    let Term::Constructor { args, .. } = term else {
        // A bare leaf token is the empty tree.
        return Ok(TreeValue::Leaf);
    };

    let mut payload: Option<Value> = None;
    let mut children = Vec::new();
    for arg in args {
        match reinterpret(arg, context)? {
            Value::Tree(child) => children.push(child),
            value => {
                // The source format carries exactly one payload per node;
                // the first non-tree argument is it.
                if payload.is_none() {
                    payload = Some(value);
                }
            }
        }
    }

    match payload {
        Some(payload) => Ok(TreeValue::node(payload, children)),
        None => {
            let raw = term.raw();
            let span = span_within(context, &raw);
            Err(context.missing_payload(&raw, span))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(expr: &str) -> SourceContext {
        SourceContext::from_file("expr", expr)
    }

    #[test]
    fn nil_leaf_is_empty_list() {
        let value = reinterpret(&Term::leaf("Nil"), &ctx("Nil")).unwrap();
        let list = value.as_list().expect("expected a list");
        assert!(list.is_empty());
        assert_eq!(list.family, "Cons");
    }

    #[test]
    fn leaf_token_is_empty_tree() {
        let value = reinterpret(&Term::leaf("Leaf"), &ctx("Leaf")).unwrap();
        assert!(value.as_tree().expect("expected a tree").is_leaf());
    }

    #[test]
    fn unknown_leaf_passes_through() {
        let value = reinterpret(&Term::leaf("42"), &ctx("42")).unwrap();
        assert_eq!(value, Value::Unknown("42".to_string()));
    }
}
