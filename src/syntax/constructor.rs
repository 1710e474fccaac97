//! Scanner for constructor argument expressions.
//!
//! Parses a comma-separated argument list (outer brackets already stripped
//! by the caller) into a tree of named constructor nodes and atomic leaves.
//! Nodes live in an arena during the scan and track nesting through parent
//! indices; the returned `Term` tree carries no parent links.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ErrorReporting, SourceContext, SpecError};
use crate::values::Term;

/// Closing delimiter, optionally followed by the separator: pop one level.
static CLOSE_GROUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\)\s*,?").unwrap());

/// An identifier immediately opening an argument list: push one level.
static OPEN_CONSTRUCTOR: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*\(").unwrap());

/// A bare identifier, optionally followed by the separator: attach a leaf.
static BARE_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^(\w+)\s*,?").unwrap());

/// How much of an unparseable remainder an error message carries.
const SNIPPET_LEN: usize = 16;

struct ArenaNode {
    name: String,
    parent: Option<usize>,
    children: Vec<Arg>,
}

enum Arg {
    Token(String),
    Node(usize),
}

/// Parse a top-level argument list into the terms it contains.
///
/// The three patterns are tried in priority order at each scan position,
/// with incidental whitespace trimmed between matches. A position that
/// matches none of them is a parse error rather than a silent truncation
/// of the input.
pub fn parse(expr: &str, context: &SourceContext) -> Result<Vec<Term>, SpecError> {
    let mut arena = vec![ArenaNode {
        name: "default".to_string(),
        parent: None,
        children: Vec::new(),
    }];
    let mut current = 0;
    let mut pos = 0;

    while pos < expr.len() {
        let rest = &expr[pos..];
        let trimmed = rest.trim_start();
        pos += rest.len() - trimmed.len();
        if trimmed.is_empty() {
            break;
        }

        if let Some(found) = CLOSE_GROUP.find(trimmed) {
            // Popping at the root is a no-op, so an over-closed input
            // cannot escape the synthetic root.
            if let Some(parent) = arena[current].parent {
                current = parent;
            }
            pos += found.end();
        } else if let Some(caps) = OPEN_CONSTRUCTOR.captures(trimmed) {
            let node = ArenaNode {
                name: caps[1].to_string(),
                parent: Some(current),
                children: Vec::new(),
            };
            arena.push(node);
            let index = arena.len() - 1;
            arena[current].children.push(Arg::Node(index));
            current = index;
            pos += caps.get(0).unwrap().end();
        } else if let Some(caps) = BARE_TOKEN.captures(trimmed) {
            arena[current]
                .children
                .push(Arg::Token(caps[1].to_string()));
            pos += caps.get(0).unwrap().end();
        } else {
            let snippet: String = trimmed.chars().take(SNIPPET_LEN).collect();
            let start = context.content.find(trimmed).unwrap_or(pos);
            let end = (start + snippet.len()).min(context.content.len()).max(start);
            return Err(context.unexpected_token(&snippet, miette::SourceSpan::from(start..end)));
        }
    }

    // The synthetic root holds the top-level arguments; only its children
    // survive, and the arena's parent indices are dropped with it.
    Ok(arena[0]
        .children
        .iter()
        .map(|arg| build_term(&arena, arg))
        .collect())
}

fn build_term(arena: &[ArenaNode], arg: &Arg) -> Term {
    match arg {
        Arg::Token(token) => Term::Leaf(token.clone()),
        Arg::Node(index) => {
            let node = &arena[*index];
            Term::Constructor {
                name: node.name.clone(),
                args: node
                    .children
                    .iter()
                    .map(|child| build_term(arena, child))
                    .collect(),
            }
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
    fn empty_input_yields_no_terms() {
        assert!(parse("", &ctx("")).unwrap().is_empty());
        assert!(parse("   ", &ctx("   ")).unwrap().is_empty());
    }

    #[test]
    fn flat_argument_list() {
        let terms = parse("True,False", &ctx("True,False")).unwrap();
        assert_eq!(terms, vec![Term::leaf("True"), Term::leaf("False")]);
    }

    #[test]
    fn nested_constructor() {
        let terms = parse("Cons(1,Cons(2,Nil))", &ctx("Cons(1,Cons(2,Nil))")).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].raw(), "Cons(1,Cons(2,Nil))");
    }

    #[test]
    fn whitespace_between_tokens_is_incidental() {
        let expr = "Node (Node (Leaf, 0, Leaf), 1, Leaf)";
        let terms = parse(expr, &ctx(expr)).unwrap();
        assert_eq!(terms.len(), 1);
        assert_eq!(terms[0].raw(), "Node(Node(Leaf,0,Leaf),1,Leaf)");
    }

    #[test]
    fn unparseable_position_is_an_error() {
        let err = parse("Cons(1,@)", &ctx("Cons(1,@)")).unwrap_err();
        assert!(matches!(
            err.kind,
            crate::errors::ErrorKind::UnexpectedToken { .. }
        ));
    }
}
