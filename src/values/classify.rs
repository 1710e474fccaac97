//! Shape classification for generic constructor trees.
//!
//! Both the reinterpretation pass and presentation code ask the same
//! question of a term: which recursive shape does it encode? Keeping the
//! answer in one place avoids scattering name-sniffing across consumers.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::values::Term;

/// Cons-family constructor name: `Cons` with an optional single marker
/// letter in front (`Cons`, `LCons`).
static CONS_FAMILY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]?)Cons$").unwrap());

/// Nil token prefix with the same optional marker letter (`Nil`, `LNil`).
static NIL_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([A-Za-z]?)Nil").unwrap());

/// The recursive shape a term encodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    LinkedList,
    Tree,
    Unknown,
}

/// Decide which recursive shape applies to a term.
///
/// Constructor nodes classify by name; leaves classify by textual prefix,
/// because a nil or leaf token that was never descended into is still a bare
/// token at this point.
pub fn classify(term: &Term) -> ValueKind {
    match term {
        Term::Constructor { name, .. } => {
            if is_cons_family(name) {
                ValueKind::LinkedList
            } else if name == "Node" {
                ValueKind::Tree
            } else {
                ValueKind::Unknown
            }
        }
        Term::Leaf(raw) => {
            if raw.starts_with("Nil")
                || raw.starts_with("Cons")
                || raw.starts_with("LNil")
                || raw.starts_with("LCons")
            {
                ValueKind::LinkedList
            } else if raw.starts_with("Leaf") || raw.starts_with("Node") {
                ValueKind::Tree
            } else {
                ValueKind::Unknown
            }
        }
    }
}

/// Returns true if `name` spells a cons-family link constructor.
pub fn is_cons_family(name: &str) -> bool {
    CONS_FAMILY.is_match(name)
}

/// If `raw` begins with a nil token, returns the marker-consistent cons
/// family that token belongs to (`Nil` -> `Cons`, `LNil` -> `LCons`).
pub fn nil_family(raw: &str) -> Option<String> {
    NIL_TOKEN
        .captures(raw)
        .map(|caps| format!("{}Cons", &caps[1]))
}
