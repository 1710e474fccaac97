//! Value model for the mlspec language
//!
//! This module provides the generic constructor-expression tree produced by
//! the scanner and the typed recursive containers recovered from it.

// ============================================================================
// IMPORTS
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// CORE DATA STRUCTURES
// ============================================================================

/// A node in the generic constructor-expression tree.
///
/// A `Term` is either an atomic token (an identifier or literal the scanner
/// could not decompose further) or a named constructor application with an
/// ordered argument list. The tree is pure: the parent relation used while
/// scanning lives in the scanner's arena and never survives into a `Term`.
///
/// # Examples
///
/// ```rust
/// use mlspec::values::Term;
/// let term = Term::Constructor {
///     name: "Cons".to_string(),
///     args: vec![Term::Leaf("1".to_string()), Term::Leaf("Nil".to_string())],
/// };
/// assert_eq!(term.to_string(), "Cons(1,Nil)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Term {
    Leaf(String),
    Constructor { name: String, args: Vec<Term> },
}

impl Term {
    pub fn leaf(token: impl Into<String>) -> Self {
        Term::Leaf(token.into())
    }

    pub fn constructor(name: impl Into<String>, args: Vec<Term>) -> Self {
        Term::Constructor {
            name: name.into(),
            args,
        }
    }

    /// Returns the constructor name, if this term is a constructor.
    pub fn name(&self) -> Option<&str> {
        match self {
            Term::Constructor { name, .. } => Some(name),
            Term::Leaf(_) => None,
        }
    }

    /// The raw textual rendering of this term, `Name(arg,...)` for
    /// constructors and the bare token for leaves.
    pub fn raw(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Term::Leaf(token) => write!(f, "{}", token),
            Term::Constructor { name, args } => {
                write!(f, "{}(", name)?;
                for (i, arg) in args.iter().enumerate() {
                    if i > 0 {
                        write!(f, ",")?;
                    }
                    write!(f, "{}", arg)?;
                }
                write!(f, ")")
            }
        }
    }
}

// ============================================================================
// MODULE EXPORTS
// ============================================================================

pub mod classify;
pub mod reinterpret;
pub mod value;

pub use classify::{classify, ValueKind};
pub use reinterpret::reinterpret;
pub use value::{ListValue, TreeValue, Value};
