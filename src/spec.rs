//! The parsed specification model.
//!
//! Everything here is immutable output: a specification is rebuilt wholesale
//! from its source text on every parse, never mutated in place.

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::values::Value;

lazy_static! {
    static ref BINDING_NAME: Regex = Regex::new(r"\blet\s+(\w+)").unwrap();
}

/// A sum-type declaration: a name and its variant labels in declaration
/// order. Variant payloads (`Cons of nat * list`) stay verbatim inside the
/// label and are not modeled further.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDecl {
    pub name: String,
    pub kind: TypeDeclKind,
    pub variants: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeDeclKind {
    Variants,
}

impl TypeDecl {
    /// Build a declaration from its raw `type name = | A | B` text.
    pub fn from_declaration(text: &str) -> Self {
        let (head, rest) = match text.split_once('=') {
            Some((head, rest)) => (head, rest),
            None => (text, ""),
        };
        let head = head.trim();
        let name = head.strip_prefix("type").unwrap_or(head).trim().to_string();
        let variants = rest
            .split('|')
            .map(str::trim)
            .filter(|variant| !variant.is_empty())
            .map(str::to_string)
            .collect();
        Self {
            name,
            kind: TypeDeclKind::Variants,
            variants,
        }
    }
}

/// A named helper binding. The code is the full binding text including its
/// `;;` terminator; it stays opaque to the front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDef {
    pub name: String,
    pub code: String,
}

impl FunctionDef {
    /// Build a definition from its raw `let name = ... ;;` text.
    pub fn from_binding(text: &str) -> Self {
        let name = BINDING_NAME
            .captures(text)
            .map(|caps| caps[1].to_string())
            .unwrap_or_default();
        Self {
            name,
            code: text.to_string(),
        }
    }
}

/// One input/output pair from the example section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Example {
    pub args: Vec<Value>,
    pub result: Value,
}

impl fmt::Display for Example {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                write!(f, ",")?;
            }
            write!(f, "{}", arg)?;
        }
        write!(f, "] -> {}", self.result)
    }
}

/// The full parsed specification: declarations, helpers, the raw signature
/// clause (absent when no `synth` line was found), and the examples.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedSpec {
    pub types: Vec<TypeDecl>,
    pub functions: Vec<FunctionDef>,
    pub signature: Option<String>,
    pub examples: Vec<Example>,
}
