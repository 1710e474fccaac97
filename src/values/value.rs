//! Typed recursive containers recovered from generic constructor trees.
//!
//! Each variant re-serializes to its canonical textual form, so a value can
//! be rendered back into the dialect it was parsed from.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A reinterpreted value: a recognized recursive shape or a raw passthrough.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Value {
    List(ListValue),
    Tree(TreeValue),
    Unknown(String),
}

impl Value {
    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::List(_) => "List",
            Value::Tree(_) => "Tree",
            Value::Unknown(_) => "Unknown",
        }
    }

    pub fn is_tree(&self) -> bool {
        matches!(self, Value::Tree(_))
    }

    pub fn as_tree(&self) -> Option<&TreeValue> {
        match self {
            Value::Tree(tree) => Some(tree),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListValue> {
        match self {
            Value::List(list) => Some(list),
            _ => None,
        }
    }
}

/// A linked list recovered from a cons chain.
///
/// The `family` field records the cons constructor spelling observed in the
/// input (`Cons`, `LCons`, ...) so re-serialization stays in the same family.
///
/// # Examples
///
/// ```rust
/// use mlspec::values::{ListValue, Value};
/// let list = ListValue {
///     family: "LCons".to_string(),
///     elements: vec![Value::Unknown("1".to_string())],
/// };
/// assert_eq!(list.to_string(), "LCons(1,LNil)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListValue {
    pub family: String,
    pub elements: Vec<Value>,
}

impl ListValue {
    pub fn empty(family: impl Into<String>) -> Self {
        Self {
            family: family.into(),
            elements: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// The nil token of this list's family: the family's marker prefix
    /// followed by `Nil` (`Cons` -> `Nil`, `LCons` -> `LNil`).
    pub fn nil_token(&self) -> String {
        let marker = self.family.strip_suffix("Cons").unwrap_or("");
        format!("{}Nil", marker)
    }
}

impl fmt::Display for ListValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for element in &self.elements {
            write!(f, "{}({},", self.family, element)?;
        }
        write!(f, "{}", self.nil_token())?;
        for _ in &self.elements {
            write!(f, ")")?;
        }
        Ok(())
    }
}

/// A binary-tree-shaped value: a bare leaf, or a node owning one payload
/// value and an ordered sequence of child trees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TreeValue {
    Leaf,
    Node {
        payload: Box<Value>,
        children: Vec<TreeValue>,
    },
}

impl TreeValue {
    pub fn is_leaf(&self) -> bool {
        matches!(self, TreeValue::Leaf)
    }

    pub fn node(payload: Value, children: Vec<TreeValue>) -> Self {
        TreeValue::Node {
            payload: Box::new(payload),
            children,
        }
    }
}

impl fmt::Display for TreeValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TreeValue::Leaf => write!(f, "Leaf"),
            TreeValue::Node { payload, children } => {
                write!(f, "Node({}", payload)?;
                for child in children {
                    write!(f, ",{}", child)?;
                }
                write!(f, ")")
            }
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::List(list) => write!(f, "{}", list),
            Value::Tree(tree) => write!(f, "{}", tree),
            Value::Unknown(raw) => write!(f, "{}", raw),
        }
    }
}
