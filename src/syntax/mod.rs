//! Syntactic layer: comment stripping, section splitting, and constructor
//! expression scanning. Purely textual - no semantic interpretation happens
//! here.

pub mod constructor;
pub mod sanitizer;
pub mod splitter;

pub use constructor::parse;
pub use sanitizer::sanitize;
pub use splitter::{split, Sections};
