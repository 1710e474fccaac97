pub use crate::errors::{ErrorKind, ErrorReporting, SourceContext, SpecError};

pub mod cli;
pub mod errors;
pub mod pipeline;
pub mod spec;
pub mod synth;
pub mod syntax;
pub mod values;

pub use pipeline::SpecPipeline;
pub use spec::{Example, FunctionDef, ParsedSpec, TypeDecl};
pub use values::{Term, Value, ValueKind};
