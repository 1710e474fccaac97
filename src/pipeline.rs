//! End-to-end assembly of a specification from raw text.
//!
//! Sanitize, split into sections, then scan and reinterpret each example
//! clause. Section-level irregularities (no signature, a clause without an
//! arrow) degrade to absence; scan and shape errors propagate to the caller.

use std::path::Path;

use crate::errors::{unspanned, ErrorReporting, SourceContext, SpecError};
use crate::spec::{Example, FunctionDef, ParsedSpec, TypeDecl};
use crate::syntax::{constructor, sanitizer, splitter};
use crate::values::reinterpret;

pub struct SpecPipeline;

impl SpecPipeline {
    pub fn read_file(path: &Path) -> Result<String, SpecError> {
        std::fs::read_to_string(path).map_err(|error| {
            SourceContext::fallback(&path.display().to_string()).io_error(
                &format!("failed to read '{}': {}", path.display(), error),
                unspanned(),
            )
        })
    }

    pub fn parse_file(path: &Path) -> Result<ParsedSpec, SpecError> {
        let source = Self::read_file(path)?;
        Self::parse_source(&path.display().to_string(), &source)
    }

    /// Parse one specification. `name` labels the source in diagnostics.
    pub fn parse_source(name: &str, source: &str) -> Result<ParsedSpec, SpecError> {
        let sanitized = sanitizer::sanitize(source);
        let sections = splitter::split(&sanitized);

        let types = sections
            .type_texts
            .iter()
            .map(|text| TypeDecl::from_declaration(text))
            .collect();
        let functions = sections
            .function_texts
            .iter()
            .map(|text| FunctionDef::from_binding(text))
            .collect();

        let mut examples = Vec::new();
        for clause in &sections.example_texts {
            if let Some(example) = Self::build_example(name, clause)? {
                examples.push(example);
            }
        }

        Ok(ParsedSpec {
            types,
            functions,
            signature: sections.signature_text,
            examples,
        })
    }

    /// Build one example from its `[args] -> result` clause.
    ///
    /// Returns `Ok(None)` for a clause that has no usable shape (no arrow,
    /// empty result expression); those are omitted rather than fatal.
    fn build_example(name: &str, clause: &str) -> Result<Option<Example>, SpecError> {
        let Some((lhs, rhs)) = clause.split_once("->") else {
            return Ok(None);
        };

        let args_src = lhs.trim();
        let args_src = args_src
            .strip_prefix('[')
            .and_then(|inner| inner.strip_suffix(']'))
            .unwrap_or(args_src);

        let result_src = rhs.trim();
        let result_src = result_src.strip_suffix(',').unwrap_or(result_src).trim_end();

        let context = SourceContext::from_file(name, clause);

        let arg_terms = constructor::parse(args_src, &context)?;
        let mut args = Vec::with_capacity(arg_terms.len());
        for term in &arg_terms {
            args.push(reinterpret(term, &context)?);
        }

        let result_terms = constructor::parse(result_src, &context)?;
        let result = match result_terms.first() {
            Some(term) => reinterpret(term, &context)?,
            None => return Ok(None),
        };

        Ok(Some(Example { args, result }))
    }
}
