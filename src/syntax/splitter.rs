//! Top-level segmentation of a sanitized specification.
//!
//! The `synth` clause is the boundary: everything before it is definitions
//! (type declarations, then `let` bindings terminated by `;;`), everything
//! after it is example clauses. Each class of section is collected by an
//! anchored pattern scanned over its region until it no longer matches.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref SYNTH_CLAUSE: Regex = Regex::new(r"(?m)^synth\b.*$").unwrap();
    static ref TYPE_DECL: Regex =
        Regex::new(r#"type\s+\w+\s*=(\s*[\w "]+)?(\s*\|\s*[\w "*]+)*"#).unwrap();
    static ref FUNC_DECL: Regex = Regex::new(r"(?s)\blet\s+\w+\s*=.*?;;").unwrap();
    static ref EXAMPLE_CLAUSE: Regex = Regex::new(r"(?m)^\s*\[.*\]\s*->\s*\S.*$").unwrap();
}

/// The raw textual sections of one specification.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub type_texts: Vec<String>,
    pub function_texts: Vec<String>,
    pub signature_text: Option<String>,
    pub example_texts: Vec<String>,
}

/// Split sanitized text into its sections.
///
/// A missing `synth` clause is not fatal: the signature is recorded as
/// absent and the whole input is treated as definitions. Example lines
/// without a `->` never match the clause pattern and are skipped.
pub fn split(sanitized: &str) -> Sections {
    let (definitions, signature_text, remainder) = match SYNTH_CLAUSE.find(sanitized) {
        Some(found) => (
            &sanitized[..found.start()],
            Some(found.as_str().trim().to_string()),
            &sanitized[found.end()..],
        ),
        None => (sanitized, None, ""),
    };

    let type_texts = TYPE_DECL
        .find_iter(definitions)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    let function_texts = FUNC_DECL
        .find_iter(definitions)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    let example_texts = EXAMPLE_CLAUSE
        .find_iter(remainder)
        .map(|m| m.as_str().trim().to_string())
        .collect();

    Sections {
        type_texts,
        function_texts,
        signature_text,
        example_texts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOURCE: &str = "type bool =\n  | True\n  | False\n\nlet ignore =\n  fun (b : bool) -> True\n;;\n\nsynth bool -> bool -> bool satisfying\n\n[True,True] -> True,\n[False,True] -> False,\nnot an example\n";

    #[test]
    fn splits_all_sections() {
        let sections = split(SOURCE);
        assert_eq!(sections.type_texts.len(), 1);
        assert_eq!(sections.function_texts.len(), 1);
        assert_eq!(
            sections.signature_text.as_deref(),
            Some("synth bool -> bool -> bool satisfying")
        );
        assert_eq!(sections.example_texts.len(), 2);
    }

    #[test]
    fn missing_synth_clause_means_no_signature() {
        let sections = split("type bool =\n  | True\n  | False\n");
        assert_eq!(sections.signature_text, None);
        assert!(sections.example_texts.is_empty());
        assert_eq!(sections.type_texts.len(), 1);
    }

    #[test]
    fn example_line_without_arrow_is_skipped() {
        let sections = split("synth bool satisfying\n[True,True] True\n[True] -> True\n");
        assert_eq!(sections.example_texts, vec!["[True] -> True".to_string()]);
    }
}
