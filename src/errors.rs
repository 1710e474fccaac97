//! mlspec Error Handling - Unified Encapsulated API
//!
//! Every failure surfaced by the crate is a `SpecError`: a kind, the source
//! text it points into, and the diagnostic metadata miette needs to render it.

use std::fmt;
use std::sync::Arc;

use miette::{Diagnostic, LabeledSpan, NamedSource, SourceSpan};

// ============================================================================
// SOURCE CONTEXT - Error reporting infrastructure
// ============================================================================

/// Represents source context for error reporting with explicit hierarchy
/// between real sources (preferred) and fallbacks (tolerated when necessary)
#[derive(Debug, Clone)]
pub struct SourceContext {
    pub name: String,
    pub content: String,
}

impl SourceContext {
    /// Create a source context from real file content
    /// This is the preferred method for error reporting
    pub fn from_file(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }

    /// Create a fallback when real source is unavailable
    /// Use only when real source cannot be obtained
    pub fn fallback(context: &str) -> Self {
        Self {
            name: "fallback".to_string(),
            content: format!("(* {} *)", context),
        }
    }

    /// Convert to NamedSource for use with miette error reporting
    pub fn to_named_source(&self) -> Arc<NamedSource<String>> {
        Arc::new(NamedSource::new(self.name.clone(), self.content.clone()))
    }
}

impl Default for SourceContext {
    fn default() -> Self {
        Self::fallback("default context")
    }
}

/// The single error type - no wrapper, no variants, just essential data
#[derive(Debug)]
pub struct SpecError {
    /// What went wrong (type-specific data)
    pub kind: ErrorKind,
    /// Where it happened (context-specific source information)
    pub source_info: SourceInfo,
    /// How to help (auto-populated based on context)
    pub diagnostic_info: DiagnosticInfo,
}

/// All error types as a clean enum - no duplicate fields
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorKind {
    /// The constructor scanner reached a position no pattern matches.
    UnexpectedToken { found: String },
    /// A tree node carries no non-tree argument to serve as its payload.
    MissingPayload { constructor: String },
    /// A file or process interaction failed.
    Io { message: String },
}

/// Context-specific source information
#[derive(Debug, Clone)]
pub struct SourceInfo {
    pub source: Arc<NamedSource<String>>,
    pub primary_span: SourceSpan,
    pub phase: String,
}

/// Diagnostic enhancement data
#[derive(Debug, Clone)]
pub struct DiagnosticInfo {
    pub help: Option<String>,
    pub error_code: String,
}

/// Context-aware error creation - each context knows how to create appropriate errors
pub trait ErrorReporting {
    /// Create an error with context-appropriate enhancements
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> SpecError;

    /// Convenience methods for common error types
    fn unexpected_token(&self, found: &str, span: SourceSpan) -> SpecError {
        self.report(
            ErrorKind::UnexpectedToken {
                found: found.into(),
            },
            span,
        )
    }

    fn missing_payload(&self, constructor: &str, span: SourceSpan) -> SpecError {
        let mut error = self.report(
            ErrorKind::MissingPayload {
                constructor: constructor.into(),
            },
            span,
        );
        error.diagnostic_info.help =
            Some("a Node must carry exactly one non-tree argument as its payload".into());
        error
    }

    fn io_error(&self, message: &str, span: SourceSpan) -> SpecError {
        self.report(
            ErrorKind::Io {
                message: message.into(),
            },
            span,
        )
    }
}

impl ErrorKind {
    /// Get the error category for test assertions
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnexpectedToken { .. } => ErrorCategory::Parse,
            Self::MissingPayload { .. } => ErrorCategory::Shape,
            Self::Io { .. } => ErrorCategory::Io,
        }
    }

    /// Get error code suffix for diagnostic codes
    pub const fn code_suffix(&self) -> &'static str {
        match self {
            Self::UnexpectedToken { .. } => "unexpected_token",
            Self::MissingPayload { .. } => "missing_payload",
            Self::Io { .. } => "io_failure",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Parse,
    Shape,
    Io,
}

impl ErrorCategory {
    pub const fn code_segment(&self) -> &'static str {
        match self {
            Self::Parse => "parse",
            Self::Shape => "shape",
            Self::Io => "io",
        }
    }
}

impl std::error::Error for SpecError {}

impl fmt::Display for SpecError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            ErrorKind::UnexpectedToken { found } => {
                write!(f, "Parse error: no constructor pattern matches '{}'", found)
            }
            ErrorKind::MissingPayload { constructor } => {
                write!(
                    f,
                    "Shape error: tree node '{}' has no payload argument",
                    constructor
                )
            }
            ErrorKind::Io { message } => {
                write!(f, "I/O error: {}", message)
            }
        }
    }
}

impl Diagnostic for SpecError {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        Some(Box::new(&self.diagnostic_info.error_code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diagnostic_info
            .help
            .as_ref()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = miette::LabeledSpan> + '_>> {
        let labels = vec![LabeledSpan::new_with_span(
            Some(self.primary_label()),
            self.source_info.primary_span,
        )];
        Some(Box::new(labels.into_iter()))
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&*self.source_info.source)
    }
}

impl SpecError {
    fn primary_label(&self) -> String {
        match &self.kind {
            ErrorKind::UnexpectedToken { .. } => "unparseable from here".into(),
            ErrorKind::MissingPayload { .. } => "node missing a payload".into(),
            ErrorKind::Io { .. } => "operation failed".into(),
        }
    }
}

impl ErrorReporting for SourceContext {
    fn report(&self, kind: ErrorKind, span: SourceSpan) -> SpecError {
        let category = kind.category();
        SpecError {
            diagnostic_info: DiagnosticInfo {
                help: None,
                error_code: format!(
                    "mlspec::{}::{}",
                    category.code_segment(),
                    kind.code_suffix()
                ),
            },
            source_info: SourceInfo {
                source: self.to_named_source(),
                primary_span: span,
                phase: category.code_segment().to_string(),
            },
            kind,
        }
    }
}

/// Creates a placeholder span for errors not tied to a specific source code
/// location, such as I/O errors or internal application state failures.
/// This makes the intent of using an empty span explicit and searchable.
pub fn unspanned() -> miette::SourceSpan {
    miette::SourceSpan::from(0..0)
}

/// Locates `needle` inside a context's content and produces a span over it,
/// falling back to an empty span when the rendering differs from the source
/// spelling (extra whitespace, etc.).
pub fn span_within(context: &SourceContext, needle: &str) -> miette::SourceSpan {
    match context.content.find(needle) {
        Some(start) => miette::SourceSpan::from(start..start + needle.len()),
        None => unspanned(),
    }
}
