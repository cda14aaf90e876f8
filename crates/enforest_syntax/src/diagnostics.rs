//! Error values raised by the scanner, reader, and enforester.
//!
//! Every failure is fatal to the enclosing parse call: there is no local recovery and no partial
//! AST. Errors are classified so callers can report the kind, the expected-vs-found term, and the
//! best-known source position.
//!
//! ## Notes
//! - [`SyntaxError`] implements [`miette::Diagnostic`]; [`render`] turns one into a plain-text report with
//!   the offending source line underlined.
//! - Scanner errors are collected (`Vec<SyntaxError>`); reader and enforester errors are single values.

use std::fmt;

use miette::{Diagnostic, GraphicalReportHandler, GraphicalTheme, NamedSource, SourceSpan};
use thiserror::Error;

use crate::ast::Span;

/// Classified syntax failure.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum SyntaxError {
    /// Unbalanced delimiters, or a missing keyword/punctuator/group the current form requires.
    #[error("expected {expected}, found {found}")]
    #[diagnostic(code(enforest::structural))]
    Structural {
        expected: String,
        found: String,
        #[label("here")]
        span: SourceSpan,
    },

    /// Malformed template literal or an unexpected character.
    #[error("{message}")]
    #[diagnostic(code(enforest::lexical))]
    Lexical {
        message: String,
        #[label("here")]
        span: SourceSpan,
    },

    /// An operator left without an operand, or a missing/invalid expression.
    #[error("{message}")]
    #[diagnostic(code(enforest::expression))]
    Expression {
        message: String,
        #[label("here")]
        span: SourceSpan,
    },

    /// A recognized form the engine deliberately leaves open (destructuring, for-in/for-of, ...).
    #[error("{feature} is not implemented")]
    #[diagnostic(
        code(enforest::not_implemented),
        help("this form is reserved for a future syntax extension")
    )]
    NotImplemented {
        feature: String,
        #[label("here")]
        span: SourceSpan,
    },
}

/// Error taxonomy without payloads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Structural,
    Lexical,
    Expression,
    NotImplemented,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Structural => write!(f, "structural error"),
            ErrorKind::Lexical => write!(f, "lexical error"),
            ErrorKind::Expression => write!(f, "expression error"),
            ErrorKind::NotImplemented => write!(f, "not implemented"),
        }
    }
}

impl SyntaxError {
    pub fn structural(expected: impl Into<String>, found: impl Into<String>, span: Span) -> Self {
        SyntaxError::Structural {
            expected: expected.into(),
            found: found.into(),
            span: span.into(),
        }
    }

    pub fn lexical(message: impl Into<String>, span: Span) -> Self {
        SyntaxError::Lexical {
            message: message.into(),
            span: span.into(),
        }
    }

    pub fn expression(message: impl Into<String>, span: Span) -> Self {
        SyntaxError::Expression {
            message: message.into(),
            span: span.into(),
        }
    }

    pub fn not_implemented(feature: impl Into<String>, span: Span) -> Self {
        SyntaxError::NotImplemented {
            feature: feature.into(),
            span: span.into(),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            SyntaxError::Structural { .. } => ErrorKind::Structural,
            SyntaxError::Lexical { .. } => ErrorKind::Lexical,
            SyntaxError::Expression { .. } => ErrorKind::Expression,
            SyntaxError::NotImplemented { .. } => ErrorKind::NotImplemented,
        }
    }

    /// Source position of the failure (byte offsets).
    pub fn span(&self) -> Span {
        let span = match self {
            SyntaxError::Structural { span, .. }
            | SyntaxError::Lexical { span, .. }
            | SyntaxError::Expression { span, .. }
            | SyntaxError::NotImplemented { span, .. } => *span,
        };
        Span::new(span.offset(), span.offset() + span.len())
    }
}

impl From<Span> for SourceSpan {
    fn from(span: Span) -> Self {
        SourceSpan::new(span.start.into(), span.len())
    }
}

/// Render an error as a plain-text report against its source.
///
/// ## Parameters
/// - `file_name`: Name shown in the report header.
/// - `source`: The full source text the error's span points into.
///
/// ## Returns
/// - A multi-line report (no ANSI colors) with the error code, message, and underlined source.
pub fn render(file_name: &str, source: &str, error: &SyntaxError) -> String {
    let report = miette::Report::new(error.clone()).with_source_code(NamedSource::new(file_name, source.to_string()));
    let handler = GraphicalReportHandler::new_themed(GraphicalTheme::unicode_nocolor());
    let mut out = String::new();
    if handler.render_report(&mut out, &*report).is_err() {
        // Fall back to the one-line message if the report cannot be laid out.
        out = format!("{}: {}", error.kind(), error);
    }
    out
}
