//! Token types for the scanner.
//!
//! The scanner uses **registry-backed IDs** for language vocabulary:
//! - `Keyword(KeywordId)` for reserved words (including `true`, `false`, `null`, and word operators)
//! - `Operator(OperatorId)` for symbol operators
//! - `Punctuation(PunctuationId)` for delimiters, separators, and markers
//!
//! ## Notes
//! - ID-bearing tokens avoid stringly-typed checks in the reader and enforester.
//! - Use `crate::token_helpers` for ergonomic token matching at call sites.
//! - [`TokenKind::Template`] is never produced by the scanner. The reader synthesizes it when it folds a template
//!   literal's fragments and interpolation groups into one leaf.

use std::fmt;

use crate::ast::Span;
use crate::term::Term;
use enforest_core::lang::keywords::{self, KeywordId};
use enforest_core::lang::operators::{self, OperatorId};
use enforest_core::lang::punctuation::{self, PunctuationId};

/// Kind of token produced by the scanner.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    // ========== Keyword / operator / punctuation (ID-based) ==========
    Keyword(KeywordId),
    Operator(OperatorId),
    Punctuation(PunctuationId),

    // ========== Identifiers and Literals ==========
    Ident(String),
    Number(f64),
    String(String),

    // ========== Template literals ==========
    /// One literal stretch of a template, between the backtick/`}` that opens it and the backtick/`${` that ends it.
    TemplateFragment(TemplateFragment),
    /// A whole template literal: fragment leaves alternating with brace groups.
    Template(Vec<Term>),

    // ========== Special ==========
    Eof,
}

/// Cooked text of a template fragment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateFragment {
    pub value: String,
    /// `true` when the fragment ends the template (closing backtick), `false` when an interpolation follows.
    pub tail: bool,
}

/// A token with its kind and source span.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Construct a new token.
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// End-of-stream marker at `pos`.
    pub fn eof(pos: usize) -> Self {
        Self::new(TokenKind::Eof, Span::new(pos, pos))
    }
}

/// Resolve an identifier spelling to a keyword id, if reserved.
pub fn keyword_id(name: &str) -> Option<KeywordId> {
    keywords::from_str(name)
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Keyword(id) => write!(f, "keyword `{}`", keywords::as_str(*id)),
            TokenKind::Operator(id) => write!(f, "operator `{}`", operators::as_str(*id)),
            TokenKind::Punctuation(id) => write!(f, "`{}`", punctuation::as_str(*id)),
            TokenKind::Ident(name) => write!(f, "identifier `{}`", name),
            TokenKind::Number(n) => write!(f, "number `{}`", n),
            TokenKind::String(s) => write!(f, "string {:?}", s),
            TokenKind::TemplateFragment(_) => write!(f, "template fragment"),
            TokenKind::Template(_) => write!(f, "template literal"),
            TokenKind::Eof => write!(f, "end of input"),
        }
    }
}
