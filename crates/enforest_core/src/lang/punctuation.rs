//! Punctuation vocabulary.
//!
//! This module defines the canonical set of non-operator punctuation tokens used by the
//! scanner/reader: delimiters, separators, and a few structural markers.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This module is vocabulary only (spellings + metadata). It does not tokenize source text.
//! - The quotation delimiters (`` #` `` … `` ` ``) are reserved for syntax extensions. The closer shares its spelling
//!   with the template-literal backtick; the scanner decides which one it is from its mode stack.
//!
//! ## Examples
//! ```rust
//! use enforest_core::lang::punctuation::{self, PunctuationId};
//!
//! assert_eq!(punctuation::from_str(";"), Some(PunctuationId::Semicolon));
//! assert_eq!(punctuation::as_str(PunctuationId::QuoteOpen), "#`");
//! ```

/// Broad syntactic grouping for punctuation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationCategory {
    /// Brackets, braces, parentheses, and quotation delimiters.
    Delimiter,
    /// Separators like `,` and `;`.
    Separator,
    /// Misc markers like `.`, `...`, `?`.
    Marker,
}

/// Stable identifier for punctuation tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PunctuationId {
    // Separators
    Semicolon,
    Comma,
    Colon,

    // Markers
    Dot,
    Ellipsis,
    Question,

    // Delimiters
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    QuoteOpen,
    QuoteClose,
}

/// Metadata for a punctuation token.
#[derive(Debug, Clone, Copy)]
pub struct PunctuationInfo {
    pub id: PunctuationId,
    pub canonical: &'static str,
    pub category: PunctuationCategory,
}

/// Registry of all punctuation tokens.
pub const PUNCTUATION: &[PunctuationInfo] = &[
    // Separators
    info(PunctuationId::Semicolon, ";", PunctuationCategory::Separator),
    info(PunctuationId::Comma, ",", PunctuationCategory::Separator),
    info(PunctuationId::Colon, ":", PunctuationCategory::Separator),
    // Markers
    info(PunctuationId::Dot, ".", PunctuationCategory::Marker),
    info(PunctuationId::Ellipsis, "...", PunctuationCategory::Marker),
    info(PunctuationId::Question, "?", PunctuationCategory::Marker),
    // Delimiters
    info(PunctuationId::LParen, "(", PunctuationCategory::Delimiter),
    info(PunctuationId::RParen, ")", PunctuationCategory::Delimiter),
    info(PunctuationId::LBracket, "[", PunctuationCategory::Delimiter),
    info(PunctuationId::RBracket, "]", PunctuationCategory::Delimiter),
    info(PunctuationId::LBrace, "{", PunctuationCategory::Delimiter),
    info(PunctuationId::RBrace, "}", PunctuationCategory::Delimiter),
    info(PunctuationId::QuoteOpen, "#`", PunctuationCategory::Delimiter),
    info(PunctuationId::QuoteClose, "`", PunctuationCategory::Delimiter),
];

/// Return the canonical spelling for a punctuation token.
pub fn as_str(id: PunctuationId) -> &'static str {
    info_for(id).canonical
}

/// Return the category for a punctuation token.
pub fn category(id: PunctuationId) -> PunctuationCategory {
    info_for(id).category
}

/// Return the full metadata entry for a punctuation token.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: PunctuationId) -> &'static PunctuationInfo {
    PUNCTUATION
        .iter()
        .find(|p| p.id == id)
        .expect("punctuation info missing")
}

/// Resolve a punctuation spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
pub fn from_str(s: &str) -> Option<PunctuationId> {
    PUNCTUATION.iter().find(|p| p.canonical == s).map(|p| p.id)
}

/// Return `true` if `id` opens a delimited group.
pub fn is_opener(id: PunctuationId) -> bool {
    matches!(
        id,
        PunctuationId::LParen | PunctuationId::LBracket | PunctuationId::LBrace | PunctuationId::QuoteOpen
    )
}

/// Return `true` if `id` closes a delimited group.
pub fn is_closer(id: PunctuationId) -> bool {
    matches!(
        id,
        PunctuationId::RParen | PunctuationId::RBracket | PunctuationId::RBrace | PunctuationId::QuoteClose
    )
}

/// Return the closer that matches an opener.
///
/// ## Returns
/// - `Some(closer)` for the four opening delimiters.
/// - `None` for anything else.
pub fn closer_for(opener: PunctuationId) -> Option<PunctuationId> {
    match opener {
        PunctuationId::LParen => Some(PunctuationId::RParen),
        PunctuationId::LBracket => Some(PunctuationId::RBracket),
        PunctuationId::LBrace => Some(PunctuationId::RBrace),
        PunctuationId::QuoteOpen => Some(PunctuationId::QuoteClose),
        _ => None,
    }
}

const fn info(id: PunctuationId, canonical: &'static str, category: PunctuationCategory) -> PunctuationInfo {
    PunctuationInfo { id, canonical, category }
}
