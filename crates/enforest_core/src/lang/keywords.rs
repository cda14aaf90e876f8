//! Define the reserved keyword vocabulary.
//!
//! This module is the single source of truth for reserved words: a stable identifier
//! ([`KeywordId`]) plus a const metadata table ([`KEYWORDS`]) that records canonical spellings
//! and categories.
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive**.
//! - This registry is intentionally **pure** (no term/IO/side effects).
//! - Some reserved words are also “word operators” (e.g. `typeof`, `in`). If you need operator precedence or
//!   arity, use [`crate::lang::operators`].
//! - `true`, `false`, and `null` are registered here; the scanner emits them as keyword tokens and the
//!   classification layer treats them as boolean/null literals.
//!
//! ## Examples
//! ```rust
//! use enforest_core::lang::keywords::{self, KeywordId};
//!
//! assert_eq!(keywords::from_str("function"), Some(KeywordId::Function));
//! assert_eq!(keywords::as_str(KeywordId::Function), "function");
//! assert_eq!(keywords::from_str("While"), None);
//! ```

/// Stable identifier for every reserved keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordId {
    // Declarations
    Var,
    Let,
    Const,
    Function,

    // Control flow
    If,
    Else,
    While,
    For,
    Do,
    Return,
    Break,
    Continue,

    // Reserved expression words
    New,
    This,

    // Literals
    True,
    False,
    Null,

    // Word operators
    Typeof,
    Void,
    Delete,
    In,
    Instanceof,
}

/// High-level grouping for documentation and tooling.
///
/// ## Notes
/// - Categories are metadata only; they do not enforce parsing context.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeywordCategory {
    /// Introduces a binding (`var`, `let`, `const`, `function`).
    Declaration,
    /// Starts a control-flow statement.
    ControlFlow,
    /// Spells a literal value.
    Literal,
    /// Spells an operator (see [`crate::lang::operators`]).
    Operator,
    /// Reserved for forms the enforester does not recognize yet.
    Reserved,
}

/// Metadata for a keyword.
#[derive(Debug, Clone, Copy)]
pub struct KeywordInfo {
    pub id: KeywordId,
    pub canonical: &'static str,
    pub category: KeywordCategory,
}

/// Registry of all keywords.
///
/// ## Notes
/// - The ordering is not semantically meaningful, but is grouped for readability.
pub const KEYWORDS: &[KeywordInfo] = &[
    // Declarations
    info(KeywordId::Var, "var", KeywordCategory::Declaration),
    info(KeywordId::Let, "let", KeywordCategory::Declaration),
    info(KeywordId::Const, "const", KeywordCategory::Declaration),
    info(KeywordId::Function, "function", KeywordCategory::Declaration),
    // Control flow
    info(KeywordId::If, "if", KeywordCategory::ControlFlow),
    info(KeywordId::Else, "else", KeywordCategory::ControlFlow),
    info(KeywordId::While, "while", KeywordCategory::ControlFlow),
    info(KeywordId::For, "for", KeywordCategory::ControlFlow),
    info(KeywordId::Do, "do", KeywordCategory::Reserved),
    info(KeywordId::Return, "return", KeywordCategory::Reserved),
    info(KeywordId::Break, "break", KeywordCategory::Reserved),
    info(KeywordId::Continue, "continue", KeywordCategory::Reserved),
    // Reserved expression words
    info(KeywordId::New, "new", KeywordCategory::Reserved),
    info(KeywordId::This, "this", KeywordCategory::Reserved),
    // Literals
    info(KeywordId::True, "true", KeywordCategory::Literal),
    info(KeywordId::False, "false", KeywordCategory::Literal),
    info(KeywordId::Null, "null", KeywordCategory::Literal),
    // Word operators
    info(KeywordId::Typeof, "typeof", KeywordCategory::Operator),
    info(KeywordId::Void, "void", KeywordCategory::Operator),
    info(KeywordId::Delete, "delete", KeywordCategory::Operator),
    info(KeywordId::In, "in", KeywordCategory::Operator),
    info(KeywordId::Instanceof, "instanceof", KeywordCategory::Operator),
];

/// Canonical spelling.
pub fn as_str(id: KeywordId) -> &'static str {
    info_for(id).canonical
}

/// Category.
pub fn category(id: KeywordId) -> KeywordCategory {
    info_for(id).category
}

/// Full metadata.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: KeywordId) -> &'static KeywordInfo {
    KEYWORDS.iter().find(|k| k.id == id).expect("keyword info missing")
}

/// Lookup by spelling.
///
/// ## Returns
/// - `Some(KeywordId)` if the spelling matches this registry.
/// - `None` otherwise.
pub fn from_str(s: &str) -> Option<KeywordId> {
    KEYWORDS.iter().find(|k| k.canonical == s).map(|k| k.id)
}

// --- helpers -----------------------------------------------------------------

const fn info(id: KeywordId, canonical: &'static str, category: KeywordCategory) -> KeywordInfo {
    KeywordInfo { id, canonical, category }
}
