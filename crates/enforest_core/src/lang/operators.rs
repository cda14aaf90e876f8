//! Operator vocabulary and the default operator tables.
//!
//! This module defines the canonical operator set (symbol operators like `+` and word operators
//! like `typeof`) plus the three closed tables that drive expression reduction:
//!
//! - [`PREFIX_OPERATORS`]: operators that may appear before an operand (all share [`PREFIX_PRECEDENCE`]).
//! - [`INFIX_OPERATORS`]: binary operators with their precedence (higher binds tighter) and associativity.
//! - [`ASSIGNMENT_OPERATORS`]: operators that store into an assignment target.
//!
//! ## Notes
//! - A spelling may appear in more than one table (`+` and `-` are both prefix and infix). Which role a concrete
//!   occurrence plays is decided by the enforester from context (whether an operand is pending).
//! - Some operators are spelled using reserved words (e.g. `"instanceof"`). Those entries have
//!   [`OperatorInfo::is_keyword_spelling`] set to `true`; the scanner emits them as keyword tokens.
//! - Every infix operator in the default table is left-associative. [`Associativity::Right`] exists so custom tables
//!   can declare right-associative operators.
//!
//! ## Examples
//! ```rust
//! use enforest_core::lang::operators::{self, OperatorId};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::infix_info(OperatorId::Star).map(|i| i.precedence), Some(13));
//! assert!(operators::is_prefix(OperatorId::Minus));
//! assert!(operators::is_assignment(OperatorId::ShrEq));
//! ```

use super::keywords::{self, KeywordId};

/// Define how infix operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Arithmetic
    Plus,
    Minus,
    Star,
    Slash,
    Percent,

    // Shifts
    Shl,
    Shr,
    UShr,

    // Relational
    Lt,
    LtEq,
    Gt,
    GtEq,
    In,
    Instanceof,

    // Equality
    EqEq,
    NotEq,
    EqEqEq,
    NotEqEq,

    // Bitwise / logical
    Amp,
    Caret,
    Pipe,
    AmpAmp,
    PipePipe,

    // Prefix-only
    Bang,
    Tilde,
    PlusPlus,
    MinusMinus,
    Typeof,
    Void,
    Delete,

    // Assignment
    Eq,
    PipeEq,
    CaretEq,
    AmpEq,
    ShlEq,
    ShrEq,
    UShrEq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    PercentEq,
}

/// Identity and spelling of an operator.
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub is_keyword_spelling: bool,
}

/// Metadata for an infix (binary) operator.
#[derive(Debug, Clone, Copy)]
pub struct InfixInfo {
    pub id: OperatorId,
    pub precedence: u8,
    pub associativity: Associativity,
}

/// Registry of all operator spellings.
pub const OPERATORS: &[OperatorInfo] = &[
    // Arithmetic
    op(OperatorId::Plus, "+"),
    op(OperatorId::Minus, "-"),
    op(OperatorId::Star, "*"),
    op(OperatorId::Slash, "/"),
    op(OperatorId::Percent, "%"),
    // Shifts
    op(OperatorId::Shl, "<<"),
    op(OperatorId::Shr, ">>"),
    op(OperatorId::UShr, ">>>"),
    // Relational
    op(OperatorId::Lt, "<"),
    op(OperatorId::LtEq, "<="),
    op(OperatorId::Gt, ">"),
    op(OperatorId::GtEq, ">="),
    word(OperatorId::In, "in"),
    word(OperatorId::Instanceof, "instanceof"),
    // Equality
    op(OperatorId::EqEq, "=="),
    op(OperatorId::NotEq, "!="),
    op(OperatorId::EqEqEq, "==="),
    op(OperatorId::NotEqEq, "!=="),
    // Bitwise / logical
    op(OperatorId::Amp, "&"),
    op(OperatorId::Caret, "^"),
    op(OperatorId::Pipe, "|"),
    op(OperatorId::AmpAmp, "&&"),
    op(OperatorId::PipePipe, "||"),
    // Prefix-only
    op(OperatorId::Bang, "!"),
    op(OperatorId::Tilde, "~"),
    op(OperatorId::PlusPlus, "++"),
    op(OperatorId::MinusMinus, "--"),
    word(OperatorId::Typeof, "typeof"),
    word(OperatorId::Void, "void"),
    word(OperatorId::Delete, "delete"),
    // Assignment
    op(OperatorId::Eq, "="),
    op(OperatorId::PipeEq, "|="),
    op(OperatorId::CaretEq, "^="),
    op(OperatorId::AmpEq, "&="),
    op(OperatorId::ShlEq, "<<="),
    op(OperatorId::ShrEq, ">>="),
    op(OperatorId::UShrEq, ">>>="),
    op(OperatorId::PlusEq, "+="),
    op(OperatorId::MinusEq, "-="),
    op(OperatorId::StarEq, "*="),
    op(OperatorId::SlashEq, "/="),
    op(OperatorId::PercentEq, "%="),
];

/// Precedence shared by every prefix operator. Higher than any infix entry, so a prefix operator always wraps the
/// smallest complete operand that follows it.
pub const PREFIX_PRECEDENCE: u8 = 14;

/// Operators that may appear in prefix position.
pub const PREFIX_OPERATORS: &[OperatorId] = &[
    OperatorId::Plus,
    OperatorId::Minus,
    OperatorId::Bang,
    OperatorId::Tilde,
    OperatorId::PlusPlus,
    OperatorId::MinusMinus,
    OperatorId::Typeof,
    OperatorId::Void,
    OperatorId::Delete,
];

/// Binary operators with their precedence. Higher binds tighter.
pub const INFIX_OPERATORS: &[InfixInfo] = &[
    left(OperatorId::Star, 13),
    left(OperatorId::Slash, 13),
    left(OperatorId::Percent, 13),
    left(OperatorId::Plus, 12),
    left(OperatorId::Minus, 12),
    left(OperatorId::Shr, 11),
    left(OperatorId::Shl, 11),
    left(OperatorId::UShr, 11),
    left(OperatorId::Lt, 10),
    left(OperatorId::LtEq, 10),
    left(OperatorId::Gt, 10),
    left(OperatorId::GtEq, 10),
    left(OperatorId::In, 10),
    left(OperatorId::Instanceof, 10),
    left(OperatorId::EqEq, 9),
    left(OperatorId::NotEq, 9),
    left(OperatorId::EqEqEq, 9),
    left(OperatorId::NotEqEq, 9),
    left(OperatorId::Amp, 8),
    left(OperatorId::Caret, 7),
    left(OperatorId::Pipe, 6),
    left(OperatorId::AmpAmp, 5),
    left(OperatorId::PipePipe, 4),
];

/// Operators that assign to their left operand.
pub const ASSIGNMENT_OPERATORS: &[OperatorId] = &[
    OperatorId::Eq,
    OperatorId::PipeEq,
    OperatorId::CaretEq,
    OperatorId::AmpEq,
    OperatorId::ShlEq,
    OperatorId::ShrEq,
    OperatorId::UShrEq,
    OperatorId::PlusEq,
    OperatorId::MinusEq,
    OperatorId::StarEq,
    OperatorId::SlashEq,
    OperatorId::PercentEq,
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling of an operator.
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive**.
/// - Word operators resolve too (`from_str("typeof")`), even though the scanner emits them as keywords.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

/// Resolve a keyword to the operator it spells, if any.
pub fn from_keyword(id: KeywordId) -> Option<OperatorId> {
    OPERATORS
        .iter()
        .filter(|o| o.is_keyword_spelling)
        .find(|o| o.spelling == keywords::as_str(id))
        .map(|o| o.id)
}

/// Return the infix entry for an operator, if it is a binary operator.
pub fn infix_info(id: OperatorId) -> Option<&'static InfixInfo> {
    INFIX_OPERATORS.iter().find(|i| i.id == id)
}

/// Return `true` if `id` may appear in prefix position.
pub fn is_prefix(id: OperatorId) -> bool {
    PREFIX_OPERATORS.contains(&id)
}

/// Return `true` if `id` is an assignment operator.
pub fn is_assignment(id: OperatorId) -> bool {
    ASSIGNMENT_OPERATORS.contains(&id)
}

// --- helpers -----------------------------------------------------------------

const fn op(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        is_keyword_spelling: false,
    }
}

const fn word(id: OperatorId, spelling: &'static str) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        is_keyword_spelling: true,
    }
}

const fn left(id: OperatorId, precedence: u8) -> InfixInfo {
    InfixInfo {
        id,
        precedence,
        associativity: Associativity::Left,
    }
}
