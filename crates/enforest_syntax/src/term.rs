//! The term tree: leaf tokens and delimiter-bounded groups.
//!
//! The reader produces terms; the enforester consumes them. A [`Group`] exclusively owns the terms between its
//! matching delimiters (the delimiters themselves are not stored, only their spans), so the structure is a tree
//! that mirrors lexical nesting.
//!
//! ## Notes
//! - The classification predicates take `Option<&Term>`: "past the end of the sequence" is `None` and is never
//!   of any kind. They are total and never fail.
//! - A template literal is a single leaf whose token kind is [`TokenKind::Template`], holding fragment leaves
//!   alternating with brace groups.

use crate::ast::Span;
use crate::lexer::{Token, TokenKind};
use enforest_core::lang::keywords::KeywordId;
use enforest_core::lang::punctuation::{self, PunctuationId};

/// Delimiter kind of a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delimiter {
    Bracket,
    Brace,
    Paren,
    /// `` #` ... ` ``, reserved for syntax extensions.
    Quotation,
}

impl Delimiter {
    /// Map an opening punctuation token to the group kind it starts.
    pub fn from_opener(id: PunctuationId) -> Option<Delimiter> {
        match id {
            PunctuationId::LBracket => Some(Delimiter::Bracket),
            PunctuationId::LBrace => Some(Delimiter::Brace),
            PunctuationId::LParen => Some(Delimiter::Paren),
            PunctuationId::QuoteOpen => Some(Delimiter::Quotation),
            _ => None,
        }
    }

    pub fn opener(self) -> PunctuationId {
        match self {
            Delimiter::Bracket => PunctuationId::LBracket,
            Delimiter::Brace => PunctuationId::LBrace,
            Delimiter::Paren => PunctuationId::LParen,
            Delimiter::Quotation => PunctuationId::QuoteOpen,
        }
    }

    pub fn closer(self) -> PunctuationId {
        punctuation::closer_for(self.opener()).expect("INVARIANT: every group opener has a registered closer")
    }

    /// Short label such as "`(...)` group".
    pub fn label(self) -> String {
        format!(
            "`{}...{}` group",
            punctuation::as_str(self.opener()),
            punctuation::as_str(self.closer())
        )
    }
}

/// A delimiter-bounded group.
#[derive(Debug, Clone, PartialEq)]
pub struct Group {
    pub delimiter: Delimiter,
    /// Terms strictly between the delimiters.
    pub inner: Vec<Term>,
    /// Span of the opening delimiter.
    pub open: Span,
    /// Span of the closing delimiter.
    pub close: Span,
}

/// Releases the subtree with an explicit work stack, so arbitrarily deep trees never exhaust the call stack.
impl Drop for Group {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.inner);
        while let Some(term) = pending.pop() {
            match term {
                Term::Group(mut group) => pending.append(&mut group.inner),
                Term::Leaf(Token {
                    kind: TokenKind::Template(mut elements),
                    ..
                }) => pending.append(&mut elements),
                Term::Leaf(_) => {}
            }
        }
    }
}

/// The unit the enforester operates on.
#[derive(Debug, Clone, PartialEq)]
pub enum Term {
    Leaf(Token),
    Group(Group),
}

impl Term {
    /// Source range covered by this term (delimiters included for groups).
    pub fn span(&self) -> Span {
        match self {
            Term::Leaf(token) => token.span,
            Term::Group(group) => group.open.merge(group.close),
        }
    }

    /// Human-readable label used in error messages ("keyword `while`", "`(...)` group").
    pub fn describe(&self) -> String {
        match self {
            Term::Leaf(token) => token.kind.to_string(),
            Term::Group(group) => group.delimiter.label(),
        }
    }

    pub fn as_token(&self) -> Option<&Token> {
        match self {
            Term::Leaf(token) => Some(token),
            Term::Group(_) => None,
        }
    }

    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Term::Group(group) => Some(group),
            Term::Leaf(_) => None,
        }
    }
}

/// Describe a possibly-absent term; absence reads as "end of input".
pub fn describe(term: Option<&Term>) -> String {
    match term {
        Some(term) => term.describe(),
        None => "end of input".to_string(),
    }
}

/// Flatten a term sequence back into tokens, re-inserting delimiter tokens at group boundaries and expanding
/// template leaves into their fragment and interpolation tokens.
///
/// For a balanced token stream `tokens` (without its trailing `Eof`), `flatten_tokens(&read(tokens)?)`
/// reproduces `tokens` exactly.
pub fn flatten_tokens(terms: &[Term]) -> Vec<Token> {
    let mut out = Vec::new();
    flatten_into(terms, &mut out);
    out
}

fn flatten_into(terms: &[Term], out: &mut Vec<Token>) {
    for term in terms {
        match term {
            Term::Leaf(Token {
                kind: TokenKind::Template(elements),
                ..
            }) => flatten_into(elements, out),
            Term::Leaf(token) => out.push(token.clone()),
            Term::Group(group) => {
                out.push(Token::new(TokenKind::Punctuation(group.delimiter.opener()), group.open));
                flatten_into(&group.inner, out);
                out.push(Token::new(TokenKind::Punctuation(group.delimiter.closer()), group.close));
            }
        }
    }
}

// ============================================================================
// Classification
// ============================================================================

fn leaf_kind(term: Option<&Term>) -> Option<&TokenKind> {
    term.and_then(Term::as_token).map(|t| &t.kind)
}

pub fn is_identifier(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Ident(_)))
}

pub fn is_identifier_named(term: Option<&Term>, name: &str) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Ident(n)) if n == name)
}

pub fn is_numeric_literal(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Number(_)))
}

pub fn is_string_literal(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::String(_)))
}

pub fn is_boolean_literal(term: Option<&Term>) -> bool {
    matches!(
        leaf_kind(term),
        Some(TokenKind::Keyword(KeywordId::True | KeywordId::False))
    )
}

pub fn is_null_literal(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Keyword(KeywordId::Null)))
}

/// Numeric, string, boolean, or null literal.
pub fn is_literal(term: Option<&Term>) -> bool {
    is_numeric_literal(term) || is_string_literal(term) || is_boolean_literal(term) || is_null_literal(term)
}

/// Any punctuation or symbol-operator leaf.
pub fn is_punctuator(term: Option<&Term>) -> bool {
    matches!(
        leaf_kind(term),
        Some(TokenKind::Punctuation(_) | TokenKind::Operator(_))
    )
}

/// The given punctuation leaf (e.g. `;`).
pub fn is_punctuation(term: Option<&Term>, id: PunctuationId) -> bool {
    leaf_kind(term).is_some_and(|k| k.is_punctuation(id))
}

pub fn is_keyword(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Keyword(_)))
}

/// The given keyword leaf (e.g. `while`).
pub fn is_keyword_id(term: Option<&Term>, id: KeywordId) -> bool {
    leaf_kind(term).is_some_and(|k| k.is_keyword(id))
}

pub fn is_template(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Template(_)))
}

/// Explicit end-of-stream leaf. Absence is not end-of-stream.
pub fn is_eos(term: Option<&Term>) -> bool {
    matches!(leaf_kind(term), Some(TokenKind::Eof))
}

pub fn is_group(term: Option<&Term>, delimiter: Delimiter) -> bool {
    matches!(term, Some(Term::Group(g)) if g.delimiter == delimiter)
}

pub fn is_paren(term: Option<&Term>) -> bool {
    is_group(term, Delimiter::Paren)
}

pub fn is_brace(term: Option<&Term>) -> bool {
    is_group(term, Delimiter::Brace)
}

pub fn is_bracket(term: Option<&Term>) -> bool {
    is_group(term, Delimiter::Bracket)
}

pub fn is_quotation(term: Option<&Term>) -> bool {
    is_group(term, Delimiter::Quotation)
}
