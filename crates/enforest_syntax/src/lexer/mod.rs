//! Scanner for the C-family surface syntax.
//!
//! Handles tokenization including:
//! - Keywords (var, function, while, typeof, ...) and identifiers (`$` and `_` allowed)
//! - Numeric literals (decimal, fractional, exponent, hex) and quoted strings
//! - Operators and punctuation (longest match against the core registries)
//! - Template literals and the reserved quotation delimiters, driven by a lexer-mode stack
//!
//! ## Module Structure
//!
//! - `tokens` - Token types (TokenKind, Token, TemplateFragment)
//! - `strings` - String/template scanning and escapes
//! - `numbers` - Numeric literal scanning

mod numbers;
mod strings;
pub mod tokens;

pub use tokens::{TemplateFragment, Token, TokenKind, keyword_id};

use crate::ast::Span;
use crate::diagnostics::SyntaxError;
use enforest_core::lang::operators;
use enforest_core::lang::punctuation::{self, PunctuationId};

/// Longest operator/punctuation spelling in the registries (`>>>=`).
const MAX_SYMBOL_LEN: usize = 4;

// ============================================================================
// LEXER MODES
// ----------------------------------------------------------------------------
// The mode stack records which construct the scanner is inside:
//
// [Code] → see '`'  → scan fragment → ends at '`'  → [Code]
//                                   → ends at '${' → push Interpolation → [Code]
//        → see '}' with Interpolation on top → pop → scan fragment (continuation)
//        → see '#`' → push Quotation
//        → see '`' with Quotation on top → pop, emit the quotation closer
// ============================================================================

/// Construct the scanner is currently inside.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Paren,
    Bracket,
    Brace,
    /// Inside `${ ... }` of a template literal.
    Interpolation,
    /// Inside `` #` ... ` ``.
    Quotation,
}

/// Scanner for source text.
///
/// Converts source text into a stream of tokens. Errors are collected and the scanner keeps going,
/// so one call reports every malformed literal in the input.
pub struct Lexer<'a> {
    source: &'a str,
    chars: std::iter::Peekable<std::str::CharIndices<'a>>,
    current_pos: usize,
    modes: Vec<Mode>,
    tokens: Vec<Token>,
    errors: Vec<SyntaxError>,
}

impl<'a> Lexer<'a> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.char_indices().peekable(),
            current_pos: 0,
            modes: Vec::new(),
            tokens: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire source code.
    ///
    /// Returns a vector of tokens on success, or a vector of errors on failure.
    /// The token stream always ends with an `Eof` token.
    pub fn tokenize(mut self) -> Result<Vec<Token>, Vec<SyntaxError>> {
        while !self.is_at_end() {
            self.scan_token();
        }

        self.tokens.push(Token::eof(self.current_pos));

        if self.errors.is_empty() {
            Ok(self.tokens)
        } else {
            tracing::debug!(errors = self.errors.len(), "scanner reported errors");
            Err(self.errors)
        }
    }

    // ========================================================================
    // Core character handling
    // ========================================================================

    fn is_at_end(&mut self) -> bool {
        self.chars.peek().is_none()
    }

    fn peek(&mut self) -> Option<char> {
        self.chars.peek().map(|(_, c)| *c)
    }

    fn peek_next(&self) -> Option<char> {
        let mut iter = self.source[self.current_pos..].chars();
        iter.next(); // skip current
        iter.next()
    }

    fn advance(&mut self) -> Option<char> {
        if let Some((pos, c)) = self.chars.next() {
            self.current_pos = pos + c.len_utf8();
            Some(c)
        } else {
            None
        }
    }

    fn match_char(&mut self, expected: char) -> bool {
        if self.peek() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    fn add_token(&mut self, kind: TokenKind, start: usize) {
        self.tokens.push(Token::new(kind, Span::new(start, self.current_pos)));
    }

    fn add_punct(&mut self, id: PunctuationId, start: usize) {
        self.add_token(TokenKind::Punctuation(id), start);
    }

    fn error(&mut self, message: impl Into<String>, start: usize) {
        self.errors
            .push(SyntaxError::lexical(message, Span::new(start, self.current_pos)));
    }

    // ========================================================================
    // Main scanning dispatch
    // ========================================================================

    fn scan_token(&mut self) {
        if self.skip_trivia() {
            return;
        }

        let start = self.current_pos;

        let Some(c) = self.advance() else {
            return;
        };

        match c {
            // Backtick: quotation closer when a quotation is innermost, otherwise a template literal.
            '`' => {
                if self.modes.last() == Some(&Mode::Quotation) {
                    self.modes.pop();
                    self.add_punct(PunctuationId::QuoteClose, start);
                } else {
                    self.scan_template_fragment(start);
                }
            }

            // `#` only means something when it opens a quotation.
            '#' => {
                if self.match_char('`') {
                    self.modes.push(Mode::Quotation);
                    self.add_punct(PunctuationId::QuoteOpen, start);
                } else {
                    self.add_token(TokenKind::Ident("#".to_string()), start);
                }
            }

            // Strings
            '"' | '\'' => self.scan_string(start, c),

            // Numbers
            '0'..='9' => self.scan_number(start, c),
            '.' if self.peek().is_some_and(|n| n.is_ascii_digit()) => self.scan_number(start, c),

            // Identifiers and keywords
            _ if is_ident_start(c) => self.scan_identifier(start),

            // Operators and punctuation
            _ => self.scan_symbol(start, c),
        }
    }

    /// Skip whitespace and comments.
    ///
    /// ## Returns
    /// - `true` if the input ended inside trivia (nothing left to scan).
    fn skip_trivia(&mut self) -> bool {
        loop {
            match self.peek() {
                Some(c) if c.is_whitespace() => {
                    self.advance();
                }
                Some('/') if self.peek_next() == Some('/') => {
                    while let Some(c) = self.peek() {
                        if c == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                Some('/') if self.peek_next() == Some('*') => {
                    let start = self.current_pos;
                    self.advance();
                    self.advance();
                    loop {
                        match self.advance() {
                            Some('*') if self.match_char('/') => break,
                            Some(_) => {}
                            None => {
                                self.error("unterminated block comment", start);
                                return true;
                            }
                        }
                    }
                }
                Some(_) => return false,
                None => return true,
            }
        }
    }

    // ========================================================================
    // Operator and punctuation helpers
    // ========================================================================

    /// Scan the longest registered operator or punctuation spelling starting at `start`.
    fn scan_symbol(&mut self, start: usize, first: char) {
        let Some((kind, len)) = self.longest_symbol(start) else {
            self.error(format!("unexpected character `{}`", first), start);
            return;
        };

        // The first character is already consumed; symbols are ASCII.
        for _ in 1..len {
            self.advance();
        }

        if let TokenKind::Punctuation(id) = kind {
            self.punctuation(id, start);
        } else {
            self.add_token(kind, start);
        }
    }

    fn longest_symbol(&self, start: usize) -> Option<(TokenKind, usize)> {
        for len in (1..=MAX_SYMBOL_LEN).rev() {
            let Some(text) = self.source.get(start..start + len) else {
                continue;
            };
            if let Some(id) = operators::from_str(text) {
                if !operators::info_for(id).is_keyword_spelling {
                    return Some((TokenKind::Operator(id), len));
                }
            }
            if let Some(id) = punctuation::from_str(text) {
                // Quotation delimiters are contextual and handled by the dispatcher.
                if !matches!(id, PunctuationId::QuoteOpen | PunctuationId::QuoteClose) {
                    return Some((TokenKind::Punctuation(id), len));
                }
            }
        }
        None
    }

    /// Emit a punctuation token and keep the mode stack in step with delimiters.
    ///
    /// Mismatched closers are emitted without touching the stack; the reader reports them.
    fn punctuation(&mut self, id: PunctuationId, start: usize) {
        match id {
            PunctuationId::LParen => self.modes.push(Mode::Paren),
            PunctuationId::LBracket => self.modes.push(Mode::Bracket),
            PunctuationId::LBrace => self.modes.push(Mode::Brace),
            PunctuationId::RParen => self.pop_mode(Mode::Paren),
            PunctuationId::RBracket => self.pop_mode(Mode::Bracket),
            PunctuationId::RBrace => {
                if self.modes.last() == Some(&Mode::Interpolation) {
                    self.modes.pop();
                    self.add_punct(id, start);
                    self.scan_template_fragment(self.current_pos);
                    return;
                }
                self.pop_mode(Mode::Brace);
            }
            _ => {}
        }
        self.add_punct(id, start);
    }

    fn pop_mode(&mut self, expected: Mode) {
        if self.modes.last() == Some(&expected) {
            self.modes.pop();
        }
    }

    // ========================================================================
    // Identifier scanning
    // ========================================================================

    fn scan_identifier(&mut self, start: usize) {
        while let Some(c) = self.peek() {
            if is_ident_continue(c) {
                self.advance();
            } else {
                break;
            }
        }

        let spelling = &self.source[start..self.current_pos];

        // Look up identifier spelling in the reserved-word registry (no allocation for keywords).
        if let Some(id) = keyword_id(spelling) {
            self.add_token(TokenKind::Keyword(id), start);
        } else {
            self.add_token(TokenKind::Ident(spelling.to_string()), start);
        }
    }
}

// ============================================================================
// Helper functions
// ============================================================================

/// Check if a character can start an identifier (ASCII-only).
fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

/// Check if a character can continue an identifier (ASCII-only).
fn is_ident_continue(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_' || c == '$'
}

/// Convenience function to lex a source string.
///
/// This is a shorthand for `Lexer::new(source).tokenize()`.
#[tracing::instrument(skip_all, fields(source_len = source.len()))]
pub fn lex(source: &str) -> Result<Vec<Token>, Vec<SyntaxError>> {
    Lexer::new(source).tokenize()
}

// ============================================================================
// TESTS
// ============================================================================
