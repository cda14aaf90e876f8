//! String and template-literal scanning.

use super::Lexer;
use super::Mode;
use super::tokens::{TemplateFragment, Token, TokenKind};
use crate::ast::Span;
use enforest_core::lang::punctuation::PunctuationId;

/// Result of processing an escape sequence.
enum EscapeResult {
    /// Cooked character.
    Char(char),
    /// Backslash-newline: contributes nothing.
    LineContinuation,
    /// Malformed `\x`/`\u` escape.
    Invalid(String),
    /// End of input during escape.
    Eof,
}

impl<'a> Lexer<'a> {
    /// Process an escape sequence. Called after consuming the backslash.
    fn scan_escape(&mut self) -> EscapeResult {
        match self.advance() {
            Some('n') => EscapeResult::Char('\n'),
            Some('t') => EscapeResult::Char('\t'),
            Some('r') => EscapeResult::Char('\r'),
            Some('b') => EscapeResult::Char('\u{8}'),
            Some('f') => EscapeResult::Char('\u{c}'),
            Some('v') => EscapeResult::Char('\u{b}'),
            Some('0') => EscapeResult::Char('\0'),
            Some('x') => self.scan_hex_escape(2),
            Some('u') => self.scan_hex_escape(4),
            Some('\n') => EscapeResult::LineContinuation,
            // Quotes, backslash, backtick, `$`, and unknown escapes stand for themselves.
            Some(c) => EscapeResult::Char(c),
            None => EscapeResult::Eof,
        }
    }

    fn scan_hex_escape(&mut self, digits: usize) -> EscapeResult {
        let mut hex = String::new();
        for _ in 0..digits {
            match self.peek() {
                Some(c) if c.is_ascii_hexdigit() => {
                    hex.push(c);
                    self.advance();
                }
                _ => break,
            }
        }
        match u32::from_str_radix(&hex, 16).ok().and_then(char::from_u32) {
            Some(c) if hex.len() == digits => EscapeResult::Char(c),
            _ => EscapeResult::Invalid(hex),
        }
    }

    pub(super) fn scan_string(&mut self, start: usize, quote: char) {
        let mut value = String::new();

        loop {
            match self.peek() {
                None | Some('\n') => {
                    self.error("unterminated string literal", start);
                    return;
                }
                Some(c) if c == quote => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    let escape_start = self.current_pos;
                    self.advance();
                    match self.scan_escape() {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::LineContinuation => {}
                        EscapeResult::Invalid(hex) => {
                            self.error(format!("invalid escape sequence `{}`", hex), escape_start);
                        }
                        EscapeResult::Eof => {
                            self.error("unterminated string literal", start);
                            return;
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }

        self.add_token(TokenKind::String(value), start);
    }

    /// Scan one template fragment.
    ///
    /// `start` is the position of the opening backtick, or just past the `}` that closed an interpolation.
    /// Emits the fragment, plus a `{` token when the fragment ends at `${`.
    pub(super) fn scan_template_fragment(&mut self, start: usize) {
        let mut value = String::new();

        loop {
            match self.peek() {
                None => {
                    self.error("unterminated template literal", start);
                    return;
                }
                Some('`') => {
                    self.advance();
                    self.add_token(TokenKind::TemplateFragment(TemplateFragment { value, tail: true }), start);
                    return;
                }
                Some('$') if self.peek_next() == Some('{') => {
                    self.advance();
                    self.add_token(TokenKind::TemplateFragment(TemplateFragment { value, tail: false }), start);
                    let brace = self.current_pos;
                    self.advance();
                    self.tokens.push(Token::new(
                        TokenKind::Punctuation(PunctuationId::LBrace),
                        Span::new(brace, self.current_pos),
                    ));
                    self.modes.push(Mode::Interpolation);
                    return;
                }
                Some('\\') => {
                    let escape_start = self.current_pos;
                    self.advance();
                    match self.scan_escape() {
                        EscapeResult::Char(c) => value.push(c),
                        EscapeResult::LineContinuation => {}
                        EscapeResult::Invalid(hex) => {
                            self.error(format!("invalid escape sequence `{}`", hex), escape_start);
                        }
                        EscapeResult::Eof => {
                            self.error("unterminated template literal", start);
                            return;
                        }
                    }
                }
                Some(c) => {
                    value.push(c);
                    self.advance();
                }
            }
        }
    }
}
